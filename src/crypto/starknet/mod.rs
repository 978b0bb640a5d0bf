//! StarkNet Cryptography Module
//!
//! Paradex 계정과 서명을 위한 StarkNet 암호화 유틸리티를 제공합니다.
//!
//! # 주요 기능
//!
//! - Pedersen 해싱, selector, short string 인코딩
//! - STARK 곡선 ECDSA 서명 (RFC6979)
//! - 계정 파생 (ETH → StarkNet)
//! - 타입 데이터 해시 (SNIP-12 revision 0)
//! - Paradex Auth / Onboarding / Order 메시지

mod account;
mod curve;
mod hash;
pub mod messages;
mod signer;
mod typed_data;

pub use account::{
    account_from_private_key, compute_account_address, derive, grind_key, stark_key_typed_data,
    VenueAccount,
};
pub use curve::{
    ec_order, get_public_key, sign_hash, validate_private_key, verify_signature, StarkNetSignature,
    EC_ORDER_BYTES,
};
pub use hash::{
    compute_hash_on_elements, encode_felt_value, felt_from_hex, get_selector_from_name,
    pedersen_hash, short_string_to_felt, starknet_keccak, SHORT_STRING_MAX_LEN,
};
pub use messages::{build, AuthFields, MessageFields, MessageKind, TypedMessage};
pub use signer::{sign, verify};
pub use typed_data::{StarkNetDomain, StarkNetTypedData, StarkNetTypedDataField};
