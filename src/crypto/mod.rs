//! Cryptographic Utilities
//!
//! Paradex 인증과 서명을 위한 암호화 기능을 제공합니다.
//!
//! # 모듈 구조
//!
//! - `evm`: L1 측 (Keccak256, EIP-712, secp256k1, Ethereum identity)
//! - `starknet`: L2 측 (Pedersen, SNIP-12, STARK 곡선, 계정 파생, 메시지 서명)
//!
//! # 사용 예시
//!
//! ```rust,ignore
//! use paradex_signer::crypto::evm::EthereumIdentity;
//! use paradex_signer::crypto::starknet::{build, derive, sign, AuthFields, MessageFields};
//!
//! let identity = EthereumIdentity::from_hex("0x...")?;
//! let account = derive(&identity, &chain)?;
//!
//! let message = build(MessageFields::Auth(AuthFields::login(now)), &chain)?;
//! let signature = sign(&message, &account)?;
//! ```

pub mod evm;
pub mod starknet;

pub use evm::{Eip712Domain, Eip712TypedData, EthereumIdentity, TypedDataField};
pub use starknet::{
    StarkNetDomain, StarkNetSignature, StarkNetTypedData, TypedMessage, VenueAccount,
};
