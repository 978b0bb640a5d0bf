//! EVM-compatible cryptographic utilities
//!
//! Paradex 계정 파생에 필요한 L1(Ethereum) 측 암호화 기능을 제공합니다.
//!
//! # 모듈
//!
//! - `keccak`: Keccak256 해싱
//! - `secp256k1`: ECDSA 서명
//! - `eip712`: EIP-712 타입 데이터 인코딩
//! - `identity`: Ethereum 개인키 관리

mod eip712;
mod identity;
mod keccak;
mod secp256k1;

pub use eip712::{encode_type, Eip712Domain, Eip712TypedData, TypedDataField};
pub use identity::EthereumIdentity;
pub use keccak::keccak256;
pub use secp256k1::{parse_private_key, recover_address, to_checksum_address, EthSignature};
