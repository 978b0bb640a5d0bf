//! StarkNet Curve Operations
//!
//! STARK 곡선 ECDSA 서명 및 검증을 제공합니다.
//! nonce k는 RFC6979로 (개인키, 메시지 해시)에서 결정적으로 유도되므로
//! 같은 입력에 대해 항상 같은 서명이 나옵니다.
//!
//! # 참조
//!
//! - [StarkNet Signatures](https://docs.starknet.io/documentation/architecture_and_concepts/Accounts/signature_verification/)

use crate::errors::{ParadexError, ParadexResult};
use num_bigint::BigUint;
use starknet_crypto::{
    get_public_key as stark_get_public_key, rfc6979_generate_k, sign, verify, SignError,
};
use starknet_types_core::felt::Felt;

/// STARK 곡선 군의 위수 (big-endian)
pub const EC_ORDER_BYTES: [u8; 32] = [
    0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xb7, 0x81, 0x12, 0x6d, 0xca, 0xe7, 0xb2, 0x32, 0x1e, 0x66, 0xa2, 0x41, 0xad, 0xc6, 0x4d, 0x2f,
];

/// 곡선 위수를 BigUint로
pub fn ec_order() -> BigUint {
    BigUint::from_bytes_be(&EC_ORDER_BYTES)
}

/// StarkNet 서명
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarkNetSignature {
    /// r 값
    pub r: Felt,
    /// s 값
    pub s: Felt,
}

impl StarkNetSignature {
    /// 새 서명 생성
    pub fn new(r: Felt, s: Felt) -> Self {
        Self { r, s }
    }

    /// 헤더/바디용 표현: `["<r 10진수>","<s 10진수>"]`
    pub fn to_header_value(&self) -> String {
        format!("[\"{}\",\"{}\"]", self.r, self.s)
    }

    /// `to_header_value` 형식에서 파싱
    pub fn from_header_value(value: &str) -> ParadexResult<Self> {
        let parts: Vec<String> = serde_json::from_str(value)?;
        let [r, s] = parts.as_slice() else {
            return Err(ParadexError::signing(format!(
                "Signature must have two elements, got {}",
                parts.len()
            )));
        };

        let parse = |v: &str| {
            Felt::from_dec_str(v)
                .map_err(|e| ParadexError::signing(format!("Invalid signature component {v}: {e}")))
        };
        Ok(Self {
            r: parse(r.as_str())?,
            s: parse(s.as_str())?,
        })
    }
}

/// 개인키 범위 검사: 0 < key < EC_ORDER
pub fn validate_private_key(private_key: &Felt) -> ParadexResult<()> {
    if *private_key == Felt::ZERO {
        return Err(ParadexError::signing("StarkNet private key is zero"));
    }
    if *private_key >= Felt::from_bytes_be(&EC_ORDER_BYTES) {
        return Err(ParadexError::signing(
            "StarkNet private key is not below the curve order",
        ));
    }
    Ok(())
}

/// 메시지 해시에 서명
///
/// k가 곡선에서 거부되면 시드를 1씩 올려가며 다시 유도합니다.
pub fn sign_hash(private_key: &Felt, message_hash: &Felt) -> ParadexResult<StarkNetSignature> {
    validate_private_key(private_key)?;

    let mut seed: Option<Felt> = None;
    loop {
        let k = rfc6979_generate_k(message_hash, private_key, seed.as_ref());
        match sign(private_key, message_hash, &k) {
            Ok(signature) => {
                return Ok(StarkNetSignature {
                    r: signature.r,
                    s: signature.s,
                })
            },
            Err(SignError::InvalidK) => {
                seed = Some(seed.map_or(Felt::ONE, |prev| prev + Felt::ONE));
            },
            Err(e) => {
                return Err(ParadexError::signing(format!(
                    "StarkNet signing failed: {e:?}"
                )))
            },
        }
    }
}

/// 서명 검증
pub fn verify_signature(
    public_key: &Felt,
    message_hash: &Felt,
    signature: &StarkNetSignature,
) -> ParadexResult<bool> {
    verify(public_key, message_hash, &signature.r, &signature.s)
        .map_err(|e| ParadexError::signing(format!("StarkNet verification failed: {e:?}")))
}

/// 개인키에서 공개키 파생 (x 좌표)
pub fn get_public_key(private_key: &Felt) -> Felt {
    stark_get_public_key(private_key)
}
