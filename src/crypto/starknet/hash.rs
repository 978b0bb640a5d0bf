//! Pedersen Hash Utilities
//!
//! StarkNet 레거시 타입 데이터(SNIP-12 revision 0)와 컨트랙트 주소 계산에 쓰이는
//! Pedersen 해시, selector, 짧은 문자열 인코딩을 제공합니다.
//!
//! # 참조
//!
//! - [StarkNet Hash Functions](https://docs.starknet.io/documentation/architecture_and_concepts/Hashing/hash-functions/)

use crate::crypto::evm::keccak256;
use crate::errors::{ParadexError, ParadexResult};
use starknet_crypto::pedersen_hash as stark_pedersen_hash;
use starknet_types_core::felt::Felt;

/// 짧은 문자열(short string)의 최대 바이트 수
pub const SHORT_STRING_MAX_LEN: usize = 31;

/// Pedersen 해시
pub fn pedersen_hash(x: &Felt, y: &Felt) -> Felt {
    stark_pedersen_hash(x, y)
}

/// `h(h(h(h(0, x1), x2), ...), xn), n)`
pub fn compute_hash_on_elements(values: &[Felt]) -> Felt {
    let acc = values
        .iter()
        .fold(Felt::ZERO, |acc, value| pedersen_hash(&acc, value));
    pedersen_hash(&acc, &Felt::from(values.len() as u64))
}

/// starknet_keccak: keccak256의 하위 250비트
pub fn starknet_keccak(data: &[u8]) -> Felt {
    let mut hash = keccak256(data);
    hash[0] &= 0x03;
    Felt::from_bytes_be(&hash)
}

/// 함수/타입 이름의 selector
pub fn get_selector_from_name(name: &str) -> Felt {
    starknet_keccak(name.as_bytes())
}

/// ASCII 문자열을 felt로 인코딩 (최대 31바이트)
pub fn short_string_to_felt(s: &str) -> ParadexResult<Felt> {
    if !s.is_ascii() {
        return Err(ParadexError::signing(format!(
            "Short string must be ASCII: {s:?}"
        )));
    }
    if s.len() > SHORT_STRING_MAX_LEN {
        return Err(ParadexError::signing(format!(
            "Short string exceeds {SHORT_STRING_MAX_LEN} bytes: {s:?}"
        )));
    }
    Ok(Felt::from_bytes_be_slice(s.as_bytes()))
}

/// 타입 데이터 값 인코딩
///
/// `0x..` → 16진수, 숫자만 → 10진수, 빈 문자열 → 0, 그 외 → short string
pub fn encode_felt_value(value: &str) -> ParadexResult<Felt> {
    if value.is_empty() {
        return Ok(Felt::ZERO);
    }
    if let Some(hex_part) = value.strip_prefix("0x") {
        return felt_from_hex(hex_part);
    }
    if value.bytes().all(|b| b.is_ascii_digit()) {
        return Felt::from_dec_str(value)
            .map_err(|e| ParadexError::signing(format!("Invalid decimal felt {value}: {e}")));
    }
    short_string_to_felt(value)
}

/// 16진수 문자열 → felt (0x 접두사 선택, 필드 범위를 넘으면 오류)
pub fn felt_from_hex(hex_str: &str) -> ParadexResult<Felt> {
    let hex_str = hex_str.strip_prefix("0x").unwrap_or(hex_str);
    if hex_str.is_empty() || hex_str.len() > 64 || !hex_str.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ParadexError::signing(format!("Invalid felt hex: 0x{hex_str}")));
    }
    Felt::from_hex(hex_str).map_err(|e| ParadexError::signing(format!("Invalid felt hex 0x{hex_str}: {e}")))
}
