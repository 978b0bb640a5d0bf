//! secp256k1 ECDSA signing utilities
//!
//! Ethereum ECDSA 서명 및 주소 파생을 위한 유틸리티를 제공합니다.
//! 서명은 RFC6979 결정적 nonce를 사용하므로 같은 키/해시에 대해 항상 같은 값이 나옵니다.

use super::keccak::keccak256;
use crate::errors::{ParadexError, ParadexResult};

use k256::{
    ecdsa::{RecoveryId, Signature as K256Signature, SigningKey, VerifyingKey},
    SecretKey,
};

/// ECDSA 서명 결과 (r, s, v)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EthSignature {
    /// r 값 (32 bytes)
    pub r: [u8; 32],
    /// s 값 (32 bytes)
    pub s: [u8; 32],
    /// v 값 (recovery id + 27)
    pub v: u8,
}

/// 32바이트 개인키로 서명 키 생성
///
/// 0 이거나 secp256k1 군 위수 이상인 스칼라는 `InvalidKeyMaterial`
pub fn signing_key_from_bytes(private_key: &[u8]) -> ParadexResult<SigningKey> {
    let secret_key = SecretKey::from_slice(private_key)
        .map_err(|e| ParadexError::key(format!("Invalid secp256k1 private key: {e}")))?;
    Ok(SigningKey::from(secret_key))
}

/// prehash(32 bytes)에 서명
pub fn sign_hash(signing_key: &SigningKey, hash: &[u8; 32]) -> ParadexResult<EthSignature> {
    let (sig, recovery_id) = signing_key
        .sign_prehash_recoverable(hash)
        .map_err(|e| ParadexError::signing(format!("secp256k1 signing failed: {e}")))?;

    let sig_bytes = sig.to_bytes();
    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    r.copy_from_slice(&sig_bytes[..32]);
    s.copy_from_slice(&sig_bytes[32..]);

    // Ethereum에서는 v = recovery_id + 27
    let v = recovery_id.to_byte() + 27;

    Ok(EthSignature { r, s, v })
}

/// 서명에서 주소 복구
pub fn recover_address(hash: &[u8; 32], signature: &EthSignature) -> ParadexResult<String> {
    let recovery_id = match signature.v {
        27 => RecoveryId::new(false, false),
        28 => RecoveryId::new(true, false),
        v => return Err(ParadexError::signing(format!("Invalid v value: {v}"))),
    };

    let mut sig_bytes = [0u8; 64];
    sig_bytes[..32].copy_from_slice(&signature.r);
    sig_bytes[32..].copy_from_slice(&signature.s);

    let sig = K256Signature::from_slice(&sig_bytes)
        .map_err(|e| ParadexError::signing(format!("Invalid signature: {e}")))?;

    let verifying_key = VerifyingKey::recover_from_prehash(hash, &sig, recovery_id)
        .map_err(|e| ParadexError::signing(format!("Recovery failed: {e}")))?;

    Ok(to_checksum_address(&verifying_key_to_address(&verifying_key)))
}

/// 공개키에서 소문자 주소 계산
pub fn verifying_key_to_address(key: &VerifyingKey) -> String {
    let public_key = key.to_encoded_point(false);

    // 첫 바이트(0x04)를 제외한 64바이트의 Keccak256 해시, 마지막 20바이트가 주소
    let hash = keccak256(&public_key.as_bytes()[1..]);
    format!("0x{}", hex::encode(&hash[12..]))
}

/// EIP-55 체크섬 주소
pub fn to_checksum_address(address: &str) -> String {
    let address_lower = address.to_lowercase();
    let address_hex = address_lower.strip_prefix("0x").unwrap_or(&address_lower);

    let hash_hex = hex::encode(keccak256(address_hex.as_bytes()));

    let mut result = String::with_capacity(42);
    result.push_str("0x");

    for (c, h) in address_hex.chars().zip(hash_hex.chars()) {
        if c.is_ascii_alphabetic() && h.to_digit(16).unwrap_or(0) >= 8 {
            result.push(c.to_ascii_uppercase());
        } else {
            result.push(c);
        }
    }

    result
}

/// Hex 개인키 파싱 (0x 접두사 선택)
pub fn parse_private_key(hex_str: &str) -> ParadexResult<[u8; 32]> {
    let hex_str = hex_str.trim();
    let hex_str = hex_str.strip_prefix("0x").unwrap_or(hex_str);

    let bytes =
        hex::decode(hex_str).map_err(|e| ParadexError::key(format!("Invalid private key hex: {e}")))?;

    <[u8; 32]>::try_from(bytes.as_slice())
        .map_err(|_| ParadexError::key(format!("Private key must be 32 bytes, got {}", bytes.len())))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_PRIVATE_KEY: &str =
        "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const TEST_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    #[test]
    fn test_private_key_to_address() {
        let private_key = parse_private_key(TEST_PRIVATE_KEY).unwrap();
        let signing_key = signing_key_from_bytes(&private_key).unwrap();
        let address = to_checksum_address(&verifying_key_to_address(signing_key.verifying_key()));
        assert_eq!(address, TEST_ADDRESS);
    }

    #[test]
    fn test_checksum_address() {
        let address = "0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359";
        let checksummed = to_checksum_address(address);
        assert_eq!(checksummed, "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359");
    }

    #[test]
    fn test_sign_and_recover() {
        let private_key = parse_private_key(TEST_PRIVATE_KEY).unwrap();
        let signing_key = signing_key_from_bytes(&private_key).unwrap();

        let hash = keccak256(b"Hello, Paradex!");
        let signature = sign_hash(&signing_key, &hash).unwrap();
        let recovered = recover_address(&hash, &signature).unwrap();

        assert_eq!(recovered, TEST_ADDRESS);
    }

    #[test]
    fn test_sign_is_deterministic() {
        let private_key = parse_private_key(TEST_PRIVATE_KEY).unwrap();
        let signing_key = signing_key_from_bytes(&private_key).unwrap();
        let hash = keccak256(b"STARK Key");

        let a = sign_hash(&signing_key, &hash).unwrap();
        let b = sign_hash(&signing_key, &hash).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_private_key() {
        let key = parse_private_key(TEST_PRIVATE_KEY).unwrap();
        let key_no_prefix = parse_private_key(&TEST_PRIVATE_KEY[2..]).unwrap();
        assert_eq!(key, key_no_prefix);

        assert!(parse_private_key("0x1234").is_err());
        assert!(parse_private_key("0xzz").is_err());
    }

    #[test]
    fn test_zero_and_out_of_range_keys_rejected() {
        assert!(signing_key_from_bytes(&[0u8; 32]).is_err());
        assert!(signing_key_from_bytes(&[0xff; 32]).is_err());
    }
}
