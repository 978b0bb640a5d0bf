//! Keccak256 hashing utilities
//!
//! EIP-712 인코딩과 StarkNet selector 계산에 쓰이는 Keccak256 해시 함수를 제공합니다.

use sha3::{Digest, Keccak256};

/// 데이터의 Keccak256 해시를 계산합니다.
///
/// # Example
///
/// ```rust
/// use paradex_signer::crypto::evm::keccak256;
///
/// let hash = keccak256(b"hello");
/// assert_eq!(hash.len(), 32);
/// ```
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// 정수를 32바이트 big-endian 형식으로 패딩
pub fn pad_u256(value: u64) -> [u8; 32] {
    let mut result = [0u8; 32];
    result[24..].copy_from_slice(&value.to_be_bytes());
    result
}
