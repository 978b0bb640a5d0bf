//! Ethereum Identity
//!
//! 외부에서 주입된 Ethereum 개인키를 검증하고, 주소와 바이트 표현을 제공합니다.

use super::eip712::Eip712TypedData;
use super::secp256k1::{
    parse_private_key, sign_hash, signing_key_from_bytes, to_checksum_address,
    verifying_key_to_address, EthSignature,
};
use crate::errors::ParadexResult;
use k256::ecdsa::SigningKey;

/// 검증된 Ethereum 개인키와 체크섬 주소
#[derive(Clone)]
pub struct EthereumIdentity {
    signing_key: SigningKey,
    address: String,
}

impl EthereumIdentity {
    /// Hex 개인키로 생성 (잘못된 입력은 즉시 `InvalidKeyMaterial`)
    pub fn from_hex(private_key: &str) -> ParadexResult<Self> {
        let key_bytes = parse_private_key(private_key)?;
        Self::from_bytes(&key_bytes)
    }

    /// 32바이트 개인키로 생성
    pub fn from_bytes(private_key: &[u8; 32]) -> ParadexResult<Self> {
        let signing_key = signing_key_from_bytes(private_key)?;
        let address = to_checksum_address(&verifying_key_to_address(signing_key.verifying_key()));

        Ok(Self {
            signing_key,
            address,
        })
    }

    /// EIP-55 체크섬 주소
    pub fn address(&self) -> &str {
        &self.address
    }

    /// 개인키 바이트 (big-endian)
    pub fn private_key_bytes(&self) -> [u8; 32] {
        self.signing_key.to_bytes().into()
    }

    /// EIP-712 타입 데이터 서명
    pub fn sign_typed_data(&self, typed_data: &Eip712TypedData) -> ParadexResult<EthSignature> {
        let hash = typed_data.sign_hash()?;
        sign_hash(&self.signing_key, &hash)
    }
}

impl std::fmt::Debug for EthereumIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EthereumIdentity")
            .field("address", &self.address)
            .finish()
    }
}
