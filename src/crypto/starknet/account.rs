//! StarkNet Account Derivation
//!
//! Ethereum 개인키에서 Paradex(StarkNet) 계정을 파생합니다.
//!
//! 1. L1 키로 EIP-712 `STARK Key` 메시지에 서명 (도메인에 L1 체인 ID 포함)
//! 2. 서명의 r 값을 STARK 곡선 위수로 grinding → 개인키
//! 3. 공개키 = 개인키 · G
//! 4. 프록시 클래스 해시와 초기화 calldata로 계정 주소 계산
//!
//! 모든 단계가 결정적이므로 같은 (identity, chain)은 항상 같은 계정을 만듭니다.
//!
//! # 참조
//!
//! - [Paradex Account System](https://docs.paradex.trade/developers/authentication)

use super::curve::{ec_order, get_public_key, sign_hash, verify_signature, StarkNetSignature};
use super::hash::{compute_hash_on_elements, get_selector_from_name, short_string_to_felt};
use crate::crypto::evm::{Eip712Domain, Eip712TypedData, EthereumIdentity, TypedDataField};
use crate::errors::{ParadexError, ParadexResult};
use crate::types::ChainConfig;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use sha2::{Digest, Sha256};
use starknet_types_core::felt::Felt;
use std::collections::BTreeMap;

/// 계정 주소 상한 (2^251 - 256)
fn l2_address_upper_bound() -> BigUint {
    (BigUint::one() << 251u32) - BigUint::from(256u32)
}

/// Paradex 계정 (개인키, 공개키, 주소)
#[derive(Clone, PartialEq, Eq)]
pub struct VenueAccount {
    pub private_key: Felt,
    pub public_key: Felt,
    pub address: Felt,
}

impl VenueAccount {
    /// 주소 16진수 (`0x` + 선행 0 제거)
    pub fn address_hex(&self) -> String {
        format!("{:#x}", self.address)
    }

    /// 공개키 16진수
    pub fn public_key_hex(&self) -> String {
        format!("{:#x}", self.public_key)
    }

    /// 해시에 직접 서명
    pub fn sign_hash(&self, message_hash: &Felt) -> ParadexResult<StarkNetSignature> {
        sign_hash(&self.private_key, message_hash)
    }

    /// 이 계정의 공개키로 검증
    pub fn verify_hash(&self, message_hash: &Felt, signature: &StarkNetSignature) -> ParadexResult<bool> {
        verify_signature(&self.public_key, message_hash, signature)
    }
}

impl std::fmt::Debug for VenueAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VenueAccount")
            .field("address", &self.address_hex())
            .field("public_key", &self.public_key_hex())
            .finish()
    }
}

/// Ethereum identity + 체인 설정 → Paradex 계정
#[tracing::instrument(skip_all, fields(l1_address = %identity.address(), chain = %chain.starknet_chain_id))]
pub fn derive(identity: &EthereumIdentity, chain: &ChainConfig) -> ParadexResult<VenueAccount> {
    let typed_data = stark_key_typed_data(chain.l1_chain_id);
    let signature = identity.sign_typed_data(&typed_data)?;

    let private_key = grind_key(&BigUint::from_bytes_be(&signature.r))?;
    let account = account_from_private_key(private_key, chain)?;

    tracing::debug!(address = %account.address_hex(), "derived venue account");
    Ok(account)
}

/// 이미 알고 있는 StarkNet 개인키로 계정 구성
pub fn account_from_private_key(private_key: Felt, chain: &ChainConfig) -> ParadexResult<VenueAccount> {
    if private_key == Felt::ZERO || private_key.to_biguint() >= ec_order() {
        return Err(ParadexError::key("StarkNet private key out of range"));
    }

    let public_key = get_public_key(&private_key);
    let address = compute_account_address(
        &public_key,
        &chain.paraclear_account_proxy_hash,
        &chain.paraclear_account_hash,
    )?;

    Ok(VenueAccount {
        private_key,
        public_key,
        address,
    })
}

/// L1 키가 서명하는 EIP-712 `STARK Key` 메시지
pub fn stark_key_typed_data(l1_chain_id: u64) -> Eip712TypedData {
    let mut types = BTreeMap::new();
    types.insert(
        "Constant".to_string(),
        vec![TypedDataField::new("action", "string")],
    );

    Eip712TypedData::new(
        Eip712Domain::new("Paradex", "1", l1_chain_id),
        "Constant",
        types,
        serde_json::json!({ "action": "STARK Key" }),
    )
}

/// 시드를 곡선 위수 범위의 키로 grinding
///
/// `sha256(seed ‖ index)`가 `2^256 - (2^256 mod n)` 미만이 될 때까지 index를 올리고
/// 결과를 `mod n` 합니다. 바이트 표현은 선행 0을 제외한 최소 길이입니다.
pub fn grind_key(seed: &BigUint) -> ParadexResult<Felt> {
    let order = ec_order();
    let two_256 = BigUint::one() << 256u32;
    let max_allowed = &two_256 - (&two_256 % &order);

    let seed_bytes = seed.to_bytes_be();
    let mut index = BigUint::zero();

    loop {
        let mut hasher = Sha256::new();
        hasher.update(&seed_bytes);
        hasher.update(index.to_bytes_be());
        let key = BigUint::from_bytes_be(&hasher.finalize());

        if key < max_allowed {
            let reduced = key % &order;
            if reduced.is_zero() {
                return Err(ParadexError::key("Ground StarkNet key is zero"));
            }
            return Ok(Felt::from_bytes_be_slice(&reduced.to_bytes_be()));
        }

        index += 1u32;
    }
}

/// 반사실적(counterfactual) 계정 주소
///
/// salt = 공개키, deployer = 0, 생성자 calldata = 프록시 초기화 호출
pub fn compute_account_address(
    public_key: &Felt,
    proxy_class_hash: &Felt,
    account_class_hash: &Felt,
) -> ParadexResult<Felt> {
    let calldata = [
        *account_class_hash,
        get_selector_from_name("initialize"),
        Felt::TWO,
        *public_key,
        Felt::ZERO,
    ];

    let raw = compute_hash_on_elements(&[
        short_string_to_felt("STARKNET_CONTRACT_ADDRESS")?,
        Felt::ZERO,
        *public_key,
        *proxy_class_hash,
        compute_hash_on_elements(&calldata),
    ]);

    let bounded = raw.to_biguint() % l2_address_upper_bound();
    Ok(Felt::from_bytes_be_slice(&bounded.to_bytes_be()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::starknet::hash::felt_from_hex;

    const TEST_PRIVATE_KEY: &str =
        "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn chain(l1_chain_id: u64) -> ChainConfig {
        ChainConfig::new(
            "PRIVATE_SN_POTC_SEPOLIA",
            l1_chain_id,
            felt_from_hex("0x41cb0280ebadaa75f996d8d92c6f265f6d040bb3ba442e5f86a554f1765244e").unwrap(),
            felt_from_hex("0x3530cc4759d78042f1b543bf797f5f3d647cde0388c33734cf91b7f7b9314a9").unwrap(),
            "https://api.testnet.paradex.trade/v1",
        )
        .unwrap()
    }

    #[test]
    fn test_stark_key_message_hash() {
        let hash = stark_key_typed_data(11155111).sign_hash().unwrap();
        assert_eq!(
            hex::encode(hash),
            "af7a452df1d98575210fe5bd0c759c73bd5eb1d79671856b875569a2c2c1601f"
        );
    }

    #[test]
    fn test_derive_known_account() {
        let identity = EthereumIdentity::from_hex(TEST_PRIVATE_KEY).unwrap();
        let account = derive(&identity, &chain(11155111)).unwrap();

        assert_eq!(
            format!("{:#x}", account.private_key),
            "0x2482c217d9d4f7cab57ca16f93d64edcfeff9aa1874a1dc57fa1c28dafcd0aa"
        );
        assert_eq!(
            account.public_key_hex(),
            "0x8857491dd4065910836e3b02bd51c93f1c3c1e2289accb0bc02123555569c1"
        );
        assert_eq!(
            account.address_hex(),
            "0x37ff1c9d89a50b3dd3a4f90e020ea80251b09ba28049efbe4f7d3fec2995c4a"
        );
    }

    #[test]
    fn test_derive_is_deterministic() {
        let identity = EthereumIdentity::from_hex(TEST_PRIVATE_KEY).unwrap();
        let a = derive(&identity, &chain(11155111)).unwrap();
        let b = derive(&identity, &chain(11155111)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_derive_depends_on_l1_chain() {
        let identity = EthereumIdentity::from_hex(TEST_PRIVATE_KEY).unwrap();
        let sepolia = derive(&identity, &chain(11155111)).unwrap();
        let mainnet = derive(&identity, &chain(1)).unwrap();
        assert_ne!(sepolia.private_key, mainnet.private_key);
    }

    #[test]
    fn test_grind_key_below_order() {
        for seed in [0u64, 1, 0xdead_beef, u64::MAX] {
            let key = grind_key(&BigUint::from(seed)).unwrap();
            assert!(key.to_biguint() < ec_order());
            assert_ne!(key, Felt::ZERO);
        }
    }

    #[test]
    fn test_account_from_private_key_range() {
        let err = account_from_private_key(Felt::ZERO, &chain(1)).unwrap_err();
        assert_eq!(err.code(), "INVALID_KEY_MATERIAL");
    }

    #[test]
    fn test_debug_hides_private_key() {
        let identity = EthereumIdentity::from_hex(TEST_PRIVATE_KEY).unwrap();
        let account = derive(&identity, &chain(11155111)).unwrap();
        let debug = format!("{account:?}");
        assert!(!debug.contains("2482c217d9d4f7cab57ca16f93d64edcfeff9aa1874a1dc57fa1c28dafcd0aa"));
    }
}
