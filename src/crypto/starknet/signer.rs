//! Typed Message Signer
//!
//! 메시지 해시를 계산하고 계정 개인키로 서명합니다. I/O 없는 순수 함수입니다.

use super::account::VenueAccount;
use super::curve::{sign_hash, verify_signature, StarkNetSignature};
use super::messages::TypedMessage;
use crate::errors::ParadexResult;
use starknet_types_core::felt::Felt;

/// 메시지에 서명
///
/// 개인키가 0이거나 곡선 위수 이상이면 `SigningError`
pub fn sign(message: &TypedMessage, account: &VenueAccount) -> ParadexResult<StarkNetSignature> {
    let hash = message.hash(&account.address)?;
    let signature = sign_hash(&account.private_key, &hash)?;

    tracing::debug!(
        kind = ?message.kind(),
        message_hash = %format!("{hash:#x}"),
        "signed typed message"
    );
    Ok(signature)
}

/// 서명 검증
///
/// 해시가 계정 주소에 묶이므로 공개키와 함께 주소가 필요합니다.
pub fn verify(
    signature: &StarkNetSignature,
    message: &TypedMessage,
    account_address: &Felt,
    public_key: &Felt,
) -> ParadexResult<bool> {
    let hash = message.hash(account_address)?;
    verify_signature(public_key, &hash, signature)
}

impl VenueAccount {
    /// `sign(message, self)`
    pub fn sign_message(&self, message: &TypedMessage) -> ParadexResult<StarkNetSignature> {
        sign(message, self)
    }

    /// 이 계정의 주소/공개키로 `verify`
    pub fn verify_message(
        &self,
        signature: &StarkNetSignature,
        message: &TypedMessage,
    ) -> ParadexResult<bool> {
        verify(signature, message, &self.address, &self.public_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::starknet::get_public_key;
    use crate::crypto::starknet::messages::{build, AuthFields, MessageFields};
    use crate::types::ChainConfig;

    fn chain() -> ChainConfig {
        ChainConfig::new(
            "PRIVATE_SN_POTC_SEPOLIA",
            11155111,
            Felt::ONE,
            Felt::TWO,
            "http://localhost",
        )
        .unwrap()
    }

    fn account(private_key: Felt) -> VenueAccount {
        VenueAccount {
            private_key,
            public_key: get_public_key(&private_key),
            address: Felt::from(0xabcu64),
        }
    }

    #[test]
    fn test_sign_then_verify() {
        let message = build(MessageFields::Onboarding, &chain()).unwrap();
        let account = account(Felt::from(0x12u64));

        let signature = sign(&message, &account).unwrap();
        assert!(account.verify_message(&signature, &message).unwrap());
    }

    #[test]
    fn test_signature_bound_to_address() {
        let message = build(MessageFields::Auth(AuthFields::login(1_700_000_000)), &chain()).unwrap();
        let account = account(Felt::from(0x12u64));

        let signature = account.sign_message(&message).unwrap();
        let other_address = Felt::from(0xabdu64);
        assert!(!verify(&signature, &message, &other_address, &account.public_key).unwrap());
    }

    #[test]
    fn test_zero_key_is_signing_error() {
        let message = build(MessageFields::Onboarding, &chain()).unwrap();
        let zero = VenueAccount {
            private_key: Felt::ZERO,
            public_key: Felt::ZERO,
            address: Felt::ONE,
        };
        assert_eq!(sign(&message, &zero).unwrap_err().code(), "SIGNING_ERROR");
    }
}
