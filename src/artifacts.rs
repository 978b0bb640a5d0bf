//! Request artifacts
//!
//! 이미 계산된 서명과 메타데이터를 전송 계층이 쓰는 헤더/본문으로 정리합니다.
//! 이 모듈은 암호 연산을 하지 않습니다.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::crypto::evm::EthereumIdentity;
use crate::crypto::starknet::messages::AuthFields;
use crate::crypto::starknet::{StarkNetSignature, VenueAccount};
use crate::types::{NormalizedOrder, OrderType};
use crate::utils::precision::{format_fixed, PRICE_DECIMALS, SIZE_DECIMALS};

pub const HEADER_STARKNET_ACCOUNT: &str = "PARADEX-STARKNET-ACCOUNT";
pub const HEADER_STARKNET_SIGNATURE: &str = "PARADEX-STARKNET-SIGNATURE";
pub const HEADER_TIMESTAMP: &str = "PARADEX-TIMESTAMP";
pub const HEADER_SIGNATURE_EXPIRATION: &str = "PARADEX-SIGNATURE-EXPIRATION";
pub const HEADER_ETHEREUM_ACCOUNT: &str = "PARADEX-ETHEREUM-ACCOUNT";

/// `POST /auth` 헤더
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    pub account: String,
    /// `["<r>","<s>"]` (10진수)
    pub signature: String,
    pub timestamp: String,
    pub expiration: String,
}

impl AuthHeaders {
    pub fn to_header_map(&self) -> HashMap<String, String> {
        HashMap::from([
            (HEADER_STARKNET_ACCOUNT.to_string(), self.account.clone()),
            (HEADER_STARKNET_SIGNATURE.to_string(), self.signature.clone()),
            (HEADER_TIMESTAMP.to_string(), self.timestamp.clone()),
            (HEADER_SIGNATURE_EXPIRATION.to_string(), self.expiration.clone()),
        ])
    }
}

/// `POST /onboarding` 본문
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingBody {
    pub public_key: String,
}

/// `POST /onboarding` 헤더와 본문
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingRequest {
    pub ethereum_account: String,
    pub starknet_account: String,
    pub signature: String,
    pub body: OnboardingBody,
}

impl OnboardingRequest {
    pub fn to_header_map(&self) -> HashMap<String, String> {
        HashMap::from([
            (HEADER_ETHEREUM_ACCOUNT.to_string(), self.ethereum_account.clone()),
            (HEADER_STARKNET_ACCOUNT.to_string(), self.starknet_account.clone()),
            (HEADER_STARKNET_SIGNATURE.to_string(), self.signature.clone()),
        ])
    }
}

/// `POST /orders` 본문
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub market: String,
    pub side: String,
    #[serde(rename = "type")]
    pub order_type: String,
    pub size: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    pub client_id: String,
    pub instruction: String,
    pub signature: String,
    pub signature_timestamp: i64,
}

/// Auth 헤더 조립
pub fn auth_headers(
    account: &VenueAccount,
    fields: &AuthFields,
    signature: &StarkNetSignature,
) -> AuthHeaders {
    AuthHeaders {
        account: account.address_hex(),
        signature: signature.to_header_value(),
        timestamp: fields.timestamp.to_string(),
        expiration: fields.expiry.to_string(),
    }
}

/// 온보딩 요청 조립
pub fn onboarding_request(
    identity: &EthereumIdentity,
    account: &VenueAccount,
    signature: &StarkNetSignature,
) -> OnboardingRequest {
    OnboardingRequest {
        ethereum_account: identity.address().to_string(),
        starknet_account: account.address_hex(),
        signature: signature.to_header_value(),
        body: OnboardingBody {
            public_key: account.public_key_hex(),
        },
    }
}

/// 주문 본문 조립 (정규화된 값을 그대로 사용)
pub fn order_request(order: &NormalizedOrder, signature: &StarkNetSignature) -> OrderRequest {
    let price = match (order.order_type, order.price) {
        (OrderType::Limit, Some(price)) => Some(format_fixed(price, PRICE_DECIMALS)),
        _ => None,
    };

    OrderRequest {
        market: order.market.clone(),
        side: order.side.as_str().to_string(),
        order_type: order.order_type.as_str().to_string(),
        size: format_fixed(order.size, SIZE_DECIMALS),
        price,
        client_id: order.client_id.clone(),
        instruction: order.instruction.clone(),
        signature: signature.to_header_value(),
        signature_timestamp: order.signature_timestamp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OrderSide;
    use rust_decimal_macros::dec;
    use starknet_types_core::felt::Felt;

    fn account() -> VenueAccount {
        VenueAccount {
            private_key: Felt::from(7u64),
            public_key: Felt::from(0x1234u64),
            address: Felt::from(0xabcdu64),
        }
    }

    fn signature() -> StarkNetSignature {
        StarkNetSignature::new(Felt::from(11u64), Felt::from(22u64))
    }

    #[test]
    fn test_auth_headers() {
        let headers = auth_headers(&account(), &AuthFields::login(1_700_000_000), &signature());
        let map = headers.to_header_map();

        assert_eq!(map[HEADER_STARKNET_ACCOUNT], "0xabcd");
        assert_eq!(map[HEADER_STARKNET_SIGNATURE], r#"["11","22"]"#);
        assert_eq!(map[HEADER_TIMESTAMP], "1700000000");
        assert_eq!(map[HEADER_SIGNATURE_EXPIRATION], "1700086400");
    }

    #[test]
    fn test_onboarding_request() {
        let identity = EthereumIdentity::from_hex(
            "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
        )
        .unwrap();
        let request = onboarding_request(&identity, &account(), &signature());
        let map = request.to_header_map();

        assert_eq!(map[HEADER_ETHEREUM_ACCOUNT], "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
        assert_eq!(map[HEADER_STARKNET_ACCOUNT], "0xabcd");
        assert_eq!(
            serde_json::to_value(&request.body).unwrap(),
            serde_json::json!({"public_key": "0x1234"})
        );
    }

    #[test]
    fn test_order_body_shape() {
        let order = NormalizedOrder {
            market: "BTC-USD-PERP".into(),
            side: OrderSide::Buy,
            order_type: OrderType::Limit,
            size: dec!(0.1),
            price: Some(dec!(65000.5)),
            client_id: "order-1700000000".into(),
            signature_timestamp: 1_700_000_000_123,
            instruction: "GTC".into(),
        };
        let body = serde_json::to_value(order_request(&order, &signature())).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "market": "BTC-USD-PERP",
                "side": "BUY",
                "type": "LIMIT",
                "size": "0.100",
                "price": "65000.50",
                "client_id": "order-1700000000",
                "instruction": "GTC",
                "signature": "[\"11\",\"22\"]",
                "signature_timestamp": 1700000000123i64,
            })
        );
    }

    #[test]
    fn test_market_order_body_has_no_price() {
        let order = NormalizedOrder {
            market: "ETH-USD-PERP".into(),
            side: OrderSide::Sell,
            order_type: OrderType::Market,
            size: dec!(2.000),
            price: None,
            client_id: "x".into(),
            signature_timestamp: 1,
            instruction: "GTC".into(),
        };
        let body = serde_json::to_value(order_request(&order, &signature())).unwrap();
        assert!(body.get("price").is_none());
        assert_eq!(body["size"], "2.000");
    }
}
