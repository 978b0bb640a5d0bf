//! Paradex Typed Messages
//!
//! 인증(Auth), 온보딩(Onboarding), 주문(Order) 메시지를 SNIP-12 타입 데이터로 구성합니다.
//! 모든 메시지는 도메인 분리자에 StarkNet 체인 ID를 포함하므로 다른 네트워크에서 재사용할 수 없습니다.
//! 필드 순서는 스키마의 일부이며 거래소 검증기와 정확히 일치해야 합니다.
//!
//! # 참조
//!
//! - [Paradex API Authentication](https://docs.paradex.trade/trading/api-authentication)

use super::typed_data::{StarkNetDomain, StarkNetTypedData, StarkNetTypedDataField};
use crate::errors::{ParadexError, ParadexResult};
use crate::types::{ChainConfig, NormalizedOrder, OrderType};
use rust_decimal::Decimal;
use starknet_types_core::felt::Felt;
use std::collections::BTreeMap;

pub const PARADEX_DOMAIN_NAME: &str = "Paradex";
pub const PARADEX_DOMAIN_VERSION: &str = "1";

/// JWT 서명 유효 기간 (24시간)
pub const AUTH_VALIDITY_SECS: i64 = 86_400;

/// 체인 표현의 소수 자릿수 (quantum)
pub const QUANTUM_DECIMALS: u32 = 8;

pub const ONBOARDING_ACTION: &str = "Onboarding";

/// 메시지 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Auth,
    Onboarding,
    Order,
}

/// Auth 메시지 필드
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthFields {
    pub method: String,
    pub path: String,
    pub body: String,
    /// 서명 시각 (unix 초)
    pub timestamp: i64,
    /// 만료 시각 (unix 초)
    pub expiry: i64,
}

impl AuthFields {
    /// `POST /v1/auth` 로그인 요청, 만료는 `now + 24h`
    pub fn login(now_secs: i64) -> Self {
        Self {
            method: "POST".to_string(),
            path: "/v1/auth".to_string(),
            body: String::new(),
            timestamp: now_secs,
            expiry: now_secs + AUTH_VALIDITY_SECS,
        }
    }
}

/// `build`에 넘기는 종류별 필드
#[derive(Debug, Clone)]
pub enum MessageFields {
    Auth(AuthFields),
    Onboarding,
    Order(NormalizedOrder),
}

/// 도메인 분리된 서명 대상 메시지
#[derive(Debug, Clone)]
pub enum TypedMessage {
    Auth {
        domain: StarkNetDomain,
        fields: AuthFields,
    },
    Onboarding {
        domain: StarkNetDomain,
        action: String,
    },
    /// `client_id`는 요청 조립용으로만 함께 전달되며 서명 스키마에는 포함되지 않습니다.
    Order {
        domain: StarkNetDomain,
        order: NormalizedOrder,
    },
}

/// 체인 설정의 도메인 분리자
pub fn paradex_domain(chain: &ChainConfig) -> StarkNetDomain {
    StarkNetDomain::new(
        PARADEX_DOMAIN_NAME,
        PARADEX_DOMAIN_VERSION,
        chain.starknet_chain_id.clone(),
    )
}

/// 메시지 구성
pub fn build(fields: MessageFields, chain: &ChainConfig) -> ParadexResult<TypedMessage> {
    let domain = paradex_domain(chain);
    let message = match fields {
        MessageFields::Auth(fields) => {
            if fields.expiry <= fields.timestamp {
                return Err(ParadexError::signing(format!(
                    "Auth expiry {} must be after timestamp {}",
                    fields.expiry, fields.timestamp
                )));
            }
            TypedMessage::Auth { domain, fields }
        },
        MessageFields::Onboarding => TypedMessage::Onboarding {
            domain,
            action: ONBOARDING_ACTION.to_string(),
        },
        MessageFields::Order(order) => TypedMessage::Order { domain, order },
    };

    // 모든 필드를 felt로 인코딩해 본다 (계정 주소는 해시에만 영향)
    message.hash(&Felt::ZERO)?;
    Ok(message)
}

impl TypedMessage {
    pub fn kind(&self) -> MessageKind {
        match self {
            TypedMessage::Auth { .. } => MessageKind::Auth,
            TypedMessage::Onboarding { .. } => MessageKind::Onboarding,
            TypedMessage::Order { .. } => MessageKind::Order,
        }
    }

    pub fn domain(&self) -> &StarkNetDomain {
        match self {
            TypedMessage::Auth { domain, .. }
            | TypedMessage::Onboarding { domain, .. }
            | TypedMessage::Order { domain, .. } => domain,
        }
    }

    /// SNIP-12 타입 데이터로 변환
    pub fn to_typed_data(&self) -> ParadexResult<StarkNetTypedData> {
        let (primary_type, fields, message) = match self {
            TypedMessage::Auth { fields, .. } => (
                "Request",
                vec!["method", "path", "body", "timestamp", "expiration"],
                serde_json::json!({
                    "method": fields.method,
                    "path": fields.path,
                    "body": fields.body,
                    "timestamp": fields.timestamp.to_string(),
                    "expiration": fields.expiry.to_string(),
                }),
            ),
            TypedMessage::Onboarding { action, .. } => (
                "Constant",
                vec!["action"],
                serde_json::json!({ "action": action }),
            ),
            TypedMessage::Order { order, .. } => (
                "Order",
                vec!["timestamp", "market", "side", "orderType", "size", "price"],
                serde_json::json!({
                    "timestamp": order.signature_timestamp.to_string(),
                    "market": order.market,
                    "side": order.side.chain_value(),
                    "orderType": order.order_type.as_str(),
                    "size": to_quantum(order.size)?,
                    "price": chain_price(order)?,
                }),
            ),
        };

        let mut types = BTreeMap::new();
        types.insert(
            primary_type.to_string(),
            fields.into_iter().map(StarkNetTypedDataField::felt).collect(),
        );

        Ok(StarkNetTypedData::new(
            self.domain().clone(),
            primary_type,
            types,
            message,
        ))
    }

    /// 계정 주소에 묶인 서명 대상 해시
    pub fn hash(&self, account_address: &Felt) -> ParadexResult<Felt> {
        self.to_typed_data()?.message_hash(account_address)
    }
}

/// 10진수를 quantum 정수 문자열로 (value × 10^8, 버림)
pub fn to_quantum(value: Decimal) -> ParadexResult<String> {
    if value.is_sign_negative() {
        return Err(ParadexError::signing(format!("Negative quantity {value}")));
    }
    let scaled = value
        .checked_mul(Decimal::from(10u64.pow(QUANTUM_DECIMALS)))
        .ok_or_else(|| ParadexError::signing(format!("Quantity {value} overflows quantum range")))?;
    Ok(scaled.trunc().normalize().to_string())
}

fn chain_price(order: &NormalizedOrder) -> ParadexResult<String> {
    match (order.order_type, order.price) {
        (OrderType::Limit, Some(price)) => to_quantum(price),
        _ => Ok("0".to_string()),
    }
}
