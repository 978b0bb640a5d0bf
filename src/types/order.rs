//! Order types - 원본 주문 입력과 정규화된 주문

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{ParadexError, ParadexResult};

/// 주문 측면
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    /// REST 표현 ("BUY" / "SELL")
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSide::Buy => "BUY",
            OrderSide::Sell => "SELL",
        }
    }

    /// 서명 메시지용 값 ("1" / "2")
    pub fn chain_value(&self) -> &'static str {
        match self {
            OrderSide::Buy => "1",
            OrderSide::Sell => "2",
        }
    }
}

impl FromStr for OrderSide {
    type Err = ParadexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buy" => Ok(OrderSide::Buy),
            "sell" => Ok(OrderSide::Sell),
            other => Err(ParadexError::order(format!(
                "side must be 'buy' or 'sell', got '{other}'"
            ))),
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 주문 타입
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    Market,
    Limit,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Market => "MARKET",
            OrderType::Limit => "LIMIT",
        }
    }
}

impl FromStr for OrderType {
    type Err = ParadexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "market" => Ok(OrderType::Market),
            "limit" => Ok(OrderType::Limit),
            other => Err(ParadexError::order(format!(
                "type must be 'market' or 'limit', got '{other}'"
            ))),
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 숫자 또는 문자열로 들어오는 수량/가격
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(serde_json::Number),
    Text(String),
}

impl NumericInput {
    /// 10진수 파싱 (빈 문자열은 None)
    pub fn to_decimal(&self, field: &str) -> ParadexResult<Option<Decimal>> {
        let text = match self {
            NumericInput::Number(n) => n.to_string(),
            NumericInput::Text(s) => s.trim().to_string(),
        };
        if text.is_empty() {
            return Ok(None);
        }
        Decimal::from_str(&text)
            .or_else(|_| Decimal::from_scientific(&text))
            .map(Some)
            .map_err(|e| ParadexError::order(format!("Invalid {field} '{text}': {e}")))
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        NumericInput::Text(value.to_string())
    }
}

impl From<Decimal> for NumericInput {
    fn from(value: Decimal) -> Self {
        NumericInput::Text(value.to_string())
    }
}

/// 원본 주문 입력 (`ORDER_PARAMS` JSON)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawOrder {
    #[serde(default)]
    pub market: Option<String>,
    #[serde(default)]
    pub side: Option<String>,
    #[serde(default, rename = "type")]
    pub order_type: Option<String>,
    #[serde(default)]
    pub size: Option<NumericInput>,
    #[serde(default)]
    pub price: Option<NumericInput>,
    #[serde(default, rename = "clientId", alias = "client_id")]
    pub client_id: Option<String>,
}

impl RawOrder {
    pub fn new(
        market: impl Into<String>,
        side: impl Into<String>,
        order_type: impl Into<String>,
    ) -> Self {
        Self {
            market: Some(market.into()),
            side: Some(side.into()),
            order_type: Some(order_type.into()),
            ..Default::default()
        }
    }

    pub fn with_size(mut self, size: impl Into<NumericInput>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn with_price(mut self, price: impl Into<NumericInput>) -> Self {
        self.price = Some(price.into());
        self
    }

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }
}

/// 서명 직전의 정규화된 주문
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedOrder {
    /// 마켓 (e.g. "BTC-USD-PERP")
    pub market: String,
    pub side: OrderSide,
    pub order_type: OrderType,
    /// 수량 (소수점 3자리, 버림)
    pub size: Decimal,
    /// 가격 (소수점 2자리, 버림) - 지정가에만 존재
    pub price: Option<Decimal>,
    pub client_id: String,
    /// 서명 타임스탬프 (밀리초)
    pub signature_timestamp: i64,
    /// 주문 유효 기간
    pub instruction: String,
}

/// `GET /orders` 응답의 주문 항목
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenOrder {
    pub id: String,
    pub market: String,
    pub side: OrderSide,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub size: Decimal,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub remaining_size: Option<Decimal>,
    pub status: String,
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub instruction: Option<String>,
    #[serde(default)]
    pub created_at: Option<i64>,
}

/// `GET /orders` 응답
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpenOrdersResponse {
    #[serde(default)]
    pub results: Vec<OpenOrder>,
}
