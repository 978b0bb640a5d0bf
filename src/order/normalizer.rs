//! Order normalizer
//!
//! 수량/가격을 버림으로 양자화하고 client id와 서명 타임스탬프를 부여합니다.
//!
//! - size: 소수점 3자리 버림 (절대 올림하지 않음)
//! - price: 소수점 2자리 버림, 지정가에만 유지
//! - 가격 없는 지정가는 시장가로 전환
//! - client_id 미지정 시 `order-{unix_seconds}`
//!
//! 같은 초 안에 여러 주문을 만들면 기본 client_id가 겹칩니다.
//! 고유성이 필요하면 호출자가 `clientId`를 지정해야 합니다.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::crypto::starknet::short_string_to_felt;
use crate::errors::{ParadexError, ParadexResult};
use crate::types::{NormalizedOrder, NumericInput, OrderSide, OrderType, RawOrder};
use crate::utils::precision::{truncate_to_places, PRICE_DECIMALS, SIZE_DECIMALS};

/// 주문 유효 기간 (Good-Til-Cancelled)
pub const DEFAULT_INSTRUCTION: &str = "GTC";

/// 현재 시각으로 정규화
pub fn normalize(raw: &RawOrder) -> ParadexResult<NormalizedOrder> {
    normalize_at(raw, Utc::now())
}

/// 주어진 시각으로 정규화 (순수 함수)
pub fn normalize_at(raw: &RawOrder, now: DateTime<Utc>) -> ParadexResult<NormalizedOrder> {
    let market = market_symbol(required(&raw.market, "market")?)?;
    let side: OrderSide = required(&raw.side, "side")?.parse()?;
    let requested_type: OrderType = required(&raw.order_type, "type")?.parse()?;

    let size = match raw.size.as_ref().map(|s| s.to_decimal("size")).transpose()?.flatten() {
        Some(size) => truncate_to_places(size, SIZE_DECIMALS),
        None => return Err(ParadexError::order("Missing required field 'size'")),
    };
    if size <= Decimal::ZERO {
        return Err(ParadexError::order(format!(
            "size must be positive after truncation to {SIZE_DECIMALS} decimals, got {size}"
        )));
    }

    let price = normalize_price(raw.price.as_ref())?;
    let (order_type, price) = match (requested_type, price) {
        (OrderType::Limit, Some(price)) => (OrderType::Limit, Some(price)),
        _ => (OrderType::Market, None),
    };
    if order_type != requested_type {
        tracing::debug!(%market, "limit order without price submitted as market");
    }

    let client_id = match raw.client_id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => format!("order-{}", now.timestamp()),
    };

    Ok(NormalizedOrder {
        market,
        side,
        order_type,
        size,
        price,
        client_id,
        signature_timestamp: now.timestamp_millis(),
        instruction: DEFAULT_INSTRUCTION.to_string(),
    })
}

fn required<'a>(value: &'a Option<String>, field: &str) -> ParadexResult<&'a str> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ParadexError::order(format!("Missing required field '{field}'"))),
    }
}

/// 마켓 심볼은 short string 그대로 서명되어야 한다
///
/// 숫자만 있거나 `0x`로 시작하면 felt 인코딩에서 숫자로 읽힌다.
fn market_symbol(market: &str) -> ParadexResult<String> {
    if market.starts_with("0x") || market.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParadexError::order(format!(
            "market must be a symbol, not a number: {market:?}"
        )));
    }
    short_string_to_felt(market).map_err(|e| {
        ParadexError::order(format!("market {market:?} cannot be signed: {e}"))
    })?;
    Ok(market.to_string())
}

/// 0 또는 빈 값은 가격 없음
fn normalize_price(price: Option<&NumericInput>) -> ParadexResult<Option<Decimal>> {
    let Some(price) = price.map(|p| p.to_decimal("price")).transpose()?.flatten() else {
        return Ok(None);
    };
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ParadexError::order(format!("price must not be negative, got {price}")));
    }
    let price = truncate_to_places(price, PRICE_DECIMALS);
    Ok((!price.is_zero()).then_some(price))
}
