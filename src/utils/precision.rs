//! Precision utilities for venue fixed-point quantities

use rust_decimal::{Decimal, RoundingStrategy};

/// 수량 소수 자릿수
pub const SIZE_DECIMALS: u32 = 3;

/// 가격 소수 자릿수
pub const PRICE_DECIMALS: u32 = 2;

/// 0 방향으로 버림 후 자릿수를 고정 (`1.2349` → `1.234`, `1` → `1.000`)
pub fn truncate_to_places(value: Decimal, places: u32) -> Decimal {
    let mut truncated = value.round_dp_with_strategy(places, RoundingStrategy::ToZero);
    truncated.rescale(places);
    truncated
}

/// 고정 자릿수 문자열
pub fn format_fixed(value: Decimal, places: u32) -> String {
    truncate_to_places(value, places).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_truncate_never_rounds_up() {
        assert_eq!(truncate_to_places(dec!(1.2349), 3), dec!(1.234));
        assert_eq!(truncate_to_places(dec!(0.9999), 3), dec!(0.999));
        assert_eq!(truncate_to_places(dec!(-1.2349), 3), dec!(-1.234));
    }

    #[test]
    fn test_truncate_pads_scale() {
        assert_eq!(format_fixed(dec!(1.0), 3), "1.000");
        assert_eq!(format_fixed(dec!(2), 2), "2.00");
        assert_eq!(format_fixed(dec!(65000.509), 2), "65000.50");
    }
}
