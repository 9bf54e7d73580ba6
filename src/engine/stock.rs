use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::StockBand;

pub const EMPTY_PERCENT: u8 = 0;
pub const BAD_MAX_PERCENT: u8 = 20;
pub const WARN_MAX_PERCENT: u8 = 60;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Stock level as a whole percentage of capacity, clamped to 0..=100.
///
/// A non-positive capacity yields 0. Halves round up.
pub fn fill_percent(stock: Decimal, capacity: Decimal) -> u8 {
    match fill_ratio(stock, capacity) {
        Some(ratio) => {
            let percent = (ratio * HUNDRED)
                .min(HUNDRED)
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
            percent.to_u8().unwrap_or(0)
        }
        None => 0,
    }
}

/// Unrounded `stock / capacity` clamped to `[0, 1]`, or `None` when there
/// is no capacity to normalize against.
pub fn fill_ratio(stock: Decimal, capacity: Decimal) -> Option<Decimal> {
    if capacity <= Decimal::ZERO {
        return None;
    }
    let stock = stock.max(Decimal::ZERO);
    let ratio = stock.checked_div(capacity).unwrap_or(Decimal::ONE);
    Some(ratio.min(Decimal::ONE))
}

pub fn band(percent: u8) -> StockBand {
    match percent {
        EMPTY_PERCENT => StockBand::Empty,
        p if p <= BAD_MAX_PERCENT => StockBand::Bad,
        p if p <= WARN_MAX_PERCENT => StockBand::Warn,
        _ => StockBand::Good,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn zero_capacity_reports_empty() {
        assert_eq!(fill_percent(dec!(5), dec!(0)), 0);
        assert_eq!(fill_percent(dec!(0), dec!(0)), 0);
        assert_eq!(fill_percent(dec!(5), dec!(-3)), 0);
    }

    #[test]
    fn overstock_is_clamped_to_full() {
        assert_eq!(fill_percent(dec!(100), dec!(100)), 100);
        assert_eq!(fill_percent(dec!(200), dec!(100)), 100);
        assert_eq!(fill_percent(Decimal::MAX, dec!(0.0001)), 100);
    }

    #[test]
    fn rounds_half_up() {
        assert_eq!(fill_percent(dec!(70), dec!(100)), 70);
        assert_eq!(fill_percent(dec!(1), dec!(3)), 33);
        assert_eq!(fill_percent(dec!(2), dec!(3)), 67);
        assert_eq!(fill_percent(dec!(1), dec!(8)), 13);
        assert_eq!(fill_percent(dec!(2.5), dec!(10)), 25);
    }

    #[test]
    fn negative_stock_counts_as_empty() {
        assert_eq!(fill_percent(dec!(-4), dec!(10)), 0);
    }

    #[test]
    fn band_boundaries_are_exact() {
        assert_eq!(band(0), StockBand::Empty);
        assert_eq!(band(1), StockBand::Bad);
        assert_eq!(band(20), StockBand::Bad);
        assert_eq!(band(21), StockBand::Warn);
        assert_eq!(band(60), StockBand::Warn);
        assert_eq!(band(61), StockBand::Good);
        assert_eq!(band(100), StockBand::Good);
    }
}
