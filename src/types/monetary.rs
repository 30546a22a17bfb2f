use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::types::Quantity;

/// Number of decimal places carried by every price and total.
pub const MONEY_SCALE: u32 = 2;

pub type Money = Decimal;

/// Computes the line total of a sale, rounded to two decimal places.
///
/// Prices are already exact at two decimals so the rounding is a no-op in
/// practice, but it pins the invariant `total == round(price * quantity, 2)`.
pub fn line_total(price: Money, quantity: Quantity) -> Money {
    (price * Decimal::from(quantity)).round_dp(MONEY_SCALE)
}

/// Lossy conversion for plotting. Charts are the only place money leaves `Decimal`.
pub fn chart_value(value: Money) -> f64 {
    value.to_f64().unwrap_or_default()
}
