//! Monetary derivation for the commission breakdown.
//!
//! UTMify expects integer cents. The three amounts are independent linear
//! functions of the plan value, truncated and never rounded. Note the fee
//! is 5 cents per unit of value, not 5% of the price in cents.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Multiplies a decimal value by an integer factor and truncates to i64,
/// saturating when the product exceeds the i64 range.
fn mul_trunc(value: Decimal, factor: i64) -> i64 {
    let cents = (value * Decimal::from(factor)).trunc();
    cents.to_i64().unwrap_or(if cents.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// Full price in cents: trunc(value * 100).
pub fn price_in_cents(value: Decimal) -> i64 {
    mul_trunc(value, 100)
}

/// Gateway fee in cents: trunc(value * 5).
pub fn gateway_fee_in_cents(value: Decimal) -> i64 {
    mul_trunc(value, 5)
}

/// Net commission in cents: trunc(value * 95).
pub fn user_commission_in_cents(value: Decimal) -> i64 {
    mul_trunc(value, 95)
}
