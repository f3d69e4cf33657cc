//! Money formatting

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};

/// Convert a decimal amount to minor units (cents), rounding to the nearest.
///
/// Returns `None` if the amount does not fit an `i64`.
pub fn to_minor_units(amount: Decimal) -> Option<i64> {
    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|value| value.round_dp(0).to_i64())
}

/// Render an amount in `currency`, e.g. `$1,200.50`.
///
/// Amounts too large for minor units fall back to a plain two-decimal
/// rendering with the ISO code.
pub fn format_money(amount: Decimal, currency: &'static Currency) -> String {
    match to_minor_units(amount) {
        Some(minor) => Money::from_minor(minor, currency).to_string(),
        None => format!("{} {}", amount.round_dp(2), currency.iso_alpha_code),
    }
}

/// Two-decimal plain rendering used in exports, e.g. `1200.50`.
pub fn format_plain(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}
