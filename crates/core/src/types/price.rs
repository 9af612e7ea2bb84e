//! Price formatting.

use rust_decimal::Decimal;

/// Format a decimal amount for display with exactly two fractional digits.
///
/// ```rust
/// # use rust_decimal::Decimal;
/// # use tienda_costa_core::format_price;
/// assert_eq!(format_price(Decimal::new(155, 1)), "15.50");
/// ```
#[must_use]
pub fn format_price(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}
