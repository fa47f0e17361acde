//! Money formatting helpers.
//!
//! All prices in the catalog are USD and stored as `rust_decimal::Decimal`
//! in major units (dollars). Decimal arithmetic keeps cart and order totals
//! exact; display formatting lives here so every surface prints money the
//! same way.

use rust_decimal::Decimal;

/// Format a decimal amount as a US dollar string, e.g. `$159.99`.
///
/// Negative amounts keep the sign in front of the dollar symbol: `-$5.00`.
#[must_use]
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    if rounded.is_sign_negative() {
        format!("-${:.2}", -rounded)
    } else {
        format!("${rounded:.2}")
    }
}
