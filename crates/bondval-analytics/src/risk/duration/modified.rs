//! Modified duration from Macaulay duration.
//!
//! The Macaulay figure is discounted by one coupon period at the bond's
//! yield. The yield is given in basis points and the period length comes
//! from the bond's [`PaymentTerm`]:
//!
//! ```text
//! D_mod = D_mac / (1 + ytm_bps / 10000 / periods_per_year)
//! ```
//!
//! A zero yield leaves the duration unchanged.

use bondval_core::PaymentTerm;

/// Convert Macaulay duration to modified duration.
///
/// # Arguments
///
/// * `macaulay` - Macaulay duration in years
/// * `ytm_bps` - Yield to maturity in basis points
/// * `term` - Payment term giving the compounding frequency
pub fn modified_from_macaulay(macaulay: f64, ytm_bps: f64, term: PaymentTerm) -> f64 {
    let yield_per_period = ytm_bps / 10_000.0 / f64::from(term.periods_per_year());
    macaulay / (1.0 + yield_per_period)
}
