//! Accrued interest calculations for bonds.
//!
//! Interest accrues linearly in calendar days across the current coupon
//! period (actual/actual within the period). On a coupon date the full
//! coupon has accrued, matching the schedule rule that a payment on the
//! as-of date is still owed to the holder.
//!
//! # Example
//!
//! ```rust
//! use bondval_bonds::cashflows::AccruedInterestCalculator;
//! use bondval_core::types::Date;
//! use rust_decimal_macros::dec;
//!
//! let accrued = AccruedInterestCalculator::standard(
//!     Date::from_ymd(2024, 4, 1).unwrap(), // settlement
//!     Date::from_ymd(2024, 1, 1).unwrap(), // last coupon
//!     Date::from_ymd(2024, 7, 1).unwrap(), // next coupon
//!     dec!(3000),                          // coupon per period, cents
//! );
//! assert_eq!(accrued, dec!(1500));
//! ```

use rust_decimal::Decimal;

use bondval_core::types::Date;

use super::PaymentSchedule;
use crate::error::{BondError, BondResult};
use crate::instruments::Bond;

/// Calculator for accrued interest.
pub struct AccruedInterestCalculator;

impl AccruedInterestCalculator {
    /// Calculates accrued interest for one coupon period.
    ///
    /// `coupon × days(last_coupon, settlement) / days(last_coupon, next_coupon)`.
    /// Returns zero for a degenerate period.
    #[must_use]
    pub fn standard(
        settlement: Date,
        last_coupon: Date,
        next_coupon: Date,
        coupon: Decimal,
    ) -> Decimal {
        let period_days = last_coupon.days_between(&next_coupon);
        if period_days <= 0 {
            return Decimal::ZERO;
        }

        let accrued_days = last_coupon.days_between(&settlement).clamp(0, period_days);
        coupon * Decimal::from(accrued_days) / Decimal::from(period_days)
    }

    /// Accrued interest on one bond at `settlement`, in cents.
    ///
    /// Zero for a zero-coupon bond.
    ///
    /// # Errors
    ///
    /// Returns `ValuationBeforeIssue` if `settlement` precedes the issue date
    /// and `MaturedBond` if it follows the maturity date.
    pub fn for_bond(bond: &Bond, settlement: Date) -> BondResult<Decimal> {
        let issue = bond.issue_date();
        if settlement < issue {
            return Err(BondError::ValuationBeforeIssue {
                issue,
                valuation: settlement,
            });
        }
        if settlement > bond.maturity_date() {
            return Err(BondError::MaturedBond {
                maturity: bond.maturity_date(),
                valuation: settlement,
            });
        }
        if bond.is_zero_coupon() {
            return Ok(Decimal::ZERO);
        }

        let term = bond.payment_term();
        let next = PaymentSchedule::next_payment_date(issue, settlement, term)?;
        let last = PaymentSchedule::previous_payment_date(issue, settlement, term)?;

        Ok(Self::standard(settlement, last, next, bond.coupon_per_period()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruments::BondBuilder;
    use bondval_core::types::PaymentTerm;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn bond(bps: u32) -> Bond {
        BondBuilder::new()
            .isin("GB0002634946")
            .issue_date(date(2024, 1, 1))
            .maturity_date(date(2029, 1, 1))
            .coupon_rate_bps(bps)
            .face_value(100_000)
            .market_value(98_000)
            .payment_term(PaymentTerm::SemiAnnual)
            .build()
            .unwrap()
    }

    #[test]
    fn test_standard_half_period() {
        // 91 of 182 days.
        let accrued = AccruedInterestCalculator::standard(
            date(2024, 4, 1),
            date(2024, 1, 1),
            date(2024, 7, 1),
            dec!(3000),
        );
        assert_eq!(accrued, dec!(1500));
    }

    #[test]
    fn test_standard_degenerate_period() {
        let d = date(2024, 1, 1);
        assert_eq!(AccruedInterestCalculator::standard(d, d, d, dec!(3000)), Decimal::ZERO);
    }

    #[test]
    fn test_for_bond() {
        let bond = bond(600);

        assert_eq!(
            AccruedInterestCalculator::for_bond(&bond, date(2024, 1, 1)).unwrap(),
            Decimal::ZERO
        );
        assert_eq!(
            AccruedInterestCalculator::for_bond(&bond, date(2024, 4, 1)).unwrap(),
            dec!(1500)
        );
        // Full coupon on the payment date itself.
        assert_eq!(
            AccruedInterestCalculator::for_bond(&bond, date(2024, 7, 1)).unwrap(),
            dec!(3000)
        );
        // Next day starts the following period.
        let next_day = AccruedInterestCalculator::for_bond(&bond, date(2024, 7, 2)).unwrap();
        assert!(next_day > Decimal::ZERO && next_day < dec!(50));
    }

    #[test]
    fn test_zero_coupon_accrues_nothing() {
        let accrued = AccruedInterestCalculator::for_bond(&bond(0), date(2025, 3, 1)).unwrap();
        assert_eq!(accrued, Decimal::ZERO);
    }

    #[test]
    fn test_out_of_range_settlement() {
        let bond = bond(600);
        assert!(matches!(
            AccruedInterestCalculator::for_bond(&bond, date(2023, 12, 31)),
            Err(BondError::ValuationBeforeIssue { .. })
        ));
        assert!(matches!(
            AccruedInterestCalculator::for_bond(&bond, date(2029, 1, 2)),
            Err(BondError::MaturedBond { .. })
        ));
    }
}
