//! Cash flow generation for bonds.

mod accrued;
mod schedule;

pub use accrued::AccruedInterestCalculator;
pub use schedule::PaymentSchedule;

use log::debug;
use rust_decimal::Decimal;

use bondval_core::types::{CashFlow, Date};

use crate::error::{BondError, BondResult};
use crate::instruments::Bond;

/// Generates cash flows for bonds.
pub struct CashFlowGenerator;

impl CashFlowGenerator {
    /// Generates the future cash flows of a bond as seen from `valuation_date`.
    ///
    /// Flows are ordered by `days_from_valuation`. A coupon falling on the
    /// valuation date is included with distance 0. The face value is folded
    /// into the final coupon, which must fall exactly on the maturity date.
    /// A zero-coupon bond yields a single principal flow at maturity.
    ///
    /// # Arguments
    ///
    /// * `bond` - The bond to generate cash flows for
    /// * `valuation_date` - Date the flows are measured from
    ///
    /// # Errors
    ///
    /// - `MaturedBond` if the bond matured before `valuation_date`
    /// - `NoCashFlowsGenerated` if a coupon-paying bond has no coupon date
    ///   between `valuation_date` and maturity
    /// - `PrincipalAlignmentError` if the last coupon date is not the
    ///   maturity date
    pub fn generate(bond: &Bond, valuation_date: Date) -> BondResult<Vec<CashFlow>> {
        let maturity = bond.maturity_date();

        if maturity < valuation_date {
            return Err(BondError::MaturedBond {
                maturity,
                valuation: valuation_date,
            });
        }

        let face_value = Decimal::from(bond.face_value());

        if bond.is_zero_coupon() {
            let days = valuation_date.days_between(&maturity);
            debug!("{}: zero coupon, principal in {days} days", bond.isin());
            return Ok(vec![CashFlow::principal(maturity, days, face_value)]);
        }

        let issue = bond.issue_date();
        let term = bond.payment_term();
        let coupon = bond.coupon_per_period();

        let mut flows = Vec::new();
        let mut index = PaymentSchedule::next_payment_index(issue, valuation_date, term)?;
        let mut date = PaymentSchedule::payment_date(issue, index, term)?;
        while date <= maturity {
            flows.push(CashFlow::coupon(date, valuation_date.days_between(&date), coupon));
            index += 1;
            date = PaymentSchedule::payment_date(issue, index, term)?;
        }

        let Some(last) = flows.pop() else {
            return Err(BondError::NoCashFlowsGenerated { maturity });
        };

        if last.date() != maturity {
            return Err(BondError::PrincipalAlignmentError {
                last_coupon: last.date(),
                maturity,
            });
        }

        flows.push(last.with_principal(face_value));

        debug!(
            "{}: {} cash flows from {valuation_date} to {maturity}",
            bond.isin(),
            flows.len()
        );

        Ok(flows)
    }

    /// Accrued interest on one bond at `settlement`, in cents.
    ///
    /// See [`AccruedInterestCalculator::for_bond`].
    pub fn accrued_interest(bond: &Bond, settlement: Date) -> BondResult<Decimal> {
        AccruedInterestCalculator::for_bond(bond, settlement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruments::BondBuilder;
    use bondval_core::types::{CashFlowKind, PaymentTerm};
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn bond(issue: Date, maturity: Date, bps: u32, term: PaymentTerm) -> Bond {
        BondBuilder::new()
            .isin("US0378331005")
            .issue_date(issue)
            .maturity_date(maturity)
            .coupon_rate_bps(bps)
            .face_value(100_000)
            .market_value(100_000)
            .payment_term(term)
            .build()
            .unwrap()
    }

    fn ten_year_semiannual() -> Bond {
        bond(date(2020, 1, 1), date(2030, 1, 1), 600, PaymentTerm::SemiAnnual)
    }

    #[test]
    fn test_semiannual_on_payment_date() {
        let flows = CashFlowGenerator::generate(&ten_year_semiannual(), date(2025, 1, 1)).unwrap();

        assert_eq!(flows.len(), 11);
        assert_eq!(flows[0].days_from_valuation(), 0);
        assert_eq!(flows[0].date(), date(2025, 1, 1));
        for cf in &flows[..10] {
            assert_eq!(cf.amount(), dec!(3000));
            assert_eq!(cf.kind(), CashFlowKind::Coupon);
        }

        let last = flows.last().unwrap();
        assert_eq!(last.amount(), dec!(103000));
        assert_eq!(last.kind(), CashFlowKind::CouponAndPrincipal);
        assert_eq!(last.date(), date(2030, 1, 1));
        assert_eq!(last.days_from_valuation(), 1826);
    }

    #[test]
    fn test_semiannual_mid_year_payment_date() {
        let flows = CashFlowGenerator::generate(&ten_year_semiannual(), date(2025, 7, 1)).unwrap();
        assert_eq!(flows.len(), 10);
        assert_eq!(flows[0].days_from_valuation(), 0);
    }

    #[test]
    fn test_day_after_payment_drops_it() {
        let flows = CashFlowGenerator::generate(&ten_year_semiannual(), date(2025, 1, 2)).unwrap();
        assert_eq!(flows.len(), 10);
        assert_eq!(flows[0].date(), date(2025, 7, 1));
        assert_eq!(flows[0].days_from_valuation(), 180);
    }

    #[test]
    fn test_quarterly() {
        let bond = bond(date(2023, 3, 15), date(2028, 3, 15), 500, PaymentTerm::Quarterly);
        let flows = CashFlowGenerator::generate(&bond, date(2025, 3, 15)).unwrap();

        assert_eq!(flows.len(), 13);
        assert_eq!(flows[0].amount(), dec!(1250));
        assert_eq!(flows[12].amount(), dec!(101250));
    }

    #[test]
    fn test_annual() {
        let bond = bond(date(2020, 6, 1), date(2030, 6, 1), 400, PaymentTerm::Annual);
        let flows = CashFlowGenerator::generate(&bond, date(2025, 6, 2)).unwrap();

        assert_eq!(flows.len(), 5);
        assert_eq!(flows[0].date(), date(2026, 6, 1));
        assert_eq!(flows[0].days_from_valuation(), 364);
    }

    #[test]
    fn test_flows_are_ordered() {
        let bond = bond(date(2021, 1, 31), date(2026, 1, 31), 350, PaymentTerm::Monthly);
        let flows = CashFlowGenerator::generate(&bond, date(2023, 2, 14)).unwrap();

        assert!(flows
            .windows(2)
            .all(|w| w[0].days_from_valuation() < w[1].days_from_valuation()));
        assert_eq!(flows[0].date(), date(2023, 2, 28));
    }

    #[test]
    fn test_valued_at_maturity() {
        let flows = CashFlowGenerator::generate(&ten_year_semiannual(), date(2030, 1, 1)).unwrap();
        assert_eq!(flows.len(), 1);
        assert_eq!(flows[0].days_from_valuation(), 0);
        assert_eq!(flows[0].amount(), dec!(103000));
    }

    #[test]
    fn test_zero_coupon() {
        let bond = bond(date(2020, 1, 1), date(2030, 1, 1), 0, PaymentTerm::Annual);
        let flows = CashFlowGenerator::generate(&bond, date(2025, 1, 1)).unwrap();

        assert_eq!(flows.len(), 1);
        assert_eq!(flows[0].kind(), CashFlowKind::Principal);
        assert_eq!(flows[0].amount(), dec!(100000));
        assert_eq!(flows[0].days_from_valuation(), 1826);
    }

    #[test]
    fn test_matured_bond() {
        let err = CashFlowGenerator::generate(&ten_year_semiannual(), date(2030, 1, 2)).unwrap_err();
        assert_eq!(
            err,
            BondError::MaturedBond {
                maturity: date(2030, 1, 1),
                valuation: date(2030, 1, 2),
            }
        );
    }

    #[test]
    fn test_no_coupon_before_maturity() {
        let bond = bond(date(2024, 1, 1), date(2024, 6, 15), 500, PaymentTerm::SemiAnnual);
        let err = CashFlowGenerator::generate(&bond, date(2024, 6, 10)).unwrap_err();
        assert_eq!(
            err,
            BondError::NoCashFlowsGenerated {
                maturity: date(2024, 6, 15)
            }
        );
    }

    #[test]
    fn test_maturity_off_schedule() {
        let bond = bond(date(2024, 1, 1), date(2025, 3, 1), 500, PaymentTerm::SemiAnnual);
        let err = CashFlowGenerator::generate(&bond, date(2024, 2, 1)).unwrap_err();
        assert_eq!(
            err,
            BondError::PrincipalAlignmentError {
                last_coupon: date(2025, 1, 1),
                maturity: date(2025, 3, 1),
            }
        );
    }

    #[test]
    fn test_valued_before_issue_starts_at_first_coupon() {
        let bond = bond(date(2024, 1, 1), date(2026, 1, 1), 500, PaymentTerm::Annual);
        let flows = CashFlowGenerator::generate(&bond, date(2023, 12, 1)).unwrap();
        assert_eq!(flows.len(), 2);
        assert_eq!(flows[0].date(), date(2025, 1, 1));
    }
}
