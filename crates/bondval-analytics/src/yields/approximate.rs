//! Closed-form yield-to-maturity approximation.

use log::debug;
use rust_decimal::Decimal;

use bondval_bonds::cashflows::PaymentSchedule;
use bondval_bonds::Bond;
use bondval_core::Date;

use crate::error::{AnalyticsError, AnalyticsResult};

/// Approximates yield to maturity from bond terms.
pub struct YtmApproximator;

impl YtmApproximator {
    /// Approximate annualized YTM in basis points.
    ///
    /// The market value is taken as the clean price. The coupon term is
    /// `(coupon_rate_bps / 100) × face_value / periods_per_year`, so a bond
    /// priced at par returns exactly its coupon rate in basis points.
    ///
    /// # Arguments
    ///
    /// * `bond` - The bond to value
    /// * `valuation_date` - Settlement/valuation date
    ///
    /// # Errors
    ///
    /// - `BondTooCloseToMaturity` if the adjusted period count is negative
    /// - `YtmNotMeaningful` if the bond matures on `valuation_date`
    /// - `FractionalPeriodAdjustmentTooLarge` if the adjustment exceeds a period
    /// - `InvalidInput` if face and market value are both zero
    /// - `Bond` for matured bonds and valuation dates before issue
    pub fn approximate(bond: &Bond, valuation_date: Date) -> AnalyticsResult<f64> {
        let issue = bond.issue_date();
        let maturity = bond.maturity_date();
        let term = bond.payment_term();
        let periods_per_year = f64::from(term.periods_per_year());

        let face = bond.face_value() as f64;
        let market = bond.market_value() as f64;
        let coupon = f64::from(bond.coupon_rate_bps()) / 100.0 * face / periods_per_year;

        let remaining = PaymentSchedule::remaining_periods(valuation_date, issue, maturity, term)?;
        let fractional = PaymentSchedule::fractional_period(issue, valuation_date, term)?;
        let adjusted = f64::from(remaining) - fractional;

        debug!(
            "{}: {remaining} periods remaining, fraction {fractional:.6}, adjusted {adjusted:.6}",
            bond.isin()
        );

        if adjusted < 0.0 {
            return Err(AnalyticsError::BondTooCloseToMaturity {
                adjusted_periods: adjusted,
            });
        }

        if adjusted == 0.0 {
            return Err(AnalyticsError::YtmNotMeaningful {
                maturity,
                receives: Decimal::from(bond.face_value()) + bond.coupon_per_period(),
                pays: bond.market_value(),
            });
        }

        // Unreachable while fractional_period stays within [0, 1].
        if (adjusted - f64::from(remaining)).abs() > 1.0 {
            return Err(AnalyticsError::FractionalPeriodAdjustmentTooLarge {
                remaining,
                fractional,
            });
        }

        let average_price = (face + market) / 2.0;
        if average_price == 0.0 {
            return Err(AnalyticsError::invalid_input(
                "face value and market value are both zero",
            ));
        }

        let ytm_per_period = (coupon + (face - market) / adjusted) / average_price;
        Ok(ytm_per_period * periods_per_year * 100.0)
    }
}
