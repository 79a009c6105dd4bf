//! Duration calculations.
//!
//! Time is measured in calendar days from the valuation date and converted
//! to years with a 365.25-day year. Discounting compounds once per coupon
//! period, where a period is `365.25 / periods_per_year` days.

mod modified;

pub use modified::modified_from_macaulay;

use log::debug;
use rust_decimal::prelude::ToPrimitive;

use bondval_bonds::cashflows::CashFlowGenerator;
use bondval_bonds::Bond;
use bondval_core::{Date, PaymentTerm};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Days per year used to convert day counts to years.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Duration calculator.
pub struct DurationCalculator;

impl DurationCalculator {
    /// Macaulay duration in years.
    ///
    /// ```text
    /// D = (Σ t_i × PV_i / Σ PV_i) / 365.25
    /// PV_i = CF_i / (1 + y/f)^(t_i / (365.25/f))
    /// ```
    ///
    /// where `t_i` is days from valuation to the i-th cash flow, `y` is the
    /// annual yield and `f` the payment frequency.
    ///
    /// # Arguments
    ///
    /// * `bond` - The bond
    /// * `ytm_bps` - Annualized yield to maturity in basis points
    /// * `valuation_date` - Date durations are measured from
    ///
    /// # Errors
    ///
    /// Cash flow generation failures propagate as `AnalyticsError::Bond` and
    /// take precedence over a bad yield. Returns `InvalidInput` if the
    /// per-period yield is at or below -100% or not finite, or if the cash
    /// flows have no present value (zero face value).
    pub fn macaulay_duration(
        bond: &Bond,
        ytm_bps: f64,
        valuation_date: Date,
    ) -> AnalyticsResult<f64> {
        let periods_per_year = f64::from(bond.payment_term().periods_per_year());
        let yield_per_period = ytm_bps / 10_000.0 / periods_per_year;
        let days_per_period = DAYS_PER_YEAR / periods_per_year;

        let cash_flows = CashFlowGenerator::generate(bond, valuation_date)?;

        if !yield_per_period.is_finite() || yield_per_period <= -1.0 {
            return Err(AnalyticsError::invalid_input(format!(
                "yield of {ytm_bps} bps cannot discount cash flows"
            )));
        }

        let mut total_pv = 0.0;
        let mut weighted_days = 0.0;
        for cf in &cash_flows {
            let amount = cf.amount().to_f64().ok_or_else(|| {
                AnalyticsError::invalid_input(format!("cash flow amount {} out of range", cf.amount()))
            })?;
            let days = cf.days_from_valuation() as f64;
            let pv = amount / (1.0 + yield_per_period).powf(days / days_per_period);

            total_pv += pv;
            weighted_days += days * pv;
        }

        if total_pv == 0.0 {
            return Err(AnalyticsError::invalid_input(
                "cash flows have zero present value",
            ));
        }

        let duration = weighted_days / total_pv / DAYS_PER_YEAR;
        debug!(
            "{}: Macaulay duration {duration:.6} over {} cash flows at {ytm_bps:.4} bps",
            bond.isin(),
            cash_flows.len()
        );
        Ok(duration)
    }

    /// Modified duration in years from a Macaulay duration.
    ///
    /// See [`modified_from_macaulay`].
    #[must_use]
    pub fn modified_duration(macaulay: f64, ytm_bps: f64, term: PaymentTerm) -> f64 {
        modified_from_macaulay(macaulay, ytm_bps, term)
    }
}
