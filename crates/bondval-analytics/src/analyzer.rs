//! Single-bond analysis: YTM, then Macaulay and modified duration.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use bondval_bonds::{Bond, Isin};
use bondval_core::{Date, PaymentTerm};

use crate::error::AnalyticsResult;
use crate::risk::DurationCalculator;
use crate::yields::YtmApproximator;

/// Valuation results for one bond together with the terms they were computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BondAnalysis {
    /// ISIN of the analyzed bond.
    pub isin: Isin,
    /// Approximate annualized YTM in basis points.
    pub ytm_bps: f64,
    /// Macaulay duration in years.
    pub macaulay_duration: f64,
    /// Modified duration in years.
    pub modified_duration: f64,
    /// Issue date.
    pub issue_date: Date,
    /// Maturity date.
    pub maturity_date: Date,
    /// Annual coupon rate in basis points.
    pub coupon_rate_bps: u32,
    /// Face value in cents.
    pub face_value: u64,
    /// Clean market price in cents.
    pub market_value: u64,
    /// Payment term.
    pub payment_term: PaymentTerm,
}

/// Runs the full per-bond valuation.
pub struct BondAnalyzer;

impl BondAnalyzer {
    /// Analyzes a bond as of `valuation_date`.
    ///
    /// The YTM feeds the Macaulay duration, which feeds the modified
    /// duration. The first failure is returned unchanged.
    pub fn analyze(bond: &Bond, valuation_date: Date) -> AnalyticsResult<BondAnalysis> {
        Self::run(bond, valuation_date).map_err(|err| {
            warn!("{}: valuation as of {valuation_date} rejected: {err}", bond.isin());
            err
        })
    }

    fn run(bond: &Bond, valuation_date: Date) -> AnalyticsResult<BondAnalysis> {
        let ytm_bps = YtmApproximator::approximate(bond, valuation_date)?;
        let macaulay_duration = DurationCalculator::macaulay_duration(bond, ytm_bps, valuation_date)?;
        let modified_duration =
            DurationCalculator::modified_duration(macaulay_duration, ytm_bps, bond.payment_term());

        debug!(
            "{}: ytm {ytm_bps:.4} bps, Macaulay {macaulay_duration:.6}, modified {modified_duration:.6}",
            bond.isin()
        );

        Ok(BondAnalysis {
            isin: bond.isin().clone(),
            ytm_bps,
            macaulay_duration,
            modified_duration,
            issue_date: bond.issue_date(),
            maturity_date: bond.maturity_date(),
            coupon_rate_bps: bond.coupon_rate_bps(),
            face_value: bond.face_value(),
            market_value: bond.market_value(),
            payment_term: bond.payment_term(),
        })
    }
}
