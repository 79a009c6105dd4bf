//! Market-value weighted risk aggregation.

use crate::analytics::parallel::maybe_parallel_fold;
use crate::error::{PortfolioError, PortfolioResult};
use crate::types::{AnalyticsConfig, PortfolioHolding};

/// Sum of `market_value × quantity` over all holdings, in cents.
///
/// # Errors
///
/// Returns `ValueOverflow` if the total does not fit in `u64`.
pub fn total_portfolio_value(holdings: &[PortfolioHolding]) -> PortfolioResult<u64> {
    holdings.iter().try_fold(0u64, |total, h| {
        total
            .checked_add(h.total_market_value())
            .ok_or_else(|| PortfolioError::value_overflow("total portfolio value"))
    })
}

/// Market-value weighted Macaulay duration.
///
/// Returns 0.0 when the portfolio has no market value.
pub fn weighted_macaulay_duration(holdings: &[PortfolioHolding], config: &AnalyticsConfig) -> f64 {
    weighted_metric(holdings, config, |h| h.analysis().macaulay_duration)
}

/// Market-value weighted modified duration.
///
/// Returns 0.0 when the portfolio has no market value.
pub fn weighted_modified_duration(holdings: &[PortfolioHolding], config: &AnalyticsConfig) -> f64 {
    weighted_metric(holdings, config, |h| h.analysis().modified_duration)
}

/// Share of `total_value` held in a position worth `holding_value`.
///
/// Returns 0.0 if either value is zero.
pub fn bond_weight(holding_value: u64, total_value: u64) -> f64 {
    if total_value == 0 || holding_value == 0 {
        return 0.0;
    }
    holding_value as f64 / total_value as f64
}

/// Internal helper to calculate the market-value weighted average of a metric.
fn weighted_metric<F>(holdings: &[PortfolioHolding], config: &AnalyticsConfig, get_value: F) -> f64
where
    F: Fn(&PortfolioHolding) -> f64 + Sync + Send,
{
    let (sum_weighted, sum_weights) = maybe_parallel_fold(
        holdings,
        config,
        (0.0_f64, 0.0_f64),
        |(sum_w, sum_wt), h| {
            let weight = h.total_market_value() as f64;
            (sum_w + get_value(h) * weight, sum_wt + weight)
        },
        |(a, b), (c, d)| (a + c, b + d),
    );

    if sum_weights > 0.0 {
        sum_weighted / sum_weights
    } else {
        0.0
    }
}
