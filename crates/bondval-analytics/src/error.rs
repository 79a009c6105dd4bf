//! Error types for yield and duration analytics.

use rust_decimal::Decimal;
use thiserror::Error;

use bondval_bonds::BondError;
use bondval_core::Date;

/// Result type alias for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Error type for yield and duration calculations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyticsError {
    // ========== Yield Errors ==========
    /// Fewer periods remain than have elapsed in the current one.
    #[error("bond too close to maturity for YTM calculation (adjusted periods {adjusted_periods})")]
    BondTooCloseToMaturity {
        /// Remaining periods minus the elapsed fraction.
        adjusted_periods: f64,
    },

    /// The bond matures on the valuation date.
    #[error(
        "bond matures on {maturity}, YTM is not meaningful \
         (receives {receives} cents, pays {pays} cents)"
    )]
    YtmNotMeaningful {
        /// Maturity date, equal to the valuation date.
        maturity: Date,
        /// Final coupon plus face value, in cents.
        receives: Decimal,
        /// Clean market price, in cents.
        pays: u64,
    },

    /// The fractional-period adjustment moved N by more than one period.
    #[error("fractional period adjustment too large: {remaining} remaining periods, fraction {fractional}")]
    FractionalPeriodAdjustmentTooLarge {
        /// Whole periods remaining.
        remaining: u32,
        /// Elapsed fraction of the current period.
        fractional: f64,
    },

    // ========== General Errors ==========
    /// Invalid input parameter
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Bond or schedule error.
    #[error("bond error: {0}")]
    Bond(#[from] BondError),
}

impl AnalyticsError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
