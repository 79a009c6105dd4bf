//! Error types for portfolio operations.

use thiserror::Error;

use bondval_analytics::AnalyticsError;

/// Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur during portfolio operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PortfolioError {
    /// A bond could not be valued; the portfolio is left unchanged.
    #[error("Analysis failed for bond {isin}: {source}")]
    BondAnalysisFailed {
        /// ISIN of the failing bond.
        isin: String,
        /// The underlying valuation error.
        #[source]
        source: AnalyticsError,
    },

    /// Valuation error not tied to a specific holding.
    #[error("Analytics error: {0}")]
    Analytics(#[from] AnalyticsError),

    /// A market value total does not fit in 64-bit cents.
    #[error("Market value overflow: {context}")]
    ValueOverflow {
        /// What was being totalled.
        context: String,
    },

    /// The analytics configuration could not be read.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// Why the configuration was rejected.
        reason: String,
    },
}

impl PortfolioError {
    /// Creates a bond analysis error.
    #[must_use]
    pub fn bond_analysis_failed(isin: impl Into<String>, source: AnalyticsError) -> Self {
        Self::BondAnalysisFailed {
            isin: isin.into(),
            source,
        }
    }

    /// Creates an overflow error.
    #[must_use]
    pub fn value_overflow(context: impl Into<String>) -> Self {
        Self::ValueOverflow {
            context: context.into(),
        }
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}
