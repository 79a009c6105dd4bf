//! Error types for the core crate.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by the core types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Error in date construction or date arithmetic.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Payment term label is not one of annual, semiannual, quarterly or monthly.
    #[error("Invalid payment term: {label}")]
    InvalidPaymentTerm {
        /// The label that failed to parse.
        label: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid payment term error.
    #[must_use]
    pub fn invalid_payment_term(label: impl Into<String>) -> Self {
        Self::InvalidPaymentTerm {
            label: label.into(),
        }
    }
}
