//! Error types for bond operations.

use thiserror::Error;

use bondval_core::{CoreError, Date};

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur while building a bond or generating its schedule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BondError {
    /// The bond matured before the valuation date.
    #[error("Bond matured on {maturity}, before valuation date {valuation}")]
    MaturedBond {
        /// Maturity date.
        maturity: Date,
        /// Valuation date.
        valuation: Date,
    },

    /// Valuation date precedes the issue date, so no coupon period is running.
    #[error("Valuation date {valuation} is before issue date {issue}")]
    ValuationBeforeIssue {
        /// Issue date.
        issue: Date,
        /// Valuation date.
        valuation: Date,
    },

    /// A coupon-paying bond produced no coupon dates up to maturity.
    #[error("No cash flows generated for coupon-paying bond maturing {maturity}")]
    NoCashFlowsGenerated {
        /// Maturity date.
        maturity: Date,
    },

    /// The final coupon date does not coincide with maturity.
    #[error("Last coupon date {last_coupon} does not match maturity date {maturity}")]
    PrincipalAlignmentError {
        /// Date of the last generated coupon.
        last_coupon: Date,
        /// Maturity date.
        maturity: Date,
    },

    /// Invalid bond specification.
    #[error("Invalid bond specification: {reason}")]
    InvalidSpec {
        /// Description of what's invalid.
        reason: String,
    },

    /// Missing required field.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The missing field name.
        field: String,
    },

    /// The ISIN failed format or checksum validation.
    #[error("Invalid ISIN: {0}")]
    InvalidIsin(#[from] IdentifierError),

    /// Core library error.
    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}

impl BondError {
    /// Creates an invalid specification error.
    #[must_use]
    pub fn invalid_spec(reason: impl Into<String>) -> Self {
        Self::InvalidSpec {
            reason: reason.into(),
        }
    }

    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }
}

/// Errors from security identifier validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// Wrong number of characters.
    #[error("{id_type} must be {expected} characters, got {actual}")]
    InvalidLength {
        /// Identifier kind.
        id_type: &'static str,
        /// Expected length.
        expected: usize,
        /// Actual length.
        actual: usize,
    },

    /// Structural rule violated.
    #[error("Invalid {id_type} format: {reason}")]
    InvalidFormat {
        /// Identifier kind.
        id_type: &'static str,
        /// Which rule failed.
        reason: String,
    },

    /// Character not allowed at this position.
    #[error("Invalid character '{ch}' at position {position} in {id_type}")]
    InvalidCharacter {
        /// Identifier kind.
        id_type: &'static str,
        /// Offending character.
        ch: char,
        /// Zero-based position.
        position: usize,
    },

    /// Check digit does not match.
    #[error("Invalid {id_type} check digit: {value}")]
    InvalidCheckDigit {
        /// Identifier kind.
        id_type: &'static str,
        /// The full identifier.
        value: String,
    },
}
