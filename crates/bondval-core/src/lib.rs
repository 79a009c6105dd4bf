//! # Bondval Core
//!
//! Core types for the Bondval fixed-rate bond valuation engine.
//!
//! This crate provides the building blocks shared by every valuation component:
//!
//! - **Types**: [`Date`], [`PaymentTerm`] and the [`CashFlow`] produced per valuation call
//! - **Errors**: [`CoreError`] for invalid dates and unrecognised payment-term labels
//!
//! ## Example
//!
//! ```rust
//! use bondval_core::prelude::*;
//!
//! let issue = Date::from_ymd(2020, 1, 1).unwrap();
//! let term: PaymentTerm = "semiannual".parse().unwrap();
//! assert_eq!(term.months_per_period(), 6);
//! assert_eq!(issue.add_months(6).unwrap(), Date::from_ymd(2020, 7, 1).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{CashFlow, CashFlowKind, Date, PaymentTerm};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{CashFlow, CashFlowKind, Date, PaymentTerm};
