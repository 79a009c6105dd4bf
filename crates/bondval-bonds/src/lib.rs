//! # Bondval Bonds
//!
//! Bond terms and schedule arithmetic for the Bondval valuation engine.
//!
//! This crate provides:
//!
//! - **Instruments**: the fixed-rate [`Bond`] and its [`BondBuilder`]
//! - **Schedules**: anchored payment dates, remaining periods and the
//!   fractional position within the current coupon period
//! - **Cash Flows**: future coupon and principal flows from a valuation date,
//!   plus accrued interest
//! - **Identifiers**: ISIN format and mod-10 checksum validation
//!
//! ## Example
//!
//! ```rust
//! use bondval_bonds::prelude::*;
//! use bondval_core::types::{Date, PaymentTerm};
//!
//! let bond = BondBuilder::new()
//!     .isin("US912828Z229")
//!     .issue_date(Date::from_ymd(2020, 1, 1).unwrap())
//!     .maturity_date(Date::from_ymd(2030, 1, 1).unwrap())
//!     .coupon_rate_bps(600)
//!     .face_value(100_000)
//!     .market_value(100_000)
//!     .payment_term(PaymentTerm::SemiAnnual)
//!     .build()
//!     .unwrap();
//!
//! let flows = CashFlowGenerator::generate(&bond, Date::from_ymd(2025, 1, 1).unwrap()).unwrap();
//! assert_eq!(flows.len(), 11);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::float_cmp)]

pub mod cashflows;
pub mod error;
pub mod identifiers;
pub mod instruments;

/// Prelude module for convenient imports.
pub mod prelude {
    // Cash flows
    pub use crate::cashflows::{AccruedInterestCalculator, CashFlowGenerator, PaymentSchedule};

    // Errors
    pub use crate::error::{BondError, BondResult, IdentifierError};

    // Identifiers
    pub use crate::identifiers::Isin;

    // Instruments
    pub use crate::instruments::{Bond, BondBuilder};
}

pub use error::{BondError, BondResult, IdentifierError};
pub use identifiers::Isin;
pub use instruments::{Bond, BondBuilder};
