//! # Bondval Analytics
//!
//! Yield and duration analytics for fixed-rate bonds.
//!
//! - **Yields**: closed-form YTM approximation in basis points
//! - **Risk**: Macaulay and modified duration
//! - **Analyzer**: the per-bond pipeline YTM → Macaulay → modified
//!
//! ## Architecture
//!
//! `bondval-analytics` depends on `bondval-bonds` for the bond terms and
//! schedule arithmetic, but `bondval-bonds` does NOT depend on this crate.
//!
//! ## Usage
//!
//! ```rust
//! use bondval_analytics::prelude::*;
//! use bondval_bonds::BondBuilder;
//! use bondval_core::{Date, PaymentTerm};
//!
//! let bond = BondBuilder::new()
//!     .isin("US0378331005")
//!     .issue_date(Date::from_ymd(2020, 1, 1).unwrap())
//!     .maturity_date(Date::from_ymd(2030, 1, 1).unwrap())
//!     .coupon_rate_bps(600)
//!     .face_value(100_000)
//!     .market_value(105_000)
//!     .payment_term(PaymentTerm::SemiAnnual)
//!     .build()
//!     .unwrap();
//!
//! let analysis = BondAnalyzer::analyze(&bond, Date::from_ymd(2025, 1, 1).unwrap()).unwrap();
//! assert!(analysis.ytm_bps < 600.0);
//! assert!(analysis.modified_duration < analysis.macaulay_duration);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod analyzer;
pub mod error;
pub mod risk;
pub mod yields;

pub use analyzer::{BondAnalysis, BondAnalyzer};
pub use error::{AnalyticsError, AnalyticsResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::analyzer::{BondAnalysis, BondAnalyzer};
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::risk::{modified_from_macaulay, DurationCalculator};
    pub use crate::yields::YtmApproximator;
}
