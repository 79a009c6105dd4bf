//! # Bondval Portfolio
//!
//! Portfolio aggregation for the Bondval fixed-rate bond valuation engine.
//!
//! Each bond added to a [`Portfolio`] is valued once (YTM, Macaulay and
//! modified duration) on the portfolio's valuation date. The portfolio then
//! reports:
//!
//! - **Total value**: `Σ market_value × quantity`, in cents
//! - **Weighted durations**: market-value weighted Macaulay and modified duration
//! - **Weights**: each holding's share of the total market value
//!
//! ## Quick Start
//!
//! ```rust
//! use bondval_portfolio::prelude::*;
//! use bondval_bonds::BondBuilder;
//! use bondval_core::{Date, PaymentTerm};
//!
//! let bond = BondBuilder::new()
//!     .isin("US0378331005")
//!     .issue_date(Date::from_ymd(2020, 1, 1).unwrap())
//!     .maturity_date(Date::from_ymd(2030, 1, 1).unwrap())
//!     .coupon_rate_bps(600)
//!     .face_value(100_000)
//!     .market_value(100_000)
//!     .payment_term(PaymentTerm::SemiAnnual)
//!     .quantity(10)
//!     .build()
//!     .unwrap();
//!
//! let analysis = Portfolio::analyze(
//!     "ACC-001",
//!     &[bond],
//!     Date::from_ymd(2025, 1, 1).unwrap(),
//!     &AnalyticsConfig::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(analysis.total_portfolio_value, 1_000_000);
//! assert_eq!(analysis.bonds[0].weight(), 1.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel`: value bonds and aggregate with rayon once the bond count
//!   reaches [`AnalyticsConfig::parallel_threshold`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::doc_markdown)]

pub mod analytics;
pub mod error;
pub mod portfolio;
pub mod types;

pub use error::{PortfolioError, PortfolioResult};
pub use portfolio::{Portfolio, PortfolioAnalysis};
pub use types::{AnalyticsConfig, PortfolioHolding};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::analytics::{
        bond_weight, total_portfolio_value, weighted_macaulay_duration, weighted_modified_duration,
    };
    pub use crate::error::{PortfolioError, PortfolioResult};
    pub use crate::portfolio::{Portfolio, PortfolioAnalysis};
    pub use crate::types::{AnalyticsConfig, PortfolioHolding};
}
