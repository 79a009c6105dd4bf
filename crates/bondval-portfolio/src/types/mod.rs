//! Core portfolio types.

mod config;
mod holding;

pub use config::AnalyticsConfig;
pub use holding::PortfolioHolding;
