//! Portfolio representation and aggregation.

#[allow(clippy::module_inception)]
mod portfolio;

pub use portfolio::{Portfolio, PortfolioAnalysis};
