//! Portfolio-level analytics.
//!
//! All functions are pure: they take holdings and configuration as input
//! and return computed results.

mod parallel;
mod risk;

pub use parallel::*;
pub use risk::*;
