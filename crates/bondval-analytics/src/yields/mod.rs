//! Yield calculation methods.
//!
//! Only the closed-form approximation is provided:
//!
//! ```text
//! YTM per period = [C + (FV − PV) / N] / [(FV + PV) / 2]
//! ```
//!
//! with N the remaining periods reduced by the elapsed fraction of the
//! current one. The result is annualized and returned in basis points.

mod approximate;

pub use approximate::YtmApproximator;
