//! Risk analytics for fixed-rate bonds.
//!
//! - **Macaulay duration**: present-value-weighted average time to the
//!   bond's remaining cash flows, in years
//! - **Modified duration**: Macaulay duration divided by `1 + y/f`

pub mod duration;

pub use duration::{modified_from_macaulay, DurationCalculator, DAYS_PER_YEAR};
