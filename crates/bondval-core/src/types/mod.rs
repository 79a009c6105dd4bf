//! Core domain types.

mod cashflow;
mod date;
mod payment_term;

pub use cashflow::{CashFlow, CashFlowKind};
pub use date::Date;
pub use payment_term::PaymentTerm;
