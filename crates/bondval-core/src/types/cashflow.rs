//! Cash flow produced for a single valuation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;

/// What a cash flow pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CashFlowKind {
    /// Regular coupon payment
    Coupon,
    /// Principal repayment at maturity (zero-coupon bonds)
    Principal,
    /// Final coupon with principal folded in
    CouponAndPrincipal,
}

impl fmt::Display for CashFlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CashFlowKind::Coupon => "Coupon",
            CashFlowKind::Principal => "Principal",
            CashFlowKind::CouponAndPrincipal => "Coupon+Principal",
        };
        write!(f, "{name}")
    }
}

/// A future payment, positioned relative to the valuation date.
///
/// `days_from_valuation` is the calendar-day distance from the valuation
/// date to the payment date and is never negative: a payment falling on
/// the valuation date itself has distance 0 and is still owed to the holder.
/// `amount` is in cents.
///
/// # Example
///
/// ```rust
/// use bondval_core::types::{CashFlow, Date};
/// use rust_decimal_macros::dec;
///
/// let cf = CashFlow::coupon(Date::from_ymd(2025, 7, 1).unwrap(), 181, dec!(3000));
/// let last = cf.with_principal(dec!(100000));
/// assert_eq!(last.amount(), dec!(103000));
/// assert!(last.is_principal());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlow {
    date: Date,
    days_from_valuation: i64,
    amount: Decimal,
    kind: CashFlowKind,
}

impl CashFlow {
    /// Creates a new cash flow.
    #[must_use]
    pub fn new(date: Date, days_from_valuation: i64, amount: Decimal, kind: CashFlowKind) -> Self {
        debug_assert!(days_from_valuation >= 0, "cash flow lies before valuation date");
        Self {
            date,
            days_from_valuation,
            amount,
            kind,
        }
    }

    /// Creates a coupon cash flow.
    #[must_use]
    pub fn coupon(date: Date, days_from_valuation: i64, amount: Decimal) -> Self {
        Self::new(date, days_from_valuation, amount, CashFlowKind::Coupon)
    }

    /// Creates a principal-only cash flow.
    #[must_use]
    pub fn principal(date: Date, days_from_valuation: i64, amount: Decimal) -> Self {
        Self::new(date, days_from_valuation, amount, CashFlowKind::Principal)
    }

    /// Returns this coupon with `principal` added to its amount.
    #[must_use]
    pub fn with_principal(self, principal: Decimal) -> Self {
        Self {
            amount: self.amount + principal,
            kind: CashFlowKind::CouponAndPrincipal,
            ..self
        }
    }

    /// Payment date.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// Calendar days from the valuation date to the payment date.
    #[must_use]
    pub fn days_from_valuation(&self) -> i64 {
        self.days_from_valuation
    }

    /// Amount in cents.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// What the cash flow pays.
    #[must_use]
    pub fn kind(&self) -> CashFlowKind {
        self.kind
    }

    /// Returns true if principal is repaid by this cash flow.
    #[must_use]
    pub fn is_principal(&self) -> bool {
        matches!(
            self.kind,
            CashFlowKind::Principal | CashFlowKind::CouponAndPrincipal
        )
    }
}

impl fmt::Display for CashFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (+{}d): {} [{}]",
            self.date, self.days_from_valuation, self.amount, self.kind
        )
    }
}
