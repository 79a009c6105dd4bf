//! Coupon payment term.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// How often a bond pays its coupon.
///
/// Every term divides the year into a whole number of calendar months,
/// which is what keeps payment dates anchored to the issue date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentTerm {
    /// One payment per year.
    Annual,
    /// Two payments per year.
    #[default]
    SemiAnnual,
    /// Four payments per year.
    Quarterly,
    /// Twelve payments per year.
    Monthly,
}

impl PaymentTerm {
    /// All supported terms, shortest periods last.
    pub const ALL: [PaymentTerm; 4] = [
        PaymentTerm::Annual,
        PaymentTerm::SemiAnnual,
        PaymentTerm::Quarterly,
        PaymentTerm::Monthly,
    ];

    /// Returns the number of periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            PaymentTerm::Annual => 1,
            PaymentTerm::SemiAnnual => 2,
            PaymentTerm::Quarterly => 4,
            PaymentTerm::Monthly => 12,
        }
    }

    /// Returns the number of calendar months per period.
    #[must_use]
    pub fn months_per_period(&self) -> u32 {
        12 / self.periods_per_year()
    }

    /// Returns the lowercase label used on the wire.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PaymentTerm::Annual => "annual",
            PaymentTerm::SemiAnnual => "semiannual",
            PaymentTerm::Quarterly => "quarterly",
            PaymentTerm::Monthly => "monthly",
        }
    }
}

impl FromStr for PaymentTerm {
    type Err = CoreError;

    /// Parses a label case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "annual" => Ok(PaymentTerm::Annual),
            "semiannual" | "semi-annual" => Ok(PaymentTerm::SemiAnnual),
            "quarterly" => Ok(PaymentTerm::Quarterly),
            "monthly" => Ok(PaymentTerm::Monthly),
            _ => Err(CoreError::invalid_payment_term(s)),
        }
    }
}

impl fmt::Display for PaymentTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaymentTerm::Annual => "Annual",
            PaymentTerm::SemiAnnual => "Semi-Annual",
            PaymentTerm::Quarterly => "Quarterly",
            PaymentTerm::Monthly => "Monthly",
        };
        write!(f, "{name}")
    }
}
