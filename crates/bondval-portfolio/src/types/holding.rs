//! A bond held in a portfolio together with its valuation.

use serde::Serialize;

use bondval_analytics::{BondAnalysis, BondAnalyzer};
use bondval_bonds::Bond;
use bondval_core::Date;

use crate::error::{PortfolioError, PortfolioResult};

/// An analyzed bond position.
///
/// `weight` is the holding's share of the portfolio market value and is
/// maintained by [`Portfolio`](crate::Portfolio); a standalone holding has
/// weight 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioHolding {
    #[serde(skip)]
    bond: Bond,
    #[serde(flatten)]
    analysis: BondAnalysis,
    quantity: u64,
    total_market_value: u64,
    #[serde(rename = "bondWeightInPortfolio")]
    weight: f64,
}

impl PortfolioHolding {
    /// Values `bond` as of `valuation_date`.
    ///
    /// # Errors
    ///
    /// Valuation failures surface as `PortfolioError::Analytics`; a
    /// `market_value × quantity` beyond `u64` cents as `ValueOverflow`.
    pub fn new(bond: Bond, valuation_date: Date) -> PortfolioResult<Self> {
        let total_market_value = bond
            .total_market_value()
            .ok_or_else(|| PortfolioError::value_overflow(format!("holding {}", bond.isin())))?;
        let analysis = BondAnalyzer::analyze(&bond, valuation_date)?;

        Ok(Self {
            quantity: bond.quantity(),
            bond,
            analysis,
            total_market_value,
            weight: 0.0,
        })
    }

    /// The bond terms.
    #[must_use]
    pub fn bond(&self) -> &Bond {
        &self.bond
    }

    /// Per-bond valuation.
    #[must_use]
    pub fn analysis(&self) -> &BondAnalysis {
        &self.analysis
    }

    /// Number of bonds held.
    #[must_use]
    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// `market_value × quantity`, in cents.
    #[must_use]
    pub fn total_market_value(&self) -> u64 {
        self.total_market_value
    }

    /// Share of the portfolio market value.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub(crate) fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PortfolioError;
    use bondval_analytics::AnalyticsError;
    use bondval_bonds::BondBuilder;
    use bondval_core::PaymentTerm;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn bond(market: u64, quantity: u64) -> Bond {
        BondBuilder::new()
            .isin("US0378331005")
            .issue_date(date(2020, 1, 1))
            .maturity_date(date(2030, 1, 1))
            .coupon_rate_bps(600)
            .face_value(100_000)
            .market_value(market)
            .payment_term(PaymentTerm::SemiAnnual)
            .quantity(quantity)
            .build()
            .unwrap()
    }

    #[test]
    fn test_new_holding() {
        let holding = PortfolioHolding::new(bond(101_000, 4), date(2025, 1, 1)).unwrap();

        assert_eq!(holding.quantity(), 4);
        assert_eq!(holding.total_market_value(), 404_000);
        assert_eq!(holding.weight(), 0.0);
        assert_eq!(holding.analysis().market_value, 101_000);
    }

    #[test]
    fn test_overflow() {
        let err = PortfolioHolding::new(bond(u64::MAX, 2), date(2025, 1, 1)).unwrap_err();
        assert!(matches!(err, PortfolioError::ValueOverflow { .. }));
    }

    #[test]
    fn test_valuation_failure() {
        let err = PortfolioHolding::new(bond(100_000, 1), date(2030, 1, 1)).unwrap_err();
        assert!(matches!(
            err,
            PortfolioError::Analytics(AnalyticsError::YtmNotMeaningful { .. })
        ));
    }

    #[test]
    fn test_serializes_flat() {
        let holding = PortfolioHolding::new(bond(100_000, 2), date(2025, 1, 1)).unwrap();
        let json = serde_json::to_value(&holding).unwrap();

        assert_eq!(json["isin"], "US0378331005");
        assert_eq!(json["quantity"], 2);
        assert_eq!(json["totalMarketValue"], 200_000);
        assert_eq!(json["bondWeightInPortfolio"], 0.0);
        assert!(json.get("bond").is_none());
    }
}
