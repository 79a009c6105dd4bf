//! Portfolio of analyzed bond holdings.

use log::{debug, warn};
use serde::Serialize;
use uuid::Uuid;

use bondval_bonds::Bond;
use bondval_core::Date;

use crate::analytics::{
    bond_weight, maybe_parallel_map, total_portfolio_value, weighted_macaulay_duration,
    weighted_modified_duration,
};
use crate::error::{PortfolioError, PortfolioResult};
use crate::types::{AnalyticsConfig, PortfolioHolding};

/// A collection of bond holdings for one account, valued on a single date.
///
/// Every holding carries its own valuation. Holding weights are kept
/// consistent with the total market value: adding bonds re-weights every
/// holding, not only the new ones.
#[derive(Debug, Clone)]
pub struct Portfolio {
    id: Uuid,
    account_id: String,
    valuation_date: Date,
    holdings: Vec<PortfolioHolding>,
}

/// Aggregated portfolio results.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioAnalysis {
    /// Portfolio identifier.
    pub id: Uuid,
    /// Owning account.
    pub account_id: String,
    /// Holdings with their valuations and weights.
    pub bonds: Vec<PortfolioHolding>,
    /// Market-value weighted Macaulay duration in years.
    pub weighted_macaulay_duration: f64,
    /// Market-value weighted modified duration in years.
    pub weighted_modified_duration: f64,
    /// Sum of `market_value × quantity`, in cents.
    pub total_portfolio_value: u64,
}

impl Portfolio {
    /// Creates an empty portfolio with a fresh random id.
    #[must_use]
    pub fn new(account_id: impl Into<String>, valuation_date: Date) -> Self {
        Self::with_id(Uuid::new_v4(), account_id, valuation_date)
    }

    /// Creates an empty portfolio with a given id.
    #[must_use]
    pub fn with_id(id: Uuid, account_id: impl Into<String>, valuation_date: Date) -> Self {
        Self {
            id,
            account_id: account_id.into(),
            valuation_date,
            holdings: Vec::new(),
        }
    }

    /// Values `bonds` into a new portfolio and aggregates the results.
    ///
    /// # Errors
    ///
    /// Returns `BondAnalysisFailed` for the first bond (in input order)
    /// that cannot be valued.
    pub fn analyze(
        account_id: impl Into<String>,
        bonds: &[Bond],
        valuation_date: Date,
        config: &AnalyticsConfig,
    ) -> PortfolioResult<PortfolioAnalysis> {
        let mut portfolio = Self::new(account_id, valuation_date);
        portfolio.add_bonds(bonds, config)?;
        portfolio.analysis(config)
    }

    /// Portfolio identifier.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Owning account.
    #[must_use]
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// Date every holding is valued on.
    #[must_use]
    pub fn valuation_date(&self) -> Date {
        self.valuation_date
    }

    /// Holdings in insertion order.
    #[must_use]
    pub fn holdings(&self) -> &[PortfolioHolding] {
        &self.holdings
    }

    /// Values and adds one bond, then re-weights all holdings.
    ///
    /// On error the portfolio is unchanged.
    pub fn add_bond(&mut self, bond: Bond) -> PortfolioResult<()> {
        let holding = Self::value(bond, self.valuation_date)?;
        self.insert(vec![holding])
    }

    /// Values and adds several bonds, then re-weights all holdings.
    ///
    /// Valuation runs in parallel when `config` allows it. Nothing is added
    /// unless every bond can be valued.
    pub fn add_bonds(&mut self, bonds: &[Bond], config: &AnalyticsConfig) -> PortfolioResult<()> {
        let valuation_date = self.valuation_date;
        let holdings = maybe_parallel_map(bonds, config, |bond| {
            Self::value(bond.clone(), valuation_date)
        })
        .into_iter()
        .collect::<PortfolioResult<Vec<_>>>()?;

        self.insert(holdings)
    }

    /// Sum of `market_value × quantity` over all holdings, in cents.
    pub fn total_portfolio_value(&self) -> PortfolioResult<u64> {
        total_portfolio_value(&self.holdings)
    }

    /// Market-value weighted Macaulay duration; 0.0 for an empty portfolio.
    pub fn weighted_macaulay_duration(&self, config: &AnalyticsConfig) -> f64 {
        weighted_macaulay_duration(&self.holdings, config)
    }

    /// Market-value weighted modified duration; 0.0 for an empty portfolio.
    pub fn weighted_modified_duration(&self, config: &AnalyticsConfig) -> f64 {
        weighted_modified_duration(&self.holdings, config)
    }

    /// Aggregates the current holdings.
    pub fn analysis(&self, config: &AnalyticsConfig) -> PortfolioResult<PortfolioAnalysis> {
        let analysis = PortfolioAnalysis {
            id: self.id,
            account_id: self.account_id.clone(),
            bonds: self.holdings.clone(),
            weighted_macaulay_duration: self.weighted_macaulay_duration(config),
            weighted_modified_duration: self.weighted_modified_duration(config),
            total_portfolio_value: self.total_portfolio_value()?,
        };

        debug!(
            "portfolio {} ({}): {} holdings, value {}, Macaulay {:.6}, modified {:.6}",
            self.id,
            self.account_id,
            analysis.bonds.len(),
            analysis.total_portfolio_value,
            analysis.weighted_macaulay_duration,
            analysis.weighted_modified_duration
        );

        Ok(analysis)
    }

    fn value(bond: Bond, valuation_date: Date) -> PortfolioResult<PortfolioHolding> {
        let isin = bond.isin().to_string();
        PortfolioHolding::new(bond, valuation_date).map_err(|err| {
            warn!("bond {isin} not added to portfolio: {err}");
            match err {
                PortfolioError::Analytics(source) => PortfolioError::bond_analysis_failed(isin, source),
                other => other,
            }
        })
    }

    fn insert(&mut self, holdings: Vec<PortfolioHolding>) -> PortfolioResult<()> {
        let added = total_portfolio_value(&holdings)?;
        let total = self
            .total_portfolio_value()?
            .checked_add(added)
            .ok_or_else(|| PortfolioError::value_overflow("total portfolio value"))?;

        self.holdings.extend(holdings);
        for holding in &mut self.holdings {
            holding.set_weight(bond_weight(holding.total_market_value(), total));
        }
        Ok(())
    }
}
