//! Fixed-rate coupon bond.

use rust_decimal::Decimal;
use serde::Serialize;

use bondval_core::types::{Date, PaymentTerm};

use crate::error::{BondError, BondResult};
use crate::identifiers::Isin;

/// Basis points per unit of rate.
const BPS_PER_UNIT: u32 = 10_000;

/// Decimal places kept on the per-period coupon, in cents.
const COUPON_SCALE: u32 = 10;

/// A fixed-rate coupon bond position.
///
/// Money is carried in integer cents and the coupon rate in integer basis
/// points, so the terms themselves never pick up floating-point drift.
/// `market_value` is the clean price; accrued interest is not included.
///
/// A bond is immutable once built. Yields and durations are not stored on
/// it; they are produced per valuation date by the analytics crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bond {
    isin: Isin,
    issue_date: Date,
    maturity_date: Date,
    coupon_rate_bps: u32,
    face_value: u64,
    market_value: u64,
    payment_term: PaymentTerm,
    quantity: u64,
}

impl Bond {
    /// Returns the ISIN.
    #[must_use]
    pub fn isin(&self) -> &Isin {
        &self.isin
    }

    /// Returns the issue date. Coupon dates are anchored here.
    #[must_use]
    pub fn issue_date(&self) -> Date {
        self.issue_date
    }

    /// Returns the maturity date.
    #[must_use]
    pub fn maturity_date(&self) -> Date {
        self.maturity_date
    }

    /// Returns the annual coupon rate in basis points.
    #[must_use]
    pub fn coupon_rate_bps(&self) -> u32 {
        self.coupon_rate_bps
    }

    /// Returns the face value in cents.
    #[must_use]
    pub fn face_value(&self) -> u64 {
        self.face_value
    }

    /// Returns the clean market price in cents.
    #[must_use]
    pub fn market_value(&self) -> u64 {
        self.market_value
    }

    /// Returns the payment term.
    #[must_use]
    pub fn payment_term(&self) -> PaymentTerm {
        self.payment_term
    }

    /// Returns the number of bonds held.
    #[must_use]
    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Returns true if the bond pays no coupon.
    #[must_use]
    pub fn is_zero_coupon(&self) -> bool {
        self.coupon_rate_bps == 0
    }

    /// Returns the coupon paid each period, in cents.
    ///
    /// `face_value × coupon_rate / 10000 / periods_per_year`, rounded
    /// half-even to 10 decimal places.
    /// At this scale `n` summed coupons equal `n × coupon` exactly.
    #[must_use]
    pub fn coupon_per_period(&self) -> Decimal {
        (Decimal::from(self.face_value) * Decimal::from(self.coupon_rate_bps)
            / Decimal::from(BPS_PER_UNIT)
            / Decimal::from(self.payment_term.periods_per_year()))
        .round_dp(COUPON_SCALE)
    }

    /// Market value of the whole holding (`market_value × quantity`), in cents.
    ///
    /// `None` if the product does not fit in `u64`.
    #[must_use]
    pub fn total_market_value(&self) -> Option<u64> {
        self.market_value.checked_mul(self.quantity)
    }

    /// Returns a copy of this bond with a different quantity.
    #[must_use]
    pub fn with_quantity(&self, quantity: u64) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }
}

/// Builder for [`Bond`].
///
/// # Example
///
/// ```
/// use bondval_bonds::instruments::BondBuilder;
/// use bondval_core::types::{Date, PaymentTerm};
///
/// let bond = BondBuilder::new()
///     .isin("US0378331005")
///     .issue_date(Date::from_ymd(2020, 1, 1).unwrap())
///     .maturity_date(Date::from_ymd(2030, 1, 1).unwrap())
///     .coupon_rate_bps(600)
///     .face_value(100_000)
///     .market_value(100_000)
///     .payment_term(PaymentTerm::SemiAnnual)
///     .build()
///     .unwrap();
///
/// assert_eq!(bond.quantity(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BondBuilder {
    isin: Option<String>,
    issue_date: Option<Date>,
    maturity_date: Option<Date>,
    coupon_rate_bps: Option<u32>,
    face_value: Option<u64>,
    market_value: Option<u64>,
    payment_term: Option<PaymentTerm>,
    quantity: u64,
}

impl BondBuilder {
    /// Creates a new builder. Quantity defaults to 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ISIN.
    #[must_use]
    pub fn isin(mut self, isin: impl Into<String>) -> Self {
        self.isin = Some(isin.into());
        self
    }

    /// Sets the issue date.
    #[must_use]
    pub fn issue_date(mut self, date: Date) -> Self {
        self.issue_date = Some(date);
        self
    }

    /// Sets the maturity date.
    #[must_use]
    pub fn maturity_date(mut self, date: Date) -> Self {
        self.maturity_date = Some(date);
        self
    }

    /// Sets the annual coupon rate in basis points (600 = 6%).
    #[must_use]
    pub fn coupon_rate_bps(mut self, bps: u32) -> Self {
        self.coupon_rate_bps = Some(bps);
        self
    }

    /// Sets the face value in cents.
    #[must_use]
    pub fn face_value(mut self, cents: u64) -> Self {
        self.face_value = Some(cents);
        self
    }

    /// Sets the clean market price in cents.
    #[must_use]
    pub fn market_value(mut self, cents: u64) -> Self {
        self.market_value = Some(cents);
        self
    }

    /// Sets the payment term.
    #[must_use]
    pub fn payment_term(mut self, term: PaymentTerm) -> Self {
        self.payment_term = Some(term);
        self
    }

    /// Sets the number of bonds held.
    #[must_use]
    pub fn quantity(mut self, quantity: u64) -> Self {
        self.quantity = quantity;
        self
    }

    /// Builds the bond.
    ///
    /// # Errors
    ///
    /// Returns `MissingField` for any unset term, `InvalidIsin` if the ISIN
    /// fails validation and `InvalidSpec` unless the issue date is strictly
    /// before the maturity date.
    pub fn build(self) -> BondResult<Bond> {
        let isin = self.isin.ok_or_else(|| BondError::missing_field("isin"))?;
        let issue_date = self
            .issue_date
            .ok_or_else(|| BondError::missing_field("issue_date"))?;
        let maturity_date = self
            .maturity_date
            .ok_or_else(|| BondError::missing_field("maturity_date"))?;
        let coupon_rate_bps = self
            .coupon_rate_bps
            .ok_or_else(|| BondError::missing_field("coupon_rate_bps"))?;
        let face_value = self
            .face_value
            .ok_or_else(|| BondError::missing_field("face_value"))?;
        let market_value = self
            .market_value
            .ok_or_else(|| BondError::missing_field("market_value"))?;
        let payment_term = self
            .payment_term
            .ok_or_else(|| BondError::missing_field("payment_term"))?;

        let isin = Isin::new(&isin)?;

        if issue_date >= maturity_date {
            return Err(BondError::invalid_spec(format!(
                "issue date {issue_date} must be before maturity date {maturity_date}"
            )));
        }

        Ok(Bond {
            isin,
            issue_date,
            maturity_date,
            coupon_rate_bps,
            face_value,
            market_value,
            payment_term,
            quantity: self.quantity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn builder() -> BondBuilder {
        BondBuilder::new()
            .isin("US0378331005")
            .issue_date(Date::from_ymd(2020, 1, 1).unwrap())
            .maturity_date(Date::from_ymd(2030, 1, 1).unwrap())
            .coupon_rate_bps(600)
            .face_value(100_000)
            .market_value(105_000)
            .payment_term(PaymentTerm::SemiAnnual)
    }

    #[test]
    fn test_build() {
        let bond = builder().quantity(3).build().unwrap();

        assert_eq!(bond.isin().as_str(), "US0378331005");
        assert_eq!(bond.coupon_rate_bps(), 600);
        assert_eq!(bond.face_value(), 100_000);
        assert_eq!(bond.market_value(), 105_000);
        assert_eq!(bond.payment_term(), PaymentTerm::SemiAnnual);
        assert_eq!(bond.quantity(), 3);
        assert!(!bond.is_zero_coupon());
    }

    #[test]
    fn test_coupon_per_period() {
        let bond = builder().build().unwrap();
        assert_eq!(bond.coupon_per_period(), dec!(3000));

        let monthly = builder()
            .payment_term(PaymentTerm::Monthly)
            .build()
            .unwrap();
        assert_eq!(monthly.coupon_per_period(), dec!(500));

        let odd = builder()
            .coupon_rate_bps(425)
            .face_value(100_001)
            .payment_term(PaymentTerm::Quarterly)
            .build()
            .unwrap();
        assert_eq!(odd.coupon_per_period(), dec!(1062.510625));
    }

    #[test]
    fn test_monthly_coupon_sums_consistently() {
        // 250000 × 4.75% / 12 repeats forever.
        let bond = builder()
            .coupon_rate_bps(475)
            .face_value(250_000)
            .payment_term(PaymentTerm::Monthly)
            .build()
            .unwrap();
        let coupon = bond.coupon_per_period();
        assert_eq!(coupon, dec!(989.5833333333));

        let summed: Decimal = std::iter::repeat(coupon).take(60).sum();
        assert_eq!(summed, coupon * Decimal::from(60));
    }

    #[test]
    fn test_total_market_value() {
        let bond = builder().quantity(10).build().unwrap();
        assert_eq!(bond.total_market_value(), Some(1_050_000));
        assert_eq!(bond.with_quantity(0).total_market_value(), Some(0));
    }

    #[test]
    fn test_total_market_value_overflow() {
        let bond = builder()
            .market_value(u64::MAX)
            .quantity(u64::MAX)
            .build()
            .unwrap();
        assert_eq!(bond.total_market_value(), None);
    }

    #[test]
    fn test_missing_fields() {
        let err = BondBuilder::new().build().unwrap_err();
        assert_eq!(err, BondError::missing_field("isin"));

        let err = builder().clone_without_term().build().unwrap_err();
        assert_eq!(err, BondError::missing_field("payment_term"));
    }

    #[test]
    fn test_invalid_isin_rejected() {
        let err = builder().isin("US0378331006").build().unwrap_err();
        assert!(matches!(err, BondError::InvalidIsin(_)));
    }

    #[test]
    fn test_issue_must_precede_maturity() {
        let same_day = builder()
            .maturity_date(Date::from_ymd(2020, 1, 1).unwrap())
            .build();
        assert!(matches!(same_day, Err(BondError::InvalidSpec { .. })));

        let inverted = builder()
            .issue_date(Date::from_ymd(2031, 1, 1).unwrap())
            .build();
        assert!(matches!(inverted, Err(BondError::InvalidSpec { .. })));
    }

    #[test]
    fn test_serialize_camel_case() {
        let bond = builder().build().unwrap();
        let json = serde_json::to_value(&bond).unwrap();
        assert_eq!(json["couponRateBps"], 600);
        assert_eq!(json["paymentTerm"], "semiannual");
        assert_eq!(json["maturityDate"], "2030-01-01");
    }

    impl BondBuilder {
        fn clone_without_term(mut self) -> Self {
            self.payment_term = None;
            self
        }
    }
}
