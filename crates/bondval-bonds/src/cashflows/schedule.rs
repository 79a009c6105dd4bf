//! Payment schedule arithmetic.
//!
//! Coupon dates are anchored to the issue date: the k-th payment date is
//! `issue + k × months_per_period` calendar months (k ≥ 1), each computed
//! from the issue date rather than from the previous payment, so a
//! month-end issue date does not drift after passing through February.
//! The issue date itself is not a payment date.
//!
//! Every function here answers "is this date a payment date?" the same way:
//! a payment falling on the as-of date is still outstanding. Concretely, on
//! a payment date `d`:
//!
//! - `next_payment_date(d) == d`
//! - `remaining_periods(d)` counts the payment on `d`
//! - `fractional_period(d) == 1.0` (the period ending on `d` has fully elapsed)
//!
//! so `remaining_periods - fractional_period` is the exact number of periods
//! left until maturity on payment dates and on the issue date.

use bondval_core::types::{Date, PaymentTerm};

use crate::error::{BondError, BondResult};

/// Payment schedule calculator.
///
/// Stateless; all functions take the issue date and payment term explicitly.
pub struct PaymentSchedule;

impl PaymentSchedule {
    /// Returns the `index`-th payment date (`index` 0 is the issue date).
    pub fn payment_date(issue_date: Date, index: u32, term: PaymentTerm) -> BondResult<Date> {
        let months = i64::from(index) * i64::from(term.months_per_period());
        let months = i32::try_from(months).map_err(|_| {
            BondError::invalid_spec(format!("payment index {index} is out of range"))
        })?;
        Ok(issue_date.add_months(months)?)
    }

    /// Returns the first payment date on or after `as_of`.
    ///
    /// If `as_of` is itself a payment date it is returned unchanged. For any
    /// `as_of` on or before the issue date this is the first coupon date.
    pub fn next_payment_date(issue_date: Date, as_of: Date, term: PaymentTerm) -> BondResult<Date> {
        let index = Self::next_payment_index(issue_date, as_of, term)?;
        Self::payment_date(issue_date, index, term)
    }

    /// Returns the payment date one period before [`next_payment_date`].
    ///
    /// This is the issue date while the first coupon period is running.
    ///
    /// [`next_payment_date`]: PaymentSchedule::next_payment_date
    pub fn previous_payment_date(
        issue_date: Date,
        as_of: Date,
        term: PaymentTerm,
    ) -> BondResult<Date> {
        let index = Self::next_payment_index(issue_date, as_of, term)?;
        Self::payment_date(issue_date, index - 1, term)
    }

    /// Returns true if `date` is a scheduled payment date.
    pub fn is_payment_date(issue_date: Date, date: Date, term: PaymentTerm) -> BondResult<bool> {
        if date <= issue_date {
            return Ok(false);
        }
        Ok(Self::next_payment_date(issue_date, date, term)? == date)
    }

    /// Counts the payment dates in `[as_of, maturity_date]`.
    ///
    /// # Errors
    ///
    /// Returns `BondError::MaturedBond` if `maturity_date` is before `as_of`.
    pub fn remaining_periods(
        as_of: Date,
        issue_date: Date,
        maturity_date: Date,
        term: PaymentTerm,
    ) -> BondResult<u32> {
        if maturity_date < as_of {
            return Err(BondError::MaturedBond {
                maturity: maturity_date,
                valuation: as_of,
            });
        }

        let mut index = Self::next_payment_index(issue_date, as_of, term)?;
        let mut count = 0;
        while Self::payment_date(issue_date, index, term)? <= maturity_date {
            count += 1;
            index += 1;
        }
        Ok(count)
    }

    /// Fraction of the current coupon period that has elapsed at `as_of`.
    ///
    /// `days(prev, as_of) / days(prev, next)` where `next` is the next payment
    /// date and `prev` the date one period earlier. The result lies in
    /// `[0, 1]`: 0 on the issue date and 1 on a payment date.
    ///
    /// # Errors
    ///
    /// Returns `BondError::ValuationBeforeIssue` if `as_of` precedes the
    /// issue date, since no coupon period is running yet.
    pub fn fractional_period(issue_date: Date, as_of: Date, term: PaymentTerm) -> BondResult<f64> {
        if as_of < issue_date {
            return Err(BondError::ValuationBeforeIssue {
                issue: issue_date,
                valuation: as_of,
            });
        }

        let index = Self::next_payment_index(issue_date, as_of, term)?;
        let next = Self::payment_date(issue_date, index, term)?;
        let prev = Self::payment_date(issue_date, index - 1, term)?;

        let elapsed = prev.days_between(&as_of);
        let period = prev.days_between(&next);
        Ok(elapsed as f64 / period as f64)
    }

    /// Returns every payment date after the issue date up to and including
    /// `maturity_date`.
    pub fn payment_dates(
        issue_date: Date,
        maturity_date: Date,
        term: PaymentTerm,
    ) -> BondResult<Vec<Date>> {
        let mut dates = Vec::new();
        let mut index = 1;
        loop {
            let date = Self::payment_date(issue_date, index, term)?;
            if date > maturity_date {
                break;
            }
            dates.push(date);
            index += 1;
        }
        Ok(dates)
    }

    /// Index `k ≥ 1` of the first payment date not before `as_of`.
    pub(crate) fn next_payment_index(issue_date: Date, as_of: Date, term: PaymentTerm) -> BondResult<u32> {
        let months_per_period = i64::from(term.months_per_period());
        let months_elapsed = i64::from(as_of.year() - issue_date.year()) * 12
            + i64::from(as_of.month())
            - i64::from(issue_date.month());

        // Start from the calendar-month estimate, then settle on the exact index.
        let estimate = (months_elapsed / months_per_period).max(1);
        let mut index = u32::try_from(estimate).map_err(|_| {
            BondError::invalid_spec(format!("as-of date {as_of} is out of range"))
        })?;

        while index > 1 && Self::payment_date(issue_date, index - 1, term)? >= as_of {
            index -= 1;
        }
        while Self::payment_date(issue_date, index, term)? < as_of {
            index += 1;
        }
        Ok(index)
    }
}
