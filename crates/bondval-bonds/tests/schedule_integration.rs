//! Cash flow generation checked against the payment schedule.

use bondval_bonds::prelude::*;
use bondval_core::types::{CashFlow, CashFlowKind, Date, PaymentTerm};
use rust_decimal::Decimal;

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn bond(issue: Date, maturity: Date, term: PaymentTerm) -> Bond {
    BondBuilder::new()
        .isin("DE000BAY0017")
        .issue_date(issue)
        .maturity_date(maturity)
        .coupon_rate_bps(475)
        .face_value(250_000)
        .market_value(247_500)
        .payment_term(term)
        .build()
        .unwrap()
}

#[test]
fn same_day_payment_is_treated_identically() {
    let issue = date(2022, 5, 31);
    let maturity = date(2025, 5, 31);

    for term in PaymentTerm::ALL {
        let bond = bond(issue, maturity, term);

        let mut day = issue;
        while day <= maturity {
            let flows = CashFlowGenerator::generate(&bond, day).unwrap();
            let remaining = PaymentSchedule::remaining_periods(day, issue, maturity, term).unwrap();
            let on_payment_date = PaymentSchedule::is_payment_date(issue, day, term).unwrap();

            assert_eq!(flows.len() as u32, remaining, "{term} {day}");
            assert_eq!(
                flows[0].days_from_valuation() == 0,
                on_payment_date,
                "{term} {day}"
            );
            assert_eq!(
                flows[0].date(),
                PaymentSchedule::next_payment_date(issue, day, term).unwrap()
            );

            day = day.add_days(1);
        }
    }
}

#[test]
fn flows_match_full_schedule_from_issue() {
    let issue = date(2021, 3, 15);
    let maturity = date(2026, 3, 15);

    for term in PaymentTerm::ALL {
        let bond = bond(issue, maturity, term);
        let schedule = PaymentSchedule::payment_dates(issue, maturity, term).unwrap();
        let flows = CashFlowGenerator::generate(&bond, issue).unwrap();

        assert_eq!(schedule.len() as u32, 5 * term.periods_per_year());
        let dates: Vec<Date> = flows.iter().map(CashFlow::date).collect();
        assert_eq!(dates, schedule);

        let total: Decimal = flows.iter().map(CashFlow::amount).sum();
        let expected =
            bond.coupon_per_period() * Decimal::from(schedule.len()) + Decimal::from(250_000u64);
        assert_eq!(total, expected);

        let principal: Vec<_> = flows.iter().filter(|cf| cf.is_principal()).collect();
        assert_eq!(principal.len(), 1);
        assert_eq!(principal[0].kind(), CashFlowKind::CouponAndPrincipal);
    }
}

#[test]
fn accrued_interest_resets_after_payment() {
    let bond = bond(date(2024, 1, 1), date(2027, 1, 1), PaymentTerm::Quarterly);

    let before = CashFlowGenerator::accrued_interest(&bond, date(2024, 3, 31)).unwrap();
    let on = CashFlowGenerator::accrued_interest(&bond, date(2024, 4, 1)).unwrap();
    let after = CashFlowGenerator::accrued_interest(&bond, date(2024, 4, 2)).unwrap();

    assert!(before < on);
    assert_eq!(on, bond.coupon_per_period());
    assert!(after < before);
}
