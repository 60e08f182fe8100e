//! Custom Test Assertions
//!
//! Assertion helpers that say which figure failed to reconcile and by how
//! much.

use core_kernel::Money;
use domain_bills::BillCalculation;
use domain_rent::{PeriodOutput, RentOutput, RECONCILIATION_TOLERANCE};
use rust_decimal::Decimal;

/// Asserts that two Money values are approximately equal within a tolerance
///
/// # Panics
///
/// Panics if the amounts differ by more than tolerance
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "Money amounts differ by more than tolerance: \
         actual={}, expected={}, diff={}, tolerance={}",
        actual.amount(),
        expected.amount(),
        diff,
        tolerance
    );
}

/// Asserts that money values sum to a total within the reconciliation
/// tolerance
pub fn assert_money_sums_to(parts: &[Money], total: &Money) {
    let sum: Money = parts.iter().sum();
    assert_money_approx_eq(&sum, total, RECONCILIATION_TOLERANCE);
}

/// Asserts that a period's adjusted totals add up to its share of rent, and
/// that each adjusted total is its subtotal less the per-person overage
pub fn assert_period_reconciles(period: &PeriodOutput) {
    assert_eq!(
        period.resident_subtotals.len(),
        period.resident_adjusted_totals.len(),
        "Period {} lost or gained residents during reconciliation",
        period.range
    );

    let adjusted_totals = &period.resident_adjusted_totals;
    for (subtotal, adjusted) in period.resident_subtotals.iter().zip(adjusted_totals) {
        assert_eq!(
            subtotal.resident, adjusted.resident,
            "Resident order changed in {}",
            period.range
        );
        assert_money_approx_eq(
            &adjusted.cost,
            &(subtotal.cost - period.overage_per_person),
            RECONCILIATION_TOLERANCE,
        );
    }

    let adjusted_sum = period.adjusted_sum().expect("adjusted totals overflowed");
    assert_money_approx_eq(&adjusted_sum, &period.period_cost, RECONCILIATION_TOLERANCE);
}

/// Asserts that every period reconciles and the month totals add up to the
/// month's rent
pub fn assert_month_conserves(output: &RentOutput, total_rent: &Money) {
    for period in &output.periods {
        assert_period_reconciles(period);
    }

    let days: u32 = output.periods.iter().map(|p| p.days_in_period).sum();
    assert_eq!(
        days,
        output.month.days_in_month(),
        "Periods of {} do not cover the month",
        output.month
    );

    assert_money_approx_eq(&output.month_totals.sum(), total_rent, RECONCILIATION_TOLERANCE);
}

/// Asserts that a bill is fully assigned, per period and overall
pub fn assert_bill_conserves(calculation: &BillCalculation) {
    let days: u32 = calculation.periods.iter().map(|p| p.num_days()).sum();
    assert_eq!(
        days,
        calculation.num_days(),
        "Periods of bill '{}' do not cover its days",
        calculation.bill.name
    );

    for period in &calculation.periods {
        let shares: Vec<Money> = period
            .roommates
            .iter()
            .map(|_| period.amount_per_person())
            .collect();
        assert_money_sums_to(&shares, &period.amount);
    }

    let assigned = calculation.total_assigned().expect("roommate totals overflowed");
    assert_money_approx_eq(&assigned, &calculation.bill.amount, RECONCILIATION_TOLERANCE);
}
