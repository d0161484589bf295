use rust_decimal::Decimal;

use crate::models::{ExpenseBreakdown, ExpenseInput};

/// Compute the monthly split for a set of raw amounts.
///
/// Pure and total: any non-negative input yields a breakdown, an all-zero
/// input yields an all-zero breakdown. The full total (base categories plus
/// connectivity) is split 60/40 between the two flatmates, and half of the
/// streaming subscriptions is cross-charged against the majority share.
pub(crate) fn compute(input: &ExpenseInput) -> ExpenseBreakdown {
    let basic_total = input.water + input.electricity + input.rent + input.gas;
    let full_total = basic_total + input.connectivity;
    let streaming_total = input.streaming_total();
    let streaming_half = streaming_total / Decimal::TWO;
    let share_majority = full_total * Decimal::new(6, 1);
    let share_minority = full_total * Decimal::new(4, 1);
    let share_majority_adjusted = share_majority - streaming_half;

    ExpenseBreakdown {
        basic_total,
        full_total,
        streaming_total,
        streaming_half,
        share_majority,
        share_minority,
        share_majority_adjusted,
    }
}
