use rust_decimal::Decimal;

use crate::models::{ExpenseBreakdown, ExpenseInput};

/// One persisted row: the period label, every input amount, and the
/// breakdown snapshotted at registration time.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerRecord {
    /// Format: "YYYY-MM"
    pub period: String,
    pub water: Decimal,
    pub electricity: Decimal,
    pub rent: Decimal,
    pub connectivity: Decimal,
    pub gas: Decimal,
    pub basic_total: Decimal,
    pub full_total: Decimal,
    pub streaming_total: Decimal,
    pub streaming_half: Decimal,
    pub share_majority: Decimal,
    pub share_minority: Decimal,
    pub share_majority_adjusted: Decimal,
}

impl LedgerRecord {
    pub fn new(period: String, input: &ExpenseInput, breakdown: &ExpenseBreakdown) -> Self {
        Self {
            period,
            water: input.water,
            electricity: input.electricity,
            rent: input.rent,
            connectivity: input.connectivity,
            gas: input.gas,
            basic_total: breakdown.basic_total,
            full_total: breakdown.full_total,
            streaming_total: breakdown.streaming_total,
            streaming_half: breakdown.streaming_half,
            share_majority: breakdown.share_majority,
            share_minority: breakdown.share_minority,
            share_majority_adjusted: breakdown.share_majority_adjusted,
        }
    }

    /// Build a record stamped with the current wall-clock month.
    pub fn for_current_month(input: &ExpenseInput, breakdown: &ExpenseBreakdown) -> Self {
        let period = chrono::Local::now().format("%Y-%m").to_string();
        Self::new(period, input, breakdown)
    }
}
