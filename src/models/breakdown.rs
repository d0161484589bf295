use rust_decimal::Decimal;

/// The computed split for one month.
///
/// Snapshotted into the ledger at registration time and never recomputed
/// from inputs on read, so historical shares stay stable even if the
/// formulas change later.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseBreakdown {
    /// water + electricity + rent + gas
    pub basic_total: Decimal,
    /// basic_total + connectivity
    pub full_total: Decimal,
    pub streaming_total: Decimal,
    pub streaming_half: Decimal,
    /// 60% of full_total
    pub share_majority: Decimal,
    /// 40% of full_total
    pub share_minority: Decimal,
    /// share_majority minus the streaming cross-charge
    pub share_majority_adjusted: Decimal,
}
