use rust_decimal::Decimal;
use std::str::FromStr;

/// Raw monthly amounts as collected from the user: one entry per base
/// expense category, plus any number of named streaming subscriptions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseInput {
    pub water: Decimal,
    pub electricity: Decimal,
    pub rent: Decimal,
    pub connectivity: Decimal,
    pub gas: Decimal,
    /// (service name, monthly cost), e.g. ("netflix", 12.00).
    pub streaming: Vec<(String, Decimal)>,
}

impl ExpenseInput {
    pub fn streaming_total(&self) -> Decimal {
        self.streaming.iter().map(|(_, amount)| *amount).sum()
    }
}

/// Interpret a raw field as a non-negative amount.
///
/// Anything that does not parse as a number counts as zero, and negative
/// values are clamped to zero. Lenient on purpose: a blank or garbled field
/// means "nothing to charge this month", never a hard failure.
pub fn parse_amount(raw: &str) -> Decimal {
    let cleaned = raw.replace(['$', '€', ','], "");
    Decimal::from_str(cleaned.trim())
        .unwrap_or(Decimal::ZERO)
        .max(Decimal::ZERO)
}
