mod breakdown;
mod expense_input;
mod record;

pub use breakdown::ExpenseBreakdown;
pub use expense_input::{parse_amount, ExpenseInput};
pub use record::LedgerRecord;
