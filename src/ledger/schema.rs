/// Back-fill marker for columns an older ledger file predates. An empty
/// field means "not tracked that month", which is not the same as 0.00.
pub(crate) const ABSENT: &str = "";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ColumnKind {
    /// "YYYY-MM" label
    Period,
    /// Decimal amount, persisted with two fractional digits
    Amount,
}

pub(crate) struct Column {
    pub(crate) name: &'static str,
    pub(crate) kind: ColumnKind,
    pub(crate) migration_default: &'static str,
}

/// Kind of a named column, for display alignment. Columns carried over
/// from an older file that the canonical set no longer names are amounts.
pub(crate) fn kind_of(name: &str) -> ColumnKind {
    CANONICAL
        .iter()
        .find(|c| c.name == name)
        .map(|c| c.kind)
        .unwrap_or(ColumnKind::Amount)
}

const fn amount(name: &'static str) -> Column {
    Column {
        name,
        kind: ColumnKind::Amount,
        migration_default: ABSENT,
    }
}

pub(crate) const CURRENT_VERSION: u32 = 2;

/// The authoritative column set, in persisted order.
///
/// v1 lacked `gas`, `share_majority` and `share_minority`; loading a v1
/// file back-fills them with the absent marker for every existing row.
pub(crate) const CANONICAL: &[Column] = &[
    Column {
        name: "period",
        kind: ColumnKind::Period,
        migration_default: ABSENT,
    },
    amount("water"),
    amount("electricity"),
    amount("rent"),
    amount("connectivity"),
    amount("gas"),
    amount("basic_total"),
    amount("full_total"),
    amount("streaming_total"),
    amount("streaming_half"),
    amount("share_majority"),
    amount("share_minority"),
    amount("share_majority_adjusted"),
];

pub(crate) fn column_names() -> Vec<String> {
    CANONICAL.iter().map(|c| c.name.to_string()).collect()
}

/// Additive-only migration of a parsed table onto the canonical schema.
///
/// Canonical columns missing from `header` are added with their migration
/// default; columns the canonical set no longer names are preserved after
/// the canonical ones rather than dropped, so no data is silently lost.
pub(crate) fn migrate(
    header: &[String],
    rows: Vec<Vec<String>>,
) -> (Vec<String>, Vec<Vec<String>>) {
    let mut columns = column_names();
    for name in header {
        if !columns.iter().any(|c| c == name) {
            columns.push(name.clone());
        }
    }

    let migrated = rows
        .into_iter()
        .map(|row| {
            columns
                .iter()
                .map(|name| match header.iter().position(|h| h == name) {
                    Some(idx) => row.get(idx).cloned().unwrap_or_else(|| ABSENT.to_string()),
                    None => CANONICAL
                        .iter()
                        .find(|c| c.name == name)
                        .map(|c| c.migration_default.to_string())
                        .unwrap_or_else(|| ABSENT.to_string()),
                })
                .collect()
        })
        .collect();

    (columns, migrated)
}
