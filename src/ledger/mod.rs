pub(crate) mod schema;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::LedgerRecord;

#[derive(Debug, Error)]
pub(crate) enum LedgerError {
    /// The backing file exists but is not a readable table. No automatic
    /// repair is attempted.
    #[error("corrupt ledger file {}: {reason}", path.display())]
    Corrupt { path: PathBuf, reason: String },
    /// The write-back failed. The previous on-disk ledger is untouched, so
    /// the failed mutation is not considered applied and may be retried.
    #[error("failed to persist ledger to {}: {reason}", path.display())]
    Persistence { path: PathBuf, reason: String },
}

/// An ordered table of monthly records: one header plus one row per
/// registered month, append order = chronological order.
///
/// Rows are kept as strings aligned with `columns` rather than as typed
/// records, so columns an old file carries but the canonical schema no
/// longer names survive a load/persist round trip untouched.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Ledger {
    pub(crate) columns: Vec<String>,
    pub(crate) rows: Vec<Vec<String>>,
}

impl Ledger {
    fn with_canonical_columns() -> Self {
        Self {
            columns: schema::column_names(),
            rows: Vec::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Field by column name; `None` when the column does not exist or the
    /// value is the absent marker (back-filled by migration).
    pub(crate) fn field(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.columns.iter().position(|c| c == column)?;
        self.rows
            .get(row)
            .and_then(|r| r.get(idx))
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    fn push(&mut self, record: &LedgerRecord) {
        let row = self
            .columns
            .iter()
            .map(|name| match name.as_str() {
                "period" => record.period.clone(),
                "water" => money(record.water),
                "electricity" => money(record.electricity),
                "rent" => money(record.rent),
                "connectivity" => money(record.connectivity),
                "gas" => money(record.gas),
                "basic_total" => money(record.basic_total),
                "full_total" => money(record.full_total),
                "streaming_total" => money(record.streaming_total),
                "streaming_half" => money(record.streaming_half),
                "share_majority" => money(record.share_majority),
                "share_minority" => money(record.share_minority),
                "share_majority_adjusted" => money(record.share_majority_adjusted),
                // Columns kept from an older file have no value for new rows.
                _ => schema::ABSENT.to_string(),
            })
            .collect();
        self.rows.push(row);
    }
}

fn money(value: rust_decimal::Decimal) -> String {
    format!("{value:.2}")
}

/// Mediates all reads and writes of the persisted table. Every mutating
/// operation is read-modify-write of the whole file and persists before
/// returning; no in-memory ledger survives across calls.
pub(crate) struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Load the ledger, creating an empty one with the canonical header on
    /// first access. An existing file is migrated onto the canonical schema
    /// (see [`schema::migrate`]).
    pub(crate) fn load(&self) -> Result<Ledger, LedgerError> {
        if !self.path.exists() {
            let ledger = Ledger::with_canonical_columns();
            self.persist(&ledger)?;
            return Ok(ledger);
        }

        let mut rdr = csv::Reader::from_path(&self.path)
            .map_err(|e| self.corrupt(e.to_string()))?;

        let header: Vec<String> = rdr
            .headers()
            .map_err(|e| self.corrupt(e.to_string()))?
            .iter()
            .map(|s| s.to_string())
            .collect();
        if header.is_empty() || header.iter().all(|h| h.is_empty()) {
            return Err(self.corrupt("missing header row".into()));
        }

        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result.map_err(|e| self.corrupt(e.to_string()))?;
            rows.push(record.iter().map(|s| s.to_string()).collect());
        }

        let (columns, rows) = schema::migrate(&header, rows);
        Ok(Ledger { columns, rows })
    }

    /// Append one record and persist. Registering the same period twice
    /// produces two rows; deduplication is deliberately not performed.
    pub(crate) fn append(&self, record: &LedgerRecord) -> Result<Ledger, LedgerError> {
        let mut ledger = self.load()?;
        ledger.push(record);
        self.persist(&ledger)?;
        Ok(ledger)
    }

    /// Drop exactly the most recently appended record and persist. On an
    /// empty ledger this is a reported no-op, not an error: the returned
    /// period is `None` and nothing is written.
    pub(crate) fn remove_last(&self) -> Result<(Ledger, Option<String>), LedgerError> {
        let mut ledger = self.load()?;
        let Some(row) = ledger.rows.pop() else {
            return Ok((ledger, None));
        };
        self.persist(&ledger)?;
        let period = ledger
            .columns
            .iter()
            .position(|c| c == "period")
            .and_then(|idx| row.get(idx).cloned())
            .unwrap_or_default();
        Ok((ledger, Some(period)))
    }

    /// Serialize the whole ledger to durable storage.
    ///
    /// Writes to a sibling temp file and renames it over the target, so a
    /// crash mid-write cannot clobber rows that were already durable.
    pub(crate) fn persist(&self, ledger: &Ledger) -> Result<(), LedgerError> {
        let tmp = self.path.with_extension("csv.tmp");

        let mut wtr = csv::Writer::from_path(&tmp)
            .map_err(|e| self.persistence(e.to_string()))?;
        wtr.write_record(&ledger.columns)
            .map_err(|e| self.persistence(e.to_string()))?;
        for row in &ledger.rows {
            wtr.write_record(row)
                .map_err(|e| self.persistence(e.to_string()))?;
        }
        wtr.flush().map_err(|e| self.persistence(e.to_string()))?;
        drop(wtr);

        std::fs::rename(&tmp, &self.path)
            .map_err(|e| self.persistence(e.to_string()))
    }

    fn corrupt(&self, reason: String) -> LedgerError {
        LedgerError::Corrupt {
            path: self.path.clone(),
            reason,
        }
    }

    fn persistence(&self, reason: String) -> LedgerError {
        LedgerError::Persistence {
            path: self.path.clone(),
            reason,
        }
    }
}
