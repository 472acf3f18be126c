//! Helpers for creating and hydrating ledgers.

use std::collections::HashSet;

use expense_domain::{Identifiable, Ledger};

use crate::persistence::deserialize_ledger;

/// Builds session ledgers from persisted data.
pub struct LedgerService;

impl LedgerService {
    /// Builds the session ledger from persisted data.
    ///
    /// Absent or malformed data yields an empty ledger; this never fails.
    pub fn initialize(persisted: Option<&str>) -> Ledger {
        let Some(data) = persisted else {
            return Ledger::new();
        };
        match deserialize_ledger(data) {
            Ok(ledger) => Self::drop_duplicate_ids(ledger),
            Err(err) => {
                tracing::warn!(error = %err, "discarding malformed persisted ledger");
                Ledger::new()
            }
        }
    }

    /// Keeps the first (newest) record for each id.
    fn drop_duplicate_ids(ledger: Ledger) -> Ledger {
        let total = ledger.len();
        let mut seen = HashSet::with_capacity(total);
        let records: Vec<_> = ledger
            .into_records()
            .into_iter()
            .filter(|record| seen.insert(record.id().to_owned()))
            .collect();
        if records.len() != total {
            tracing::warn!(
                dropped = total - records.len(),
                "persisted ledger contained duplicate ids"
            );
        }
        Ledger::from_records(records)
    }
}
