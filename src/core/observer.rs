use expense_domain::{Ledger, SpendingBreakdown};

use crate::core::settings::TrackerSettings;

/// Read-only view of the ledger handed to observers after a mutation.
#[derive(Debug, Clone, Copy)]
pub struct LedgerSnapshot<'a> {
    pub ledger: &'a Ledger,
    pub breakdown: &'a SpendingBreakdown,
    pub settings: &'a TrackerSettings,
}

impl LedgerSnapshot<'_> {
    pub fn total_spent(&self) -> f64 {
        self.breakdown.total_spent
    }

    pub fn record_count(&self) -> usize {
        self.ledger.len()
    }
}

/// Receives a fresh snapshot every time the ledger changes.
pub trait LedgerObserver {
    fn ledger_changed(&mut self, snapshot: &LedgerSnapshot<'_>);
}

impl<F> LedgerObserver for F
where
    F: FnMut(&LedgerSnapshot<'_>),
{
    fn ledger_changed(&mut self, snapshot: &LedgerSnapshot<'_>) {
        self(snapshot)
    }
}
