use expense_core::{
    Clock, ExpenseService, KeyValueStore, LedgerService, PersistenceBridge, SummaryService,
};
use expense_domain::{
    CategoryTotal, Displayable, ExpenseCategory, ExpenseRecord, Ledger, SpendingBreakdown,
};

use crate::core::{
    form::ExpenseForm,
    observer::{LedgerObserver, LedgerSnapshot},
    settings::TrackerSettings,
};
use crate::errors::Result;

/// Result of a commit attempt that did not hit a storage failure.
#[derive(Debug, Clone, PartialEq)]
pub enum CommitOutcome {
    /// A record was prepended and persisted.
    Added(ExpenseRecord),
    /// The pending input was rejected; nothing changed.
    Declined { reason: String },
}

impl CommitOutcome {
    pub fn record(&self) -> Option<&ExpenseRecord> {
        match self {
            CommitOutcome::Added(record) => Some(record),
            CommitOutcome::Declined { .. } => None,
        }
    }
}

/// Facade that owns the session ledger and coordinates input, persistence and observers.
pub struct ExpenseTracker {
    ledger: Ledger,
    bridge: PersistenceBridge,
    form: ExpenseForm,
    settings: TrackerSettings,
    clock: Box<dyn Clock>,
    observers: Vec<Box<dyn LedgerObserver>>,
}

impl ExpenseTracker {
    /// Hydrates the ledger from `store`. Malformed stored data starts an empty ledger;
    /// a store that cannot be read at all is reported as an error.
    pub fn open(
        store: Box<dyn KeyValueStore>,
        settings: TrackerSettings,
        clock: Box<dyn Clock>,
    ) -> Result<Self> {
        let bridge = PersistenceBridge::new(store, settings.storage_key.clone());
        let persisted = bridge.load()?;
        let ledger = LedgerService::initialize(persisted.as_deref());
        tracing::info!(
            key = bridge.key(),
            records = ledger.len(),
            "expense ledger ready"
        );
        Ok(Self {
            ledger,
            bridge,
            form: ExpenseForm::new(settings.default_category),
            settings,
            clock,
            observers: Vec::new(),
        })
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn form(&self) -> &ExpenseForm {
        &self.form
    }

    pub fn settings(&self) -> &TrackerSettings {
        &self.settings
    }

    pub fn storage_key(&self) -> &str {
        self.bridge.key()
    }

    /// Applies new display settings. The storage key stays bound to the open store.
    pub fn update_settings(&mut self, settings: TrackerSettings) {
        let storage_key = self.settings.storage_key.clone();
        self.settings = TrackerSettings {
            storage_key,
            ..settings
        };
    }

    pub fn set_amount(&mut self, text: impl Into<String>) {
        self.form.amount = text.into();
    }

    pub fn select_category(&mut self, category: ExpenseCategory) {
        self.form.category = category;
    }

    pub fn set_note(&mut self, text: impl Into<String>) {
        self.form.note = text.into();
    }

    /// Registers an observer that is notified after every ledger change.
    pub fn subscribe(&mut self, observer: Box<dyn LedgerObserver>) {
        self.observers.push(observer);
    }

    /// Turns the pending form into a record.
    ///
    /// Invalid input is declined without touching the ledger, the form or the store.
    /// When the store rejects the write the record stays in memory, observers are
    /// still notified, and the storage error is returned.
    pub fn commit(&mut self) -> Result<CommitOutcome> {
        let draft = self.form.to_draft();
        let record = match ExpenseService::add(
            &mut self.ledger,
            &draft,
            self.clock.as_ref(),
            &self.settings.date_format,
        ) {
            Ok(record) => record,
            Err(err) if err.is_validation() => {
                tracing::debug!(reason = %err, "declined expense input");
                return Ok(CommitOutcome::Declined {
                    reason: err.to_string(),
                });
            }
            Err(err) => return Err(err.into()),
        };

        self.form.reset();
        let saved = self.bridge.save(&self.ledger);
        self.notify_observers();

        match saved {
            Ok(()) => {
                tracing::info!(
                    id = %record.id,
                    record = %record.display_label(),
                    "expense added"
                );
                Ok(CommitOutcome::Added(record))
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to persist ledger");
                Err(err.into())
            }
        }
    }

    /// Fills the form from raw parts and commits it in one step.
    ///
    /// A declined add puts back whatever the form held before the call.
    pub fn add_expense(
        &mut self,
        amount: impl Into<String>,
        category: ExpenseCategory,
        note: impl Into<String>,
    ) -> Result<CommitOutcome> {
        let previous = self.form.clone();
        self.set_amount(amount);
        self.select_category(category);
        self.set_note(note);
        let outcome = self.commit()?;
        if matches!(outcome, CommitOutcome::Declined { .. }) {
            self.form = previous;
        }
        Ok(outcome)
    }

    pub fn category_totals(&self) -> Vec<CategoryTotal> {
        SummaryService::category_totals(&self.ledger)
    }

    pub fn total_spent(&self) -> f64 {
        SummaryService::total_spent(&self.ledger)
    }

    pub fn breakdown(&self) -> SpendingBreakdown {
        SummaryService::breakdown(&self.ledger)
    }

    /// Invokes `render` with a snapshot of the current state.
    pub fn with_snapshot<R>(&self, render: impl FnOnce(&LedgerSnapshot<'_>) -> R) -> R {
        let breakdown = self.breakdown();
        render(&LedgerSnapshot {
            ledger: &self.ledger,
            breakdown: &breakdown,
            settings: &self.settings,
        })
    }

    fn notify_observers(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let breakdown = SummaryService::breakdown(&self.ledger);
        let snapshot = LedgerSnapshot {
            ledger: &self.ledger,
            breakdown: &breakdown,
            settings: &self.settings,
        };
        for observer in self.observers.iter_mut() {
            observer.ledger_changed(&snapshot);
        }
    }
}
