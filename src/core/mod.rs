//! Application controller that ties the ledger, persistence and renderers together.

pub mod form;
pub mod observer;
pub mod settings;
pub mod tracker;

pub use form::ExpenseForm;
pub use observer::{LedgerObserver, LedgerSnapshot};
pub use settings::TrackerSettings;
pub use tracker::{CommitOutcome, ExpenseTracker};
