#![doc(test(attr(deny(warnings))))]

//! Expense Tracker records expenses into a persisted ledger and reports a
//! per-category spending breakdown through a terminal shell.

pub mod cli;
pub mod core;
pub mod errors;
pub mod utils;

pub use expense_config as config;
pub use expense_core as services;
pub use expense_domain as domain;
pub use expense_storage_json as storage;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Tracker tracing initialized.");
    });
}
