//! expense-core
//!
//! Ledger operations, aggregation, and the persistence bridge.
//! Depends on expense-domain. No CLI, no terminal I/O, no concrete file storage.

pub mod error;
pub mod expense_service;
pub mod ledger_service;
pub mod persistence;
pub mod storage;
pub mod summary_service;
pub mod time;

#[cfg(test)]
mod tests;

pub use error::CoreError;
pub use expense_service::*;
pub use ledger_service::*;
pub use persistence::*;
pub use storage::{KeyValueStore, MemoryStore};
pub use summary_service::*;
pub use time::{Clock, FixedClock};
