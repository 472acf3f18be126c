//! expense-domain
//!
//! Pure domain models (ExpenseRecord, ExpenseCategory, Ledger, summaries).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod category;
pub mod common;
pub mod expense;
pub mod ledger;
pub mod summary;

pub use category::*;
pub use common::*;
pub use expense::*;
pub use ledger::*;
pub use summary::*;
