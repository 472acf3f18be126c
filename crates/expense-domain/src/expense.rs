//! Domain model for a single logged expense.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{category::ExpenseCategory, common::*};

const EMPTY_NOTE_LABEL: &str = "No note";

/// One logged expense.
///
/// `id` is an opaque string; new records get a UUID v4, but stored records may
/// carry any unique text. `date` keeps the display-formatted calendar day the
/// record was created on, exactly as it is shown and persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseRecord {
    pub id: String,
    pub amount: f64,
    pub category: ExpenseCategory,
    #[serde(default)]
    pub note: String,
    pub date: String,
}

impl ExpenseRecord {
    pub fn new(
        amount: f64,
        category: ExpenseCategory,
        note: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            amount,
            category,
            note: note.into(),
            date: date.into(),
        }
    }

    /// Returns `true` when no note was entered.
    pub fn has_note(&self) -> bool {
        !self.note.trim().is_empty()
    }

    /// Note text for display, falling back to a placeholder when empty.
    pub fn note_label(&self) -> &str {
        if self.has_note() {
            &self.note
        } else {
            EMPTY_NOTE_LABEL
        }
    }
}

impl Identifiable for ExpenseRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Amounted for ExpenseRecord {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Displayable for ExpenseRecord {
    fn display_label(&self) -> String {
        format!(
            "{:.2} on {} ({}) - {}",
            self.amount,
            self.category,
            self.note_label(),
            self.date
        )
    }
}
