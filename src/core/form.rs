use expense_core::ExpenseDraft;
use expense_domain::ExpenseCategory;

/// Pending user input that has not been committed yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseForm {
    pub amount: String,
    pub category: ExpenseCategory,
    pub note: String,
}

impl ExpenseForm {
    pub fn new(category: ExpenseCategory) -> Self {
        Self {
            amount: String::new(),
            category,
            note: String::new(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.amount.trim().is_empty() && self.note.trim().is_empty()
    }

    /// Clears the amount and note. The selected category is kept.
    pub fn reset(&mut self) {
        self.amount.clear();
        self.note.clear();
    }

    pub fn to_draft(&self) -> ExpenseDraft {
        ExpenseDraft {
            amount: Some(self.amount.clone()).filter(|amount| !amount.trim().is_empty()),
            category: self.category,
            note: Some(self.note.clone()).filter(|note| !note.is_empty()),
        }
    }
}
