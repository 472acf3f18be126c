//! Derived spending views. Never stored; always recomputed from a ledger.

use serde::{Deserialize, Serialize};

use crate::category::ExpenseCategory;

/// Sum of the amounts recorded under one category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub total: f64,
}

impl CategoryTotal {
    pub fn new(category: ExpenseCategory, total: f64) -> Self {
        Self { category, total }
    }
}

/// Per-category totals in [`ExpenseCategory::ALL`] order plus the grand total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpendingBreakdown {
    pub totals: Vec<CategoryTotal>,
    pub total_spent: f64,
}

impl SpendingBreakdown {
    pub fn new(totals: Vec<CategoryTotal>, total_spent: f64) -> Self {
        Self {
            totals,
            total_spent,
        }
    }

    /// Total for `category`, or `0.0` when the category is absent.
    pub fn total_for(&self, category: ExpenseCategory) -> f64 {
        self.totals
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| entry.total)
            .unwrap_or(0.0)
    }

    /// Fraction of the grand total spent in `category`, between `0.0` and `1.0`.
    pub fn share(&self, category: ExpenseCategory) -> f64 {
        if self.total_spent <= 0.0 {
            return 0.0;
        }
        self.total_for(category) / self.total_spent
    }

    /// `true` when no category has any spending.
    pub fn is_empty(&self) -> bool {
        self.totals.iter().all(|entry| entry.total == 0.0)
    }
}
