use expense_domain::{sum_amounts, CategoryTotal, ExpenseCategory, Ledger, SpendingBreakdown};

/// Computes derived spending views. Results are never cached.
pub struct SummaryService;

impl SummaryService {
    /// One total per category, in [`ExpenseCategory::ALL`] order.
    pub fn category_totals(ledger: &Ledger) -> Vec<CategoryTotal> {
        ExpenseCategory::ALL
            .into_iter()
            .map(|category| {
                CategoryTotal::new(category, sum_amounts(ledger.in_category(category)))
            })
            .collect()
    }

    /// Sum of all amounts regardless of category.
    pub fn total_spent(ledger: &Ledger) -> f64 {
        ledger.total()
    }

    pub fn breakdown(ledger: &Ledger) -> SpendingBreakdown {
        SpendingBreakdown::new(Self::category_totals(ledger), Self::total_spent(ledger))
    }
}
