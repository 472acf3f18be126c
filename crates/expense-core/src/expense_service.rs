use expense_domain::{ExpenseCategory, ExpenseRecord, Ledger};

use crate::{time::format_date, Clock, CoreError};

/// Raw user input for one expense, before validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseDraft {
    pub amount: Option<String>,
    pub category: ExpenseCategory,
    pub note: Option<String>,
}

impl ExpenseDraft {
    pub fn new(amount: impl Into<String>, category: ExpenseCategory) -> Self {
        Self {
            amount: Some(amount.into()),
            category,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

pub struct ExpenseService;

impl ExpenseService {
    /// Validates `draft` and prepends a new record dated today, returning a copy of it.
    ///
    /// On any validation error the ledger is left untouched.
    pub fn add(
        ledger: &mut Ledger,
        draft: &ExpenseDraft,
        clock: &dyn Clock,
        date_format: &str,
    ) -> Result<ExpenseRecord, CoreError> {
        let amount = parse_amount(draft.amount.as_deref())?;
        let date = format_date(clock.today(), date_format)?;
        let note = draft.note.clone().unwrap_or_default();
        let record = ExpenseRecord::new(amount, draft.category, note, date);
        ledger.prepend(record.clone());
        Ok(record)
    }
}

/// Parses the amount text entered by the user.
///
/// Blank, non-numeric, non-finite, zero and negative inputs are rejected.
pub fn parse_amount(input: Option<&str>) -> Result<f64, CoreError> {
    let raw = input.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(CoreError::Validation("amount is required".into()));
    }
    let amount: f64 = raw
        .parse()
        .map_err(|_| CoreError::Validation(format!("`{raw}` is not a valid amount")))?;
    if !amount.is_finite() {
        return Err(CoreError::Validation(format!(
            "`{raw}` is not a finite amount"
        )));
    }
    if amount <= 0.0 {
        return Err(CoreError::Validation(
            "amount must be greater than zero".into(),
        ));
    }
    Ok(amount)
}
