use dialoguer::{theme::ColorfulTheme, Input, Select};
use expense_core::parse_amount;
use expense_domain::ExpenseCategory;

use crate::cli::context::CommandError;
use crate::core::ExpenseForm;

/// Values collected by the interactive expense form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormAnswers {
    pub amount: String,
    pub category: ExpenseCategory,
    pub note: String,
}

/// Walks the user through amount, category and note, starting from `pending`.
pub fn prompt_expense(
    theme: &ColorfulTheme,
    pending: &ExpenseForm,
) -> Result<FormAnswers, CommandError> {
    let amount = Input::<String>::with_theme(theme)
        .with_prompt("Amount")
        .with_initial_text(pending.amount.clone())
        .validate_with(|value: &String| -> Result<(), String> {
            parse_amount(Some(value))
                .map(|_| ())
                .map_err(|err| err.to_string())
        })
        .interact_text()?;

    let labels: Vec<&str> = ExpenseCategory::ALL
        .iter()
        .map(|category| category.as_str())
        .collect();
    let selected = Select::with_theme(theme)
        .with_prompt("Category")
        .items(&labels)
        .default(pending.category.index())
        .interact()?;

    let note = Input::<String>::with_theme(theme)
        .with_prompt("Note (optional)")
        .with_initial_text(pending.note.clone())
        .allow_empty(true)
        .interact_text()?;

    Ok(FormAnswers {
        amount: amount.trim().to_string(),
        category: ExpenseCategory::ALL[selected],
        note,
    })
}
