use colored::Colorize;
use expense_domain::{ExpenseRecord, Ledger, SpendingBreakdown};

use crate::cli::table::{Alignment, Table, TableColumn};
use crate::core::{LedgerSnapshot, TrackerSettings};

const BAR_WIDTH: usize = 24;
const NOTE_MAX_WIDTH: usize = 32;

/// One-line description of a record, e.g. `₹50.00 on Food (No note) - 10/18/2026`.
pub fn describe_record(record: &ExpenseRecord, settings: &TrackerSettings) -> String {
    format!(
        "{} on {} ({}) - {}",
        settings.format_amount(record.amount),
        record.category,
        record.note_label(),
        record.date
    )
}

pub fn total_line(total: f64, settings: &TrackerSettings) -> String {
    format!("Total Spent: {}", settings.format_amount(total))
}

/// Running total shown after every change, e.g. `Total Spent: ₹50.00 across 1 expense`.
pub fn status_line(snapshot: &LedgerSnapshot<'_>) -> String {
    let count = snapshot.record_count();
    let noun = if count == 1 { "expense" } else { "expenses" };
    format!(
        "{} across {} {}",
        total_line(snapshot.total_spent(), snapshot.settings),
        count,
        noun
    )
}

/// Renders the ledger newest first, optionally limited to the first `limit` rows.
pub fn render_expense_table(
    ledger: &Ledger,
    settings: &TrackerSettings,
    limit: Option<usize>,
) -> String {
    let mut table = Table::new(vec![
        TableColumn::new("#", Alignment::Right),
        TableColumn::new("Amount", Alignment::Right),
        TableColumn::new("Category", Alignment::Left),
        TableColumn::new("Note", Alignment::Left).max_width(NOTE_MAX_WIDTH),
        TableColumn::new("Date", Alignment::Left),
    ]);
    let take = limit.unwrap_or(usize::MAX);
    for (idx, record) in ledger.iter().take(take).enumerate() {
        table.push_row(vec![
            (idx + 1).to_string(),
            settings.format_amount(record.amount),
            record.category.to_string(),
            record.note_label().to_string(),
            record.date.clone(),
        ]);
    }
    table.render()
}

/// Renders one proportional bar per category followed by nothing else; callers
/// append the total line themselves.
pub fn render_breakdown(
    breakdown: &SpendingBreakdown,
    settings: &TrackerSettings,
    color: bool,
) -> String {
    let label_width = breakdown
        .totals
        .iter()
        .map(|entry| entry.category.as_str().len())
        .max()
        .unwrap_or(0);
    let amount_width = breakdown
        .totals
        .iter()
        .map(|entry| settings.format_amount(entry.total).chars().count())
        .max()
        .unwrap_or(0);

    breakdown
        .totals
        .iter()
        .map(|entry| {
            let share = breakdown.share(entry.category);
            let filled = (share * BAR_WIDTH as f64).round() as usize;
            let filled = filled.min(BAR_WIDTH);
            let bar = "#".repeat(filled);
            let bar = if color {
                let (r, g, b) = entry.category.rgb();
                bar.truecolor(r, g, b).to_string()
            } else {
                bar
            };
            format!(
                "{:<label_width$}  {}{}  {:>5.1}%  {:>amount_width$}",
                entry.category.as_str(),
                bar,
                ".".repeat(BAR_WIDTH - filled),
                share * 100.0,
                settings.format_amount(entry.total),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use expense_domain::{CategoryTotal, ExpenseCategory};

    use super::*;

    fn settings() -> TrackerSettings {
        TrackerSettings {
            currency_symbol: "$".into(),
            ..TrackerSettings::default()
        }
    }

    #[test]
    fn describe_record_matches_list_layout() {
        let record = ExpenseRecord::new(50.0, ExpenseCategory::Food, "", "10/18/2026");
        assert_eq!(
            describe_record(&record, &settings()),
            "$50.00 on Food (No note) - 10/18/2026"
        );
    }

    #[test]
    fn status_line_pluralizes() {
        let mut ledger = Ledger::new();
        ledger.prepend(ExpenseRecord::new(50.0, ExpenseCategory::Food, "", "d"));
        let breakdown = SpendingBreakdown::new(
            vec![CategoryTotal::new(ExpenseCategory::Food, 50.0)],
            50.0,
        );
        let settings = settings();
        let snapshot = LedgerSnapshot {
            ledger: &ledger,
            breakdown: &breakdown,
            settings: &settings,
        };
        assert_eq!(status_line(&snapshot), "Total Spent: $50.00 across 1 expense");
    }

    #[test]
    fn expense_table_respects_limit() {
        let mut ledger = Ledger::new();
        ledger.prepend(ExpenseRecord::new(1.0, ExpenseCategory::Food, "a", "d"));
        ledger.prepend(ExpenseRecord::new(2.0, ExpenseCategory::Rent, "b", "d"));

        let rendered = render_expense_table(&ledger, &settings(), Some(1));
        assert_eq!(rendered.lines().count(), 3);
        assert!(rendered.contains("$2.00"));
        assert!(!rendered.contains("$1.00"));
    }

    #[test]
    fn empty_ledger_renders_positive_zero() {
        let ledger = Ledger::new();
        let breakdown = expense_core::SummaryService::breakdown(&ledger);
        let settings = TrackerSettings::default();

        let rendered = render_breakdown(&breakdown, &settings, false);
        assert_eq!(rendered.lines().count(), ExpenseCategory::ALL.len());
        assert!(rendered.lines().all(|line| line.ends_with("₹0.00")));
        assert!(!rendered.contains("-0.00"));
        assert_eq!(
            total_line(breakdown.total_spent, &settings),
            "Total Spent: ₹0.00"
        );
    }

    #[test]
    fn breakdown_bars_scale_with_share() {
        let breakdown = SpendingBreakdown::new(
            vec![
                CategoryTotal::new(ExpenseCategory::Food, 25.0),
                CategoryTotal::new(ExpenseCategory::Rent, 75.0),
            ],
            100.0,
        );
        let rendered = render_breakdown(&breakdown, &settings(), false);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].matches('#').count(), 6);
        assert_eq!(lines[1].matches('#').count(), 18);
        assert!(lines[1].contains("75.0%"));
        assert!(lines[1].ends_with("$75.00"));
    }
}
