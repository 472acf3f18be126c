use crate::cli::context::{CommandError, CommandResult, ShellContext};
use crate::cli::formatters::{render_breakdown, render_expense_table, total_line};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::table::{Alignment, Table, TableColumn};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "list",
            "List recorded expenses, newest first",
            "list [limit]",
            cmd_list,
        ),
        CommandEntry::new(
            "summary",
            "Show spending per category and the total",
            "summary",
            cmd_summary,
        ),
        CommandEntry::new(
            "categories",
            "List the expense categories with their totals",
            "categories",
            cmd_categories,
        ),
    ]
}

fn cmd_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let limit = match args {
        [] => None,
        [raw] => Some(raw.parse::<usize>().map_err(|_| {
            CommandError::InvalidArguments(format!("`{raw}` is not a valid row limit"))
        })?),
        _ => {
            return Err(CommandError::InvalidArguments(
                "usage: list [limit]".into(),
            ))
        }
    };

    let tracker = context.tracker();
    output::section("Expenses");
    if tracker.ledger().is_empty() {
        output::info("No expenses recorded yet.");
        return Ok(());
    }
    let settings = tracker.settings();
    output::info(render_expense_table(tracker.ledger(), settings, limit));
    output::info(total_line(tracker.total_spent(), settings));
    Ok(())
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let color = output::current_preferences().color_enabled;
    context.tracker().with_snapshot(|snapshot| {
        output::section("Spending by category");
        if snapshot.breakdown.is_empty() {
            output::info("No expenses recorded yet.");
        } else {
            output::info(render_breakdown(snapshot.breakdown, snapshot.settings, color));
        }
        output::info(total_line(snapshot.total_spent(), snapshot.settings));
    });
    Ok(())
}

fn cmd_categories(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let tracker = context.tracker();
    let settings = tracker.settings();
    let mut table = Table::new(vec![
        TableColumn::new("Category", Alignment::Left),
        TableColumn::new("Colour", Alignment::Left),
        TableColumn::new("Spent", Alignment::Right),
    ]);
    for entry in tracker.category_totals() {
        let marker = if entry.category == settings.default_category {
            " (default)"
        } else {
            ""
        };
        table.push_row(vec![
            format!("{}{}", entry.category, marker),
            entry.category.color().to_string(),
            settings.format_amount(entry.total),
        ]);
    }
    output::section("Categories");
    output::info(table.render());
    Ok(())
}
