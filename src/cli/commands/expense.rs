use expense_core::parse_amount;
use expense_domain::ExpenseCategory;

use crate::cli::context::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::formatters::describe_record;
use crate::cli::output;
use crate::cli::prompts;
use crate::cli::registry::CommandEntry;
use crate::core::CommitOutcome;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "amount",
            "Set the amount of the pending expense",
            "amount <value>",
            cmd_amount,
        ),
        CommandEntry::new(
            "category",
            "Select the category of the pending expense",
            "category <name>",
            cmd_category,
        ),
        CommandEntry::new(
            "note",
            "Set or clear the note of the pending expense",
            "note [text...]",
            cmd_note,
        ),
        CommandEntry::new(
            "add",
            "Record the pending expense, or one given inline",
            "add [amount [category] [note...]]",
            cmd_add,
        ),
        CommandEntry::new(
            "form",
            "Show the pending expense inputs",
            "form",
            cmd_form,
        ),
    ]
}

fn cmd_amount(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [value] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: amount <value>".into(),
        ));
    };
    if let Err(err) = parse_amount(Some(*value)) {
        output::hint(format!("{err}; `add` will not record it as is."));
    }
    context.tracker_mut().set_amount(*value);
    output::info(format!("Amount set to `{}`.", value.trim()));
    Ok(())
}

fn cmd_category(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [name] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: category <name>".into(),
        ));
    };
    let category = parse_category(name)?;
    context.tracker_mut().select_category(category);
    output::info(format!("Category set to {category}."));
    Ok(())
}

fn cmd_note(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let note = args.join(" ");
    if note.is_empty() {
        output::info("Note cleared.");
    } else {
        output::info(format!("Note set to \"{note}\"."));
    }
    context.tracker_mut().set_note(note);
    Ok(())
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let outcome = match args {
        [] => {
            let pending = context.tracker().form().clone();
            if context.mode() == CliMode::Interactive && pending.amount.trim().is_empty() {
                let answers = prompts::prompt_expense(context.theme(), &pending)?;
                context
                    .tracker_mut()
                    .add_expense(answers.amount, answers.category, answers.note)?
            } else {
                context.tracker_mut().commit()?
            }
        }
        [amount, rest @ ..] => {
            let category = match rest.first() {
                Some(name) => parse_category(name)?,
                None => context.tracker().form().category,
            };
            let note = rest.get(1..).map(|words| words.join(" ")).unwrap_or_default();
            context.tracker_mut().add_expense(*amount, category, note)?
        }
    };

    match outcome {
        CommitOutcome::Added(record) => {
            let description = describe_record(&record, context.tracker().settings());
            output::success(format!("Added {description}."));
        }
        CommitOutcome::Declined { reason } => {
            output::hint(format!("Nothing added. {reason}."));
        }
    }
    Ok(())
}

fn cmd_form(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let form = context.tracker().form();
    let placeholder = |text: &str| {
        if text.trim().is_empty() {
            "(empty)".to_string()
        } else {
            text.to_string()
        }
    };
    output::section("Pending expense");
    output::info(format!("  Amount   : {}", placeholder(&form.amount)));
    output::info(format!("  Category : {}", form.category));
    output::info(format!("  Note     : {}", placeholder(&form.note)));
    Ok(())
}

fn parse_category(name: &str) -> Result<ExpenseCategory, CommandError> {
    name.parse::<ExpenseCategory>().map_err(|err| {
        let names: Vec<&str> = ExpenseCategory::ALL
            .iter()
            .map(|category| category.as_str())
            .collect();
        CommandError::InvalidArguments(format!("{err}; choose one of {}", names.join(", ")))
    })
}
