use expense_config::Config;
use expense_core::time::validate_date_format;
use expense_domain::ExpenseCategory;

use crate::cli::context::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::utils::build_info;

/// Settings that are bound when the session opens its store.
const RESTART_KEYS: [&str; 2] = ["storage_key", "data_dir"];

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "config",
            "Show or change settings",
            "config [show | get <key> | set <key> <value>]",
            cmd_config,
        ),
        CommandEntry::new("version", "Show build metadata", "version", cmd_version),
        CommandEntry::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit),
        CommandEntry::new("quit", "Exit the shell", "quit", cmd_exit),
    ]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => {
            show_config(context);
            Ok(())
        }
        ["get", key] => {
            let value = context.config().get(key)?;
            output::info(format!("{key} = {value}"));
            Ok(())
        }
        ["set", key, value @ ..] => set_config(context, key, &value.join(" ")),
        _ => Err(CommandError::InvalidArguments(
            "usage: config [show | get <key> | set <key> <value>]".into(),
        )),
    }
}

fn show_config(context: &ShellContext) {
    let config = context.config();
    output::section("Configuration");
    for key in Config::KEYS {
        let value = config.get(key).unwrap_or_default();
        output::info(format!("  {:<18} {}", key, value));
    }
    let storage = context
        .data_dir()
        .map(|dir| dir.display().to_string())
        .unwrap_or_else(|| "(in memory)".to_string());
    output::info(format!("  {:<18} {}", "config file", context.config_path().display()));
    output::info(format!("  {:<18} {}", "ledger storage", storage));
}

fn set_config(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    match key {
        "date_format" => validate_date_format(value.trim())
            .map_err(|err| CommandError::InvalidArguments(err.to_string()))?,
        "default_category" => {
            value
                .parse::<ExpenseCategory>()
                .map_err(|err| CommandError::InvalidArguments(err.to_string()))?;
        }
        _ => {}
    }

    let mut config = context.config().clone();
    config.set(key, value)?;
    context.replace_config(config)?;
    output::success(format!("Updated `{key}`."));
    if RESTART_KEYS.contains(&key) {
        output::hint("Restart the shell for this setting to take effect.");
    }
    Ok(())
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output::section(format!("Expense Tracker {}", meta.version));
    output::info(format!("  Commit  : {} ({})", meta.commit, meta.tree));
    output::info(format!("  Target  : {}", meta.target));
    output::info(format!("  Profile : {}", meta.profile));
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first().map(|name| name.to_lowercase()) {
        if let Some(entry) = context.command(&name) {
            print_command(entry);
        } else {
            context.suggest_command(args[0]);
        }
        return Ok(());
    }

    print_overview(&context.registry);
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}

fn print_overview(registry: &CommandRegistry) {
    output::section("Available commands");
    for entry in registry.list() {
        output::info(format!("  {:<12} {}", entry.name, entry.description));
    }
    output::info("Use `help <command>` for details.");
}

fn print_command(entry: &CommandEntry) {
    output::section(format!("Help: {}", entry.name));
    output::info(format!("  Description: {}", entry.description));
    output::info(format!("  Usage: {}", entry.usage));
}
