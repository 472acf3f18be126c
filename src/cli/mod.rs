pub mod commands;
pub mod context;
pub mod formatters;
pub mod output;
pub mod prompts;
pub mod registry;
mod shell;
pub mod system_clock;
pub mod table;

pub use context::{CliMode, ShellContext, ShellOptions};
pub use shell::run_cli;
