//! Shell session state, command dispatch and error reporting.

use std::{env, ffi::OsString, io, path::PathBuf};

use dialoguer::{theme::ColorfulTheme, Confirm};
use expense_config::{default_home, Config, ConfigError, ConfigManager};
use expense_core::{CoreError, KeyValueStore, MemoryStore};
use expense_storage_json::JsonFileStore;
use strsim::levenshtein;
use thiserror::Error;

use crate::cli::commands;
use crate::cli::formatters;
use crate::cli::output::{self, OutputPreferences};
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::cli::system_clock::SystemClock;
use crate::core::{ExpenseTracker, LedgerObserver, LedgerSnapshot, TrackerSettings};
use crate::errors::{CliError, TrackerError};

/// Presence of this variable switches the shell to line-by-line stdin mode.
pub const SCRIPT_ENV: &str = "EXPENSE_TRACKER_CLI_SCRIPT";
/// Presence of this variable keeps the ledger in memory only.
pub const EPHEMERAL_ENV: &str = "EXPENSE_TRACKER_EPHEMERAL";
pub const EPHEMERAL_FLAG: &str = "--ephemeral";

const SUGGESTION_DISTANCE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Core(#[from] TrackerError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<CoreError> for CommandError {
    fn from(err: CoreError) -> Self {
        CommandError::Core(err.into())
    }
}

impl From<ConfigError> for CommandError {
    fn from(err: ConfigError) -> Self {
        CommandError::Core(err.into())
    }
}

pub type CommandResult = Result<(), CommandError>;

/// How the shell was launched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellOptions {
    pub mode: CliMode,
    pub home: PathBuf,
    pub ephemeral: bool,
}

impl ShellOptions {
    /// Reads the process arguments and environment.
    pub fn from_env() -> Self {
        Self::from_args(env::args_os().skip(1))
    }

    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        let mode = if env::var_os(SCRIPT_ENV).is_some() {
            CliMode::Script
        } else {
            CliMode::Interactive
        };
        let ephemeral = env::var_os(EPHEMERAL_ENV).is_some()
            || args.into_iter().any(|arg| arg == *EPHEMERAL_FLAG);
        Self {
            mode,
            home: default_home(),
            ephemeral,
        }
    }
}

/// Prints the running total after every ledger change.
struct StatusLine;

impl LedgerObserver for StatusLine {
    fn ledger_changed(&mut self, snapshot: &LedgerSnapshot<'_>) {
        output::info(formatters::status_line(snapshot));
    }
}

pub struct ShellContext {
    mode: CliMode,
    pub(crate) registry: CommandRegistry,
    tracker: ExpenseTracker,
    config: Config,
    config_manager: ConfigManager,
    data_dir: Option<PathBuf>,
    theme: ColorfulTheme,
    pub(crate) running: bool,
}

impl ShellContext {
    pub fn new(options: ShellOptions) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let config_manager = ConfigManager::with_base_dir(options.home.clone())?;
        let config = match config_manager.load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(
                    path = %config_manager.config_path().display(),
                    error = %err,
                    "config unreadable, using defaults"
                );
                output::warning(format!("Ignoring unreadable config: {err}"));
                Config::default()
            }
        };
        apply_output_preferences(options.mode, &config);

        let (store, data_dir): (Box<dyn KeyValueStore>, Option<PathBuf>) = if options.ephemeral {
            tracing::info!("ephemeral session, expenses stay in memory");
            (Box::new(MemoryStore::new()), None)
        } else {
            let dir = config.resolve_data_dir(&options.home);
            (Box::new(JsonFileStore::new(dir.clone())?), Some(dir))
        };

        let mut tracker = ExpenseTracker::open(
            store,
            TrackerSettings::from_config(&config),
            Box::new(SystemClock),
        )?;
        tracker.subscribe(Box::new(StatusLine));

        Ok(Self {
            mode: options.mode,
            registry,
            tracker,
            config,
            config_manager,
            data_dir,
            theme: ColorfulTheme::default(),
            running: true,
        })
    }

    pub fn mode(&self) -> CliMode {
        self.mode
    }

    pub fn tracker(&self) -> &ExpenseTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut ExpenseTracker {
        &mut self.tracker
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn theme(&self) -> &ColorfulTheme {
        &self.theme
    }

    /// Directory backing the ledger, or `None` for in-memory sessions.
    pub fn data_dir(&self) -> Option<&PathBuf> {
        self.data_dir.as_ref()
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_manager.config_path().to_path_buf()
    }

    /// Saves `config` and applies its display settings to the running session.
    pub(crate) fn replace_config(&mut self, config: Config) -> CommandResult {
        self.config_manager.save(&config)?;
        apply_output_preferences(self.mode, &config);
        self.tracker
            .update_settings(TrackerSettings::from_config(&config));
        self.config = config;
        Ok(())
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn prompt(&self) -> String {
        let pending = if self.tracker.form().is_blank() {
            ""
        } else {
            "*"
        };
        format!("expenses[{}]{} > ", self.tracker.ledger().len(), pending)
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &needle), name))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= SUGGESTION_DISTANCE {
                output::info(format!("Suggestion: `{}`?", name));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CommandError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Confirm::with_theme(&self.theme)
            .with_prompt("Exit shell?")
            .default(true)
            .interact()
            .map_err(CommandError::from)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                output::error(&message);
                output::hint("Use `help <command>` for usage details.");
                Ok(())
            }
            CommandError::Core(TrackerError::StorageError(message)) => {
                tracing::error!(error = %message, "command failed on storage");
                output::error(format!("Could not save expenses: {message}"));
                output::hint("Changes are kept for this session only.");
                Ok(())
            }
            other => {
                output::error(other.to_string());
                Ok(())
            }
        }
    }
}

fn apply_output_preferences(mode: CliMode, config: &Config) {
    let color_enabled = mode == CliMode::Interactive
        && config.ui_color_enabled
        && env::var_os("NO_COLOR").is_none();
    output::set_preferences(OutputPreferences { color_enabled });
}
