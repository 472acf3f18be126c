use std::{io, result::Result as StdResult};

use expense_config::ConfigError;
use expense_core::CoreError;
use rustyline::error::ReadlineError;
use thiserror::Error;

/// Unified error type for the core, storage and configuration layers.
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = StdResult<T, TrackerError>;

impl TrackerError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, TrackerError::InvalidInput(_))
    }
}

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] TrackerError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Line editor error: {0}")]
    Readline(#[from] ReadlineError),
}

impl From<io::Error> for TrackerError {
    fn from(err: io::Error) -> Self {
        TrackerError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        TrackerError::StorageError(err.to_string())
    }
}

impl From<CoreError> for TrackerError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(message) => TrackerError::InvalidInput(message),
            CoreError::Storage(message) | CoreError::Serde(message) => {
                TrackerError::StorageError(message)
            }
            CoreError::Io(err) => TrackerError::StorageError(err.to_string()),
        }
    }
}

impl From<ConfigError> for TrackerError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(io) => TrackerError::StorageError(io.to_string()),
            ConfigError::Serde(message) => TrackerError::ConfigError(message),
            other => TrackerError::ConfigError(other.to_string()),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::from(TrackerError::from(err))
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        CliError::from(TrackerError::from(err))
    }
}
