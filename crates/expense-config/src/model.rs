use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ConfigError;

const DATA_DIR: &str = "data";

/// Stores user-configurable preferences for the tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "Config::default_date_format")]
    pub date_format: String,
    #[serde(default = "Config::default_category_value")]
    pub default_category: String,
    #[serde(default = "Config::default_storage_key")]
    pub storage_key: String,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom directory for stored expenses. Defaults to `<home>/data`.
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: Self::default_currency_symbol(),
            date_format: Self::default_date_format(),
            default_category: Self::default_category_value(),
            storage_key: Self::default_storage_key(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            data_dir: None,
        }
    }
}

impl Config {
    /// Setting names accepted by [`Config::set`], in display order.
    pub const KEYS: [&'static str; 6] = [
        "currency_symbol",
        "date_format",
        "default_category",
        "storage_key",
        "ui_color_enabled",
        "data_dir",
    ];

    pub fn default_currency_symbol() -> String {
        "₹".into()
    }

    pub fn default_date_format() -> String {
        "%m/%d/%Y".into()
    }

    pub fn default_category_value() -> String {
        "Food".into()
    }

    pub fn default_storage_key() -> String {
        "expenses".into()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn resolve_data_dir(&self, home: &Path) -> PathBuf {
        match &self.data_dir {
            Some(path) => path.clone(),
            None => home.join(DATA_DIR),
        }
    }

    /// Current value of a setting rendered as text.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        let value = match key {
            "currency_symbol" => self.currency_symbol.clone(),
            "date_format" => self.date_format.clone(),
            "default_category" => self.default_category.clone(),
            "storage_key" => self.storage_key.clone(),
            "ui_color_enabled" => self.ui_color_enabled.to_string(),
            "data_dir" => self
                .data_dir
                .as_ref()
                .map(|path| path.display().to_string())
                .unwrap_or_default(),
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        };
        Ok(value)
    }

    /// Updates a setting from text. Semantic checks (date patterns, category names)
    /// belong to the caller; only shape is validated here.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let trimmed = value.trim();
        let require_non_empty = |field: &str| {
            if trimmed.is_empty() {
                Err(ConfigError::InvalidValue {
                    key: field.to_string(),
                    message: "value must not be empty".into(),
                })
            } else {
                Ok(trimmed.to_string())
            }
        };
        match key {
            "currency_symbol" => self.currency_symbol = value.to_string(),
            "date_format" => self.date_format = require_non_empty(key)?,
            "default_category" => self.default_category = require_non_empty(key)?,
            "storage_key" => self.storage_key = require_non_empty(key)?,
            "ui_color_enabled" => {
                self.ui_color_enabled = parse_bool(trimmed).ok_or_else(|| {
                    ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: format!("`{trimmed}` is not a boolean"),
                    }
                })?
            }
            "data_dir" => {
                self.data_dir = if trimmed.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(trimmed))
                }
            }
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}
