use expense_config::Config;
use expense_core::{time::validate_date_format, DEFAULT_STORAGE_KEY};
use expense_domain::ExpenseCategory;

/// Effective tracker preferences, validated from [`Config`].
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerSettings {
    pub currency_symbol: String,
    pub date_format: String,
    pub default_category: ExpenseCategory,
    pub storage_key: String,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl TrackerSettings {
    /// Builds settings from `config`, replacing unusable values with defaults.
    pub fn from_config(config: &Config) -> Self {
        let date_format = match validate_date_format(&config.date_format) {
            Ok(()) => config.date_format.clone(),
            Err(err) => {
                tracing::warn!(error = %err, "falling back to the default date format");
                Config::default_date_format()
            }
        };
        let default_category = config
            .default_category
            .parse::<ExpenseCategory>()
            .unwrap_or_else(|err| {
                tracing::warn!(error = %err, "falling back to the first category");
                ExpenseCategory::default()
            });
        let storage_key = if config.storage_key.trim().is_empty() {
            DEFAULT_STORAGE_KEY.to_string()
        } else {
            config.storage_key.clone()
        };
        Self {
            currency_symbol: config.currency_symbol.clone(),
            date_format,
            default_category,
            storage_key,
        }
    }

    /// Formats `amount` with the currency symbol and two decimals.
    pub fn format_amount(&self, amount: f64) -> String {
        format!("{}{:.2}", self.currency_symbol, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_config_defaults() {
        let settings = TrackerSettings::default();
        assert_eq!(settings.currency_symbol, "₹");
        assert_eq!(settings.date_format, "%m/%d/%Y");
        assert_eq!(settings.default_category, ExpenseCategory::Food);
        assert_eq!(settings.storage_key, "expenses");
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = Config {
            date_format: "%Q".into(),
            default_category: "Pets".into(),
            storage_key: " ".into(),
            ..Config::default()
        };
        let settings = TrackerSettings::from_config(&config);
        assert_eq!(settings.date_format, "%m/%d/%Y");
        assert_eq!(settings.default_category, ExpenseCategory::Food);
        assert_eq!(settings.storage_key, "expenses");
    }

    #[test]
    fn format_amount_uses_two_decimals() {
        let settings = TrackerSettings {
            currency_symbol: "$".into(),
            ..TrackerSettings::default()
        };
        assert_eq!(settings.format_amount(50.0), "$50.00");
        assert_eq!(settings.format_amount(0.126), "$0.13");
    }
}
