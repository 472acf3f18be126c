use chrono::{
    format::{Item, StrftimeItems},
    DateTime, NaiveDate, Utc,
};

use crate::CoreError;

/// Date format used when none is configured (`10/18/2026`).
pub const DEFAULT_DATE_FORMAT: &str = "%m/%d/%Y";

/// Clock abstracts access to the current timestamp so services remain deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current UTC date. Defaults to `now().date_naive()`.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Pins the clock to midnight UTC of `date`.
    pub fn on(date: NaiveDate) -> Self {
        Self(date.and_time(chrono::NaiveTime::MIN).and_utc())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Checks that `format` is a usable strftime pattern.
pub fn validate_date_format(format: &str) -> Result<(), CoreError> {
    if format.trim().is_empty() {
        return Err(CoreError::Validation("date format must not be empty".into()));
    }
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(CoreError::Validation(format!(
            "`{format}` is not a valid date format"
        )));
    }
    Ok(())
}

/// Renders `date` with a strftime `format`, rejecting malformed patterns instead of panicking.
pub fn format_date(date: NaiveDate, format: &str) -> Result<String, CoreError> {
    validate_date_format(format)?;
    Ok(date.format(format).to_string())
}
