//! The fixed set of spending categories.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Categorises expenses for the spending breakdown.
///
/// The declaration order is the display order of every breakdown and the
/// index into [`ExpenseCategory::color`].
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
)]
pub enum ExpenseCategory {
    #[default]
    Food,
    Rent,
    Shopping,
    Transport,
    Utilities,
    Other,
}

impl ExpenseCategory {
    /// Every category, in breakdown order.
    pub const ALL: [ExpenseCategory; 6] = [
        ExpenseCategory::Food,
        ExpenseCategory::Rent,
        ExpenseCategory::Shopping,
        ExpenseCategory::Transport,
        ExpenseCategory::Utilities,
        ExpenseCategory::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Rent => "Rent",
            ExpenseCategory::Shopping => "Shopping",
            ExpenseCategory::Transport => "Transport",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Other => "Other",
        }
    }

    /// Position of the category within [`ExpenseCategory::ALL`].
    pub fn index(self) -> usize {
        match self {
            ExpenseCategory::Food => 0,
            ExpenseCategory::Rent => 1,
            ExpenseCategory::Shopping => 2,
            ExpenseCategory::Transport => 3,
            ExpenseCategory::Utilities => 4,
            ExpenseCategory::Other => 5,
        }
    }

    /// Chart colour assigned to the category, as a `#rrggbb` hex string.
    pub fn color(self) -> &'static str {
        match self {
            ExpenseCategory::Food => "#8884d8",
            ExpenseCategory::Rent => "#82ca9d",
            ExpenseCategory::Shopping => "#ffc658",
            ExpenseCategory::Transport => "#ff8042",
            ExpenseCategory::Utilities => "#8dd1e1",
            ExpenseCategory::Other => "#a4de6c",
        }
    }

    /// Chart colour split into its red, green and blue channels.
    pub fn rgb(self) -> (u8, u8, u8) {
        let hex = &self.color()[1..];
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).unwrap_or(u8::MAX)
        };
        (channel(0..2), channel(2..4), channel(4..6))
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a category name is not part of the fixed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category `{}`", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for ExpenseCategory {
    type Err = UnknownCategory;

    /// Parses a category name case-insensitively.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim();
        ExpenseCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownCategory(needle.to_string()))
    }
}
