//! Expense category model
//!
//! Categories form a fixed, closed set. Modeling them as an enum means an
//! invalid category can never reach the store, whatever front end produces
//! the input.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Utilities,
    Entertainment,
    Health,
}

impl Category {
    /// Get all categories in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Food,
            Self::Transport,
            Self::Utilities,
            Self::Entertainment,
            Self::Health,
        ]
    }

    /// Get the display name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Utilities => "Utilities",
            Self::Entertainment => "Entertainment",
            Self::Health => "Health",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "transport" => Ok(Self::Transport),
            "utilities" => Ok(Self::Utilities),
            "entertainment" => Ok(Self::Entertainment),
            "health" => Ok(Self::Health),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

/// Error type for category parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError(String);

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let expected: Vec<&str> = Category::all().iter().map(|c| c.name()).collect();
        write!(
            f,
            "Unknown category '{}' (expected one of: {})",
            self.0,
            expected.join(", ")
        )
    }
}

impl std::error::Error for ParseCategoryError {}
