//! Expense record model
//!
//! An `Expense` is an immutable value: fields are private and there are no
//! mutators, so a record can never change after construction. The only
//! producers are the validator and deserialization from the data file.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::money::Money;

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Free-form description, stored verbatim (empty is allowed)
    description: String,

    /// Non-negative amount; enforced at validation time, never after
    amount: Money,

    /// Calendar date of the expense, any past or future date
    date: NaiveDate,

    /// One of the fixed expense categories
    category: Category,
}

impl Expense {
    /// Create a new expense from already-validated fields
    pub(crate) fn new(
        description: impl Into<String>,
        amount: Money,
        date: NaiveDate,
        category: Category,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            date,
            category,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn category(&self) -> Category {
        self.category
    }
}
