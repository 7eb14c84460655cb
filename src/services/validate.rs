//! Expense validation
//!
//! Turns the raw strings collected by a front end into a well-formed
//! `Expense`, or reports which field was at fault. Amount is checked before
//! date, so when both are invalid the amount error is the one reported.

use chrono::NaiveDate;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Expense, Money};

/// Fixed input pattern for dates (dd/MM/yyyy)
pub const DATE_INPUT_FORMAT: &str = "%d/%m/%Y";

/// Validate raw textual input into an expense record
///
/// The description is stored verbatim (empty included) and the category is
/// already a closed enum value, so neither can fail. No side effects; the
/// same input always yields the same result.
pub fn validate_expense(
    description: &str,
    raw_amount: &str,
    raw_date: &str,
    category: Category,
) -> ExpenseResult<Expense> {
    let amount =
        Money::parse(raw_amount).map_err(|_| ExpenseError::invalid_amount(raw_amount))?;

    // Negative amounts parse fine; rejecting them is a semantic check.
    if amount.is_negative() {
        return Err(ExpenseError::invalid_amount(raw_amount));
    }

    let date = NaiveDate::parse_from_str(raw_date, DATE_INPUT_FORMAT)
        .map_err(|_| ExpenseError::invalid_date(raw_date))?;

    Ok(Expense::new(description, amount, date, category))
}
