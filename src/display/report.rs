//! Report formatting for expenses
//!
//! Renders expense records as human-readable report lines. Dates are
//! rendered with a two-digit year even though input dates carry four digits;
//! this input/output asymmetry is intentional and matches the report format
//! users already know.

use crate::models::Expense;

/// Output date pattern for report lines (dd/MM/yy)
pub const DATE_OUTPUT_FORMAT: &str = "%d/%m/%y";

/// Format a single expense as a report line
pub fn format_expense(expense: &Expense) -> String {
    format!(
        "Date: {}, Description: {}, Amount: {}, Category: {}",
        expense.date().format(DATE_OUTPUT_FORMAT),
        expense.description(),
        expense.amount(),
        expense.category()
    )
}

/// Format a sequence of expenses, one newline-terminated line per record
///
/// An empty sequence yields an empty string.
pub fn format_report(expenses: &[Expense]) -> String {
    let mut output = String::new();
    for expense in expenses {
        output.push_str(&format_expense(expense));
        output.push('\n');
    }
    output
}
