//! CLI command handlers
//!
//! Bridges clap argument parsing with the validation, storage, and display
//! layers. The handlers collect raw strings, call the core, and print the
//! result or the classified error message.

use crate::config::ExpensePaths;
use crate::display::format_report;
use crate::error::ExpenseResult;
use crate::models::Category;
use crate::services::validate_expense;
use crate::storage::ExpenseStore;

/// Validate the raw input, append the expense, and confirm
pub fn handle_add(
    store: &mut ExpenseStore,
    description: &str,
    raw_amount: &str,
    raw_date: &str,
    category: Category,
) -> ExpenseResult<()> {
    let expense = validate_expense(description, raw_amount, raw_date, category)?;
    store.append(expense)?;
    println!("Expense added successfully!");
    Ok(())
}

/// Print the full expense report
pub fn handle_list(store: &ExpenseStore) {
    if store.is_empty() {
        println!("No expenses recorded.");
    } else {
        print!("{}", format_report(store.all()));
    }
}

/// Show the resolved data file path
pub fn handle_config(paths: &ExpensePaths) {
    println!("Base directory: {}", paths.base_dir().display());
    println!("Data file: {}", paths.expenses_file().display());
}
