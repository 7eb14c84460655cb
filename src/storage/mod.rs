//! Storage layer for the expense tracker
//!
//! An `ExpenseStore` owns the in-memory expense sequence and the data file
//! backing it. The sequence is append-only and kept in insertion order; the
//! entire sequence is rewritten to disk on every append.

pub mod file_io;

use std::path::PathBuf;

use crate::error::ExpenseResult;
use crate::models::Expense;

use file_io::{read_json, write_json_atomic};

/// On-disk shape of the expense file
#[derive(Debug, Default, serde::Deserialize)]
struct ExpenseData {
    expenses: Vec<Expense>,
}

/// Borrowed view of the same shape, used when writing
#[derive(serde::Serialize)]
struct ExpenseDataRef<'a> {
    expenses: &'a [Expense],
}

/// Owner of the expense sequence and its persisted file
pub struct ExpenseStore {
    path: PathBuf,
    expenses: Vec<Expense>,
}

impl ExpenseStore {
    /// Create an empty store backed by the given data file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            expenses: Vec::new(),
        }
    }

    /// Load expenses from disk, preserving their order
    ///
    /// An absent file is not an error; the store simply starts empty. On an
    /// unreadable or undecodable file the in-memory sequence is left empty
    /// and the failure is reported.
    pub fn load(&mut self) -> ExpenseResult<()> {
        self.expenses.clear();
        let data: ExpenseData = read_json(&self.path)?;
        self.expenses = data.expenses;
        Ok(())
    }

    /// Append an expense and persist the whole sequence
    ///
    /// On a save failure the in-memory append is not rolled back, so memory
    /// and disk can diverge until the next successful save.
    pub fn append(&mut self, expense: Expense) -> ExpenseResult<()> {
        self.expenses.push(expense);
        self.save()
    }

    /// Get all expenses in insertion order
    pub fn all(&self) -> &[Expense] {
        &self.expenses
    }

    /// Number of expenses currently in memory
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Check whether the store holds no expenses
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    fn save(&self) -> ExpenseResult<()> {
        let data = ExpenseDataRef {
            expenses: &self.expenses,
        };
        write_json_atomic(&self.path, &data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExpenseError;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn expense(description: &str, cents: i64) -> Expense {
        Expense::new(
            description,
            Money::from_cents(cents),
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            Category::Food,
        )
    }

    fn create_test_store() -> (TempDir, ExpenseStore) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.dat");
        (temp_dir, ExpenseStore::new(path))
    }

    #[test]
    fn test_load_nonexistent_file_starts_empty() {
        let (_temp_dir, mut store) = create_test_store();
        store.load().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_append_then_all() {
        let (_temp_dir, mut store) = create_test_store();
        store.load().unwrap();

        store.append(expense("Coffee", 350)).unwrap();
        store.append(expense("Lunch", 1200)).unwrap();

        let all = store.all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].description(), "Coffee");
        assert_eq!(all.last().unwrap().description(), "Lunch");
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let (temp_dir, mut store) = create_test_store();
        store.load().unwrap();

        store.append(expense("Coffee", 350)).unwrap();
        store.append(expense("Bus fare", 275)).unwrap();

        let mut store2 = ExpenseStore::new(temp_dir.path().join("expenses.dat"));
        store2.load().unwrap();

        assert_eq!(store2.len(), 2);
        assert_eq!(store.all(), store2.all());
    }

    #[test]
    fn test_load_corrupt_file_errors_and_stays_empty() {
        let (temp_dir, mut store) = create_test_store();
        std::fs::write(temp_dir.path().join("expenses.dat"), "garbage").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, ExpenseError::Load(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_failed_save_keeps_in_memory_append() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        // A data path nested under a regular file cannot be created
        let mut store = ExpenseStore::new(blocker.join("sub").join("expenses.dat"));

        let err = store.append(expense("Coffee", 350)).unwrap_err();
        assert!(matches!(err, ExpenseError::Save(_)));
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].description(), "Coffee");
    }

    #[test]
    fn test_reload_replaces_in_memory_contents() {
        let (temp_dir, mut store) = create_test_store();
        store.append(expense("Coffee", 350)).unwrap();

        // Another store against the same file persists a different sequence
        let mut store2 = ExpenseStore::new(temp_dir.path().join("expenses.dat"));
        store2.load().unwrap();
        store2.append(expense("Lunch", 1200)).unwrap();

        store.load().unwrap();
        assert_eq!(store.len(), 2);
    }
}
