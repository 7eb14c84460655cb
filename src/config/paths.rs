//! Path resolution for the expense data file
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_TRACKER_DATA_DIR` environment variable (if set)
//! 2. The current working directory (the data file is `expenses.dat`)

use std::path::PathBuf;

/// Name of the persisted expense file
pub const DATA_FILE_NAME: &str = "expenses.dat";

/// Manages the paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    base_dir: PathBuf,
}

impl ExpensePaths {
    /// Create a new ExpensePaths instance
    ///
    /// Honors the `EXPENSE_TRACKER_DATA_DIR` override, otherwise the data
    /// file lives next to wherever the program is run.
    pub fn new() -> Self {
        let base_dir = std::env::var("EXPENSE_TRACKER_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        Self { base_dir }
    }

    /// Create ExpensePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the expense data file
    pub fn expenses_file(&self) -> PathBuf {
        self.base_dir.join(DATA_FILE_NAME)
    }
}

impl Default for ExpensePaths {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expenses_file_under_base_dir() {
        let paths = ExpensePaths::with_base_dir(PathBuf::from("/tmp/somewhere"));
        assert_eq!(
            paths.expenses_file(),
            PathBuf::from("/tmp/somewhere/expenses.dat")
        );
    }

    #[test]
    fn test_base_dir_accessor() {
        let paths = ExpensePaths::with_base_dir(PathBuf::from("/data"));
        assert_eq!(paths.base_dir(), &PathBuf::from("/data"));
    }
}
