//! Service layer for the expense tracker
//!
//! Sits between raw front-end input and the storage layer.

pub mod validate;

pub use validate::validate_expense;
