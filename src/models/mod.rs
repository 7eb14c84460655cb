//! Core data models for the expense tracker
//!
//! This module contains the data structures that represent the expense
//! domain: the expense record, its amount, and the category set.

pub mod category;
pub mod expense;
pub mod money;

pub use category::{Category, ParseCategoryError};
pub use expense::Expense;
pub use money::{Money, MoneyParseError};
