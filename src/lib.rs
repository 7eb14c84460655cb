//! expense-tracker - Simple personal expense tracker
//!
//! This library provides the core functionality for recording personal
//! expenses (description, amount, date, category) and persisting them
//! across sessions in a single data file.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data file path resolution
//! - `error`: Custom error types
//! - `models`: Core data models (expense, money, category)
//! - `services`: Input validation
//! - `storage`: JSON file storage layer
//! - `display`: Report formatting
//! - `cli`: Command handlers for the `expenses` binary

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
