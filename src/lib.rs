//! Business Center - revenue and expense calculator
//!
//! This library provides the core functionality for Business Center: enter
//! named revenue and expense line items, get totals and profit or loss, a
//! Revenue vs Expenses vs Profit chart, "highest item" insights, and a
//! spreadsheet export of the entered data.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Money, line items and the per-category item stores
//! - `session`: The pair of stores behind one form
//! - `reports`: Aggregation, the summary and the insights
//! - `export`: XLSX, CSV and JSON artifacts
//! - `services`: Input loading and report access for the presentation layer
//! - `display`: Terminal formatting for CLI output
//! - `cli`, `tui`: The two presentation layers
//!
//! # Example
//!
//! ```rust
//! use business_center::models::{Category, Money};
//! use business_center::reports::aggregate;
//! use business_center::session::Session;
//!
//! let mut session = Session::new();
//! session.add_item(Category::Revenue, "Sales", Money::from_units(1000, 0)).unwrap();
//! session.add_item(Category::Expense, "Rent", Money::from_units(400, 0)).unwrap();
//!
//! let result = aggregate(session.revenue(), session.expenses());
//! assert_eq!(result.profit, Money::from_units(600, 0));
//! assert_eq!(result.profit_percent, 60.0);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod session;
pub mod tui;

pub use error::BusinessError;
