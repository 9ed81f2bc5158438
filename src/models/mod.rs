//! Core data models for Business Center
//!
//! This module contains the data structures of the calculator: monetary
//! amounts, revenue/expense line items and the stores that hold them.

pub mod ids;
pub mod line_item;
pub mod money;

pub use ids::SessionId;
pub use line_item::{Category, LineItem, LineItemStore};
pub use money::{Money, MoneyParseError};
