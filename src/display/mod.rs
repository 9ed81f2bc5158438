//! Display formatting for terminal output
//!
//! Provides utilities for formatting line items, summaries and the bar chart
//! for terminal display.

pub mod line_items;
pub mod report;

pub use line_items::{format_line_item_table, format_store};
pub use report::{format_bar, format_chart, format_money_colored};
