//! Reports module for Business Center
//!
//! Derived views over the revenue and expense stores: aggregate totals,
//! the profit/loss summary and the top-item insights.

pub mod aggregate;
pub mod insights;
pub mod summary;

pub use aggregate::{aggregate, AggregateResult, ChartBar};
pub use insights::{build_insights, InsightReport, Insights, TopItem, NEED_MORE_DATA_MESSAGE};
pub use summary::{build_summary, Outcome, Summary};
