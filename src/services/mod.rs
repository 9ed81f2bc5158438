//! Service layer for Business Center
//!
//! The service layer sits between the presentation layer and the model,
//! turning external input into sessions and sessions into reports.

pub mod import;
pub mod report;

pub use import::{ImportService, InputFormat, SessionInput};
pub use report::ReportService;
