//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod export;
pub mod input;
pub mod report;

pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use input::ItemArgs;
pub use report::{handle_insights_command, handle_summary_command};
