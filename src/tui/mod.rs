//! Terminal User Interface module
//!
//! This module provides the interactive calculator for Business Center
//! using ratatui: a Calculator tab for entering revenue and expense items
//! with a live summary and bar chart, and a Business Insights tab.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
