//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: tab bar, main panel, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Tab bar at the top
    pub tabs: Rect,
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tabs
                Constraint::Min(5),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            tabs: vertical[0],
            main: vertical[1],
            status_bar: vertical[2],
        }
    }
}

/// Layout for the calculator tab
pub struct CalculatorLayout {
    /// Revenue and expense rows
    pub form: Rect,
    /// Totals and outcome
    pub summary: Rect,
    /// Revenue vs Expenses vs Profit chart
    pub chart: Rect,
}

impl CalculatorLayout {
    /// Calculate calculator layout
    pub fn new(area: Rect) -> Self {
        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(55), // Form
                Constraint::Percentage(45), // Results
            ])
            .split(area);

        let results = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Summary
                Constraint::Min(8),    // Chart
            ])
            .split(horizontal[1]);

        Self {
            form: horizontal[0],
            summary: results[0],
            chart: results[1],
        }
    }
}

/// Layout for the insights tab
pub struct InsightsLayout {
    /// Highest revenue and expense items
    pub top_items: Rect,
    /// Revenue sorted by amount
    pub revenue: Rect,
    /// Expenses sorted by amount
    pub expenses: Rect,
}

impl InsightsLayout {
    /// Calculate insights layout
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Top items
                Constraint::Min(5),    // Tables
            ])
            .split(area);

        let tables = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(vertical[1]);

        Self {
            top_items: vertical[0],
            revenue: tables[0],
            expenses: tables[1],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
