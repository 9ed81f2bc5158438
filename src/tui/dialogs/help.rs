//! Help dialog
//!
//! Shows the keyboard shortcuts for the active tab

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{ActiveTab, App};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app.active_tab))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn section(title: &str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title.to_string(),
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Help lines for a tab
fn help_lines(tab: ActiveTab) -> Vec<Line<'static>> {
    let mut lines = vec![
        section("Global Keys"),
        Line::from(""),
        key_line("q", "Quit application"),
        key_line("?", "Show/hide help"),
        key_line("1", "Calculator tab"),
        key_line("2", "Business Insights tab"),
        key_line("x", "Export data to Excel"),
        Line::from(""),
    ];

    match tab {
        ActiveTab::Calculator => {
            lines.push(section("Calculator"));
            lines.push(Line::from(""));
            lines.push(key_line("Tab/j", "Next field"));
            lines.push(key_line("S-Tab/k", "Previous field"));
            lines.push(key_line("Enter/e", "Edit field"));
            lines.push(key_line("+/-", "Step item count or amount"));
            lines.push(key_line("r", "Clear the form"));
            lines.push(Line::from(""));
            lines.push(section("While Editing"));
            lines.push(Line::from(""));
            lines.push(key_line("Enter", "Apply"));
            lines.push(key_line("Esc", "Discard"));
            lines.push(key_line("Tab", "Apply and move on"));
        }
        ActiveTab::Insights => {
            lines.push(section("Business Insights"));
            lines.push(Line::from(""));
            lines.push(Line::from(
                "Shows the highest revenue and expense items and both lists sorted by amount.",
            ));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
