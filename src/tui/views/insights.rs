//! Business insights view
//!
//! Highest revenue and expense items, and both categories sorted by amount.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};

use crate::models::LineItem;
use crate::reports::{Insights, NEED_MORE_DATA_MESSAGE};
use crate::tui::app::App;
use crate::tui::layout::InsightsLayout;

/// Render the insights tab
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let currency = app.settings.currency_code.as_str();

    let report = match app.reports().insights() {
        Insights::Ready(report) => report,
        Insights::NeedMoreData => {
            render_warning(frame, area);
            return;
        }
    };

    let layout = InsightsLayout::new(area);

    let lines = vec![
        Line::from(Span::styled(
            report.top_revenue.format_line(currency),
            Style::default().fg(Color::Green),
        )),
        Line::from(Span::styled(
            report.top_expense.format_line(currency),
            Style::default().fg(Color::Red),
        )),
    ];
    let block = Block::default()
        .title(" Key Insights ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(Paragraph::new(lines).block(block), layout.top_items);

    render_sorted_table(
        frame,
        " Revenue (highest first) ",
        &report.revenue_sorted,
        currency,
        layout.revenue,
    );
    render_sorted_table(
        frame,
        " Expenses (highest first) ",
        &report.expenses_sorted,
        currency,
        layout.expenses,
    );
}

fn render_warning(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Business Insights ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let paragraph = Paragraph::new(Line::from(Span::styled(
        NEED_MORE_DATA_MESSAGE,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )))
    .block(block)
    .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn render_sorted_table(
    frame: &mut Frame,
    title: &str,
    items: &[LineItem],
    currency: &str,
    area: Rect,
) {
    let rows: Vec<Row> = items
        .iter()
        .map(|item| {
            let name = if item.name.is_empty() {
                Cell::from("(unnamed)").style(Style::default().fg(Color::DarkGray))
            } else {
                Cell::from(item.name.clone())
            };
            Row::new(vec![name, Cell::from(item.amount.format_with_code(currency))])
        })
        .collect();

    let header = Row::new(vec![
        Cell::from("Item").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Amount").style(Style::default().add_modifier(Modifier::BOLD)),
    ]);

    let widths = [Constraint::Min(12), Constraint::Length(18)];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(title.to_string())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(table, area);
}
