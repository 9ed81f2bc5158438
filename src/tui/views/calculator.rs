//! Calculator view
//!
//! The input form on the left; the summary and the Revenue vs Expenses vs
//! Profit bar chart on the right.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::display::report::truncate;
use crate::models::Category;
use crate::reports::{Outcome, Summary};
use crate::tui::app::{App, FormField, InputMode};
use crate::tui::layout::CalculatorLayout;

const NAME_WIDTH: usize = 20;

/// Render the calculator tab
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = CalculatorLayout::new(area);
    let service = app.reports();
    let summary = service.summary();
    let bars = service.chart_bars();

    render_form(frame, app, layout.form);
    render_summary(frame, &summary, layout.summary);
    render_chart(frame, &bars, layout.chart);
}

/// Style for a field, highlighting the focused one
fn field_style(app: &App, field: FormField) -> Style {
    if app.focused_field() != Some(field) {
        return Style::default().fg(Color::White);
    }
    match app.input_mode {
        InputMode::Editing => Style::default().fg(Color::Black).bg(Color::Cyan),
        InputMode::Normal => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::REVERSED),
    }
}

/// Text shown for a field, the edit buffer while it is being edited
fn field_text(app: &App, field: FormField, fallback: String) -> String {
    if app.input_mode == InputMode::Editing && app.focused_field() == Some(field) {
        format!("{}_", app.input.value())
    } else {
        fallback
    }
}

fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let currency = app.settings.currency_code.as_str();
    let fields = app.fields();
    let mut lines: Vec<Line> = Vec::new();
    let mut focused_line = 0;

    for category in [Category::Revenue, Category::Expense] {
        let store = app.session.store(category);

        if !lines.is_empty() {
            lines.push(Line::from(""));
        }

        let count_field = FormField::ItemCount(category);
        if fields.get(app.focus) == Some(&count_field) {
            focused_line = lines.len();
        }
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} Items", category.item_label()),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   Number of items: "),
            Span::styled(
                format!(" {} ", field_text(app, count_field, store.len().to_string())),
                field_style(app, count_field),
            ),
        ]));

        for (i, item) in store.iter().enumerate() {
            let name_field = FormField::Name(category, i);
            let amount_field = FormField::Amount(category, i);
            if matches!(fields.get(app.focus), Some(f) if *f == name_field || *f == amount_field) {
                focused_line = lines.len();
            }

            let name = if item.name.is_empty() {
                format!("{} Item {}", category.item_label(), i + 1)
            } else {
                truncate(&item.name, NAME_WIDTH)
            };
            let name_style = if item.name.is_empty() && app.focused_field() != Some(name_field) {
                Style::default().fg(Color::DarkGray)
            } else {
                field_style(app, name_field)
            };

            lines.push(Line::from(vec![
                Span::raw(format!("{:>3}. ", i + 1)),
                Span::styled(
                    format!("{:<width$}", field_text(app, name_field, name), width = NAME_WIDTH),
                    name_style,
                ),
                Span::raw("  "),
                Span::styled(
                    field_text(app, amount_field, item.amount.format_with_code(currency)),
                    field_style(app, amount_field),
                ),
            ]));
        }

        lines.push(Line::from(Span::styled(
            format!(
                "     Total {}: {}",
                category.section_name(),
                store.total().format_with_code(currency)
            ),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let block = Block::default()
        .title(" Enter Business Data ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    // Keep the focused row visible
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = (focused_line + 1).saturating_sub(visible);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((scroll as u16, 0));

    frame.render_widget(paragraph, area);
}

fn render_summary(frame: &mut Frame, summary: &Summary, area: Rect) {
    let outcome_color = match summary.outcome {
        Outcome::Profit { .. } => Color::Green,
        Outcome::Loss { .. } => Color::Red,
    };

    let lines = vec![
        Line::from(summary.revenue_line.as_str()),
        Line::from(summary.expense_line.as_str()),
        Line::from(Span::styled(
            summary.outcome_line.as_str(),
            Style::default()
                .fg(outcome_color)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let block = Block::default()
        .title(" Summary ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_chart(frame: &mut Frame, bars: &[crate::reports::ChartBar], area: Rect) {
    let colors = [Color::Green, Color::Red, Color::Blue];

    let bars: Vec<Bar> = bars
        .iter()
        .zip(colors)
        .map(|(bar, color)| {
            // Bars cannot go below the axis; a loss keeps its signed label
            let color = if bar.value.is_negative() { Color::Red } else { color };
            Bar::default()
                .label(Line::from(bar.label))
                .value(bar.value.cents().max(0) as u64)
                .text_value(bar.text.clone())
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::White).bg(color))
        })
        .collect();

    let block = Block::default()
        .title(" Revenue vs Expenses vs Profit ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let bar_width = (area.width.saturating_sub(2) / 3)
        .saturating_sub(2)
        .clamp(3, 20);

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(2)
        .label_style(Style::default().fg(Color::White));

    frame.render_widget(chart, area);
}
