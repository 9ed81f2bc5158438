//! Status bar view
//!
//! Shows the edit buffer while editing, otherwise the outcome, the latest
//! status message and key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, FormField, InputMode};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.input_mode == InputMode::Editing {
        render_editing(frame, app, area);
        return;
    }

    let result = app.reports().aggregate();
    let currency = app.settings.currency_code.as_str();

    let mut spans = vec![];

    let (label, color) = if result.is_profit() {
        (" Profit: ", Color::Green)
    } else {
        (" Loss: ", Color::Red)
    };
    spans.push(Span::styled(label, Style::default().fg(Color::White)));
    spans.push(Span::styled(
        result.profit.abs().format_with_code(currency),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.text.as_str(),
            Style::default().fg(message.kind.color()),
        ));
    }

    let hints = " Tab:Next  Enter:Edit  +/-:Step  x:Export  ?:Help  q:Quit ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_editing(frame: &mut Frame, app: &App, area: Rect) {
    let label = match app.focused_field() {
        Some(FormField::ItemCount(category)) => {
            format!(" Number of {} items", category.item_label().to_lowercase())
        }
        Some(FormField::Name(category, i)) => {
            format!(" {} Item {} name", category.item_label(), i + 1)
        }
        Some(FormField::Amount(category, i)) => format!(
            " {} Item {} amount ({})",
            category.item_label(),
            i + 1,
            app.settings.currency_code
        ),
        None => String::new(),
    };

    let input = app.input.clone().label(label);
    frame.render_widget(input, area);
}
