//! Text input widget
//!
//! A single-line text field with a cursor. The cursor counts characters, not
//! bytes, so item names may contain any Unicode text.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Which characters a field accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFilter {
    /// Any printable character
    #[default]
    Any,
    /// Digits and at most one '.'
    Decimal,
    /// Digits only
    Digits,
}

impl InputFilter {
    fn accepts(&self, content: &str, c: char) -> bool {
        match self {
            Self::Any => !c.is_control(),
            Self::Decimal => c.is_ascii_digit() || (c == '.' && !content.contains('.')),
            Self::Digits => c.is_ascii_digit(),
        }
    }
}

/// A simple text input widget
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position in characters
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Label
    pub label: String,
    /// Accepted characters
    pub filter: InputFilter,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set focused state
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Restrict accepted characters
    pub fn filter(mut self, filter: InputFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Set content and move the cursor to the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.char_count();
        self
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    ///
    /// Returns false if the filter rejects it.
    pub fn insert(&mut self, c: char) -> bool {
        if !self.filter.accepts(&self.content, c) {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
        true
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }
}

impl Widget for TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_width = if self.label.is_empty() {
            0
        } else {
            self.label.chars().count() + 2
        };

        let input_start = area.x + label_width as u16;

        if !self.label.is_empty() {
            let label_line = Line::from(vec![
                Span::styled(&self.label, Style::default().fg(Color::Cyan)),
                Span::raw(": "),
            ]);
            buf.set_line(area.x, area.y, &label_line, label_width as u16);
        }

        let text_style = if self.focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Yellow)
        };

        buf.set_string(input_start, area.y, &self.content, text_style);

        if self.focused {
            let cursor_x = input_start + self.cursor as u16;
            if cursor_x < area.x + area.width {
                let cursor_char = self.content.chars().nth(self.cursor).unwrap_or('_');
                buf.set_string(
                    cursor_x,
                    area.y,
                    cursor_char.to_string(),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_filter() {
        let mut input = TextInput::new().filter(InputFilter::Decimal);
        for c in "12a.5.0-".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "12.50");
    }

    #[test]
    fn test_digits_filter() {
        let mut input = TextInput::new().filter(InputFilter::Digits);
        assert!(input.insert('7'));
        assert!(!input.insert('.'));
        assert_eq!(input.value(), "7");
    }

    #[test]
    fn test_unicode_editing() {
        let mut input = TextInput::new().content("café");
        input.backspace();
        assert_eq!(input.value(), "caf");
        input.move_start();
        input.insert('é');
        assert_eq!(input.value(), "écaf");
        input.delete();
        assert_eq!(input.value(), "éaf");
        input.move_end();
        input.move_right();
        assert_eq!(input.cursor, 3);
    }

    #[test]
    fn test_render_unfocused_shows_label_and_content() {
        let area = Rect::new(0, 0, 12, 1);
        let mut buf = Buffer::empty(area);
        TextInput::new().label("Qty").content("42").render(area, &mut buf);

        let text: String = buf.content.iter().map(|cell| cell.symbol()).collect();
        assert_eq!(text.trim_end(), "Qty: 42");
    }
}
