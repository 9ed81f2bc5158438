//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveTab, App, InputMode};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Resize(_, _) | Event::Tick => {}
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Any key closes a dialog
    if app.has_dialog() {
        app.close_dialog();
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Editing => handle_editing_key(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    app.clear_status();

    // Global keys (work on every tab)
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return;
        }
        KeyCode::Char('?') => {
            app.open_dialog(super::app::ActiveDialog::Help);
            return;
        }
        KeyCode::Char('1') => {
            app.switch_tab(ActiveTab::Calculator);
            return;
        }
        KeyCode::Char('2') => {
            app.switch_tab(ActiveTab::Insights);
            return;
        }
        KeyCode::Char('x') => {
            app.export();
            return;
        }
        _ => {}
    }

    if app.active_tab == ActiveTab::Calculator {
        handle_calculator_key(app, key);
    }
}

/// Handle keys on the calculator tab
fn handle_calculator_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::Char('j') | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Char('k') | KeyCode::Up => app.focus_prev(),
        KeyCode::Enter | KeyCode::Char('e') => app.start_editing(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.step_focused(true),
        KeyCode::Char('-') => app.step_focused(false),
        KeyCode::Char('r') => app.reset(),
        _ => {}
    }
}

/// Handle keys while editing a field
fn handle_editing_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_editing(),
        KeyCode::Enter => app.commit_editing(),
        KeyCode::Tab => {
            app.commit_editing();
            app.focus_next();
        }
        KeyCode::BackTab => {
            app.commit_editing();
            app.focus_prev();
        }
        KeyCode::Backspace => app.input.backspace(),
        KeyCode::Delete => app.input.delete(),
        KeyCode::Left => app.input.move_left(),
        KeyCode::Right => app.input.move_right(),
        KeyCode::Home => app.input.move_start(),
        KeyCode::End => app.input.move_end(),
        KeyCode::Char(c) => {
            app.input.insert(c);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BusinessPaths, Settings};
    use crate::models::{Category, Money};
    use crate::tui::app::{ActiveDialog, FormField};
    use tempfile::TempDir;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_keyboard_entry_flow() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BusinessPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let mut app = App::new(&settings, &paths);

        // Revenue name
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "Sales");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_field(), Some(FormField::Amount(Category::Revenue, 0)));

        // Revenue amount
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        type_str(&mut app, "1000");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.session.revenue().total(), Money::from_units(1000, 0));
        assert_eq!(app.session.revenue().get(0).unwrap().name, "Sales");
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_escape_discards_edit() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BusinessPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let mut app = App::new(&settings, &paths);

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "Sales");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.session.revenue().get(0).unwrap().name, "");
    }

    #[test]
    fn test_tabs_help_and_quit() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BusinessPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let mut app = App::new(&settings, &paths);

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.active_tab, ActiveTab::Insights);

        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.active_dialog, ActiveDialog::Help);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert!(!app.has_dialog());

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
