//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! It owns the session; every edit goes through [`Session`] and every derived
//! view is recomputed from it on the next draw.

use ratatui::style::Color;
use tracing::{info, warn};

use crate::config::{BusinessPaths, Settings};
use crate::export::ReportExporter;
use crate::models::{Category, Money};
use crate::services::ReportService;
use crate::session::Session;

use super::widgets::input::{InputFilter, TextInput};

/// Which tab is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTab {
    #[default]
    Calculator,
    Insights,
}

impl ActiveTab {
    pub const ALL: [ActiveTab; 2] = [ActiveTab::Calculator, ActiveTab::Insights];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Calculator => "Calculator",
            Self::Insights => "Business Insights",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Calculator => 0,
            Self::Insights => 1,
        }
    }
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
}

/// One focusable field of the calculator form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    ItemCount(Category),
    Name(Category, usize),
    Amount(Category, usize),
}

impl FormField {
    pub fn category(&self) -> Category {
        match self {
            Self::ItemCount(c) | Self::Name(c, _) | Self::Amount(c, _) => *c,
        }
    }

    fn filter(&self) -> InputFilter {
        match self {
            Self::ItemCount(_) => InputFilter::Digits,
            Self::Name(..) => InputFilter::Any,
            Self::Amount(..) => InputFilter::Decimal,
        }
    }
}

/// Severity of the status line message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Warning,
    Error,
}

impl StatusKind {
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

/// Message shown in the status bar until the next key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

/// Main application state
pub struct App<'a> {
    /// The revenue and expense stores being edited
    pub session: Session,

    /// Application settings
    pub settings: &'a Settings,

    /// Paths configuration
    pub paths: &'a BusinessPaths,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active tab
    pub active_tab: ActiveTab,

    /// Current input mode
    pub input_mode: InputMode,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Index into [`App::fields`] of the focused field
    pub focus: usize,

    /// Edit buffer while in editing mode
    pub input: TextInput,

    /// Status message to display
    pub status_message: Option<StatusMessage>,
}

impl<'a> App<'a> {
    /// Create a new App with the configured minimum of blank rows
    pub fn new(settings: &'a Settings, paths: &'a BusinessPaths) -> Self {
        Self::with_session(Session::with_rows(settings), settings, paths)
    }

    /// Create an App around an existing session
    pub fn with_session(session: Session, settings: &'a Settings, paths: &'a BusinessPaths) -> Self {
        Self {
            session,
            settings,
            paths,
            should_quit: false,
            active_tab: ActiveTab::default(),
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            focus: 0,
            input: TextInput::new(),
            status_message: None,
        }
    }

    /// Report service over the current session
    pub fn reports(&self) -> ReportService<'_> {
        ReportService::new(&self.session, self.settings)
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Switch to a different tab
    pub fn switch_tab(&mut self, tab: ActiveTab) {
        self.active_tab = tab;
        if tab == ActiveTab::Insights && !self.reports().insights().is_ready() {
            self.set_status(
                StatusKind::Warning,
                crate::reports::NEED_MORE_DATA_MESSAGE,
            );
        }
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Every focusable field in display order
    pub fn fields(&self) -> Vec<FormField> {
        let mut fields = Vec::new();
        for category in [Category::Revenue, Category::Expense] {
            fields.push(FormField::ItemCount(category));
            for i in 0..self.session.store(category).len() {
                fields.push(FormField::Name(category, i));
                fields.push(FormField::Amount(category, i));
            }
        }
        fields
    }

    /// The focused field
    pub fn focused_field(&self) -> Option<FormField> {
        self.fields().get(self.focus).copied()
    }

    /// Move focus to the next field, wrapping
    pub fn focus_next(&mut self) {
        let len = self.fields().len();
        if len > 0 {
            self.focus = (self.focus + 1) % len;
        }
    }

    /// Move focus to the previous field, wrapping
    pub fn focus_prev(&mut self) {
        let len = self.fields().len();
        if len > 0 {
            self.focus = (self.focus + len - 1) % len;
        }
    }

    fn clamp_focus(&mut self) {
        let len = self.fields().len();
        if self.focus >= len {
            self.focus = len.saturating_sub(1);
        }
    }

    /// Current text of a field, as the edit buffer starts it
    pub fn field_text(&self, field: FormField) -> String {
        let store = self.session.store(field.category());
        match field {
            FormField::ItemCount(_) => store.len().to_string(),
            FormField::Name(_, i) => store.get(i).map(|item| item.name.clone()).unwrap_or_default(),
            FormField::Amount(_, i) => store
                .get(i)
                .map(|item| plain_amount(item.amount))
                .unwrap_or_default(),
        }
    }

    /// Enter editing mode on the focused field
    pub fn start_editing(&mut self) {
        if let Some(field) = self.focused_field() {
            self.input = TextInput::new()
                .filter(field.filter())
                .content(self.field_text(field))
                .focused(true);
            self.input_mode = InputMode::Editing;
        }
    }

    /// Leave editing mode without applying the buffer
    pub fn cancel_editing(&mut self) {
        self.input.clear();
        self.input_mode = InputMode::Normal;
    }

    /// Apply the edit buffer to the focused field
    pub fn commit_editing(&mut self) {
        let text = self.input.value().trim().to_string();
        self.input_mode = InputMode::Normal;
        self.input.clear();

        let Some(field) = self.focused_field() else {
            return;
        };

        match field {
            FormField::ItemCount(category) => match text.parse::<usize>() {
                Ok(requested) => self.apply_item_count(category, requested),
                // Keep the rows already entered
                Err(_) => self.warn_item_count(category),
            },
            FormField::Name(category, i) => {
                let amount = self
                    .session
                    .store(category)
                    .get(i)
                    .map(|item| item.amount)
                    .unwrap_or_default();
                self.apply_item(category, i, text, amount);
            }
            FormField::Amount(category, i) => {
                let amount = if text.is_empty() {
                    Ok(Money::zero())
                } else {
                    Money::parse(&text)
                };
                match amount {
                    Ok(amount) => {
                        let name = self
                            .session
                            .store(category)
                            .get(i)
                            .map(|item| item.name.clone())
                            .unwrap_or_default();
                        self.apply_item(category, i, name, amount);
                    }
                    Err(e) => self.set_status(StatusKind::Error, e.to_string()),
                }
            }
        }
    }

    /// Step the focused count or amount up or down
    pub fn step_focused(&mut self, up: bool) {
        let Some(field) = self.focused_field() else {
            return;
        };

        match field {
            FormField::ItemCount(category) => {
                let current = self.session.store(category).len();
                let requested = if up {
                    current + 1
                } else {
                    current.saturating_sub(1)
                };
                self.apply_item_count(category, requested);
            }
            FormField::Amount(category, i) => {
                let Some(item) = self.session.store(category).get(i).cloned() else {
                    return;
                };
                let step = self.settings.amount_step;
                let amount = if up {
                    item.amount.checked_add(step).unwrap_or(item.amount)
                } else if item.amount > step {
                    item.amount - step
                } else {
                    Money::zero()
                };
                self.apply_item(category, i, item.name, amount);
            }
            FormField::Name(..) => {}
        }
    }

    fn apply_item_count(&mut self, category: Category, requested: usize) {
        let applied = self
            .session
            .set_item_count(category, requested, self.settings);
        if applied != requested {
            self.warn_item_count(category);
        }
        self.clamp_focus();
    }

    fn warn_item_count(&mut self, category: Category) {
        self.set_status(
            StatusKind::Warning,
            format!(
                "Number of {} items must be between {} and {}",
                category.item_label().to_lowercase(),
                self.settings.min_items,
                self.settings.max_items
            ),
        );
    }

    fn apply_item(&mut self, category: Category, index: usize, name: String, amount: Money) {
        if let Err(e) = self.session.set_item(category, index, name, amount) {
            self.set_status(StatusKind::Error, e.to_string());
        }
    }

    /// Clear the form back to blank rows
    pub fn reset(&mut self) {
        self.session.reset(self.settings);
        self.focus = 0;
        self.set_status(StatusKind::Info, "Form cleared");
    }

    /// Write the workbook to the exports directory
    pub fn export(&mut self) {
        let result = self.paths.ensure_directories().and_then(|_| {
            let service = self.reports();
            let path = service.default_export_path(self.paths);
            service
                .export_to(&ReportExporter::xlsx(), &path)
                .map(|_| path)
        });

        match result {
            Ok(path) => {
                info!(path = %path.display(), "download written from TUI");
                self.set_status(StatusKind::Success, format!("Exported to {}", path.display()));
            }
            Err(e) => {
                warn!(error = %e, "download failed");
                self.set_status(StatusKind::Error, e.to_string());
            }
        }
    }
}

/// Amount as typed into the form: digits, '.', no separators or sign
fn plain_amount(amount: Money) -> String {
    format!("{}.{:02}", amount.units(), amount.cents_part())
}
