//! Line item import service
//!
//! Loads revenue and expense items from a JSON, YAML or CSV file, or from
//! `NAME=AMOUNT` command-line arguments, and builds a [`Session`] from them.
//!
//! JSON and YAML files hold two lists:
//!
//! ```yaml
//! revenue:
//!   - name: Sales
//!     amount: 1200
//! expenses:
//!   - name: Rent
//!     amount: 500.25
//! ```
//!
//! CSV files use the columns `Category,Item,Amount`, one row per item.

use std::fs;
use std::path::Path;

use ::csv::{ReaderBuilder, StringRecord};
use serde::Deserialize;
use tracing::debug;

use crate::error::{BusinessError, BusinessResult};
use crate::models::{Category, LineItem, LineItemStore, Money};
use crate::session::Session;

/// One item as written in an input file
#[derive(Debug, Clone, Deserialize)]
pub struct InputItem {
    #[serde(default)]
    pub name: String,
    pub amount: f64,
}

impl InputItem {
    fn into_line_item(self) -> BusinessResult<LineItem> {
        let amount = Money::try_from_f64(self.amount).map_err(|e| {
            BusinessError::Import(format!("Item '{}': {}", self.name, e))
        })?;
        Ok(LineItem::new(self.name, amount))
    }
}

/// Raw contents of a JSON or YAML input file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionInput {
    #[serde(default)]
    pub revenue: Vec<InputItem>,
    #[serde(default)]
    pub expenses: Vec<InputItem>,
}

impl SessionInput {
    /// Validate every item and build a session
    pub fn into_session(self) -> BusinessResult<Session> {
        let revenue = self
            .revenue
            .into_iter()
            .map(InputItem::into_line_item)
            .collect::<BusinessResult<Vec<_>>>()?;
        let expenses = self
            .expenses
            .into_iter()
            .map(InputItem::into_line_item)
            .collect::<BusinessResult<Vec<_>>>()?;

        Ok(Session::from_stores(
            LineItemStore::from_items(Category::Revenue, revenue)?,
            LineItemStore::from_items(Category::Expense, expenses)?,
        ))
    }
}

/// Input file formats, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
    Csv,
}

impl InputFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> BusinessResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("csv") => Ok(Self::Csv),
            _ => Err(BusinessError::Import(format!(
                "Unsupported input file '{}' (expected .json, .yaml, .yml or .csv)",
                path.display()
            ))),
        }
    }
}

/// Service that turns external input into sessions
pub struct ImportService;

impl ImportService {
    /// Load a session from a file
    pub fn load_file(path: &Path) -> BusinessResult<Session> {
        let format = InputFormat::from_path(path)?;
        let contents = fs::read_to_string(path).map_err(|e| {
            BusinessError::Import(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let session = Self::parse_str(&contents, format)?;
        debug!(
            path = %path.display(),
            revenue = session.revenue().len(),
            expenses = session.expenses().len(),
            "input file loaded"
        );
        Ok(session)
    }

    /// Parse input text in the given format
    pub fn parse_str(contents: &str, format: InputFormat) -> BusinessResult<Session> {
        match format {
            InputFormat::Json => serde_json::from_str::<SessionInput>(contents)
                .map_err(|e| BusinessError::Import(format!("Invalid JSON input: {}", e)))?
                .into_session(),
            InputFormat::Yaml => serde_yaml::from_str::<SessionInput>(contents)
                .map_err(|e| BusinessError::Import(format!("Invalid YAML input: {}", e)))?
                .into_session(),
            InputFormat::Csv => Self::parse_csv(contents),
        }
    }

    fn parse_csv(contents: &str) -> BusinessResult<Session> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(::csv::Trim::All)
            .from_reader(contents.as_bytes());

        let mut session = Session::new();
        for (idx, record) in reader.records().enumerate() {
            // Header is line 1
            let line = idx + 2;
            let record = record
                .map_err(|e| BusinessError::Import(format!("Line {}: {}", line, e)))?;
            let (category, name, amount) = Self::parse_record(&record)
                .map_err(|e| BusinessError::Import(format!("Line {}: {}", line, e)))?;
            session.add_item(category, name, amount)?;
        }
        Ok(session)
    }

    fn parse_record(record: &StringRecord) -> Result<(Category, String, Money), String> {
        let category = match record.get(0).map(str::to_ascii_lowercase).as_deref() {
            Some("revenue") => Category::Revenue,
            Some("expense") | Some("expenses") => Category::Expense,
            Some(other) => return Err(format!("Unknown category '{}'", other)),
            None => return Err("Missing category".into()),
        };
        let name = record.get(1).unwrap_or_default().to_string();
        let amount_str = record.get(2).ok_or("Missing amount")?;
        let amount = Money::parse(amount_str).map_err(|e| e.to_string())?;
        Ok((category, name, amount))
    }

    /// Parse a `NAME=AMOUNT` argument
    ///
    /// The amount follows the last `=`, so names may contain `=`. An empty
    /// name is allowed.
    pub fn parse_item_arg(arg: &str) -> BusinessResult<LineItem> {
        let (name, amount) = arg.rsplit_once('=').ok_or_else(|| {
            BusinessError::Validation(format!("Expected NAME=AMOUNT, got '{}'", arg))
        })?;
        let amount = Money::parse(amount)
            .map_err(|e| BusinessError::Validation(format!("'{}': {}", arg, e)))?;
        let item = LineItem::new(name.trim(), amount);
        item.validate()?;
        Ok(item)
    }
}
