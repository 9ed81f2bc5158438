//! Line item input shared by the report and export commands

use std::path::PathBuf;

use clap::Args;

use crate::error::BusinessResult;
use crate::models::Category;
use crate::services::ImportService;
use crate::session::Session;

/// Where a command takes its revenue and expense items from
#[derive(Args, Debug, Clone, Default)]
pub struct ItemArgs {
    /// Revenue item (repeatable)
    #[arg(short, long = "revenue", value_name = "NAME=AMOUNT")]
    pub revenue: Vec<String>,

    /// Expense item (repeatable)
    #[arg(short, long = "expense", value_name = "NAME=AMOUNT")]
    pub expense: Vec<String>,

    /// Read items from a JSON, YAML or CSV file
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,
}

impl ItemArgs {
    /// Build the session: file items first, then command-line items
    pub fn into_session(self) -> BusinessResult<Session> {
        let mut session = match &self.input {
            Some(path) => ImportService::load_file(path)?,
            None => Session::new(),
        };

        for (category, args) in [
            (Category::Revenue, &self.revenue),
            (Category::Expense, &self.expense),
        ] {
            for arg in args {
                let item = ImportService::parse_item_arg(arg)?;
                session.add_item(category, item.name, item.amount)?;
            }
        }

        Ok(session)
    }
}
