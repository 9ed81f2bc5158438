//! JSON Export functionality
//!
//! Exports the entered line items together with the computed aggregate as a
//! versioned snapshot.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{BusinessError, BusinessResult};
use crate::models::{LineItem, LineItemStore};
use crate::reports::{aggregate, AggregateResult};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Snapshot of one report
#[derive(Debug, Clone, Serialize)]
pub struct ReportSnapshot {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Currency code of every amount
    pub currency: String,

    /// Revenue items in entry order
    pub revenue: Vec<LineItem>,

    /// Expense items in entry order
    pub expenses: Vec<LineItem>,

    /// Totals and profit
    pub aggregate: AggregateResult,
}

impl ReportSnapshot {
    /// Capture the current stores
    pub fn from_stores(
        revenue: &LineItemStore,
        expenses: &LineItemStore,
        currency: &str,
    ) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            currency: currency.to_string(),
            revenue: revenue.items().to_vec(),
            expenses: expenses.items().to_vec(),
            aggregate: aggregate(revenue, expenses),
        }
    }
}

/// Export a report snapshot to JSON
pub fn export_report_json<W: Write>(
    revenue: &LineItemStore,
    expenses: &LineItemStore,
    currency: &str,
    writer: &mut W,
    pretty: bool,
) -> BusinessResult<()> {
    let snapshot = ReportSnapshot::from_stores(revenue, expenses, currency);

    if pretty {
        serde_json::to_writer_pretty(writer, &snapshot)
    } else {
        serde_json::to_writer(writer, &snapshot)
    }
    .map_err(|e| BusinessError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};

    #[test]
    fn test_export_report_json() {
        let mut revenue = LineItemStore::new(Category::Revenue);
        revenue.add("Sales", Money::from_units(1000, 0)).unwrap();
        let mut expenses = LineItemStore::new(Category::Expense);
        expenses.add("Rent", Money::from_units(400, 0)).unwrap();

        let mut output = Vec::new();
        export_report_json(&revenue, &expenses, "AED", &mut output, false).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["currency"], "AED");
        assert_eq!(value["revenue"][0]["name"], "Sales");
        assert_eq!(value["revenue"][0]["amount"], 100_000);
        assert_eq!(value["expenses"][0]["name"], "Rent");
        assert_eq!(value["aggregate"]["profit"], 60_000);
        assert_eq!(value["aggregate"]["profit_percent"], 60.0);
    }
}
