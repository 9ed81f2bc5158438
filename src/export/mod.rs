//! Export module for Business Center
//!
//! Serializes the revenue and expense stores into a downloadable artifact.
//! The stores become two named tabular sections ("Revenue", "Expenses"),
//! each with `Item` and `Amount` columns in entry order, which a
//! [`TabularWriter`] encodes:
//! - XLSX: one worksheet per section (the default download)
//! - CSV: one sheet with a leading `Section` column
//!
//! A JSON snapshot of the whole report is also available.

pub mod csv;
pub mod json;
pub mod xlsx;

use std::path::Path;

use tracing::{info, warn};

use crate::error::{BusinessError, BusinessResult};
use crate::models::LineItemStore;

pub use self::csv::CsvWriter;
pub use self::json::{export_report_json, ReportSnapshot, EXPORT_SCHEMA_VERSION};
pub use self::xlsx::XlsxWriter;

/// Column headers shared by every section
pub const SECTION_HEADERS: [&str; 2] = ["Item", "Amount"];

/// One row of a section
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub item: String,
    pub amount: f64,
}

/// A named table handed to the tabular writer
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub name: String,
    pub rows: Vec<Row>,
}

impl Section {
    /// Build a section from a store, keeping insertion order
    pub fn from_store(store: &LineItemStore) -> Self {
        Self {
            name: store.category().section_name().to_string(),
            rows: store
                .iter()
                .map(|item| Row {
                    item: item.name.clone(),
                    amount: item.amount.as_f64(),
                })
                .collect(),
        }
    }
}

/// The Revenue and Expenses sections, in that order
pub fn sections(revenue: &LineItemStore, expenses: &LineItemStore) -> Vec<Section> {
    vec![Section::from_store(revenue), Section::from_store(expenses)]
}

/// Encodes named sections into a binary blob
pub trait TabularWriter {
    /// Short format name for messages ("xlsx", "csv")
    fn format_name(&self) -> &'static str;

    /// Encode the sections
    fn encode(&self, sections: &[Section]) -> BusinessResult<Vec<u8>>;
}

/// Produces export artifacts from the two stores
pub struct ReportExporter {
    writer: Box<dyn TabularWriter>,
}

impl ReportExporter {
    /// Create an exporter around any tabular writer
    pub fn new(writer: Box<dyn TabularWriter>) -> Self {
        Self { writer }
    }

    /// Exporter producing an XLSX workbook
    pub fn xlsx() -> Self {
        Self::new(Box::new(XlsxWriter::new()))
    }

    /// Exporter producing CSV
    pub fn csv() -> Self {
        Self::new(Box::new(CsvWriter::new()))
    }

    /// Encode both stores; the stores are only read
    ///
    /// Encoder failures come back as [`BusinessError::Export`] and are not
    /// retried.
    pub fn export(
        &self,
        revenue: &LineItemStore,
        expenses: &LineItemStore,
    ) -> BusinessResult<Vec<u8>> {
        let sections = sections(revenue, expenses);
        self.writer.encode(&sections).map_err(|e| {
            warn!(format = self.writer.format_name(), error = %e, "export failed");
            match e {
                BusinessError::Export(_) => e,
                other => BusinessError::Export(other.to_string()),
            }
        })
    }

    /// Encode both stores and write the result to `path`
    ///
    /// Nothing is written unless encoding succeeds.
    pub fn export_to_file(
        &self,
        revenue: &LineItemStore,
        expenses: &LineItemStore,
        path: &Path,
    ) -> BusinessResult<usize> {
        let bytes = self.export(revenue, expenses)?;
        std::fs::write(path, &bytes).map_err(|e| {
            BusinessError::Export(format!("Failed to write {}: {}", path.display(), e))
        })?;
        info!(
            format = self.writer.format_name(),
            path = %path.display(),
            bytes = bytes.len(),
            "export written"
        );
        Ok(bytes.len())
    }
}

impl Default for ReportExporter {
    fn default() -> Self {
        Self::xlsx()
    }
}
