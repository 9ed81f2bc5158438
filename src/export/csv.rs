//! CSV Export functionality
//!
//! CSV has no worksheets, so both sections share one table with a leading
//! `Section` column.

use ::csv::WriterBuilder;

use super::{Section, TabularWriter, SECTION_HEADERS};
use crate::error::{BusinessError, BusinessResult};

/// Encodes sections as a single CSV table
#[derive(Debug, Default)]
pub struct CsvWriter;

impl CsvWriter {
    pub fn new() -> Self {
        Self
    }
}

impl TabularWriter for CsvWriter {
    fn format_name(&self) -> &'static str {
        "csv"
    }

    fn encode(&self, sections: &[Section]) -> BusinessResult<Vec<u8>> {
        let mut writer = WriterBuilder::new().from_writer(Vec::new());

        writer
            .write_record(["Section", SECTION_HEADERS[0], SECTION_HEADERS[1]])
            .map_err(|e| BusinessError::Export(e.to_string()))?;

        for section in sections {
            for row in &section.rows {
                let amount = format!("{:.2}", row.amount);
                writer
                    .write_record([section.name.as_str(), row.item.as_str(), amount.as_str()])
                    .map_err(|e| BusinessError::Export(e.to_string()))?;
            }
        }

        writer
            .into_inner()
            .map_err(|e| BusinessError::Export(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::sections;
    use crate::models::{Category, LineItemStore, Money};

    #[test]
    fn test_export_csv() {
        let mut revenue = LineItemStore::new(Category::Revenue);
        revenue.add("Sales, retail", Money::from_units(1200, 0)).unwrap();
        let mut expenses = LineItemStore::new(Category::Expense);
        expenses.add("Rent", Money::from_cents(50_025)).unwrap();
        expenses.add("", Money::zero()).unwrap();

        let bytes = CsvWriter::new()
            .encode(&sections(&revenue, &expenses))
            .unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert_eq!(
            text,
            "Section,Item,Amount\n\
             Revenue,\"Sales, retail\",1200.00\n\
             Expenses,Rent,500.25\n\
             Expenses,,0.00\n"
        );
    }
}
