//! XLSX Export functionality
//!
//! Writes each section to its own worksheet with `Item` and `Amount` headers.

use rust_xlsxwriter::{Format, Workbook};

use super::{Section, TabularWriter, SECTION_HEADERS};
use crate::error::BusinessResult;

/// Encodes sections as an Excel workbook
#[derive(Debug, Default)]
pub struct XlsxWriter;

impl XlsxWriter {
    pub fn new() -> Self {
        Self
    }
}

impl TabularWriter for XlsxWriter {
    fn format_name(&self) -> &'static str {
        "xlsx"
    }

    fn encode(&self, sections: &[Section]) -> BusinessResult<Vec<u8>> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();
        let amount_format = Format::new().set_num_format("#,##0.00");

        for section in sections {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(section.name.as_str())?;

            for (col, header) in SECTION_HEADERS.iter().enumerate() {
                worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
            }
            worksheet.set_column_width(0, 30)?;
            worksheet.set_column_width(1, 15)?;

            for (i, row) in section.rows.iter().enumerate() {
                let excel_row = i as u32 + 1;
                worksheet.write_string(excel_row, 0, row.item.as_str())?;
                worksheet.write_number_with_format(excel_row, 1, row.amount, &amount_format)?;
            }
        }

        Ok(workbook.save_to_buffer()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{sections, ReportExporter, Row};
    use crate::models::{Category, LineItemStore, Money};
    use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};
    use std::io::Cursor;

    fn read_section(bytes: Vec<u8>, name: &str) -> Vec<(String, f64)> {
        let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes)).unwrap();
        let range = workbook.worksheet_range(name).unwrap();
        let mut rows = range.rows();

        let header: Vec<String> = rows.next().unwrap().iter().map(|c| c.to_string()).collect();
        assert_eq!(header, vec!["Item", "Amount"]);

        rows.map(|row| {
            let item = match &row[0] {
                Data::String(s) => s.clone(),
                Data::Empty => String::new(),
                other => panic!("unexpected item cell {:?}", other),
            };
            let amount = match &row[1] {
                Data::Float(f) => *f,
                Data::Int(i) => *i as f64,
                other => panic!("unexpected amount cell {:?}", other),
            };
            (item, amount)
        })
        .collect()
    }

    #[test]
    fn test_round_trip_expenses_section() {
        let mut revenue = LineItemStore::new(Category::Revenue);
        revenue.add("Sales", Money::from_units(1200, 0)).unwrap();
        let mut expenses = LineItemStore::new(Category::Expense);
        expenses.add("Rent", Money::from_units(500, 0)).unwrap();

        let bytes = ReportExporter::xlsx().export(&revenue, &expenses).unwrap();

        assert_eq!(
            read_section(bytes, "Expenses"),
            vec![("Rent".to_string(), 500.0)]
        );
    }

    #[test]
    fn test_rows_keep_entry_order() {
        let mut revenue = LineItemStore::new(Category::Revenue);
        revenue.add("Small", Money::from_cents(1_050)).unwrap();
        revenue.add("Large", Money::from_units(9_000, 0)).unwrap();
        let expenses = LineItemStore::new(Category::Expense);

        let bytes = XlsxWriter::new()
            .encode(&sections(&revenue, &expenses))
            .unwrap();

        assert_eq!(
            read_section(bytes.clone(), "Revenue"),
            vec![("Small".to_string(), 10.5), ("Large".to_string(), 9000.0)]
        );
        assert!(read_section(bytes, "Expenses").is_empty());
    }

    #[test]
    fn test_invalid_sheet_name_is_export_error() {
        let bad = Section {
            name: "Bad/Name".into(),
            rows: vec![Row {
                item: "x".into(),
                amount: 1.0,
            }],
        };
        let err = XlsxWriter::new().encode(&[bad]).unwrap_err();
        assert!(err.is_export());
    }
}
