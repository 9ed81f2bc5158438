//! Line item display formatting
//!
//! Formats line items as tables for terminal output.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{LineItem, LineItemStore};

#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format line items as a numbered table, in the order given
pub fn format_line_item_table(items: &[LineItem], currency: &str) -> String {
    if items.is_empty() {
        return "No items.".to_string();
    }

    let rows: Vec<ItemRow> = items
        .iter()
        .enumerate()
        .map(|(i, item)| ItemRow {
            position: i + 1,
            item: if item.name.is_empty() {
                "(unnamed)".to_string()
            } else {
                item.name.clone()
            },
            amount: item.amount.format_with_code(currency),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::single(2)).with(Alignment::right()));
    table.to_string()
}

/// Format a store in entry order with a total line
pub fn format_store(store: &LineItemStore, currency: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("{} Items\n", store.category().item_label()));
    output.push_str(&format_line_item_table(store.items(), currency));
    output.push('\n');
    output.push_str(&format!(
        "Total {}: {}\n",
        store.category().section_name(),
        store.total().format_with_code(currency)
    ));
    output
}
