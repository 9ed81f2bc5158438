//! Business insights
//!
//! Highest revenue and expense items plus both stores sorted by amount.
//! Insights need at least one item on each side; otherwise the caller gets
//! [`Insights::NeedMoreData`] and shows a warning instead.

use crate::display::line_items::format_line_item_table;
use crate::models::{Category, LineItem, LineItemStore};

/// Warning shown when insights are requested before any data exists
pub const NEED_MORE_DATA_MESSAGE: &str = "Please enter data in the Calculator tab first.";

/// The highest-amount entry of one store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopItem {
    pub item: LineItem,
    pub category: Category,
}

impl TopItem {
    /// Look up the top item of a store (None when empty)
    pub fn of(store: &LineItemStore) -> Option<Self> {
        store.max_item().map(|item| Self {
            item: item.clone(),
            category: store.category(),
        })
    }

    /// Format as "Highest Revenue Item: Sales - AED 1,200.00"
    pub fn format_line(&self, currency: &str) -> String {
        format!(
            "Highest {} Item: {} - {}",
            self.category.item_label(),
            self.item.name,
            self.item.amount.format_with_code(currency)
        )
    }
}

/// Insights for stores that both have data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightReport {
    pub top_revenue: TopItem,
    pub top_expense: TopItem,
    /// Revenue items by amount, highest first
    pub revenue_sorted: Vec<LineItem>,
    /// Expense items by amount, highest first
    pub expenses_sorted: Vec<LineItem>,
}

/// Insights or the "need more data" warning state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insights {
    NeedMoreData,
    Ready(InsightReport),
}

/// Build insights from the current stores
pub fn build_insights(revenue: &LineItemStore, expenses: &LineItemStore) -> Insights {
    if revenue.is_empty() || expenses.is_empty() {
        return Insights::NeedMoreData;
    }

    match (TopItem::of(revenue), TopItem::of(expenses)) {
        (Some(top_revenue), Some(top_expense)) => Insights::Ready(InsightReport {
            top_revenue,
            top_expense,
            revenue_sorted: revenue.sorted_descending().cloned().collect(),
            expenses_sorted: expenses.sorted_descending().cloned().collect(),
        }),
        _ => Insights::NeedMoreData,
    }
}

impl Insights {
    /// Whether insights are available
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Format the insights for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let report = match self {
            Self::NeedMoreData => return format!("Warning: {}\n", NEED_MORE_DATA_MESSAGE),
            Self::Ready(report) => report,
        };

        let mut output = String::new();
        output.push_str("Business Insights\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&report.top_revenue.format_line(currency));
        output.push('\n');
        output.push_str(&report.top_expense.format_line(currency));
        output.push_str("\n\n");

        output.push_str("Revenue (highest first)\n");
        output.push_str(&format_line_item_table(&report.revenue_sorted, currency));
        output.push_str("\n\n");
        output.push_str("Expenses (highest first)\n");
        output.push_str(&format_line_item_table(&report.expenses_sorted, currency));
        output.push('\n');

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn store(category: Category, items: &[(&str, i64)]) -> LineItemStore {
        let mut store = LineItemStore::new(category);
        for (name, units) in items {
            store.add(*name, Money::from_units(*units, 0)).unwrap();
        }
        store
    }

    #[test]
    fn test_empty_stores_need_more_data() {
        let insights = build_insights(
            &LineItemStore::new(Category::Revenue),
            &LineItemStore::new(Category::Expense),
        );
        assert_eq!(insights, Insights::NeedMoreData);
        assert!(!insights.is_ready());
    }

    #[test]
    fn test_one_empty_store_needs_more_data() {
        let insights = build_insights(
            &store(Category::Revenue, &[("Sales", 100)]),
            &LineItemStore::new(Category::Expense),
        );
        assert_eq!(insights, Insights::NeedMoreData);
    }

    #[test]
    fn test_ready_insights() {
        let revenue = store(Category::Revenue, &[("A", 50), ("B", 200), ("C", 200)]);
        let expenses = store(Category::Expense, &[("Rent", 500), ("Fuel", 80)]);

        let report = match build_insights(&revenue, &expenses) {
            Insights::Ready(report) => report,
            Insights::NeedMoreData => panic!("expected insights"),
        };

        assert_eq!(report.top_revenue.item.name, "B");
        assert_eq!(report.top_revenue.category, Category::Revenue);
        assert_eq!(report.top_expense.item.name, "Rent");

        let sorted: Vec<_> = report.revenue_sorted.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(sorted, vec!["B", "C", "A"]);
        let sorted: Vec<_> = report.expenses_sorted.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(sorted, vec!["Rent", "Fuel"]);

        // Stores keep insertion order
        assert_eq!(revenue.get(0).unwrap().name, "A");
    }

    #[test]
    fn test_top_item_line() {
        let top = TopItem::of(&store(Category::Expense, &[("Rent", 4500)])).unwrap();
        assert_eq!(top.format_line("AED"), "Highest Expense Item: Rent - AED 4,500.00");
    }

    #[test]
    fn test_format_terminal() {
        let warning = Insights::NeedMoreData.format_terminal("AED");
        assert!(warning.contains(NEED_MORE_DATA_MESSAGE));

        let insights = build_insights(
            &store(Category::Revenue, &[("Sales", 1200)]),
            &store(Category::Expense, &[("Rent", 500)]),
        );
        let text = insights.format_terminal("AED");
        assert!(text.contains("Highest Revenue Item: Sales - AED 1,200.00"));
        assert!(text.contains("Highest Expense Item: Rent - AED 500.00"));
        assert!(text.contains("Expenses (highest first)"));
    }
}
