//! Revenue/expense aggregation
//!
//! Derives totals and profit metrics from the two line item stores. The
//! result is a snapshot: it is recomputed whenever a store changes and never
//! mutated in place.

use serde::Serialize;

use crate::models::{LineItemStore, Money};

/// Totals and profit derived from a revenue store and an expense store
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AggregateResult {
    /// Sum of all revenue items
    pub total_revenue: Money,
    /// Sum of all expense items
    pub total_expenses: Money,
    /// Revenue minus expenses (negative for a loss)
    pub profit: Money,
    /// Profit as a percentage of revenue, 0 when there is no revenue
    pub profit_percent: f64,
}

/// One labelled bar handed to a chart renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartBar {
    /// Axis label ("Revenue", "Expenses", "Profit")
    pub label: &'static str,
    /// Bar height
    pub value: Money,
    /// Text shown on the bar, e.g. "AED 1,000.00"
    pub text: String,
}

/// Aggregate two stores into totals and profit metrics
///
/// Pure: the same stores always produce the same result.
pub fn aggregate(revenue: &LineItemStore, expenses: &LineItemStore) -> AggregateResult {
    let total_revenue = revenue.total();
    let total_expenses = expenses.total();
    let profit = total_revenue - total_expenses;

    let profit_percent = if total_revenue.is_positive() {
        profit.cents() as f64 / total_revenue.cents() as f64 * 100.0
    } else {
        0.0
    };

    AggregateResult {
        total_revenue,
        total_expenses,
        profit,
        profit_percent,
    }
}

impl AggregateResult {
    /// Whether the outcome counts as a profit (break-even included)
    pub fn is_profit(&self) -> bool {
        !self.profit.is_negative()
    }

    /// The three bars of the Revenue vs Expenses vs Profit chart
    pub fn chart_bars(&self, currency: &str) -> [ChartBar; 3] {
        [
            ChartBar {
                label: "Revenue",
                value: self.total_revenue,
                text: self.total_revenue.format_with_code(currency),
            },
            ChartBar {
                label: "Expenses",
                value: self.total_expenses,
                text: self.total_expenses.format_with_code(currency),
            },
            ChartBar {
                label: "Profit",
                value: self.profit,
                text: self.profit.format_with_code(currency),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn store(category: Category, amounts: &[i64]) -> LineItemStore {
        let mut store = LineItemStore::new(category);
        for (i, units) in amounts.iter().enumerate() {
            store
                .add(format!("Item {}", i + 1), Money::from_units(*units, 0))
                .unwrap();
        }
        store
    }

    #[test]
    fn test_profit_and_percent() {
        let result = aggregate(
            &store(Category::Revenue, &[600, 400]),
            &store(Category::Expense, &[400]),
        );
        assert_eq!(result.total_revenue, Money::from_units(1000, 0));
        assert_eq!(result.total_expenses, Money::from_units(400, 0));
        assert_eq!(result.profit, Money::from_units(600, 0));
        assert!((result.profit_percent - 60.0).abs() < 1e-9);
        assert!(result.is_profit());
    }

    #[test]
    fn test_zero_revenue_gives_zero_percent() {
        let result = aggregate(
            &store(Category::Revenue, &[]),
            &store(Category::Expense, &[50]),
        );
        assert_eq!(result.profit, Money::from_units(-50, 0));
        assert_eq!(result.profit_percent, 0.0);
        assert!(result.profit_percent.is_finite());
        assert!(!result.is_profit());
    }

    #[test]
    fn test_loss_percent_is_negative() {
        let result = aggregate(
            &store(Category::Revenue, &[1000]),
            &store(Category::Expense, &[1250]),
        );
        assert_eq!(result.profit, Money::from_units(-250, 0));
        assert!((result.profit_percent + 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_break_even_counts_as_profit() {
        let result = aggregate(
            &store(Category::Revenue, &[300]),
            &store(Category::Expense, &[100, 200]),
        );
        assert!(result.profit.is_zero());
        assert!(result.is_profit());
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let revenue = store(Category::Revenue, &[1200, 37]);
        let expenses = store(Category::Expense, &[999]);
        assert_eq!(aggregate(&revenue, &expenses), aggregate(&revenue, &expenses));
    }

    #[test]
    fn test_chart_bars() {
        let result = aggregate(
            &store(Category::Revenue, &[1500]),
            &store(Category::Expense, &[2000]),
        );
        let bars = result.chart_bars("AED");
        assert_eq!(bars[0].label, "Revenue");
        assert_eq!(bars[0].text, "AED 1,500.00");
        assert_eq!(bars[1].text, "AED 2,000.00");
        assert_eq!(bars[2].label, "Profit");
        assert_eq!(bars[2].value, Money::from_units(-500, 0));
        assert_eq!(bars[2].text, "AED -500.00");
    }
}
