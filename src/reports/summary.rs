//! Profit/loss summary
//!
//! Turns an [`AggregateResult`] into the three summary lines shown under the
//! input form. A negative profit is framed as a loss with unsigned figures.

use super::aggregate::AggregateResult;
use crate::models::Money;

/// Profit or loss framing of the bottom line
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// Profit of at least zero
    Profit { amount: Money, percent: f64 },
    /// Loss, with magnitude and percentage both unsigned
    Loss { amount: Money, percent: f64 },
}

impl Outcome {
    /// Frame a profit figure
    pub fn from_result(result: &AggregateResult) -> Self {
        if result.is_profit() {
            Self::Profit {
                amount: result.profit,
                percent: result.profit_percent,
            }
        } else {
            Self::Loss {
                amount: result.profit.abs(),
                percent: result.profit_percent.abs(),
            }
        }
    }

    /// Whether this is a loss
    pub fn is_loss(&self) -> bool {
        matches!(self, Self::Loss { .. })
    }

    /// Format as "Profit: AED 600.00 (60.00%)" or "Loss: AED 250.00 (25.00%)"
    pub fn format_line(&self, currency: &str) -> String {
        let (label, amount, percent) = match self {
            Self::Profit { amount, percent } => ("Profit", amount, percent),
            Self::Loss { amount, percent } => ("Loss", amount, percent),
        };
        format!(
            "{}: {} ({:.2}%)",
            label,
            amount.format_with_code(currency),
            percent
        )
    }
}

/// Summary lines for a calculation
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub revenue_line: String,
    pub expense_line: String,
    pub outcome_line: String,
    pub outcome: Outcome,
}

/// Build the summary for an aggregate result
pub fn build_summary(result: &AggregateResult, currency: &str) -> Summary {
    let outcome = Outcome::from_result(result);
    Summary {
        revenue_line: format!(
            "Total Revenue: {}",
            result.total_revenue.format_with_code(currency)
        ),
        expense_line: format!(
            "Total Expenses: {}",
            result.total_expenses.format_with_code(currency)
        ),
        outcome_line: outcome.format_line(currency),
        outcome,
    }
}

impl Summary {
    /// Format the summary for terminal display
    pub fn format_terminal(&self) -> String {
        format!(
            "{}\n{}\n{}\n",
            self.revenue_line, self.expense_line, self.outcome_line
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(revenue: i64, expenses: i64) -> AggregateResult {
        let total_revenue = Money::from_units(revenue, 0);
        let total_expenses = Money::from_units(expenses, 0);
        let profit = total_revenue - total_expenses;
        let profit_percent = if revenue > 0 {
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

    #[test]
    fn test_profit_summary() {
        let summary = build_summary(&result(1000, 400), "AED");
        assert_eq!(summary.revenue_line, "Total Revenue: AED 1,000.00");
        assert_eq!(summary.expense_line, "Total Expenses: AED 400.00");
        assert_eq!(summary.outcome_line, "Profit: AED 600.00 (60.00%)");
        assert!(!summary.outcome.is_loss());
    }

    #[test]
    fn test_loss_uses_magnitude() {
        let summary = build_summary(&result(1000, 1250), "AED");
        match summary.outcome {
            Outcome::Loss { amount, percent } => {
                assert_eq!(amount, Money::from_units(250, 0));
                assert!((percent - 25.0).abs() < 1e-9);
            }
            other => panic!("expected loss, got {:?}", other),
        }
        assert_eq!(summary.outcome_line, "Loss: AED 250.00 (25.00%)");
        assert!(!summary.outcome_line.contains('-'));
    }

    #[test]
    fn test_break_even_is_profit() {
        let summary = build_summary(&result(500, 500), "AED");
        assert_eq!(summary.outcome_line, "Profit: AED 0.00 (0.00%)");
    }

    #[test]
    fn test_loss_without_revenue() {
        let summary = build_summary(&result(0, 50), "AED");
        assert_eq!(summary.outcome_line, "Loss: AED 50.00 (0.00%)");
    }

    #[test]
    fn test_format_terminal() {
        let text = build_summary(&result(10, 4), "USD").format_terminal();
        assert_eq!(
            text,
            "Total Revenue: USD 10.00\nTotal Expenses: USD 4.00\nProfit: USD 6.00 (60.00%)\n"
        );
    }
}
