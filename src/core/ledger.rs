//! Reduces income and expense entries to the figures the planner works with.

use super::config::{ExpenseEntry, IncomeEntry};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LedgerSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    /// Monthly surplus. Negative when expenses exceed income.
    pub disposable_income: f64,
    /// Disposable income as a percentage of total income, 0 without income.
    pub savings_rate: f64,
}

impl LedgerSummary {
    pub fn has_surplus(&self) -> bool {
        self.disposable_income > 0.0
    }
}

pub fn summarize(incomes: &[IncomeEntry], expenses: &[ExpenseEntry]) -> LedgerSummary {
    let total_income: f64 = incomes.iter().map(|i| i.amount).sum();
    let total_expenses: f64 = expenses.iter().map(|e| e.amount).sum();
    let disposable_income = total_income - total_expenses;
    let savings_rate = if total_income > 0.0 {
        disposable_income / total_income * 100.0
    } else {
        0.0
    };

    debug!(
        total_income,
        total_expenses, disposable_income, savings_rate, "Summarized ledger"
    );

    LedgerSummary {
        total_income,
        total_expenses,
        disposable_income,
        savings_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn income(source: &str, amount: f64) -> IncomeEntry {
        IncomeEntry {
            source: source.to_string(),
            amount,
        }
    }

    fn expense(name: &str, amount: f64) -> ExpenseEntry {
        ExpenseEntry {
            name: name.to_string(),
            amount,
        }
    }

    #[test]
    fn test_summarize_surplus() {
        let summary = summarize(
            &[income("Salary", 60000.0), income("Freelance", 15000.0)],
            &[expense("Rent", 18000.0), expense("Groceries", 7000.0)],
        );
        assert_eq!(summary.total_income, 75000.0);
        assert_eq!(summary.total_expenses, 25000.0);
        assert_eq!(summary.disposable_income, 50000.0);
        assert!((summary.savings_rate - 66.666).abs() < 0.01);
        assert!(summary.has_surplus());
    }

    #[test]
    fn test_summarize_deficit() {
        let summary = summarize(&[income("Salary", 20000.0)], &[expense("Rent", 25000.0)]);
        assert_eq!(summary.disposable_income, -5000.0);
        assert_eq!(summary.savings_rate, -25.0);
        assert!(!summary.has_surplus());
    }

    #[test]
    fn test_summarize_without_income() {
        let summary = summarize(&[], &[expense("Rent", 1000.0)]);
        assert_eq!(summary.total_income, 0.0);
        assert_eq!(summary.disposable_income, -1000.0);
        assert_eq!(summary.savings_rate, 0.0);

        let empty = summarize(&[], &[]);
        assert_eq!(empty.disposable_income, 0.0);
        assert!(!empty.has_surplus());
    }
}
