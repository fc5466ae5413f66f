use super::ui;
use crate::core::config::AppConfig;
use crate::core::ledger::{self, LedgerSummary};
use anyhow::Result;
use comfy_table::Cell;

/// Renders income and expense entries followed by the monthly totals.
pub fn display_budget(config: &AppConfig, summary: &LedgerSummary) -> String {
    let currency = &config.currency;
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Type"),
        ui::header_cell("Entry"),
        ui::header_cell(&format!("Amount ({currency})")),
    ]);

    for income in &config.incomes {
        table.add_row(vec![
            Cell::new("Income"),
            Cell::new(&income.source),
            ui::money_cell(income.amount, currency),
        ]);
    }
    for expense in &config.expenses {
        table.add_row(vec![
            Cell::new("Expense"),
            Cell::new(&expense.name),
            ui::money_cell(expense.amount, currency),
        ]);
    }

    let mut totals = ui::new_styled_table();
    totals.add_row(vec![
        Cell::new("Total income"),
        ui::money_cell(summary.total_income, currency),
    ]);
    totals.add_row(vec![
        Cell::new("Total expenses"),
        ui::money_cell(summary.total_expenses, currency),
    ]);
    totals.add_row(vec![
        Cell::new("Disposable income"),
        ui::money_cell(summary.disposable_income, currency),
    ]);
    totals.add_row(vec![
        Cell::new("Savings rate"),
        ui::change_cell(summary.savings_rate),
    ]);
    totals.add_row(vec![
        Cell::new("Savings"),
        ui::money_cell(config.savings, currency),
    ]);

    let mut output = format!("{}\n\n", ui::style_text("Budget", ui::StyleType::Title));
    if config.incomes.is_empty() && config.expenses.is_empty() {
        output.push_str(&ui::style_text(
            "No income or expense entries configured.",
            ui::StyleType::Subtle,
        ));
    } else {
        output.push_str(&table.to_string());
    }
    output.push_str("\n\n");
    output.push_str(&totals.to_string());

    if !summary.has_surplus() {
        output.push_str("\n\n");
        output.push_str(&ui::style_text(
            "No disposable income available",
            ui::StyleType::Error,
        ));
    }
    output
}

pub fn run(config: &AppConfig) -> Result<()> {
    let summary = ledger::summarize(&config.incomes, &config.expenses);
    println!("{}", display_budget(config, &summary));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{ExpenseEntry, IncomeEntry};

    fn config() -> AppConfig {
        let mut config: AppConfig = serde_yaml::from_str("currency: \"INR\"").unwrap();
        config.savings = 20000.0;
        config.incomes.push(IncomeEntry {
            source: "Salary".to_string(),
            amount: 60000.0,
        });
        config.expenses.push(ExpenseEntry {
            name: "Rent".to_string(),
            amount: 18000.0,
        });
        config
    }

    #[test]
    fn test_display_budget() {
        let config = config();
        let summary = ledger::summarize(&config.incomes, &config.expenses);
        let output = display_budget(&config, &summary);

        assert!(output.contains("Salary"));
        assert!(output.contains("Rent"));
        assert!(output.contains("60,000 INR"));
        assert!(output.contains("42,000 INR"));
        assert!(output.contains("70.0%"));
        assert!(output.contains("20,000 INR"));
        assert!(!output.contains("No disposable income available"));
    }

    #[test]
    fn test_display_budget_without_surplus() {
        let mut config = config();
        config.expenses[0].amount = 75000.0;
        let summary = ledger::summarize(&config.incomes, &config.expenses);
        let output = display_budget(&config, &summary);

        assert!(output.contains("-15,000 INR"));
        assert!(output.contains("No disposable income available"));
    }

    #[test]
    fn test_display_empty_budget() {
        let config: AppConfig = serde_yaml::from_str("currency: \"USD\"").unwrap();
        let summary = ledger::summarize(&config.incomes, &config.expenses);
        let output = display_budget(&config, &summary);
        assert!(output.contains("No income or expense entries configured."));
    }
}
