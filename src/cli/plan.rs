use super::ui;
use crate::core::config::AppConfig;
use crate::core::ledger;
use crate::core::allocation::AllocationStatus;
use crate::core::planner::{self, WishlistPlan};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::Cell;

impl WishlistPlan {
    pub fn display_as_table(&self, currency: &str) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("#"),
            ui::header_cell("Item"),
            ui::header_cell(&format!("Price ({currency})")),
            ui::header_cell("Priority"),
            ui::header_cell("Monthly"),
            ui::header_cell("Status"),
            ui::header_cell("Affordable by"),
            ui::header_cell("EMI safety"),
        ]);

        for plan in &self.items {
            let item = &plan.item;
            let monthly = ui::format_money(plan.result.monthly_allocation, currency);
            let monthly = if item.allocation.is_override() {
                format!("{monthly} (manual)")
            } else {
                monthly
            };

            table.add_row(vec![
                Cell::new(item.id.value()),
                Cell::new(&item.name),
                ui::money_cell(item.price, currency),
                ui::priority_cell(item.priority),
                Cell::new(monthly),
                ui::status_cell(plan.result.status, plan.result.months_needed),
                ui::format_optional_cell(plan.target_date, |d| d.format("%b %Y").to_string()),
                ui::safety_cell(&plan.safety),
            ]);
        }

        let mut output = format!("{}\n\n", ui::style_text("Wishlist", ui::StyleType::Title));
        if self.items.is_empty() {
            output.push_str(&ui::style_text(
                "No wishlist items configured.",
                ui::StyleType::Subtle,
            ));
            return output;
        }
        output.push_str(&table.to_string());

        let total_style = if self.is_overcommitted() {
            ui::StyleType::Error
        } else {
            ui::StyleType::TotalValue
        };
        output.push_str(&format!(
            "\n\n{} {} of {} disposable income",
            ui::style_text("Total monthly set-aside:", ui::StyleType::TotalLabel),
            ui::style_text(
                &ui::format_money(self.total_monthly_allocation, currency),
                total_style
            ),
            ui::format_money(self.disposable_income, currency),
        ));
        output.push_str(&format!(
            "\n{}",
            ui::style_text(
                &format!(
                    "Savings of {} are counted in full for every item.",
                    ui::format_money(self.savings, currency)
                ),
                ui::StyleType::Subtle,
            )
        ));
        let loans = self.count_with_status(AllocationStatus::NeedsLoan);
        if loans > 0 {
            output.push_str(&format!(
                "\n{}",
                ui::style_text(
                    &format!("{loans} item(s) need a loan."),
                    ui::StyleType::Error
                )
            ));
        }
        if self.is_overcommitted() {
            output.push_str(&format!(
                "\n{}",
                ui::style_text(
                    "Combined allocations exceed disposable income.",
                    ui::StyleType::Error
                )
            ));
        }
        output
    }
}

pub fn build_plan(config: &AppConfig, today: NaiveDate) -> Result<WishlistPlan> {
    let summary = ledger::summarize(&config.incomes, &config.expenses);
    let items = config
        .wishlist_items()
        .context("Failed to build wishlist items")?;
    Ok(planner::plan_wishlist(
        &summary,
        config.savings,
        &items,
        &config.safety,
        today,
    ))
}

pub fn run(config: &AppConfig) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let plan = build_plan(config, today)?;
    println!("{}", plan.display_as_table(&config.currency));
    Ok(())
}
