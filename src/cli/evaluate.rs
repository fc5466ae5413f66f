use super::ui;
use crate::core::InputError;
use crate::core::allocation::{self, AllocationResult};
use crate::core::safety::{self, SafetyThresholds};
use crate::core::wishlist::{ItemId, Priority, WishlistItem};
use anyhow::{Context, Result};
use comfy_table::Cell;

/// A one-off evaluation described entirely on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluateRequest {
    pub disposable_income: f64,
    pub savings: f64,
    pub price: f64,
    pub priority: Priority,
    pub manual: Option<f64>,
    pub json: bool,
}

impl EvaluateRequest {
    fn item(&self) -> Result<WishlistItem> {
        let item = WishlistItem::new(ItemId::new(1), "item", self.price, self.priority)?;
        Ok(match self.manual {
            Some(amount) => item.with_override(amount)?,
            None => item,
        })
    }

    pub fn evaluate(&self) -> Result<AllocationResult> {
        if !self.savings.is_finite() || self.savings < 0.0 {
            anyhow::bail!(InputError::InvalidSavings(self.savings));
        }
        let item = self.item().context("Invalid wishlist item")?;
        Ok(allocation::evaluate_item(
            self.disposable_income,
            self.savings,
            &item,
        ))
    }
}

pub fn display_result(request: &EvaluateRequest, result: &AllocationResult) -> String {
    let safety = safety::assess(
        result.monthly_allocation,
        request.disposable_income,
        &SafetyThresholds::default(),
    );

    let mut table = ui::new_styled_table();
    table.add_row(vec![
        Cell::new("Monthly allocation"),
        Cell::new(format!("{:.2}", result.monthly_allocation)),
    ]);
    table.add_row(vec![
        Cell::new("Months needed"),
        ui::format_optional_cell(result.months_needed, |m| m.to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Status"),
        ui::status_cell(result.status, result.months_needed),
    ]);
    table.add_row(vec![Cell::new("EMI safety"), ui::safety_cell(&safety)]);
    table.to_string()
}

pub fn run(request: &EvaluateRequest) -> Result<()> {
    let result = request.evaluate()?;
    if request.json {
        let json = serde_json::to_string_pretty(&result).context("Failed to serialize result")?;
        println!("{json}");
    } else {
        println!("{}", display_result(request, &result));
    }
    Ok(())
}
