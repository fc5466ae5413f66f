//! Evaluates a whole wishlist against one snapshot of the user's finances.
use super::allocation::{self, AllocationResult, AllocationStatus};
use super::ledger::LedgerSummary;
use super::safety::{self, EmiSafety, SafetyThresholds};
use super::wishlist::WishlistItem;
use chrono::NaiveDate;
use tracing::debug;

/// Outcome for a single wishlist item.
#[derive(Debug, Clone)]
pub struct ItemPlan {
    pub item: WishlistItem,
    pub result: AllocationResult,
    pub safety: EmiSafety,
    /// Month in which the item becomes affordable, if it ever does without a loan.
    pub target_date: Option<NaiveDate>,
}

#[derive(Debug, Clone)]
pub struct WishlistPlan {
    pub items: Vec<ItemPlan>,
    pub disposable_income: f64,
    pub savings: f64,
    /// Sum of every item's monthly allocation.
    pub total_monthly_allocation: f64,
}

impl WishlistPlan {
    /// True when the combined set-asides exceed the monthly surplus.
    pub fn is_overcommitted(&self) -> bool {
        self.total_monthly_allocation > self.disposable_income.max(0.0)
    }

    pub fn count_with_status(&self, status: AllocationStatus) -> usize {
        self.items
            .iter()
            .filter(|p| p.result.status == status)
            .count()
    }
}

/// Evaluates every item independently. Savings are not drawn down between
/// items, each one is checked against the full balance.
pub fn plan_wishlist(
    summary: &LedgerSummary,
    savings: f64,
    items: &[WishlistItem],
    thresholds: &SafetyThresholds,
    today: NaiveDate,
) -> WishlistPlan {
    let disposable_income = summary.disposable_income;

    let items: Vec<ItemPlan> = items
        .iter()
        .map(|item| {
            let result = allocation::evaluate_item(disposable_income, savings, item);
            let safety = safety::assess(result.monthly_allocation, disposable_income, thresholds);
            debug!(
                item = %item.name,
                status = ?result.status,
                monthly = result.monthly_allocation,
                months = ?result.months_needed,
                safety = ?safety.level,
                "Evaluated wishlist item"
            );
            ItemPlan {
                item: item.clone(),
                result,
                safety,
                target_date: result.target_date(today),
            }
        })
        .collect();

    let total_monthly_allocation = items.iter().map(|p| p.result.monthly_allocation).sum();

    WishlistPlan {
        items,
        disposable_income,
        savings,
        total_monthly_allocation,
    }
}
