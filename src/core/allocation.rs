//! Decides how much to set aside each month towards a wishlist item and
//! whether the item is affordable.
//!
//! Every call is independent: the savings balance is read, never drawn down,
//! so evaluating several items against the same snapshot lets each of them
//! see the full balance.

use super::wishlist::{AllocationMode, WishlistItem};
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AllocationStatus {
    AffordableViaSavings,
    AffordableNow,
    NeedsSavings,
    NeedsLoan,
}

impl AllocationStatus {
    /// Human readable label shown next to an item.
    pub fn label(&self) -> &'static str {
        match self {
            AllocationStatus::AffordableViaSavings => "Affordable now (using savings)",
            AllocationStatus::AffordableNow => "Affordable now",
            AllocationStatus::NeedsSavings => "Needs savings",
            AllocationStatus::NeedsLoan => "Needs loan",
        }
    }

    pub fn is_affordable(&self) -> bool {
        matches!(
            self,
            AllocationStatus::AffordableViaSavings | AllocationStatus::AffordableNow
        )
    }
}

impl Display for AllocationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationResult {
    pub monthly_allocation: f64,
    pub months_needed: Option<u32>,
    pub status: AllocationStatus,
}

impl AllocationResult {
    fn via_savings() -> Self {
        Self {
            monthly_allocation: 0.0,
            months_needed: Some(0),
            status: AllocationStatus::AffordableViaSavings,
        }
    }

    fn needs_loan() -> Self {
        Self {
            monthly_allocation: 0.0,
            months_needed: None,
            status: AllocationStatus::NeedsLoan,
        }
    }

    /// Month in which the item becomes affordable when counting from `from`.
    /// `None` when only a loan would cover it.
    pub fn target_date(&self, from: NaiveDate) -> Option<NaiveDate> {
        let months = self.months_needed?;
        from.checked_add_months(Months::new(months))
    }
}

/// Evaluates `item` using its own allocation mode.
pub fn evaluate_item(disposable_income: f64, savings: f64, item: &WishlistItem) -> AllocationResult {
    evaluate(disposable_income, savings, item, item.allocation)
}

/// Computes the monthly set-aside for `item` and classifies its affordability.
///
/// Rules are applied in order, first match wins:
///
/// 1. savings cover the price: nothing to set aside, affordable via savings;
/// 2. no disposable income: a loan is needed;
/// 3. one month of allocation covers the remaining gap: affordable now;
/// 4. otherwise the gap is saved over `ceil(gap / allocation)` months.
///
/// Negative or NaN savings count as zero. An allocation that is not a
/// positive finite amount (for example a zero override) can never close the
/// gap and resolves to [`AllocationStatus::NeedsLoan`]. This function never
/// panics and never yields infinite or NaN month counts.
pub fn evaluate(
    disposable_income: f64,
    savings: f64,
    item: &WishlistItem,
    mode: AllocationMode,
) -> AllocationResult {
    let savings = savings.max(0.0);

    if savings >= item.price {
        trace!(item = %item.name, savings, price = item.price, "Covered by savings");
        return AllocationResult::via_savings();
    }

    if disposable_income.is_nan() || disposable_income <= 0.0 {
        trace!(item = %item.name, disposable_income, "No disposable income");
        return AllocationResult::needs_loan();
    }

    let allocation = mode.resolve(disposable_income, item.priority);
    if !allocation.is_finite() || allocation <= 0.0 {
        trace!(item = %item.name, allocation, "Allocation cannot close the gap");
        return AllocationResult::needs_loan();
    }

    let remaining = item.price - savings;
    if allocation >= remaining {
        trace!(item = %item.name, allocation, remaining, "Affordable within a month");
        return AllocationResult {
            monthly_allocation: allocation,
            months_needed: Some(1),
            status: AllocationStatus::AffordableNow,
        };
    }

    let months = (remaining / allocation).ceil();
    if !months.is_finite() {
        trace!(item = %item.name, remaining, allocation, "Month count is undefined");
        return AllocationResult::needs_loan();
    }

    trace!(item = %item.name, allocation, remaining, months, "Needs savings");
    AllocationResult {
        monthly_allocation: allocation,
        // Float to int casts saturate at u32::MAX.
        months_needed: Some(months as u32),
        status: AllocationStatus::NeedsSavings,
    }
}
