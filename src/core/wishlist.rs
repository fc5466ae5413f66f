//! Wishlist items and the knobs that decide how much goes towards them.

use super::error::InputError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Priority tier of a wishlist item. Each tier carries a fixed share of
/// disposable income used as the default monthly allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Share of disposable income put aside by default.
    pub fn weight(&self) -> f64 {
        match self {
            Priority::High => 0.5,
            Priority::Medium => 0.3,
            Priority::Low => 0.2,
        }
    }

    /// Default monthly allocation for this tier.
    pub fn share_of(&self, disposable_income: f64) -> f64 {
        disposable_income * self.weight()
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Priority::High => "High",
                Priority::Medium => "Medium",
                Priority::Low => "Low",
            }
        )
    }
}

impl FromStr for Priority {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(InputError::UnknownPriority(s.to_string())),
        }
    }
}

impl TryFrom<String> for Priority {
    type Error = InputError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// How the monthly allocation of an item is decided.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub enum AllocationMode {
    /// Priority-weighted share of disposable income.
    #[default]
    Default,
    /// A fixed amount chosen by the user.
    Override(f64),
}

impl AllocationMode {
    /// Monthly amount this mode yields for the given income and tier.
    pub fn resolve(&self, disposable_income: f64, priority: Priority) -> f64 {
        match self {
            AllocationMode::Default => priority.share_of(disposable_income),
            AllocationMode::Override(amount) => *amount,
        }
    }

    pub fn is_override(&self) -> bool {
        matches!(self, AllocationMode::Override(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct ItemId(u32);

impl ItemId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WishlistItem {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
    pub priority: Priority,
    pub allocation: AllocationMode,
}

impl WishlistItem {
    /// Builds an item using the priority-weighted allocation.
    ///
    /// Fails when `price` is not a positive, finite amount.
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        price: f64,
        priority: Priority,
    ) -> Result<Self, InputError> {
        let name = name.into();
        if !price.is_finite() || price <= 0.0 {
            return Err(InputError::InvalidPrice { name, price });
        }
        Ok(Self {
            id,
            name,
            price,
            priority,
            allocation: AllocationMode::Default,
        })
    }

    /// Replaces the default allocation with a fixed monthly amount.
    pub fn with_override(mut self, amount: f64) -> Result<Self, InputError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(InputError::InvalidOverride {
                name: self.name,
                amount,
            });
        }
        self.allocation = AllocationMode::Override(amount);
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_weights() {
        assert_eq!(Priority::High.weight(), 0.5);
        assert_eq!(Priority::Medium.weight(), 0.3);
        assert_eq!(Priority::Low.weight(), 0.2);
        assert_eq!(Priority::Medium.share_of(10000.0), 3000.0);
        assert_eq!(Priority::Low.share_of(10000.0), 2000.0);
        assert_eq!(Priority::Medium.share_of(3.0), 3.0 * 0.3);
        assert_eq!(Priority::Medium.share_of(3.0), 0.8999999999999999);
    }

    #[test]
    fn test_priority_parsing() {
        assert_eq!("High".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!(" medium ".parse::<Priority>().unwrap(), Priority::Medium);
        assert_eq!("LOW".parse::<Priority>().unwrap(), Priority::Low);
        assert_eq!(
            "Urgent".parse::<Priority>(),
            Err(InputError::UnknownPriority("Urgent".to_string()))
        );
    }

    #[test]
    fn test_priority_deserializes_case_insensitively() {
        let priorities: Vec<Priority> = serde_yaml::from_str("[High, medium, LOW]").unwrap();
        assert_eq!(
            priorities,
            vec![Priority::High, Priority::Medium, Priority::Low]
        );

        let err = serde_yaml::from_str::<Priority>("Someday").unwrap_err();
        assert!(err.to_string().contains("unknown priority `Someday`"));
    }

    #[test]
    fn test_allocation_mode_resolution() {
        assert_eq!(
            AllocationMode::Default.resolve(8000.0, Priority::High),
            4000.0
        );
        assert_eq!(
            AllocationMode::Override(1000.0).resolve(8000.0, Priority::High),
            1000.0
        );
        assert!(AllocationMode::Override(250.0).is_override());
        assert!(!AllocationMode::Default.is_override());
    }

    #[test]
    fn test_item_rejects_non_positive_price() {
        for price in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            let result = WishlistItem::new(ItemId::new(1), "Phone", price, Priority::High);
            assert!(
                matches!(result, Err(InputError::InvalidPrice { .. })),
                "price {price} should be rejected"
            );
        }
    }

    #[test]
    fn test_item_override_validation() {
        let item = WishlistItem::new(ItemId::new(7), "Bike", 12000.0, Priority::Low).unwrap();
        assert_eq!(item.allocation, AllocationMode::Default);

        let overridden = item.clone().with_override(1500.0).unwrap();
        assert_eq!(overridden.allocation, AllocationMode::Override(1500.0));

        let err = item.with_override(0.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "monthly override for `Bike` must be a positive amount, got 0"
        );
    }

    #[test]
    fn test_item_id_display() {
        assert_eq!(ItemId::new(3).to_string(), "#3");
        assert_eq!(ItemId::new(3).value(), 3);
    }
}
