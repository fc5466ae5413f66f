use super::error::InputError;
use super::safety::SafetyThresholds;
use super::wishlist::{ItemId, Priority, WishlistItem};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct IncomeEntry {
    pub source: String,
    pub amount: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ExpenseEntry {
    pub name: String,
    pub amount: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WishlistEntry {
    pub name: String,
    pub price: f64,
    pub priority: Priority,
    pub monthly_override: Option<f64>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub currency: String,
    #[serde(default)]
    pub savings: f64,
    #[serde(default)]
    pub incomes: Vec<IncomeEntry>,
    #[serde(default)]
    pub expenses: Vec<ExpenseEntry>,
    #[serde(default)]
    pub wishlist: Vec<WishlistEntry>,
    #[serde(default)]
    pub safety: SafetyThresholds,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "loancompass", "loancompass")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    /// Checks every amount in the config before any of it reaches the planner.
    pub fn validate(&self) -> Result<(), InputError> {
        if !self.savings.is_finite() || self.savings < 0.0 {
            return Err(InputError::InvalidSavings(self.savings));
        }
        for income in &self.incomes {
            check_amount("income", &income.source, income.amount)?;
        }
        for expense in &self.expenses {
            check_amount("expense", &expense.name, expense.amount)?;
        }
        self.safety.validate()?;
        self.wishlist_items()?;
        Ok(())
    }

    /// Builds validated wishlist items, numbered in the order they are listed.
    pub fn wishlist_items(&self) -> Result<Vec<WishlistItem>, InputError> {
        self.wishlist
            .iter()
            .zip(1u32..)
            .map(|(entry, id)| {
                let item =
                    WishlistItem::new(ItemId::new(id), &entry.name, entry.price, entry.priority)?;
                match entry.monthly_override {
                    Some(amount) => item.with_override(amount),
                    None => Ok(item),
                }
            })
            .collect()
    }
}

fn check_amount(kind: &'static str, label: &str, amount: f64) -> Result<(), InputError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(InputError::InvalidAmount {
            kind,
            label: label.to_string(),
            amount,
        });
    }
    Ok(())
}
