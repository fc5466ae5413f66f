//! EMI safety gauge: how much of the monthly surplus an allocation eats up.

use super::error::InputError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SafetyLevel {
    Safe,
    Stretch,
    Risky,
    NoDisposableIncome,
}

impl Display for SafetyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SafetyLevel::Safe => "Safe",
                SafetyLevel::Stretch => "Stretch",
                SafetyLevel::Risky => "Risky",
                SafetyLevel::NoDisposableIncome => "No disposable income",
            }
        )
    }
}

/// Upper bounds, in percent of disposable income, of the safe and stretch bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafetyThresholds {
    #[serde(default = "default_stretch_above")]
    pub stretch_above: f64,
    #[serde(default = "default_risky_above")]
    pub risky_above: f64,
}

fn default_stretch_above() -> f64 {
    30.0
}

fn default_risky_above() -> f64 {
    50.0
}

impl Default for SafetyThresholds {
    fn default() -> Self {
        SafetyThresholds {
            stretch_above: default_stretch_above(),
            risky_above: default_risky_above(),
        }
    }
}

impl SafetyThresholds {
    pub fn validate(&self) -> Result<(), InputError> {
        let ordered = self.stretch_above >= 0.0 && self.stretch_above <= self.risky_above;
        if !ordered || !self.risky_above.is_finite() {
            return Err(InputError::InvalidThresholds {
                stretch: self.stretch_above,
                risky: self.risky_above,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmiSafety {
    /// Allocation as a percentage of disposable income.
    pub ratio: Option<f64>,
    pub level: SafetyLevel,
}

pub fn assess(
    monthly_allocation: f64,
    disposable_income: f64,
    thresholds: &SafetyThresholds,
) -> EmiSafety {
    if disposable_income.is_nan() || disposable_income <= 0.0 {
        return EmiSafety {
            ratio: None,
            level: SafetyLevel::NoDisposableIncome,
        };
    }

    let ratio = monthly_allocation / disposable_income * 100.0;
    let level = if ratio > thresholds.risky_above {
        SafetyLevel::Risky
    } else if ratio > thresholds.stretch_above {
        SafetyLevel::Stretch
    } else {
        SafetyLevel::Safe
    };

    EmiSafety {
        ratio: Some(ratio),
        level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        let thresholds = SafetyThresholds::default();
        let level = |emi: f64| assess(emi, 10000.0, &thresholds).level;

        assert_eq!(level(0.0), SafetyLevel::Safe);
        assert_eq!(level(3000.0), SafetyLevel::Safe);
        assert_eq!(level(3001.0), SafetyLevel::Stretch);
        assert_eq!(level(5000.0), SafetyLevel::Stretch);
        assert_eq!(level(5001.0), SafetyLevel::Risky);
        assert_eq!(level(20000.0), SafetyLevel::Risky);
    }

    #[test]
    fn test_ratio_is_reported_in_percent() {
        let safety = assess(2500.0, 10000.0, &SafetyThresholds::default());
        assert_eq!(safety.ratio, Some(25.0));
    }

    #[test]
    fn test_no_disposable_income() {
        for income in [0.0, -100.0] {
            let safety = assess(0.0, income, &SafetyThresholds::default());
            assert_eq!(safety.level, SafetyLevel::NoDisposableIncome);
            assert!(safety.ratio.is_none());
        }
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = SafetyThresholds {
            stretch_above: 10.0,
            risky_above: 20.0,
        };
        assert!(thresholds.validate().is_ok());
        assert_eq!(assess(1500.0, 10000.0, &thresholds).level, SafetyLevel::Stretch);
        assert_eq!(assess(2500.0, 10000.0, &thresholds).level, SafetyLevel::Risky);
    }

    #[test]
    fn test_threshold_validation() {
        let inverted = SafetyThresholds {
            stretch_above: 60.0,
            risky_above: 40.0,
        };
        assert_eq!(
            inverted.validate(),
            Err(InputError::InvalidThresholds {
                stretch: 60.0,
                risky: 40.0
            })
        );

        let negative = SafetyThresholds {
            stretch_above: -1.0,
            risky_above: 40.0,
        };
        assert!(negative.validate().is_err());
    }
}
