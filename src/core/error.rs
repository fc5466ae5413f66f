use thiserror::Error;

/// Errors raised while validating user-supplied financial inputs.
///
/// These are caught at the boundary (config loading, command line parsing)
/// so the allocation engine itself can stay total.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("price of `{name}` must be a positive amount, got {price}")]
    InvalidPrice { name: String, price: f64 },
    #[error("monthly override for `{name}` must be a positive amount, got {amount}")]
    InvalidOverride { name: String, amount: f64 },
    #[error("unknown priority `{0}`, expected one of High, Medium, Low")]
    UnknownPriority(String),
    #[error("savings balance must be a non-negative amount, got {0}")]
    InvalidSavings(f64),
    #[error("amount of {kind} `{label}` must be a non-negative amount, got {amount}")]
    InvalidAmount {
        kind: &'static str,
        label: String,
        amount: f64,
    },
    #[error("safety thresholds must satisfy 0 <= stretch_above ({stretch}) <= risky_above ({risky})")]
    InvalidThresholds { stretch: f64, risky: f64 },
}
