use crate::core::allocation::AllocationStatus;
use crate::core::safety::{EmiSafety, SafetyLevel};
use crate::core::wishlist::Priority;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    TotalLabel,
    TotalValue,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::TotalLabel => style(text).bold(),
        StyleType::TotalValue => style(text).green().bold(),
        StyleType::Error => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Formats an amount with thousands separators and no decimals, e.g. `1,250,000 INR`.
pub fn format_money(amount: f64, currency: &str) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}{grouped} {currency}")
}

/// Right aligned money cell.
pub fn money_cell(amount: f64, currency: &str) -> Cell {
    Cell::new(format_money(amount, currency)).set_alignment(CellAlignment::Right)
}

/// Formats an `Option<T>` into a `Cell`. `None` is displayed as "N/A".
pub fn format_optional_cell<T>(value: Option<T>, format_fn: impl Fn(T) -> String) -> Cell {
    value.map_or(
        Cell::new("N/A")
            .fg(Color::DarkGrey)
            .set_alignment(CellAlignment::Right),
        |v| Cell::new(format_fn(v)).set_alignment(CellAlignment::Right),
    )
}

pub fn priority_cell(priority: Priority) -> Cell {
    let color = match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::Green,
    };
    Cell::new(priority.to_string()).fg(color)
}

/// Status cell colored like a traffic light: affordable, saving, loan.
pub fn status_cell(status: AllocationStatus, months_needed: Option<u32>) -> Cell {
    if status.is_affordable() {
        return Cell::new(status.label()).fg(Color::Green);
    }
    match status {
        AllocationStatus::NeedsSavings => {
            let months = months_needed.unwrap_or_default();
            Cell::new(format!("{} ({months} months)", status.label())).fg(Color::Yellow)
        }
        _ => Cell::new(status.label())
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

pub fn safety_cell(safety: &EmiSafety) -> Cell {
    let color = match safety.level {
        SafetyLevel::Safe => Color::Green,
        SafetyLevel::Stretch => Color::Yellow,
        SafetyLevel::Risky | SafetyLevel::NoDisposableIncome => Color::Red,
    };
    let text = match safety.ratio {
        Some(ratio) => format!("{} ({ratio:.1}%)", safety.level),
        None => safety.level.to_string(),
    };
    Cell::new(text).fg(color)
}

/// Creates a cell for displaying a percentage with color coding by sign.
pub fn change_cell(change: f64) -> Cell {
    let text = format!("{change:.1}%");
    if change >= 0.0 {
        Cell::new(text)
            .fg(Color::Green)
            .set_alignment(CellAlignment::Right)
    } else {
        Cell::new(text)
            .fg(Color::Red)
            .set_alignment(CellAlignment::Right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0, "INR"), "0 INR");
        assert_eq!(format_money(999.4, "INR"), "999 INR");
        assert_eq!(format_money(1000.0, "USD"), "1,000 USD");
        assert_eq!(format_money(1234567.6, "USD"), "1,234,568 USD");
        assert_eq!(format_money(-25000.0, "EUR"), "-25,000 EUR");
        assert_eq!(format_money(-0.2, "EUR"), "0 EUR");
    }

    #[test]
    fn test_status_cell_content() {
        assert_eq!(
            status_cell(AllocationStatus::AffordableViaSavings, Some(0)).content(),
            "Affordable now (using savings)"
        );
        assert_eq!(
            status_cell(AllocationStatus::NeedsSavings, Some(17)).content(),
            "Needs savings (17 months)"
        );
        assert_eq!(
            status_cell(AllocationStatus::NeedsLoan, None).content(),
            "Needs loan"
        );
    }
}
