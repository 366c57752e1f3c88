//! Value formatting for pt-BR report text.

use radref_core::models::{Field, Value};

/// Format a number with a comma decimal separator and no trailing zeros
/// (`8`, `1,5`, `0,004`). Uses the shortest decimal that reads back as `n`,
/// so large and small answers are shown as entered.
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    format!("{n}").replace('.', ",")
}

/// Format with a fixed number of decimals (derived values).
pub fn format_fixed(n: f64, decimals: u8) -> String {
    format!("{:.*}", usize::from(decimals), n).replace('.', ",")
}

pub fn with_unit(text: String, unit: Option<&str>) -> String {
    match unit {
        Some(unit) if unit == "%" => format!("{text}%"),
        Some(unit) => format!("{text} {unit}"),
        None => text,
    }
}

/// Report text for one answer: the option label for codes (raw code when the
/// field does not list it), the formatted number plus unit otherwise.
pub fn display_value(field: &Field, value: &Value) -> String {
    match value {
        Value::Code(code) => field.domain.label_of(code).unwrap_or(code).to_string(),
        Value::Number(n) => with_unit(format_number(*n), field.unit.as_deref()),
    }
}

/// Terminate `text` with exactly one full stop.
pub fn sentence(text: &str) -> String {
    let body = text.trim().trim_end_matches('.');
    format!("{body}.")
}

/// Collapse template whitespace: single spaces within lines, no blank lines.
pub fn tidy(text: &str) -> String {
    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
