//! es-AR number handling: `.` groups thousands, `,` separates decimals.

use crate::utils::error::{CalcError, Result};
use regex::Regex;

/// Parses an amount typed the way the calculator's users write it
/// (`100.000`, `1.234,56`, `250000`). Dot groups must hold exactly three
/// digits and only one decimal comma is allowed.
pub fn parse_amount(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CalcError::invalid_input("amount", input, "amount is empty"));
    }

    let re = Regex::new(r"^(?:\d{1,3}(?:\.\d{3})+|\d+)(?:,\d+)?$").map_err(|e| {
        CalcError::ConfigError {
            message: format!("invalid amount pattern: {}", e),
        }
    })?;
    if !re.is_match(trimmed) {
        return Err(CalcError::invalid_input(
            "amount",
            input,
            "use digits, '.' for thousands and ',' for decimals (e.g. 1.234,56)",
        ));
    }

    trimmed
        .replace('.', "")
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|e| CalcError::invalid_input("amount", input, format!("not a number: {}", e)))
}

/// Formats `value` with two decimals and thousands separators.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }

    let fixed = format!("{:.2}", value.abs());
    let (int_part, dec_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{},{}", sign, grouped, dec_part)
}

pub fn format_percent(value: f64) -> String {
    if value.is_finite() {
        format!("{}%", format!("{:.2}", value).replace('.', ","))
    } else {
        "-".to_string()
    }
}
