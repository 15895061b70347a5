//! # Display Formatting
//!
//! Pure string helpers for rendering engine output. No business rules live
//! here; the calculation stages have already rounded every figure.
//!
//! ## Example
//!
//! ```rust
//! use cost_core::format::{format_currency, format_number, format_percent};
//! use cost_core::settings::DisplayConfig;
//!
//! let config = DisplayConfig::default();
//! assert_eq!(format_currency(1234567.5, &config), "₹12,34,567.50");
//! assert_eq!(format_number(1000000.0, &config), "10,00,000");
//! assert_eq!(format_percent(25.0, &config), "25.00%");
//! ```

use crate::settings::DisplayConfig;

/// Currency amount: symbol, grouped integer part, fixed decimals.
///
/// Negative amounts carry a leading `-`, unless they display as zero.
pub fn format_currency(value: f64, config: &DisplayConfig) -> String {
    let (negative, digits) = fixed_digits(value, config.decimal_places);
    let sign = if negative { "-" } else { "" };
    format!(
        "{}{}{}",
        sign,
        config.currency_symbol(),
        group_fixed(&digits, config.uses_indian_grouping())
    )
}

/// Count: rounded to a whole number, grouped, no decimals.
pub fn format_number(value: f64, config: &DisplayConfig) -> String {
    let (negative, digits) = fixed_digits(value, 0);
    let sign = if negative { "-" } else { "" };
    format!("{}{}", sign, group_fixed(&digits, config.uses_indian_grouping()))
}

/// Percentage: fixed decimals followed by `%`.
pub fn format_percent(value: f64, config: &DisplayConfig) -> String {
    let (negative, digits) = fixed_digits(value, config.decimal_places);
    let sign = if negative { "-" } else { "" };
    format!("{}{}%", sign, digits)
}

/// Render `|value|` with `places` decimals, rounding halves away from zero.
///
/// Returns whether a minus sign is needed alongside the digits.
fn fixed_digits(value: f64, places: u32) -> (bool, String) {
    let scale = 10f64.powi(places as i32);
    let rounded = (value.abs() * scale).round() / scale;
    let digits = format!("{:.*}", places as usize, rounded);
    let negative = value < 0.0 && digits.chars().any(|c| c.is_ascii_digit() && c != '0');
    (negative, digits)
}

/// Insert grouping separators into the integer part of a fixed-point string.
fn group_fixed(fixed: &str, indian: bool) -> String {
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed, None),
    };

    let grouped = if indian {
        group_indian(int_part)
    } else {
        group_by(int_part, 3)
    };

    match frac_part {
        Some(f) => format!("{}.{}", grouped, f),
        None => grouped,
    }
}

/// Western grouping: every `size` digits from the right.
fn group_by(digits: &str, size: usize) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / size);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % size == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Indian grouping: last three digits, then pairs (12,34,567).
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    format!("{},{}", group_by(head, 2), tail)
}
