//! Custom Askama template filters and display formatting helpers.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use nordic_core::Price;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Format a price for display the way the Russian locale renders rubles:
/// non-breaking-space thousands groups followed by the ruble sign,
/// e.g. `89 900 ₽`.
#[must_use]
pub fn format_rubles(price: Price) -> String {
    format!("{} ₽", group_thousands(price.rubles()))
}

/// Group a whole number into non-breaking-space separated thousands.
fn group_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    let lead = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && i % 3 == lead % 3 {
            grouped.push('\u{a0}');
        }
        grouped.push(c);
    }

    if amount < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
