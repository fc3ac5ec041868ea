//! Text rendering of amounts, counts, and rates.
//!
//! These strings back the summary sheet and the column-width calculation,
//! and agree with the number formats applied in the detail sheet.

use crate::metrics::round_to_cents;
use crate::types::{FieldValue, ValueKind};

/// Insert `,` every three digits of an unsigned digit string
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// `R 1,500.00`
pub fn format_currency(amount: f64) -> String {
    let rounded = round_to_cents(amount);
    let fixed = format!("{:.2}", rounded.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}R {}.{}", sign, group_thousands(whole), cents)
}

/// `3,750`
pub fn format_count(count: i64) -> String {
    let sign = if count < 0 { "-" } else { "" };
    format!("{}{}", sign, group_thousands(&count.unsigned_abs().to_string()))
}

/// `2.00%`
pub fn format_percent(rate: f64) -> String {
    format!("{:.2}%", round_to_cents(rate))
}

/// The text a cell shows once its number format is applied
pub fn render_value(value: FieldValue<'_>, kind: ValueKind) -> String {
    match (value, kind) {
        (FieldValue::Text(text), _) => text.to_string(),
        (FieldValue::Number(n), ValueKind::Currency) => format_currency(n),
        (FieldValue::Number(n), ValueKind::Percent) => format_percent(n),
        (FieldValue::Number(n), ValueKind::Count) => format!("{}", n as i64),
        (FieldValue::Number(n), ValueKind::Text) => n.to_string(),
    }
}
