//! Display helpers for schedule figures. Presentation only; nothing here feeds back
//! into the engine.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount with `,` thousands separators and exactly two decimals.
///
/// Rounding is half away from zero, done in decimal so `0.125` becomes `0.13` rather
/// than whatever its binary approximation prints as.
pub fn format_currency(amount: f64) -> String {
    if let Some(text) = non_finite(amount) {
        return text.to_string();
    }

    match Decimal::from_f64(amount) {
        Some(value) => {
            let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            signed(&rounded, format!("{:.2}", rounded.abs()))
        }
        // Beyond Decimal's range; two decimals are meaningless at that magnitude anyway.
        None => {
            let digits = format!("{:.2}", amount.abs());
            let sign = if amount < 0.0 { "-" } else { "" };
            format!("{sign}{}", group_thousands(&digits))
        }
    }
}

/// Formats an amount in units of 10,000 (万) with no decimals, e.g. `"100万"`.
pub fn format_wan(amount: f64) -> String {
    if let Some(text) = non_finite(amount) {
        return format!("{text}万");
    }

    match Decimal::from_f64(amount / 10_000.0) {
        Some(value) => {
            let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
            let text = if rounded.is_zero() {
                "0".to_string()
            } else {
                rounded.normalize().to_string()
            };
            format!("{text}万")
        }
        None => format!("{:.0}万", amount / 10_000.0),
    }
}

fn non_finite(amount: f64) -> Option<&'static str> {
    if amount.is_nan() {
        Some("NaN")
    } else if amount == f64::INFINITY {
        Some("∞")
    } else if amount == f64::NEG_INFINITY {
        Some("-∞")
    } else {
        None
    }
}

fn signed(rounded: &Decimal, digits: String) -> String {
    let grouped = group_thousands(&digits);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Inserts `,` every three digits of the integer part of an unsigned decimal string.
fn group_thousands(digits: &str) -> String {
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(digits.len() + integer.len() / 3);
    for (index, ch) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}
