//! Number formatting for view models.

const PLACEHOLDER: &str = "-";

/// Fixed number of decimals, e.g. `2.4` at 2 decimals is `"2.40"`.
pub fn fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    format!("{value:.decimals$}")
}

/// Thousands-grouped with up to three decimals and no trailing zeros,
/// e.g. `14502.5` is `"14,502.5"`.
pub fn grouped(value: f64) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }

    let rounded = format!("{:.3}", value.abs());
    let (integer, fraction) = rounded
        .split_once('.')
        .unwrap_or((rounded.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::with_capacity(rounded.len() + integer.len() / 3 + 1);
    if value < 0.0 && (integer != "0" || !fraction.is_empty()) {
        out.push('-');
    }
    let digits = integer.len();
    for (idx, ch) in integer.chars().enumerate() {
        if idx > 0 && (digits - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Shortest representation of a raw reading, e.g. `450.0` is `"450"`.
pub fn plain(value: f64) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    value.to_string()
}
