//! Number formatting utilities for human-readable display.
//!
//! Handles f64 values with magnitude-dependent decimal places, thousands
//! separators, and abbreviated suffixes for large dollar aggregates.

/// Formats a dollar aggregate with an abbreviated suffix above one million.
///
/// Header stats show totals as `$1.95T` or `$42.50B`; smaller values fall
/// back to a full figure with separators.
pub fn format_compact_usd(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1e12 {
        format!("${:.2}T", value / 1e12)
    } else if abs >= 1e9 {
        format!("${:.2}B", value / 1e9)
    } else if abs >= 1e6 {
        format!("${:.2}M", value / 1e6)
    } else {
        format!("${}", group_thousands(&format!("{value:.2}")))
    }
}

/// Formats a coin price with magnitude-dependent decimal places.
pub fn format_price(value: f64) -> String {
    let formatted = format!("{:.*}", decimal_places(value), value);
    format!("${}", group_thousands(&formatted))
}

/// Formats a signed percent change with an explicit `+` on gains.
pub fn format_signed_percent(value: f64) -> String {
    if value >= 0.0 {
        format!("+{value:.2}%")
    } else {
        format!("{value:.2}%")
    }
}

/// Formats a plain count with thousands separators.
pub fn format_count(value: u64) -> String {
    group_thousands(&value.to_string())
}

fn decimal_places(value: f64) -> usize {
    let abs = value.abs();
    if abs >= 1.0 || abs == 0.0 {
        return 2;
    }
    // keep two significant digits on sub-dollar prices
    let exponent = abs.log10().floor().abs() as usize;
    exponent + 1
}

/// Inserts comma separators into the integer part of an already formatted
/// number string.
fn group_thousands(formatted: &str) -> String {
    let (number, fraction) = match formatted.split_once('.') {
        Some((n, f)) => (n, Some(f)),
        None => (formatted, None),
    };
    let (sign, digits) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}
