// SPDX-License-Identifier: MIT

//!
//! Helper functions
//!

/// Format a number with a fixed number of decimal places (e.g. `72.46`)
pub(crate) fn format_fixed(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// Format an amount of money with a leading `$`, thousands separators, and no
/// decimal places (e.g. `$12,345`)
pub(crate) fn format_currency(value: f64) -> String {
    let rounded = format!("{:.0}", value.abs());
    let sign = if value < 0.0 && rounded != "0" { "-" } else { "" };
    format!("{sign}${}", group_thousands(&rounded))
}

/// Format an axis tick with a leading `$` and no grouping (e.g. `$40000`)
pub(crate) fn format_dollar_tick(value: f64) -> String {
    format!("${value}")
}

/// Insert a `,` between every group of three digits
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Ease in and out with a cubic curve (`t` in `0..=1`)
pub(crate) fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}
