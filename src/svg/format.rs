//! Text and number formatting for SVG output.

/// Escape XML special characters in caller-supplied text.
#[must_use]
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Compact integer formatting for axis labels: `9999`, `15.5K`, `2.5M`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_number(n: i64) -> String {
    let abs = n.unsigned_abs();
    if abs >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if abs >= 10_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Data value as shown in tooltips and labels: whole numbers without a
/// fractional part, everything else with at most two decimals.
#[must_use]
pub fn format_value(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{rounded}")
}

/// Coordinate inside path data or attributes, rounded to 3 decimals.
///
/// Rounding hides trigonometric noise such as `cos(90°) * r = 6e-16`, and a
/// negative zero is always printed as `0`.
#[must_use]
pub fn format_coord(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{rounded}")
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
