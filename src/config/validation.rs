//! Configuration semantic validation.
//!
//! Parsing already enforces types; this checks value ranges that would make
//! charts render malformed output.

use std::fmt;

use super::ChartConfig;

/// One semantic problem in a configuration, addressed by its dotted key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub key: String,
    pub message: String,
}

impl ConfigIssue {
    fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.message)
    }
}

/// Reports every out-of-range value in `config`, in table order.
#[must_use]
pub fn validate_config(config: &ChartConfig) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();

    check_size(&mut issues, "bar", config.bar.width, config.bar.height);
    check_colors(&mut issues, "bar", &config.bar.colors);
    check_non_negative(&mut issues, "bar.padding", config.bar.padding);
    if !(0.0..1.0).contains(&config.bar.bar_spacing) {
        issues.push(ConfigIssue::new(
            "bar.bar_spacing",
            format!("must be in [0, 1), got {}", config.bar.bar_spacing),
        ));
    }

    check_size(&mut issues, "line", config.line.width, config.line.height);
    check_colors(&mut issues, "line", &config.line.colors);
    check_non_negative(&mut issues, "line.padding", config.line.padding);

    check_size(&mut issues, "pie", config.pie.width, config.pie.height);
    check_colors(&mut issues, "pie", &config.pie.colors);
    check_non_negative(&mut issues, "pie.padding", config.pie.padding);
    check_non_negative(&mut issues, "pie.explode_offset", config.pie.explode_offset);
    if !(0.0..1.0).contains(&config.pie.hole_size) {
        issues.push(ConfigIssue::new(
            "pie.hole_size",
            format!("must be in [0, 1), got {}", config.pie.hole_size),
        ));
    }

    check_size(&mut issues, "area", config.area.width, config.area.height);
    check_colors(&mut issues, "area", &config.area.colors);
    let margin = config.area.margin;
    for (side, value) in [
        ("top", margin.top),
        ("right", margin.right),
        ("bottom", margin.bottom),
        ("left", margin.left),
    ] {
        check_non_negative(&mut issues, &format!("area.margin.{side}"), value);
    }

    issues
}

fn check_size(issues: &mut Vec<ConfigIssue>, table: &str, width: f64, height: f64) {
    for (key, value) in [("width", width), ("height", height)] {
        if value <= 0.0 || !value.is_finite() {
            issues.push(ConfigIssue::new(
                format!("{table}.{key}"),
                format!("must be a positive number, got {value}"),
            ));
        }
    }
}

fn check_colors(issues: &mut Vec<ConfigIssue>, table: &str, colors: &[String]) {
    if colors.is_empty() {
        issues.push(ConfigIssue::new(
            format!("{table}.colors"),
            "must not be empty",
        ));
    }
}

fn check_non_negative(issues: &mut Vec<ConfigIssue>, key: &str, value: f64) {
    if value < 0.0 {
        issues.push(ConfigIssue::new(
            key,
            format!("must not be negative, got {value}"),
        ));
    }
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
