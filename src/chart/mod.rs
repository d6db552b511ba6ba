//! Chart renderers: bar, line, pie/donut and multi-series area.
//!
//! Each chart is an immutable value built from data plus an options struct and
//! rendered to one standalone SVG document. Renderers never call each other;
//! they share the geometry primitives and the markup helpers in `crate::svg`.

mod area;
mod bar;
mod line;
mod pie;

use serde::{Deserialize, Serialize};

pub use area::{AreaChart, AreaOptions};
pub use bar::{BarChart, BarOptions};
pub use line::{LineChart, LineOptions};
pub use pie::{PieChart, PieOptions};

use crate::error::Result;
use crate::svg::SvgDocument;

/// Common interface of every chart renderer.
pub trait Chart {
    /// Renders the chart as a standalone SVG document.
    ///
    /// # Errors
    /// Returns `NonFiniteValue` when a data value is NaN or infinite.
    fn render(&self) -> Result<String>;
}

pub(crate) const fn default_width() -> f64 {
    500.0
}

pub(crate) const fn default_height() -> f64 {
    300.0
}

pub(crate) const fn default_padding() -> f64 {
    40.0
}

pub(crate) const fn default_true() -> bool {
    true
}

pub(crate) fn default_id_prefix() -> String {
    "chart".to_string()
}

/// Outer spacing around the plot area.
///
/// Deserializes from either a bare number (all four sides) or a table with
/// `top`, `right`, `bottom` and `left`; missing sides default to 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "MarginRepr")]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::new(20.0, 30.0, 20.0, 50.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MarginRepr {
    Uniform(f64),
    Sides {
        #[serde(default)]
        top: f64,
        #[serde(default)]
        right: f64,
        #[serde(default)]
        bottom: f64,
        #[serde(default)]
        left: f64,
    },
}

impl From<MarginRepr> for Margin {
    fn from(repr: MarginRepr) -> Self {
        match repr {
            MarginRepr::Uniform(value) => Self::uniform(value),
            MarginRepr::Sides {
                top,
                right,
                bottom,
                left,
            } => Self::new(top, right, bottom, left),
        }
    }
}

/// Rectangle available to the data once margins are removed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn with_margin(width: f64, height: f64, margin: Margin) -> Self {
        Self {
            left: margin.left,
            top: margin.top,
            width: width - margin.left - margin.right,
            height: height - margin.top - margin.bottom,
        }
    }

    pub fn with_padding(width: f64, height: f64, padding: f64) -> Self {
        Self::with_margin(width, height, Margin::uniform(padding))
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Y-coordinate of the value-zero baseline.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Starts a document, titled when `title` is set.
pub(crate) fn document(width: f64, height: f64, title: Option<&str>) -> SvgDocument {
    let doc = SvgDocument::new(width, height);
    match title {
        Some(title) => doc.with_title(title),
        None => doc,
    }
}

/// Document shown when there is nothing to plot.
pub(crate) fn empty_document(width: f64, height: f64, title: Option<&str>) -> String {
    document(width, height, title).push_empty_state().build()
}

/// Wraps rendered children in a `<g>` with the given class.
pub(crate) fn group(class: &str, children: &[String]) -> String {
    let mut output = format!(r#"<g class="{class}">"#);
    for child in children {
        for line in child.lines() {
            output.push_str("\n    ");
            output.push_str(line);
        }
    }
    output.push_str("\n</g>");
    output
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
