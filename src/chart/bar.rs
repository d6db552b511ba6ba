//! Vertical bar chart.

use serde::{Deserialize, Serialize};

use super::{
    Chart, PlotArea, default_height, default_padding, default_true, default_width, document,
    empty_document, group,
};
use crate::error::Result;
use crate::geometry::{Point, try_normalize};
use crate::svg::css::{AXIS_CSS, BAR_HOVER_CSS, TOOLTIP_CSS};
use crate::svg::{
    Bar, ChartColor, DataPoint, Label, SvgElement, Tooltip, TooltipLine, default_colors,
    ensure_finite, format_value, max_value, pick_color,
};

const TOOLTIP_WIDTH: f64 = 80.0;
const TOOLTIP_GAP: f64 = 5.0;
const LABEL_OFFSET: f64 = 16.0;

const fn default_bar_spacing() -> f64 {
    0.2
}

/// Options for [`BarChart`]. Unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarOptions {
    #[serde(default = "default_width")]
    pub width: f64,

    #[serde(default = "default_height")]
    pub height: f64,

    /// Space between the document edge and the plot on every side.
    #[serde(default = "default_padding")]
    pub padding: f64,

    /// Bar colors, cycled per bar. A data point's own color wins.
    #[serde(default = "default_colors")]
    pub colors: Vec<String>,

    /// Fraction of each slot left empty, split evenly on both sides of the bar.
    #[serde(default = "default_bar_spacing")]
    pub bar_spacing: f64,

    /// Category labels under each bar.
    #[serde(default = "default_true")]
    pub show_labels: bool,

    #[serde(default = "default_true")]
    pub show_tooltips: bool,

    #[serde(default = "default_true")]
    pub hover_effects: bool,

    /// Accessible document title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Default for BarOptions {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            padding: default_padding(),
            colors: default_colors(),
            bar_spacing: default_bar_spacing(),
            show_labels: true,
            show_tooltips: true,
            hover_effects: true,
            title: None,
        }
    }
}

/// Vertical bar chart with one bar per data point, anchored to a shared baseline.
#[derive(Debug, Clone)]
pub struct BarChart {
    pub data: Vec<DataPoint>,
    pub options: BarOptions,
}

impl BarChart {
    #[must_use]
    pub const fn new(data: Vec<DataPoint>, options: BarOptions) -> Self {
        Self { data, options }
    }

    /// Geometry of every bar, in data order.
    ///
    /// Negative values are drawn with height 0; when no value is positive every
    /// bar has height 0.
    ///
    /// # Errors
    /// Returns `NonFiniteValue` when a data value is NaN or infinite.
    #[allow(clippy::cast_precision_loss)]
    pub fn bars(&self) -> Result<Vec<Bar>> {
        ensure_finite(self.data.iter().map(|d| d.value))?;

        let opts = &self.options;
        let plot = PlotArea::with_padding(opts.width, opts.height, opts.padding);
        let max = max_value(self.data.iter().map(|d| d.value));
        if max <= 0.0 {
            log::debug!("bar chart has no positive values, drawing flat bars");
        }

        let slot = plot.width / self.data.len().max(1) as f64;
        let bar_width = slot * (1.0 - opts.bar_spacing);
        let gap = slot * opts.bar_spacing;

        let bars = self
            .data
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let height = if max > 0.0 {
                    try_normalize(point.value.max(0.0), 0.0, max, 0.0, plot.height).unwrap_or(0.0)
                } else {
                    0.0
                };
                let color = point
                    .color
                    .as_deref()
                    .map_or_else(|| pick_color(&opts.colors, i), ChartColor::hex);

                Bar {
                    x: slot.mul_add(i as f64, plot.left) + gap / 2.0,
                    y: plot.bottom() - height,
                    width: bar_width,
                    height,
                    color,
                    label: point.display_label(i),
                    value: point.value,
                }
            })
            .collect();

        Ok(bars)
    }
}

impl Chart for BarChart {
    fn render(&self) -> Result<String> {
        let opts = &self.options;
        let title = opts.title.as_deref();
        if self.data.is_empty() {
            return Ok(empty_document(opts.width, opts.height, title));
        }

        let bars = self.bars()?;
        let plot = PlotArea::with_padding(opts.width, opts.height, opts.padding);

        let mut doc = document(opts.width, opts.height, title);
        if opts.hover_effects {
            doc = doc.with_style(BAR_HOVER_CSS);
        }
        if opts.show_tooltips {
            doc = doc.with_style(TOOLTIP_CSS);
        }
        if opts.show_labels {
            doc = doc.with_style(AXIS_CSS);
        }

        for bar in &bars {
            let center_x = bar.x + bar.width / 2.0;
            let mut children = vec![bar.render()];
            if opts.show_tooltips {
                let tooltip = Tooltip::above(
                    Point::new(center_x, bar.y),
                    TOOLTIP_WIDTH,
                    TOOLTIP_GAP,
                    vec![
                        TooltipLine::normal(bar.label.clone()),
                        TooltipLine::bold(format_value(bar.value)),
                    ],
                );
                children.push(tooltip.render());
            }
            doc = doc.push_raw(group("bar-group", &children));

            if opts.show_labels {
                let label = Label::new(center_x, plot.bottom() + LABEL_OFFSET, bar.label.clone())
                    .with_class("axis-text");
                doc = doc.push_element(&label);
            }
        }

        Ok(doc.build())
    }
}

#[cfg(test)]
#[path = "bar_tests.rs"]
mod tests;
