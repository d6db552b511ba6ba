//! Single-series line chart, optionally smoothed and filled.

use serde::{Deserialize, Serialize};

use super::{
    Chart, PlotArea, default_height, default_id_prefix, default_padding, default_true,
    default_width, document, empty_document, group,
};
use crate::error::Result;
use crate::geometry::{Point, try_normalize};
use crate::svg::css::{AXIS_CSS, LINE_HOVER_CSS, TOOLTIP_CSS};
use crate::svg::{
    ChartColor, DataPoint, Label, Line, LinearGradient, Marker, SvgElement, Tooltip, TooltipLine,
    default_colors, ensure_finite, format_value, max_value, pick_color,
};

const TOOLTIP_WIDTH: f64 = 80.0;
const TOOLTIP_GAP: f64 = 10.0;
const LABEL_OFFSET: f64 = 16.0;

/// Options for [`LineChart`]. Unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineOptions {
    #[serde(default = "default_width")]
    pub width: f64,

    #[serde(default = "default_height")]
    pub height: f64,

    #[serde(default = "default_padding")]
    pub padding: f64,

    /// Palette consulted when `color` is unset.
    #[serde(default = "default_colors")]
    pub colors: Vec<String>,

    /// Line color; defaults to the first entry of `colors`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Draw cubic Bezier curves through the points instead of straight segments.
    #[serde(default)]
    pub smooth: bool,

    /// Fill the area under the line with a vertical gradient.
    #[serde(default)]
    pub fill: bool,

    #[serde(default = "default_true")]
    pub show_points: bool,

    #[serde(default = "default_true")]
    pub show_labels: bool,

    #[serde(default = "default_true")]
    pub show_tooltips: bool,

    #[serde(default = "default_true")]
    pub hover_effects: bool,

    /// Prefix for ids inside `<defs>`; set distinct prefixes when several
    /// charts share one page.
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            padding: default_padding(),
            colors: default_colors(),
            color: None,
            smooth: false,
            fill: false,
            show_points: true,
            show_labels: true,
            show_tooltips: true,
            hover_effects: true,
            id_prefix: default_id_prefix(),
            title: None,
        }
    }
}

impl LineOptions {
    /// Resolved line color.
    #[must_use]
    pub fn line_color(&self) -> ChartColor {
        self.color
            .as_deref()
            .map_or_else(|| pick_color(&self.colors, 0), ChartColor::hex)
    }
}

/// Line chart over evenly spaced categories.
#[derive(Debug, Clone)]
pub struct LineChart {
    pub data: Vec<DataPoint>,
    pub options: LineOptions,
}

impl LineChart {
    #[must_use]
    pub const fn new(data: Vec<DataPoint>, options: LineOptions) -> Self {
        Self { data, options }
    }

    /// Screen position of every data point.
    ///
    /// Points are spread evenly across the plot width; a lone point sits at the
    /// horizontal centre. With no positive value every point lies on the baseline.
    ///
    /// # Errors
    /// Returns `NonFiniteValue` when a data value is NaN or infinite.
    #[allow(clippy::cast_precision_loss)]
    pub fn points(&self) -> Result<Vec<Point>> {
        ensure_finite(self.data.iter().map(|d| d.value))?;

        let opts = &self.options;
        let plot = PlotArea::with_padding(opts.width, opts.height, opts.padding);
        let max = max_value(self.data.iter().map(|d| d.value));
        let last_index = self.data.len().saturating_sub(1) as f64;
        let center_x = plot.left + plot.width / 2.0;

        let points = self
            .data
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let x = try_normalize(i as f64, 0.0, last_index, plot.left, plot.right())
                    .unwrap_or(center_x);
                let y = if max > 0.0 {
                    try_normalize(point.value, 0.0, max, plot.bottom(), plot.top)
                        .unwrap_or_else(|| plot.bottom())
                } else {
                    plot.bottom()
                };
                Point::new(x, y)
            })
            .collect();

        Ok(points)
    }
}

impl Chart for LineChart {
    fn render(&self) -> Result<String> {
        let opts = &self.options;
        let title = opts.title.as_deref();
        if self.data.is_empty() {
            return Ok(empty_document(opts.width, opts.height, title));
        }

        let points = self.points()?;
        let plot = PlotArea::with_padding(opts.width, opts.height, opts.padding);
        let color = opts.line_color();

        let mut doc = document(opts.width, opts.height, title);
        if opts.hover_effects {
            doc = doc.with_style(LINE_HOVER_CSS);
        }
        if opts.show_tooltips {
            doc = doc.with_style(TOOLTIP_CSS);
        }
        if opts.show_labels {
            doc = doc.with_style(AXIS_CSS);
        }

        let mut line = Line::new(points.clone(), color.clone()).with_smooth(opts.smooth);
        if opts.fill {
            let gradient =
                LinearGradient::vertical(format!("{}-line-fill", opts.id_prefix), color.clone());
            line = line.with_fill(gradient.paint(), plot.bottom());
            doc = doc.push_def(&gradient);
        }
        doc = doc.push_element(&line);

        for (i, (point, datum)) in points.iter().zip(&self.data).enumerate() {
            let label = datum.display_label(i);

            let mut children = Vec::new();
            if opts.show_points {
                children.push(Marker::new(*point, color.clone()).render());
            }
            if opts.show_tooltips {
                let tooltip = Tooltip::above(
                    *point,
                    TOOLTIP_WIDTH,
                    TOOLTIP_GAP,
                    vec![
                        TooltipLine::normal(label.clone()),
                        TooltipLine::bold(format_value(datum.value)),
                    ],
                );
                children.push(tooltip.render());
            }
            if !children.is_empty() {
                doc = doc.push_raw(group("point-group", &children));
            }

            if opts.show_labels {
                let text = Label::new(point.x, plot.bottom() + LABEL_OFFSET, label)
                    .with_class("axis-text");
                doc = doc.push_element(&text);
            }
        }

        Ok(doc.build())
    }
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
