//! Multi-series area chart over a shared categorical axis.

use serde::{Deserialize, Serialize};

use super::{
    Chart, Margin, PlotArea, default_height, default_id_prefix, default_true, default_width,
    document, empty_document, group,
};
use crate::error::Result;
use crate::geometry::{Point, try_normalize};
use crate::svg::css::{AREA_HOVER_CSS, AXIS_CSS, TOOLTIP_CSS};
use crate::svg::{
    AreaData, Axis, ChartColor, GridLine, Line, LinearGradient, Marker, SvgElement, Tooltip,
    TooltipLine, default_colors, ensure_finite, format_number, format_value, html_escape,
    pick_color,
};

/// Horizontal grid divisions; the value axis gets one label per grid line.
const GRID_DIVISIONS: u32 = 5;
/// Upper bound on category labels along the x axis.
const MAX_X_LABELS: usize = 6;
const TOOLTIP_WIDTH: f64 = 120.0;
const TOOLTIP_GAP: f64 = 10.0;
const FLAT_FILL_OPACITY: f64 = 0.3;

/// Options for [`AreaChart`]. Unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaOptions {
    #[serde(default = "default_width")]
    pub width: f64,

    #[serde(default = "default_height")]
    pub height: f64,

    /// Space around the plot; a bare number applies to every side.
    #[serde(default)]
    pub margin: Margin,

    /// Series colors, cycled. A series' own color wins.
    #[serde(default = "default_colors")]
    pub colors: Vec<String>,

    #[serde(default)]
    pub smooth: bool,

    /// Gradient fill per series; flat translucent fill otherwise.
    #[serde(default)]
    pub fill: bool,

    #[serde(default = "default_true")]
    pub show_grid: bool,

    #[serde(default = "default_true")]
    pub show_axes: bool,

    /// Marker and tooltip group per category.
    #[serde(default = "default_true")]
    pub show_tooltips: bool,

    #[serde(default = "default_true")]
    pub hover_effects: bool,

    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Default for AreaOptions {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            margin: Margin::default(),
            colors: default_colors(),
            smooth: false,
            fill: false,
            show_grid: true,
            show_axes: true,
            show_tooltips: true,
            hover_effects: true,
            id_prefix: default_id_prefix(),
            title: None,
        }
    }
}

/// Area chart drawing every series against one shared value scale.
#[derive(Debug, Clone)]
pub struct AreaChart {
    pub data: AreaData,
    pub options: AreaOptions,
}

impl AreaChart {
    #[must_use]
    pub const fn new(data: AreaData, options: AreaOptions) -> Self {
        Self { data, options }
    }

    fn plot(&self) -> PlotArea {
        PlotArea::with_margin(self.options.width, self.options.height, self.options.margin)
    }

    /// X-coordinate of every category, evenly spaced; a lone category is centred.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn category_xs(&self) -> Vec<f64> {
        let plot = self.plot();
        let last_index = self.data.categories.len().saturating_sub(1) as f64;
        let center_x = plot.left + plot.width / 2.0;
        (0..self.data.categories.len())
            .map(|i| {
                try_normalize(i as f64, 0.0, last_index, plot.left, plot.right())
                    .unwrap_or(center_x)
            })
            .collect()
    }

    /// Screen points per series, in series order.
    ///
    /// # Errors
    /// Returns `InvalidData` when series and categories disagree in length, and
    /// `NonFiniteValue` for a NaN or infinite value.
    pub fn series_points(&self) -> Result<Vec<Vec<Point>>> {
        self.data.check_lengths()?;
        for series in &self.data.series {
            ensure_finite(series.values.iter().copied())?;
        }

        let plot = self.plot();
        let max = self.data.max_value();
        let xs = self.category_xs();
        let to_y = |value: f64| {
            if max > 0.0 {
                try_normalize(value, 0.0, max, plot.bottom(), plot.top)
                    .unwrap_or_else(|| plot.bottom())
            } else {
                plot.bottom()
            }
        };

        Ok(self
            .data
            .series
            .iter()
            .map(|series| {
                xs.iter()
                    .zip(&series.values)
                    .map(|(&x, &value)| Point::new(x, to_y(value)))
                    .collect()
            })
            .collect())
    }

    fn series_color(&self, index: usize) -> ChartColor {
        self.data.series[index]
            .color
            .as_deref()
            .map_or_else(|| pick_color(&self.options.colors, index), ChartColor::hex)
    }

    fn grid_lines(&self) -> Vec<GridLine> {
        let plot = self.plot();
        let step = plot.height / f64::from(GRID_DIVISIONS);
        (0..=GRID_DIVISIONS)
            .map(|i| GridLine {
                x1: plot.left,
                x2: plot.right(),
                y: step.mul_add(f64::from(i), plot.top),
            })
            .collect()
    }

    /// Value axis with one label per grid line, bottom to top.
    #[allow(clippy::cast_possible_truncation)]
    fn value_axis(&self) -> Axis {
        let plot = self.plot();
        let max = self.data.max_value();
        let labels = (0..=GRID_DIVISIONS)
            .map(|k| {
                let value = (f64::from(k) * max / f64::from(GRID_DIVISIONS)).round();
                (f64::from(k) / f64::from(GRID_DIVISIONS), format_number(value as i64))
            })
            .collect();
        Axis::vertical(plot.left, plot.bottom(), plot.height).with_labels(labels)
    }

    /// Category axis labelling every `ceil(n / 6)`-th category.
    fn category_axis(&self) -> Axis {
        let plot = self.plot();
        let n = self.data.categories.len();
        let step = n.div_ceil(MAX_X_LABELS).max(1);
        let labels = self
            .category_xs()
            .into_iter()
            .zip(&self.data.categories)
            .step_by(step)
            .map(|(x, category)| ((x - plot.left) / plot.width, category.clone()))
            .collect();
        Axis::horizontal(plot.left, plot.bottom(), plot.width).with_labels(labels)
    }

    fn category_group(&self, index: usize, series_points: &[Vec<Point>]) -> String {
        let mut children = Vec::with_capacity(series_points.len() + 1);
        let mut lines = vec![TooltipLine::normal(self.data.categories[index].clone())];
        let mut top = Point::new(0.0, f64::INFINITY);

        for (j, (series, points)) in self.data.series.iter().zip(series_points).enumerate() {
            let point = points[index];
            if point.y < top.y {
                top = point;
            }
            children.push(Marker::new(point, self.series_color(j)).render());
            lines.push(TooltipLine::bold(format!(
                "{}: {}",
                series.name,
                format_value(series.values[index])
            )));
        }

        children.push(Tooltip::above(top, TOOLTIP_WIDTH, TOOLTIP_GAP, lines).render());
        group("area-group", &children)
    }
}

impl Chart for AreaChart {
    fn render(&self) -> Result<String> {
        let opts = &self.options;
        let title = opts.title.as_deref();
        if self.data.is_empty() {
            return Ok(empty_document(opts.width, opts.height, title));
        }

        let series_points = self.series_points()?;
        let plot = self.plot();
        if self.data.max_value() <= 0.0 {
            log::debug!("area chart has no positive values, drawing on the baseline");
        }

        let mut doc = document(opts.width, opts.height, title);
        if opts.hover_effects {
            doc = doc.with_style(AREA_HOVER_CSS);
        }
        if opts.show_tooltips {
            doc = doc.with_style(TOOLTIP_CSS);
        }
        if opts.show_grid || opts.show_axes {
            doc = doc.with_style(AXIS_CSS);
        }

        if opts.show_grid {
            for line in self.grid_lines() {
                doc = doc.push_element(&line);
            }
        }

        for (j, points) in series_points.iter().enumerate() {
            let color = self.series_color(j);
            let (paint, opacity) = if opts.fill {
                let gradient = LinearGradient::vertical(
                    format!("{}-area-{j}", opts.id_prefix),
                    color.clone(),
                );
                let paint = gradient.paint();
                doc = doc.push_def(&gradient);
                (paint, 1.0)
            } else {
                (color.clone(), FLAT_FILL_OPACITY)
            };

            let area = Line::new(points.clone(), color)
                .with_smooth(opts.smooth)
                .with_fill(paint, plot.bottom())
                .with_fill_opacity(opacity)
                .with_classes("area-line", "chart-area");
            let name = format!("<title>{}</title>", html_escape(&self.data.series[j].name));
            doc = doc.push_raw(group("area-series", &[name, area.render()]));
        }

        if opts.show_axes {
            doc = doc
                .push_element(&self.value_axis())
                .push_element(&self.category_axis());
        }

        if opts.show_tooltips {
            for index in 0..self.data.categories.len() {
                doc = doc.push_raw(self.category_group(index, &series_points));
            }
        }

        Ok(doc.build())
    }
}

#[cfg(test)]
#[path = "area_tests.rs"]
mod tests;
