//! Pie and donut charts.

use serde::{Deserialize, Serialize};

use super::{
    Chart, default_height, default_padding, default_true, default_width, document, empty_document,
    group,
};
use crate::error::{ChartError, Result};
use crate::geometry::{Point, SliceArc};
use crate::svg::css::{PIE_HOVER_CSS, TOOLTIP_CSS};
use crate::svg::{
    ChartColor, DataPoint, Label, SvgElement, Tooltip, TooltipLine, default_colors, ensure_finite,
    format_coord, format_value, html_escape, pick_color,
};

const FULL_TURN: f64 = 360.0;
const TOOLTIP_WIDTH: f64 = 100.0;
const TOOLTIP_GAP: f64 = 8.0;

const fn default_explode_offset() -> f64 {
    8.0
}

const fn default_start_angle() -> f64 {
    -90.0
}

/// Options for [`PieChart`]. Unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieOptions {
    #[serde(default = "default_width")]
    pub width: f64,

    #[serde(default = "default_height")]
    pub height: f64,

    /// Outer radius is half the smaller side minus this padding.
    #[serde(default = "default_padding")]
    pub padding: f64,

    #[serde(default = "default_colors")]
    pub colors: Vec<String>,

    /// Inner radius as a fraction of the outer radius, in `[0, 1)`. 0 draws a pie.
    #[serde(default)]
    pub hole_size: f64,

    /// Shift every slice outward along its mid angle.
    #[serde(default)]
    pub explode_slices: bool,

    #[serde(default = "default_explode_offset")]
    pub explode_offset: f64,

    /// Angle of the first slice's leading edge; -90 is 12 o'clock.
    #[serde(default = "default_start_angle")]
    pub start_angle: f64,

    /// Percentage labels inside each slice.
    #[serde(default = "default_true")]
    pub show_labels: bool,

    #[serde(default = "default_true")]
    pub show_tooltips: bool,

    #[serde(default = "default_true")]
    pub hover_effects: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Default for PieOptions {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            padding: default_padding(),
            colors: default_colors(),
            hole_size: 0.0,
            explode_slices: false,
            explode_offset: default_explode_offset(),
            start_angle: default_start_angle(),
            show_labels: true,
            show_tooltips: true,
            hover_effects: true,
            title: None,
        }
    }
}

/// One drawn slice together with the datum it represents.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub arc: SliceArc,
    pub label: String,
    pub value: f64,
    /// Share of the total, in `(0, 1]`.
    pub fraction: f64,
    pub color: ChartColor,
}

impl PieSlice {
    #[must_use]
    pub fn percentage(&self) -> f64 {
        self.fraction * 100.0
    }
}

/// Pie chart; a donut when `hole_size > 0`.
#[derive(Debug, Clone)]
pub struct PieChart {
    pub data: Vec<DataPoint>,
    pub options: PieOptions,
}

impl PieChart {
    #[must_use]
    pub const fn new(data: Vec<DataPoint>, options: PieOptions) -> Self {
        Self { data, options }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.options.width / 2.0, self.options.height / 2.0)
    }

    #[must_use]
    pub fn outer_radius(&self) -> f64 {
        self.options.width.min(self.options.height) / 2.0 - self.options.padding
    }

    #[must_use]
    pub fn inner_radius(&self) -> f64 {
        self.outer_radius() * self.options.hole_size
    }

    /// Slices in data order, sweeping clockwise from `start_angle`.
    ///
    /// Values that are zero or negative take no angle and produce no slice.
    /// Returns an empty list when nothing is positive.
    ///
    /// # Errors
    /// Returns `NonFiniteValue` when a data value is NaN or infinite, and
    /// `InvalidData` when the values are too large to sum.
    pub fn slices(&self) -> Result<Vec<PieSlice>> {
        ensure_finite(self.data.iter().map(|d| d.value))?;

        let opts = &self.options;
        let total: f64 = self.data.iter().map(|d| d.value.max(0.0)).sum();
        if !total.is_finite() {
            return Err(ChartError::InvalidData(
                "pie values overflow when summed".to_string(),
            ));
        }
        if total <= 0.0 {
            return Ok(Vec::new());
        }

        let center = self.center();
        let outer_radius = self.outer_radius();
        let inner_radius = self.inner_radius();

        let mut slices = Vec::with_capacity(self.data.len());
        let mut cumulative = 0.0;
        for (i, point) in self.data.iter().enumerate() {
            if point.value <= 0.0 {
                log::debug!("skipping pie slice {i} with non-positive value {}", point.value);
                continue;
            }

            let start_deg = (cumulative / total).mul_add(FULL_TURN, opts.start_angle);
            cumulative += point.value;
            let end_deg = (cumulative / total).mul_add(FULL_TURN, opts.start_angle);

            let mut arc = SliceArc {
                center,
                outer_radius,
                inner_radius,
                start_deg,
                end_deg,
            };
            if opts.explode_slices && arc.sweep() < FULL_TURN {
                arc = arc.exploded(opts.explode_offset);
            }

            let color = point
                .color
                .as_deref()
                .map_or_else(|| pick_color(&opts.colors, i), ChartColor::hex);

            slices.push(PieSlice {
                arc,
                label: point.display_label(i),
                value: point.value,
                fraction: point.value / total,
                color,
            });
        }

        Ok(slices)
    }

    fn render_slice(&self, slice: &PieSlice) -> String {
        let opts = &self.options;
        let arc = &slice.arc;
        let mut children = vec![format!(
            r#"<path class="slice" d="{}" fill="{}"/>"#,
            arc.path(),
            slice.color
        )];

        // halfway through the band, or 70% out for a solid pie
        let label_radius = if arc.inner_radius > 0.0 {
            f64::midpoint(arc.inner_radius, arc.outer_radius)
        } else {
            arc.outer_radius * 0.7
        };
        let anchor = if arc.sweep() >= FULL_TURN {
            Point::new(arc.center.x, arc.center.y - label_radius)
        } else {
            arc.point_at(label_radius)
        };

        if opts.show_labels {
            let label = Label::new(
                anchor.x,
                anchor.y + 4.0,
                format!("{:.0}%", slice.percentage()),
            )
            .with_color(ChartColor::hex("#ffffff"))
            .with_class("slice-label");
            children.push(label.render());
        }

        if opts.show_tooltips {
            let tooltip = Tooltip::above(
                anchor,
                TOOLTIP_WIDTH,
                TOOLTIP_GAP,
                vec![
                    TooltipLine::normal(slice.label.clone()),
                    TooltipLine::bold(format!(
                        "{} ({:.1}%)",
                        format_value(slice.value),
                        slice.percentage()
                    )),
                ],
            );
            children.push(tooltip.render());
        } else {
            children.push(format!(
                "<title>{}: {}</title>",
                html_escape(&slice.label),
                format_value(slice.value)
            ));
        }

        group("slice-group", &children)
    }
}

impl Chart for PieChart {
    fn render(&self) -> Result<String> {
        let opts = &self.options;
        let title = opts.title.as_deref();
        let slices = self.slices()?;
        if slices.is_empty() {
            return Ok(empty_document(opts.width, opts.height, title));
        }

        let mut doc = document(opts.width, opts.height, title);
        if opts.hover_effects {
            doc = doc.with_style(PIE_HOVER_CSS);
        }
        if opts.show_tooltips {
            doc = doc.with_style(TOOLTIP_CSS);
        }

        log::trace!(
            "pie at ({}, {}) radius {} with {} slices",
            format_coord(self.center().x),
            format_coord(self.center().y),
            format_coord(self.outer_radius()),
            slices.len()
        );

        for slice in &slices {
            doc = doc.push_raw(self.render_slice(slice));
        }

        Ok(doc.build())
    }
}

#[cfg(test)]
#[path = "pie_tests.rs"]
mod tests;
