//! Primitive SVG elements: axes, bars, lines, markers, labels and tooltips.

use std::fmt::Write;

use super::format::{format_coord as c, format_value, html_escape};
use super::style::{ChartColor, TextAnchor};
use crate::geometry::{Point, build_smooth_path, build_straight_path};

/// Tooltip background, dark slate at 95% opacity.
const TOOLTIP_FILL: &str = "rgba(31, 41, 55, 0.95)";

/// Vertical space taken by one tooltip text line.
const TOOLTIP_LINE_HEIGHT: f64 = 15.0;

/// Axis orientation for charts.
#[derive(Debug, Clone, Copy)]
pub enum AxisOrientation {
    Horizontal,
    Vertical,
}

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// Tick position and label for axis rendering.
struct TickInfo {
    start_x: f64,
    start_y: f64,
    end_x: f64,
    end_y: f64,
    label_x: f64,
    label_y: f64,
    anchor: TextAnchor,
}

/// Axis line with ticks and labels.
///
/// Label positions are fractions of the axis length: 0.0 is the origin
/// (`x`, `y`), 1.0 the far end. Vertical axes grow upwards.
#[derive(Debug, Clone)]
pub struct Axis {
    pub orientation: AxisOrientation,
    pub x: f64,
    pub y: f64,
    pub length: f64,
    pub labels: Vec<(f64, String)>,
    pub color: ChartColor,
    pub tick_length: f64,
    pub font_size: f64,
}

impl Axis {
    #[must_use]
    pub fn horizontal(x: f64, y: f64, length: f64) -> Self {
        Self::new(AxisOrientation::Horizontal, x, y, length)
    }

    #[must_use]
    pub fn vertical(x: f64, y: f64, length: f64) -> Self {
        Self::new(AxisOrientation::Vertical, x, y, length)
    }

    fn new(orientation: AxisOrientation, x: f64, y: f64, length: f64) -> Self {
        Self {
            orientation,
            x,
            y,
            length,
            labels: Vec::new(),
            color: ChartColor::text_muted(),
            tick_length: 5.0,
            font_size: 12.0,
        }
    }

    #[must_use]
    pub fn with_labels(mut self, labels: Vec<(f64, String)>) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    fn calculate_tick(&self, pos: f64) -> TickInfo {
        match self.orientation {
            AxisOrientation::Horizontal => {
                let tick_x = pos.mul_add(self.length, self.x);
                TickInfo {
                    start_x: tick_x,
                    start_y: self.y,
                    end_x: tick_x,
                    end_y: self.y + self.tick_length,
                    label_x: tick_x,
                    label_y: self.y + self.tick_length + self.font_size + 2.0,
                    anchor: TextAnchor::Middle,
                }
            }
            AxisOrientation::Vertical => {
                let tick_y = pos.mul_add(-self.length, self.y);
                TickInfo {
                    start_x: self.x,
                    start_y: tick_y,
                    end_x: self.x - self.tick_length,
                    end_y: tick_y,
                    label_x: self.x - self.tick_length - 4.0,
                    label_y: tick_y + self.font_size / 3.0,
                    anchor: TextAnchor::End,
                }
            }
        }
    }
}

impl SvgElement for Axis {
    fn render(&self) -> String {
        let mut output = String::new();
        let color = self.color.to_string();

        let (end_x, end_y) = match self.orientation {
            AxisOrientation::Horizontal => (self.x + self.length, self.y),
            AxisOrientation::Vertical => (self.x, self.y - self.length),
        };

        let _ = writeln!(
            output,
            r#"<line class="axis-line" x1="{}" y1="{}" x2="{}" y2="{}" stroke="{color}" stroke-width="1"/>"#,
            c(self.x),
            c(self.y),
            c(end_x),
            c(end_y)
        );

        for (pos, label) in &self.labels {
            let tick = self.calculate_tick(*pos);

            let _ = writeln!(
                output,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{color}" stroke-width="1"/>"#,
                c(tick.start_x),
                c(tick.start_y),
                c(tick.end_x),
                c(tick.end_y)
            );

            let _ = writeln!(
                output,
                r#"<text class="axis-text" x="{}" y="{}" text-anchor="{}" fill="{color}" font-size="{}">{}</text>"#,
                c(tick.label_x),
                c(tick.label_y),
                tick.anchor,
                self.font_size,
                html_escape(label)
            );
        }

        output
    }
}

/// A single bar in a bar chart.
#[derive(Debug, Clone)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: ChartColor,
    pub label: String,
    pub value: f64,
}

impl SvgElement for Bar {
    fn render(&self) -> String {
        // <title> doubles as the accessible name and the native hover tooltip
        format!(
            r#"<rect class="bar" x="{}" y="{}" width="{}" height="{}" fill="{}" rx="3">
    <title>{}: {}</title>
</rect>"#,
            c(self.x),
            c(self.y),
            c(self.width),
            c(self.height),
            self.color,
            html_escape(&self.label),
            format_value(self.value)
        )
    }
}

/// A polyline or smooth curve, optionally filled down to a baseline.
#[derive(Debug, Clone)]
pub struct Line {
    pub points: Vec<Point>,
    pub color: ChartColor,
    pub smooth: bool,
    /// Paint for the area under the line; `None` draws no area.
    pub fill: Option<ChartColor>,
    pub fill_opacity: f64,
    /// Y-coordinate of the baseline for the fill area.
    /// In SVG coordinates, higher values are lower on screen.
    pub baseline_y: Option<f64>,
    pub class: &'static str,
    pub fill_class: &'static str,
}

impl Line {
    #[must_use]
    pub const fn new(points: Vec<Point>, color: ChartColor) -> Self {
        Self {
            points,
            color,
            smooth: false,
            fill: None,
            fill_opacity: 1.0,
            baseline_y: None,
            class: "chart-line",
            fill_class: "chart-fill",
        }
    }

    #[must_use]
    pub const fn with_smooth(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }

    /// Fill the area between the line and `baseline_y` with `paint`.
    #[must_use]
    pub fn with_fill(mut self, paint: ChartColor, baseline_y: f64) -> Self {
        self.fill = Some(paint);
        self.baseline_y = Some(baseline_y);
        self
    }

    #[must_use]
    pub const fn with_fill_opacity(mut self, opacity: f64) -> Self {
        self.fill_opacity = opacity;
        self
    }

    /// CSS classes for the line path and the area path.
    #[must_use]
    pub const fn with_classes(mut self, line: &'static str, fill: &'static str) -> Self {
        self.class = line;
        self.fill_class = fill;
        self
    }

    /// Path data for the line itself.
    #[must_use]
    pub fn path_data(&self) -> String {
        if self.smooth {
            build_smooth_path(&self.points)
        } else {
            build_straight_path(&self.points)
        }
    }

    /// Path data for the area under the line, closed along the baseline.
    ///
    /// A single point yields a zero-width band down to the baseline.
    #[must_use]
    pub fn area_data(&self) -> Option<String> {
        let baseline_y = self.baseline_y?;
        let (first, last) = (self.points.first()?, self.points.last()?);

        let mut area = self.path_data();
        let _ = write!(
            area,
            " L{} L{} Z",
            Point::new(last.x, baseline_y),
            Point::new(first.x, baseline_y)
        );
        Some(area)
    }
}

impl SvgElement for Line {
    fn render(&self) -> String {
        if self.points.is_empty() {
            return String::new();
        }

        let mut output = String::new();
        let path = self.path_data();

        if let Some(paint) = &self.fill
            && let Some(area) = self.area_data()
        {
            let _ = writeln!(
                output,
                r#"<path class="{}" d="{area}" fill="{paint}" fill-opacity="{}" stroke="none"/>"#,
                self.fill_class, self.fill_opacity
            );
        }

        let _ = writeln!(
            output,
            r#"<path class="{}" d="{path}" fill="none" stroke="{}" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>"#,
            self.class, self.color
        );

        output
    }
}

/// Circular data-point marker.
#[derive(Debug, Clone)]
pub struct Marker {
    pub center: Point,
    pub radius: f64,
    pub color: ChartColor,
    pub class: &'static str,
}

impl Marker {
    #[must_use]
    pub const fn new(center: Point, color: ChartColor) -> Self {
        Self {
            center,
            radius: 4.0,
            color,
            class: "data-point",
        }
    }
}

impl SvgElement for Marker {
    fn render(&self) -> String {
        format!(
            r#"<circle class="{}" cx="{}" cy="{}" r="{}" fill="{}" stroke="white" stroke-width="2"/>"#,
            self.class,
            c(self.center.x),
            c(self.center.y),
            c(self.radius),
            self.color
        )
    }
}

/// Free-standing text label.
#[derive(Debug, Clone)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub font_size: f64,
    pub color: ChartColor,
    pub class: &'static str,
}

impl Label {
    #[must_use]
    pub fn new(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            font_size: 12.0,
            color: ChartColor::text_muted(),
            class: "chart-label",
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    #[must_use]
    pub const fn with_class(mut self, class: &'static str) -> Self {
        self.class = class;
        self
    }
}

impl SvgElement for Label {
    fn render(&self) -> String {
        format!(
            r#"<text class="{}" x="{}" y="{}" text-anchor="middle" fill="{}" font-size="{}">{}</text>"#,
            self.class,
            c(self.x),
            c(self.y),
            self.color,
            self.font_size,
            html_escape(&self.text)
        )
    }
}

/// Dashed horizontal grid line.
#[derive(Debug, Clone)]
pub struct GridLine {
    pub x1: f64,
    pub x2: f64,
    pub y: f64,
}

impl SvgElement for GridLine {
    fn render(&self) -> String {
        format!(
            r#"<line class="grid-line" x1="{}" y1="{y}" x2="{}" y2="{y}" stroke="{}"/>"#,
            c(self.x1),
            c(self.x2),
            ChartColor::grid(),
            y = c(self.y)
        )
    }
}

/// One line of tooltip text.
#[derive(Debug, Clone)]
pub struct TooltipLine {
    pub text: String,
    pub bold: bool,
}

impl TooltipLine {
    #[must_use]
    pub fn normal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    #[must_use]
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}

/// Hover tooltip: a dark rounded box with centred text lines.
///
/// Hidden by the `.tooltip` style rule until its enclosing group is hovered.
#[derive(Debug, Clone)]
pub struct Tooltip {
    pub center_x: f64,
    pub top: f64,
    pub width: f64,
    pub lines: Vec<TooltipLine>,
}

impl Tooltip {
    /// Tooltip whose bottom edge sits `gap` above `anchor`.
    #[must_use]
    pub fn above(anchor: Point, width: f64, gap: f64, lines: Vec<TooltipLine>) -> Self {
        let height = Self::height_for(lines.len());
        Self {
            center_x: anchor.x,
            top: anchor.y - gap - height,
            width,
            lines,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn height_for(line_count: usize) -> f64 {
        TOOLTIP_LINE_HEIGHT.mul_add(line_count as f64, 10.0)
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        Self::height_for(self.lines.len())
    }
}

impl SvgElement for Tooltip {
    #[allow(clippy::cast_precision_loss)]
    fn render(&self) -> String {
        let mut output = String::new();
        let _ = writeln!(output, r#"<g class="tooltip">"#);
        let _ = writeln!(
            output,
            r#"    <rect x="{}" y="{}" width="{}" height="{}" fill="{TOOLTIP_FILL}" rx="6"/>"#,
            c(self.center_x - self.width / 2.0),
            c(self.top),
            c(self.width),
            c(self.height())
        );

        for (i, line) in self.lines.iter().enumerate() {
            let y = TOOLTIP_LINE_HEIGHT.mul_add((i + 1) as f64, self.top);
            let (size, weight) = if line.bold { (11, "bold") } else { (10, "500") };
            let _ = writeln!(
                output,
                r#"    <text x="{}" y="{}" text-anchor="middle" fill="white" font-size="{size}" font-weight="{weight}">{}</text>"#,
                c(self.center_x),
                c(y),
                html_escape(&line.text)
            );
        }

        output.push_str("</g>");
        output
    }
}

/// Vertical linear gradient for area fills, placed inside `<defs>`.
#[derive(Debug, Clone)]
pub struct LinearGradient {
    pub id: String,
    pub color: ChartColor,
    pub top_opacity: f64,
    pub bottom_opacity: f64,
}

impl LinearGradient {
    #[must_use]
    pub fn vertical(id: impl Into<String>, color: ChartColor) -> Self {
        Self {
            id: id.into(),
            color,
            top_opacity: 0.8,
            bottom_opacity: 0.1,
        }
    }

    /// `url(#id)` paint reference.
    #[must_use]
    pub fn paint(&self) -> ChartColor {
        ChartColor::Hex(format!("url(#{})", self.id))
    }
}

impl SvgElement for LinearGradient {
    fn render(&self) -> String {
        format!(
            r#"<linearGradient id="{}" x1="0%" y1="0%" x2="0%" y2="100%">
    <stop offset="0%" stop-color="{color}" stop-opacity="{}"/>
    <stop offset="100%" stop-color="{color}" stop-opacity="{}"/>
</linearGradient>"#,
            html_escape(&self.id),
            self.top_opacity,
            self.bottom_opacity,
            color = self.color
        )
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
