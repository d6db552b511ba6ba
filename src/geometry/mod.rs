//! Geometry primitives shared by every chart renderer.
//!
//! All functions here are pure: they take plain numbers and return numbers or
//! SVG path strings. Angles are in degrees, 0° points right (+x) and angles grow
//! clockwise on screen because the SVG y axis points down.

use std::fmt;

mod arc;
mod smooth;

pub use arc::{SliceArc, describe_arc, describe_slice, large_arc_flag};
pub use smooth::{
    build_smooth_path, build_straight_path, push_line_segments, push_smooth_segments,
};

use crate::svg::format_coord;

/// A 2-D point in SVG user space.
///
/// `Display` renders the `x,y` pair used inside path data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", format_coord(self.x), format_coord(self.y))
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Linearly maps `value` from `[source_min, source_max]` onto `[target_min, target_max]`.
///
/// Inputs outside the source domain extrapolate; nothing is clamped. The caller must
/// guarantee `source_max != source_min`, otherwise the result is NaN or infinite.
/// Use [`try_normalize`] when the domain may be degenerate.
#[must_use]
pub fn normalize(
    value: f64,
    source_min: f64,
    source_max: f64,
    target_min: f64,
    target_max: f64,
) -> f64 {
    (value - source_min) / (source_max - source_min) * (target_max - target_min) + target_min
}

/// Checked [`normalize`]: returns `None` when the source domain has zero width.
#[must_use]
pub fn try_normalize(
    value: f64,
    source_min: f64,
    source_max: f64,
    target_min: f64,
    target_max: f64,
) -> Option<f64> {
    #[allow(clippy::float_cmp)] // exact collapse is the only undefined case
    if source_max == source_min {
        return None;
    }
    Some(normalize(
        value, source_min, source_max, target_min, target_max,
    ))
}

/// Converts polar coordinates (degrees) around `(cx, cy)` to a cartesian point.
#[must_use]
pub fn polar_to_cartesian(cx: f64, cy: f64, radius: f64, angle_deg: f64) -> Point {
    let theta = angle_deg.to_radians();
    Point::new(radius.mul_add(theta.cos(), cx), radius.mul_add(theta.sin(), cy))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
