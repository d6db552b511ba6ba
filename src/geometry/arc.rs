//! Circular arc and pie/donut slice path construction.

use std::fmt::Write;

use super::{Point, polar_to_cartesian};
use crate::svg::format_coord;

/// Sweep (degrees) at which a single SVG arc command can no longer express the shape.
const FULL_CIRCLE_DEG: f64 = 360.0;

/// Returns the SVG `large-arc-flag` for a sweep in degrees.
///
/// Exactly 180° yields 0: both candidate arcs have the same length there.
#[must_use]
pub fn large_arc_flag(sweep_deg: f64) -> u8 {
    u8::from(sweep_deg.abs() > 180.0)
}

fn sweep_flag(sweep_deg: f64) -> u8 {
    u8::from(sweep_deg >= 0.0)
}

/// Describes an open arc of radius `radius` centred at `(x, y)`.
///
/// Sweeps of 360° or more are emitted as two half arcs, since one SVG arc
/// command with identical endpoints draws nothing.
#[must_use]
pub fn describe_arc(x: f64, y: f64, radius: f64, start_deg: f64, end_deg: f64) -> String {
    let sweep = end_deg - start_deg;
    let r = format_coord(radius);
    let start = polar_to_cartesian(x, y, radius, start_deg);

    if sweep.abs() >= FULL_CIRCLE_DEG {
        let flag = sweep_flag(sweep);
        let opposite = polar_to_cartesian(x, y, radius, start_deg + 180.0_f64.copysign(sweep));
        return format!("M{start} A{r},{r} 0 0 {flag} {opposite} A{r},{r} 0 0 {flag} {start}");
    }

    let end = polar_to_cartesian(x, y, radius, end_deg);
    format!(
        "M{start} A{r},{r} 0 {} {} {end}",
        large_arc_flag(sweep),
        sweep_flag(sweep)
    )
}

/// Describes a closed pie wedge (`inner_radius == 0`) or donut band (`inner_radius > 0`).
///
/// The outer edge runs from `start_deg` to `end_deg`; a donut's inner edge runs
/// back in the opposite direction so the outline encloses a filled band.
#[must_use]
pub fn describe_slice(
    cx: f64,
    cy: f64,
    outer_radius: f64,
    inner_radius: f64,
    start_deg: f64,
    end_deg: f64,
) -> String {
    let sweep = end_deg - start_deg;
    if sweep.abs() >= FULL_CIRCLE_DEG {
        return describe_full_ring(cx, cy, outer_radius, inner_radius, start_deg);
    }

    let large = large_arc_flag(sweep);
    let outward = sweep_flag(sweep);
    let outer = format_coord(outer_radius);
    let outer_start = polar_to_cartesian(cx, cy, outer_radius, start_deg);
    let outer_end = polar_to_cartesian(cx, cy, outer_radius, end_deg);

    if inner_radius > 0.0 {
        let inner = format_coord(inner_radius);
        let inner_end = polar_to_cartesian(cx, cy, inner_radius, end_deg);
        let inner_start = polar_to_cartesian(cx, cy, inner_radius, start_deg);
        format!(
            "M{outer_start} A{outer},{outer} 0 {large} {outward} {outer_end} \
             L{inner_end} A{inner},{inner} 0 {large} {} {inner_start} Z",
            1 - outward
        )
    } else {
        let center = Point::new(cx, cy);
        format!(
            "M{center} L{outer_start} A{outer},{outer} 0 {large} {outward} {outer_end} L{center} Z"
        )
    }
}

/// Full circle or annulus as closed rings of two half arcs each.
///
/// The inner ring winds opposite to the outer one so the hole stays unfilled
/// under the default `nonzero` fill rule.
fn describe_full_ring(
    cx: f64,
    cy: f64,
    outer_radius: f64,
    inner_radius: f64,
    start_deg: f64,
) -> String {
    let mut path = String::new();
    let outer = format_coord(outer_radius);
    let outer_start = polar_to_cartesian(cx, cy, outer_radius, start_deg);
    let outer_mid = polar_to_cartesian(cx, cy, outer_radius, start_deg + 180.0);
    let _ = write!(
        path,
        "M{outer_start} A{outer},{outer} 0 0 1 {outer_mid} A{outer},{outer} 0 0 1 {outer_start} Z"
    );

    if inner_radius > 0.0 {
        let inner = format_coord(inner_radius);
        let inner_start = polar_to_cartesian(cx, cy, inner_radius, start_deg);
        let inner_mid = polar_to_cartesian(cx, cy, inner_radius, start_deg + 180.0);
        let _ = write!(
            path,
            " M{inner_start} A{inner},{inner} 0 0 0 {inner_mid} A{inner},{inner} 0 0 0 {inner_start} Z"
        );
    }

    path
}

/// Geometry of one pie or donut slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceArc {
    pub center: Point,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub start_deg: f64,
    pub end_deg: f64,
}

impl SliceArc {
    /// Angular size of the slice in degrees.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.end_deg - self.start_deg
    }

    #[must_use]
    pub fn mid_angle(&self) -> f64 {
        f64::midpoint(self.start_deg, self.end_deg)
    }

    /// Point at `radius` from the slice centre along its mid angle.
    #[must_use]
    pub fn point_at(&self, radius: f64) -> Point {
        polar_to_cartesian(self.center.x, self.center.y, radius, self.mid_angle())
    }

    /// Moves the slice outward by `distance` along its mid angle.
    #[must_use]
    pub fn exploded(self, distance: f64) -> Self {
        Self {
            center: self.point_at(distance),
            ..self
        }
    }

    /// SVG path data for this slice.
    #[must_use]
    pub fn path(&self) -> String {
        describe_slice(
            self.center.x,
            self.center.y,
            self.outer_radius,
            self.inner_radius,
            self.start_deg,
            self.end_deg,
        )
    }
}

#[cfg(test)]
#[path = "arc_tests.rs"]
mod tests;
