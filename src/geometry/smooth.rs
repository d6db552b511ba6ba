//! Polyline and cubic-Bezier path construction through ordered points.

use std::fmt::Write;

use super::Point;

/// Builds `M p0 L p1 L p2 …` through every point. Empty input yields an empty path.
#[must_use]
pub fn build_straight_path(points: &[Point]) -> String {
    let Some((first, rest)) = points.split_first() else {
        return String::new();
    };

    let mut path = format!("M{first}");
    push_line_segments(&mut path, rest);
    path
}

/// Builds a cubic-Bezier path passing through every point in order.
///
/// Fewer than three points cannot carry a meaningful curve and fall back to
/// [`build_straight_path`]. Otherwise one `C` command is emitted per
/// consecutive pair and the path ends exactly on the last point.
#[must_use]
pub fn build_smooth_path(points: &[Point]) -> String {
    if points.len() < 3 {
        return build_straight_path(points);
    }

    let mut path = format!("M{}", points[0]);
    push_smooth_segments(&mut path, points);
    path
}

/// Appends ` L p` for each point.
pub fn push_line_segments(path: &mut String, points: &[Point]) {
    for point in points {
        let _ = write!(path, " L{point}");
    }
}

/// Appends one ` C cp1 cp2 p[i+1]` command per consecutive pair of `points`.
///
/// The current point of `path` must already be `points[0]`. Control points sit
/// one third along the neighbouring chords:
/// `cp1 = p[i] + (p[i+1] - p[i]) / 3` and `cp2 = p[i+1] - (p[i+2] - p[i+1]) / 3`,
/// where the last pair looks ahead to its own endpoint.
pub fn push_smooth_segments(path: &mut String, points: &[Point]) {
    for (i, pair) in points.windows(2).enumerate() {
        let (p0, p1) = (pair[0], pair[1]);
        let p2 = points.get(i + 2).copied().unwrap_or(p1);

        let cp1 = Point::new((p1.x - p0.x) / 3.0 + p0.x, (p1.y - p0.y) / 3.0 + p0.y);
        let cp2 = Point::new(p1.x - (p2.x - p1.x) / 3.0, p1.y - (p2.y - p1.y) / 3.0);

        let _ = write!(path, " C{cp1} {cp2} {p1}");
    }
}

#[cfg(test)]
#[path = "smooth_tests.rs"]
mod tests;
