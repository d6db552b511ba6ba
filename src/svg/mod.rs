//! SVG markup primitives shared by every chart renderer.
//!
//! Everything here produces strings: elements implement [`SvgElement`] and
//! are composed into a standalone document by [`SvgDocument`]. Colors are
//! plain hex values or CSS variables with a hex fallback, so documents render
//! on their own and can still be themed when embedded in a page.

mod builder;
pub mod css;
mod data;
mod element;
mod format;
mod style;

pub use builder::SvgDocument;
pub use data::{AreaData, AreaSeries, DataPoint, ensure_finite, max_value};
pub use element::{
    Axis, AxisOrientation, Bar, GridLine, Label, Line, LinearGradient, Marker, SvgElement,
    Tooltip, TooltipLine,
};
pub use format::{format_coord, format_number, format_value, html_escape};
pub use style::{
    ChartColor, DEFAULT_COLOR_COUNT, PALETTE, TextAnchor, default_colors, get_color, pick_color,
};
