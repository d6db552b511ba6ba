//! SVG styling primitives: palette, colors and text anchoring.

use std::fmt;

use super::format::html_escape;

/// Fixed default palette used by [`get_color`].
pub const PALETTE: [&str; 8] = [
    "#3b82f6", // blue
    "#ef4444", // red
    "#10b981", // emerald
    "#f59e0b", // amber
    "#8b5cf6", // violet
    "#ec4899", // pink
    "#06b6d4", // cyan
    "#84cc16", // lime
];

/// Number of palette entries charts cycle through when no `colors` are configured.
pub const DEFAULT_COLOR_COUNT: usize = 5;

/// Deterministic cyclic palette lookup: `get_color(i) == get_color(i % PALETTE.len())`.
#[must_use]
pub const fn get_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// The default `colors` option: the first five palette entries.
#[must_use]
pub fn default_colors() -> Vec<String> {
    PALETTE[..DEFAULT_COLOR_COUNT]
        .iter()
        .map(|c| (*c).to_string())
        .collect()
}

/// Picks `colors[index]` cyclically, falling back to the palette when `colors` is empty.
#[must_use]
pub fn pick_color(colors: &[String], index: usize) -> ChartColor {
    if colors.is_empty() {
        ChartColor::hex(get_color(index))
    } else {
        ChartColor::hex(&colors[index % colors.len()])
    }
}

/// A fill or stroke color. CSS variables carry a fallback so the document
/// renders standalone and can still be themed by an embedding page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartColor {
    /// Direct color (e.g., "#22c55e" or "rgba(0,0,0,0.5)")
    Hex(String),
    /// CSS variable reference: `var(--color-{name}, {fallback})`
    CssVar { name: String, fallback: String },
}

impl ChartColor {
    #[must_use]
    pub fn css_var(name: &str, fallback: &str) -> Self {
        Self::CssVar {
            name: name.to_string(),
            fallback: fallback.to_string(),
        }
    }

    #[must_use]
    pub fn hex(color: &str) -> Self {
        Self::Hex(color.to_string())
    }

    /// Muted text used for axis labels and empty states.
    #[must_use]
    pub fn text_muted() -> Self {
        Self::css_var("text-muted", "#6b7280")
    }

    /// Dashed grid line color.
    #[must_use]
    pub fn grid() -> Self {
        Self::css_var("grid", "#e5e7eb")
    }

    /// Convert to CSS value string, unescaped.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Hex(h) => h.clone(),
            Self::CssVar { name, fallback } => format!("var(--color-{name}, {fallback})"),
        }
    }
}

/// Renders the CSS value escaped for use inside a quoted attribute.
impl fmt::Display for ChartColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&html_escape(&self.to_css()))
    }
}

/// Text anchor for axis tick labels.
#[derive(Debug, Clone, Copy)]
pub enum TextAnchor {
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
