//! Standalone SVG document assembly.

use std::fmt::Write;

use super::element::SvgElement;
use super::format::{format_coord as c, html_escape};
use super::style::ChartColor;

/// Builder for one self-contained `<svg>` document.
///
/// Style blocks and `<defs>` are emitted inline before the body so the output
/// needs no external resources.
#[derive(Debug, Default)]
pub struct SvgDocument {
    width: f64,
    height: f64,
    title: String,
    styles: Vec<&'static str>,
    defs: Vec<String>,
    elements: Vec<String>,
}

impl SvgDocument {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            title: String::new(),
            styles: Vec::new(),
            defs: Vec::new(),
            elements: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Appends a static style block; identical blocks are emitted once.
    #[must_use]
    pub fn with_style(mut self, css: &'static str) -> Self {
        if !self.styles.contains(&css) {
            self.styles.push(css);
        }
        self
    }

    #[must_use]
    pub fn push_def<E: SvgElement>(mut self, def: &E) -> Self {
        self.defs.push(def.render());
        self
    }

    #[must_use]
    pub fn push_element<E: SvgElement>(mut self, element: &E) -> Self {
        self.elements.push(element.render());
        self
    }

    #[must_use]
    pub fn push_raw(mut self, svg: impl Into<String>) -> Self {
        self.elements.push(svg.into());
        self
    }

    /// Adds the centred "No data available" placeholder.
    #[must_use]
    pub fn push_empty_state(self) -> Self {
        let text = format!(
            r#"<text x="{}" y="{}" text-anchor="middle" fill="{}" font-size="14">No data available</text>"#,
            c(self.width / 2.0),
            c(self.height / 2.0),
            ChartColor::text_muted()
        );
        self.push_raw(text)
    }

    #[must_use]
    pub fn build(self) -> String {
        let mut output = String::new();

        let _ = writeln!(
            output,
            r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg" role="img">"#,
            w = c(self.width),
            h = c(self.height)
        );

        if !self.title.is_empty() {
            let escaped = html_escape(&self.title);
            let _ = writeln!(output, r"    <title>{escaped}</title>");
        }

        if !self.styles.is_empty() {
            let _ = writeln!(output, "    <style>");
            for block in &self.styles {
                for line in block.lines() {
                    let _ = writeln!(output, "        {line}");
                }
            }
            let _ = writeln!(output, "    </style>");
        }

        if !self.defs.is_empty() {
            let _ = writeln!(output, "    <defs>");
            for def in &self.defs {
                for line in def.lines() {
                    let _ = writeln!(output, "        {line}");
                }
            }
            let _ = writeln!(output, "    </defs>");
        }

        for element in self.elements {
            for line in element.lines() {
                let _ = writeln!(output, "    {line}");
            }
        }

        output.push_str("</svg>");
        output
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
