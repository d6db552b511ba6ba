//! Static style blocks embedded in rendered documents.
//!
//! These are hover and transition hints for whatever renders the SVG; nothing
//! here is computed.

/// Tooltip groups stay hidden until their parent group is hovered.
pub const TOOLTIP_CSS: &str = r".tooltip {
  opacity: 0;
  transition: opacity 0.25s cubic-bezier(0.4, 0, 0.2, 1);
  pointer-events: none;
}
.bar-group:hover .tooltip,
.point-group:hover .tooltip,
.slice-group:hover .tooltip,
.area-group:hover .tooltip {
  opacity: 1;
}";

pub const BAR_HOVER_CSS: &str = r".bar {
  transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1);
  cursor: pointer;
  filter: drop-shadow(0 1px 3px rgba(0,0,0,0.08));
}
.bar:hover {
  opacity: 0.8;
  filter: drop-shadow(0 3px 6px rgba(0,0,0,0.2));
}";

pub const LINE_HOVER_CSS: &str = r".chart-line {
  transition: stroke-width 0.3s cubic-bezier(0.4, 0, 0.2, 1);
  stroke-linecap: round;
  stroke-linejoin: round;
}
.chart-line:hover {
  stroke-width: 3;
}
.data-point {
  transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1);
  cursor: pointer;
}
.data-point:hover {
  r: 6;
  filter: drop-shadow(0 2px 6px rgba(0,0,0,0.25));
}";

pub const PIE_HOVER_CSS: &str = r".slice {
  transition: transform 0.3s cubic-bezier(0.4, 0, 0.2, 1), opacity 0.3s;
  cursor: pointer;
  stroke: #ffffff;
  stroke-width: 2;
}
.slice:hover {
  opacity: 0.85;
  filter: drop-shadow(0 3px 6px rgba(0,0,0,0.2));
}";

pub const AREA_HOVER_CSS: &str = r".chart-area {
  transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1);
  cursor: pointer;
}
.chart-area:hover {
  filter: drop-shadow(0 2px 6px rgba(0,0,0,0.15));
}";

/// Grid and axis text used by charts with a value axis.
pub const AXIS_CSS: &str = r".grid-line {
  stroke-width: 1;
  stroke-dasharray: 2,2;
  opacity: 0.3;
}
.axis-text {
  font-size: 12px;
  font-family: system-ui, -apple-system, sans-serif;
}";
