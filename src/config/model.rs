use serde::{Deserialize, Serialize};

use crate::chart::{AreaOptions, BarOptions, LineOptions, PieOptions};

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Per-chart defaults loaded from `.beaned-charts.toml`.
///
/// Every table is optional; missing keys fall back to the chart defaults and
/// unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Config format version; only "1" is accepted when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub bar: BarOptions,

    #[serde(default)]
    pub line: LineOptions,

    #[serde(default)]
    pub pie: PieOptions,

    #[serde(default)]
    pub area: AreaOptions,
}
