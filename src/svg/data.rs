//! Chart data model.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ChartError, Result};

/// A single data point for bar, line and pie charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Label shown on the axis or in tooltips
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Numeric value; must be finite
    pub value: f64,
    /// Optional color override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl DataPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: Some(label.into()),
            value,
            color: None,
        }
    }

    #[must_use]
    pub const fn unlabeled(value: f64) -> Self {
        Self {
            label: None,
            value,
            color: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Label for display, or `#n` (1-based) when the point has none.
    #[must_use]
    pub fn display_label(&self, index: usize) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| format!("#{}", index + 1))
    }
}

/// Checks that every value is finite.
///
/// # Errors
/// Returns `NonFiniteValue` for the first NaN or infinite value.
pub fn ensure_finite(values: impl IntoIterator<Item = f64>) -> Result<()> {
    for (index, value) in values.into_iter().enumerate() {
        if !value.is_finite() {
            return Err(ChartError::NonFiniteValue { index, value });
        }
    }
    Ok(())
}

/// Largest value, or 0 when `values` is empty or entirely non-positive.
#[must_use]
pub fn max_value(values: impl IntoIterator<Item = f64>) -> f64 {
    values.into_iter().fold(0.0_f64, f64::max)
}

/// One named series of an area chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaSeries {
    pub name: String,
    pub values: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl AreaSeries {
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
            color: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Categories shared by every series of an area chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AreaData {
    pub categories: Vec<String>,
    pub series: Vec<AreaSeries>,
}

impl AreaData {
    /// Creates area data, checking that every series has one value per category.
    ///
    /// # Errors
    /// Returns `InvalidData` when a series length differs from the category count.
    pub fn new(categories: Vec<String>, series: Vec<AreaSeries>) -> Result<Self> {
        let data = Self { categories, series };
        data.check_lengths()?;
        Ok(data)
    }

    /// Builds area data from records such as `{"date": "2024-01-01", "desktop": 222}`.
    ///
    /// `x_key` provides the category label; every other numeric field becomes a
    /// series, in first-seen order. A record lacking a series value contributes 0.
    ///
    /// # Errors
    /// Returns `InvalidData` when a record has no `x_key` field.
    pub fn from_rows(rows: &[IndexMap<String, Value>], x_key: &str) -> Result<Self> {
        let mut categories = Vec::with_capacity(rows.len());
        let mut columns: IndexMap<String, Vec<f64>> = IndexMap::new();

        for (row_index, row) in rows.iter().enumerate() {
            let category = row.get(x_key).ok_or_else(|| {
                ChartError::InvalidData(format!("record {row_index} has no \"{x_key}\" field"))
            })?;
            categories.push(value_to_label(category));

            for (key, value) in row {
                if key == x_key {
                    continue;
                }
                if let Some(number) = value.as_f64() {
                    let column = columns.entry(key.clone()).or_default();
                    column.resize(row_index, 0.0);
                    column.push(number);
                }
            }
        }

        let series = columns
            .into_iter()
            .map(|(name, mut values)| {
                values.resize(categories.len(), 0.0);
                AreaSeries::new(name, values)
            })
            .collect();

        Ok(Self { categories, series })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() || self.series.is_empty()
    }

    /// Shared scale maximum across every series.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        max_value(self.series.iter().flat_map(|s| s.values.iter().copied()))
    }

    /// # Errors
    /// Returns `InvalidData` when a series length differs from the category count.
    pub fn check_lengths(&self) -> Result<()> {
        for series in &self.series {
            if series.values.len() != self.categories.len() {
                return Err(ChartError::InvalidData(format!(
                    "series \"{}\" has {} values but there are {} categories",
                    series.name,
                    series.values.len(),
                    self.categories.len()
                )));
            }
        }
        Ok(())
    }
}

fn value_to_label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "data_tests.rs"]
mod tests;
