use crate::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One rendered circle + label. Multiple points may share `name`/`color`;
/// the legend collapses them to the first occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub name: String,
    /// Any CSS color string; passed through verbatim.
    pub color: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    /// `[min, max]` ordered pair, regardless of field order.
    pub fn extent(&self) -> (f64, f64) {
        if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        }
    }

    pub fn span(&self) -> f64 {
        let (lo, hi) = self.extent();
        hi - lo
    }
}

/// Reference line `y = m*x + b` drawn across the visible x-domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionLine {
    pub m: f64,
    pub b: f64,
}

impl Default for RegressionLine {
    fn default() -> Self {
        Self { m: 1.0, b: 10.0 }
    }
}

/// Derived legend row: one per unique point name, first-seen color wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub name: String,
    pub color: String,
}

/// Complete chart input. All fields arrive from the caller per render; the
/// pipeline never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub data: Vec<DataPoint>,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
    /// Exactly 4 labels, positionally mapped to corners:
    /// index 0 top-left, 1 top-right, 2 bottom-left, 3 bottom-right.
    #[serde(alias = "quadrantsList")]
    pub quadrants: Vec<String>,
    pub x_label: String,
    pub y_label: String,
    pub legend_title: String,
    pub y_label_top: String,
    pub y_label_bottom: String,
    pub x_label_left: String,
    pub x_label_right: String,
    #[serde(default)]
    pub invert_x: bool,
    #[serde(default)]
    pub invert_y: bool,
    #[serde(default)]
    pub regression: RegressionLine,
}

impl ChartSpec {
    /// Rejects inputs that would otherwise silently draw garbage: a quadrant
    /// list that is not exactly 4 labels, and degenerate or non-finite ranges
    /// (a zero-span domain has no usable linear scale).
    pub fn validate(&self) -> Result<()> {
        if self.quadrants.len() != 4 {
            return Err(Error::QuadrantCount {
                found: self.quadrants.len(),
            });
        }
        for (axis, range) in [("x", &self.x_range), ("y", &self.y_range)] {
            if !range.min.is_finite() || !range.max.is_finite() {
                return Err(Error::NonFiniteRange { axis });
            }
            if range.min >= range.max {
                return Err(Error::DegenerateRange {
                    axis,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        Ok(())
    }

    /// Unique `name -> color` rows in first-occurrence order.
    pub fn legend(&self) -> Vec<LegendEntry> {
        let mut seen: IndexMap<&str, &str> = IndexMap::new();
        for p in &self.data {
            seen.entry(p.name.as_str()).or_insert(p.color.as_str());
        }
        seen.into_iter()
            .map(|(name, color)| LegendEntry {
                name: name.to_string(),
                color: color.to_string(),
            })
            .collect()
    }
}
