use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Data-space bounds currently represented by one axis' pixel span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisRange {
    graph_min: f64,
    graph_max: f64,
}

impl AxisRange {
    pub fn new(graph_min: f64, graph_max: f64) -> ChartResult<Self> {
        if !graph_min.is_finite() || !graph_max.is_finite() || graph_min >= graph_max {
            return Err(ChartError::InvalidData(
                "axis range must be finite with graph_min < graph_max".to_owned(),
            ));
        }

        Ok(Self {
            graph_min,
            graph_max,
        })
    }

    #[must_use]
    pub fn graph_min(self) -> f64 {
        self.graph_min
    }

    #[must_use]
    pub fn graph_max(self) -> f64 {
        self.graph_max
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.graph_max - self.graph_min
    }

    /// Interpolates a value at `ratio` of the span.
    #[must_use]
    pub fn value_at_ratio(self, ratio: f64) -> f64 {
        self.graph_min + self.span() * ratio
    }

    /// Projects a value onto a pixel span running from `start_px` to `end_px`.
    #[must_use]
    pub fn value_to_pixel(self, value: f64, start_px: f64, end_px: f64) -> f64 {
        let ratio = (value - self.graph_min) / self.span();
        start_px + (end_px - start_px) * ratio
    }

    /// Inverse of [`AxisRange::value_to_pixel`].
    #[must_use]
    pub fn pixel_to_value(self, pixel: f64, start_px: f64, end_px: f64) -> f64 {
        self.value_at_ratio(ratio_in_range(start_px, end_px, pixel))
    }
}

/// Position ratio of `value` between `min` and `max`.
#[must_use]
pub fn ratio_in_range(min: f64, max: f64, value: f64) -> f64 {
    (value - min) / (max - min)
}

/// Per-axis ranges; the first entry of each list is the primary axis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisSteps {
    pub x: Vec<AxisRange>,
    pub y: Vec<AxisRange>,
}

impl AxisSteps {
    #[must_use]
    pub fn new(x: AxisRange, y: AxisRange) -> Self {
        Self {
            x: vec![x],
            y: vec![y],
        }
    }

    /// Primary x/y ranges, or `None` before the first render established them.
    #[must_use]
    pub fn primary(&self) -> Option<(AxisRange, AxisRange)> {
        Some((*self.x.first()?, *self.y.first()?))
    }
}
