use crate::core::{AxisSteps, LabelOffset, PlotRect, SeriesList};

/// Per-frame chart geometry shared read-only with the interaction core.
///
/// The surrounding chart replaces the snapshot whenever series, layout or
/// axis bounds change; interaction passes never mutate it.
#[derive(Debug, Clone, Default)]
pub struct ChartSnapshot {
    pub series: SeriesList,
    pub labels: Vec<String>,
    pub chart_rect: PlotRect,
    pub label_offset: LabelOffset,
    pub axes: AxisSteps,
}

impl ChartSnapshot {
    #[must_use]
    pub fn new(series: SeriesList, chart_rect: PlotRect) -> Self {
        Self {
            series,
            chart_rect,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub fn with_label_offset(mut self, label_offset: LabelOffset) -> Self {
        self.label_offset = label_offset;
        self
    }

    #[must_use]
    pub fn with_axes(mut self, axes: AxisSteps) -> Self {
        self.axes = axes;
        self
    }

    /// Plot rectangle without label margins; drag gestures clamp to it.
    #[must_use]
    pub fn plot_range(&self) -> PlotRect {
        self.chart_rect.inset(self.label_offset)
    }
}
