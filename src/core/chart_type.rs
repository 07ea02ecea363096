use serde::{Deserialize, Serialize};

/// Chart-type tag driving interaction variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartType {
    #[default]
    Line,
    Bar,
    Scatter,
    Pie,
    HeatMap,
}

/// How a drag rectangle follows the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragShape {
    /// Both axes follow the pointer.
    Free,
    /// Width follows the pointer; height spans the plot.
    Column,
    /// Geometry snaps to whole heat-map cells through the series.
    Block,
}

impl ChartType {
    /// Drag shape for chart types that support drag-selection.
    #[must_use]
    pub fn drag_shape(self) -> Option<DragShape> {
        match self {
            Self::Scatter => Some(DragShape::Free),
            Self::Line => Some(DragShape::Column),
            Self::HeatMap => Some(DragShape::Block),
            Self::Bar | Self::Pie => None,
        }
    }

    #[must_use]
    pub fn supports_drag_selection(self) -> bool {
        self.drag_shape().is_some()
    }

    #[must_use]
    pub fn shows_indicator(self) -> bool {
        !matches!(self, Self::Pie | Self::Scatter | Self::HeatMap)
    }

    /// Scatter and heat-map charts only highlight items while the tooltip is on.
    #[must_use]
    pub fn highlights_without_tooltip(self) -> bool {
        !matches!(self, Self::Scatter | Self::HeatMap)
    }

    /// Scatter and heat-map charts disable the tooltip unless it is configured.
    #[must_use]
    pub fn tooltip_enabled_by_default(self) -> bool {
        !matches!(self, Self::Scatter | Self::HeatMap)
    }
}
