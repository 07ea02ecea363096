use serde::{Deserialize, Serialize};

use crate::core::{ChartType, DataRange, DragRect, SeriesId, Viewport};
use crate::render::CanvasLayerKind;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionContext {
    pub viewport: Viewport,
    pub chart_type: ChartType,
    pub horizontal: bool,
    pub series_len: usize,
    pub zoom_mode: bool,
    pub dragging: bool,
    pub tooltip_visible: bool,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InteractionEvent {
    PointerMoved { x: f64, y: f64 },
    PointerLeft,
    HoverResolved {
        items: usize,
        hit_id: Option<SeriesId>,
    },
    DragStarted { x: f64, y: f64 },
    DragUpdated { rect: DragRect },
    DragSelected {
        rect: DragRect,
        range: Option<DataRange>,
    },
    DragDiscarded,
    SelectionAreaRemoved,
    SelectedItemChanged {
        series_id: SeriesId,
        data_index: Option<usize>,
    },
    SelectedLabelsChanged { data_index: Vec<usize> },
    SelectedSeriesChanged { series_id: Vec<SeriesId> },
    LayerRendered { layer: CanvasLayerKind },
}

/// Extension hook interface for bounded custom logic.
///
/// Plugins observe interaction events and read engine context without
/// mutating interaction state directly.
pub trait InteractionPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &InteractionEvent, context: InteractionContext);
}
