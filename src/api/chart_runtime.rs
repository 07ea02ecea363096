use std::rc::Rc;

use crate::core::PixelPoint;
use crate::extensions::InteractionPlugin;
use crate::interaction::{
    DragSelection, HitInfo, ItemSelection, NoopPointerCapture, PointerCapture, PointerEvent,
    SelectInfo,
};

use super::{AfterRenderQueue, ChartListeners, PendingEmission, TooltipState, ZoomRangeHandler};

/// Hover bookkeeping for the last processed pointer move.
#[derive(Debug, Default)]
pub(super) struct HoverState {
    /// Latest move waiting for the next frame tick when moves are throttled.
    pub(super) pending: Option<PointerEvent>,
    pub(super) hit_info: Option<HitInfo>,
    pub(super) pointer: Option<PixelPoint>,
}

impl HoverState {
    pub(super) fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Mutable interaction state grouped separately from model/presentation.
pub(super) struct InteractionRuntime {
    pub(super) drag: DragSelection,
    pub(super) pointer_capture: Rc<dyn PointerCapture>,
    pub(super) hover: HoverState,
    pub(super) tooltip: TooltipState,
    pub(super) select_info: Option<SelectInfo>,
    pub(super) selected_item: Option<ItemSelection>,
    pub(super) listeners: ChartListeners,
    pub(super) zoom_handler: Option<Box<dyn ZoomRangeHandler>>,
    pub(super) after_render: AfterRenderQueue<PendingEmission>,
    pub(super) plugins: Vec<Box<dyn InteractionPlugin>>,
}

impl Default for InteractionRuntime {
    fn default() -> Self {
        Self {
            drag: DragSelection::default(),
            pointer_capture: Rc::new(NoopPointerCapture),
            hover: HoverState::default(),
            tooltip: TooltipState::default(),
            select_info: None,
            selected_item: None,
            listeners: ChartListeners::default(),
            zoom_handler: None,
            after_render: AfterRenderQueue::default(),
            plugins: Vec::new(),
        }
    }
}
