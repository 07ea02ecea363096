use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{DataRange, PlotRect, SeriesId};
use crate::interaction::{PointerEvent, SelectInfo, SelectedSeriesItems};

/// Payload of `click` and `dbl-click` listeners.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClickArgs {
    pub event: PointerEvent,
    /// Category label of the item under the pointer, in item mode.
    pub label: Option<String>,
    pub value: Option<f64>,
    pub series_id: Option<SeriesId>,
    pub data_index: Option<usize>,
    /// Selection after the click, in label or series mode.
    pub selected: Option<SelectInfo>,
}

/// Payload of the `drag-select` listener.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSelectArgs {
    pub event: PointerEvent,
    pub data: Vec<SelectedSeriesItems>,
    /// `None` while axis bounds are not established.
    pub range: Option<DataRange>,
}

/// Drag geometry handed to the zoom integration, relative to the plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragSelectionInfo {
    pub drag_xsp: f64,
    pub drag_xep: f64,
    /// Plot width without the y-axis labels.
    pub chart_width: f64,
    /// Plot height without the x-axis labels.
    pub chart_height: f64,
    pub chart_range: PlotRect,
    pub chart_title: String,
}

/// Payload of the zoom integration hook.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomRangeArgs {
    pub event: PointerEvent,
    pub data: Vec<SelectedSeriesItems>,
    pub range: Option<DataRange>,
    pub drag_selection_info: DragSelectionInfo,
}

impl ZoomRangeArgs {
    /// `true` when the drag matched data and produced a range to zoom into.
    #[must_use]
    pub fn is_actionable(&self) -> bool {
        !self.data.is_empty() && self.range.is_some()
    }
}

/// Zoom component fed by drag gestures while zoom mode is active.
pub trait ZoomRangeHandler {
    fn on_zoom_range(&mut self, args: &ZoomRangeArgs);
}

impl<F> ZoomRangeHandler for F
where
    F: FnMut(&ZoomRangeArgs),
{
    fn on_zoom_range(&mut self, args: &ZoomRangeArgs) {
        self(args);
    }
}

pub type ClickListener = Box<dyn FnMut(&ClickArgs)>;
pub type DragSelectListener = Box<dyn FnMut(&DragSelectArgs)>;

/// Host callbacks; every slot is optional.
#[derive(Default)]
pub struct ChartListeners {
    pub click: Option<ClickListener>,
    pub dbl_click: Option<ClickListener>,
    pub drag_select: Option<DragSelectListener>,
}

impl fmt::Debug for ChartListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartListeners")
            .field("click", &self.click.is_some())
            .field("dbl_click", &self.dbl_click.is_some())
            .field("drag_select", &self.drag_select.is_some())
            .finish()
    }
}
