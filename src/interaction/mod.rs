//! Pure interaction algorithms: pointer mapping, hit-testing, tooltip text,
//! selection bookkeeping, drag gestures and pixel-to-data translation.
//!
//! Nothing in this module touches a renderer; the engine facade in `api`
//! composes these pieces per input event.

mod coordinate_mapper;
mod drag;
mod label_locator;
mod range;
mod selection;
mod text_measure;
mod tooltip_format;

pub use coordinate_mapper::{
    PointerEvent, PointerPosition, SurfaceBounds, clamp_to_plot, map_pointer,
};
pub use drag::{CaptureGuard, DragInfo, DragSelection, NoopPointerCapture, PointerCapture};
pub use hit_test::{
    HitInfo, HitItem, HitTestContext, MaxTip, add_not_hit_info, find_hit_item, resolve_hit_value,
};
pub use label_locator::{BandLabelLocator, LabelLocator};
pub use range::{
    SelectedSeriesItems, find_selected_items, heat_map_selection_range, pixel_range_to_data_range,
};
pub use selection::{
    ItemSelection, ItemTarget, LabelSelection, OverflowPolicy, SelectInfo, SelectedIndices,
    SelectedSeriesIds, SelectionPolicy, SeriesSelection,
};
pub use text_measure::{EstimatedTextMeasurer, TextMeasurer};
pub use tooltip_format::{
    HEAT_MAP_ERROR_TEXT, HeatMapCellValue, TooltipFormatArgs, TooltipFormatter,
    TooltipValueFormatter,
};
