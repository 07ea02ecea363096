use crate::core::SeriesId;
use crate::error::ChartResult;
use crate::interaction::{ItemSelection, ItemTarget, PointerEvent};
use crate::render::Renderer;

use super::InteractionEngine;
use super::click_coordinator::ClickCoordinator;
use super::drag_coordinator::DragCoordinator;
use super::hover_coordinator::HoverCoordinator;
use super::selection_coordinator::SelectionCoordinator;

impl<R: Renderer> InteractionEngine<R> {
    /// Hover: hit-test, tooltip and overlay redraw.
    ///
    /// Skipped while a drag is moving. With `tooltip.throttledMove` the
    /// move is only recorded and processed by [`Self::flush_pending_hover`].
    pub fn pointer_move(&mut self, event: PointerEvent) -> ChartResult<()> {
        HoverCoordinator::pointer_move(self, event)
    }

    /// Frame tick for throttled hover; only the latest pending move runs.
    pub fn flush_pending_hover(&mut self) -> ChartResult<bool> {
        HoverCoordinator::flush_pending(self)
    }

    /// Cancels pending hover work, hides the tooltip and clears the overlay
    /// unless a retained selection rectangle must stay visible.
    pub fn pointer_leave(&mut self) -> ChartResult<()> {
        HoverCoordinator::pointer_leave(self)
    }

    /// Scrolls a visible tooltip body. Returns `true` when the host should
    /// prevent the wheel's default action.
    pub fn wheel(&mut self, event: PointerEvent) -> ChartResult<bool> {
        HoverCoordinator::wheel(self, event)
    }

    /// Starts a drag gesture. Returns `true` when dragging began.
    pub fn pointer_down(&mut self, event: PointerEvent) -> ChartResult<bool> {
        DragCoordinator::pointer_down(self, event)
    }

    /// Global move while a drag gesture holds the pointer capture.
    pub fn drag_pointer_move(&mut self, event: PointerEvent) -> ChartResult<()> {
        DragCoordinator::pointer_move(self, event)
    }

    /// Global release. Returns `true` when the gesture produced a selection.
    pub fn drag_pointer_up(&mut self, event: PointerEvent) -> ChartResult<bool> {
        DragCoordinator::pointer_up(self, event)
    }

    pub fn cancel_drag(&mut self) -> ChartResult<()> {
        DragCoordinator::cancel(self)
    }

    /// Removes the retained drag rectangle and clears the overlay.
    pub fn remove_selection_area(&mut self) -> ChartResult<()> {
        DragCoordinator::remove_selection_area(self)
    }

    /// Single click. Returns `false` when it was swallowed after a drag.
    pub fn click(&mut self, event: PointerEvent) -> ChartResult<bool> {
        ClickCoordinator::click(self, event)
    }

    pub fn dbl_click(&mut self, event: PointerEvent) -> ChartResult<()> {
        ClickCoordinator::dbl_click(self, event)
    }

    /// Selects an item programmatically.
    ///
    /// Rejects unknown series and, except on pie charts, a missing or
    /// non-integral data index without touching the current selection.
    pub fn select_item_by_data(&mut self, target: &ItemTarget) -> ChartResult<ItemSelection> {
        SelectionCoordinator::select_item_by_data(self, target)
    }

    pub fn render_with_selected_labels(&mut self, indices: &[usize]) -> ChartResult<()> {
        SelectionCoordinator::render_with_selected_labels(self, indices)
    }

    pub fn render_with_selected_series(&mut self, series_ids: &[SeriesId]) -> ChartResult<()> {
        SelectionCoordinator::render_with_selected_series(self, series_ids)
    }

    /// Follows a companion brush whose start index moved from `prev_start`
    /// (`None` on first report) to `cur_start`.
    pub fn shift_selection_for_brush(&mut self, prev_start: Option<usize>, cur_start: usize) {
        SelectionCoordinator::shift_for_brush(self, prev_start, cur_start);
    }

    /// Paint boundary: delivers queued listener payloads in order.
    pub fn after_render(&mut self) -> usize {
        SelectionCoordinator::deliver_after_render(self)
    }
}
