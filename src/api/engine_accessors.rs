use std::rc::Rc;
use std::sync::Arc;

use tracing::debug;

use crate::core::{ChartSnapshot, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{
    DragInfo, HitInfo, ItemSelection, LabelLocator, LabelSelection, PointerCapture, SelectInfo,
    SurfaceBounds, TextMeasurer, TooltipValueFormatter,
};
use crate::render::Renderer;

use super::{
    ChartListeners, ClickArgs, DragSelectArgs, InteractionEngine, InteractionOptions, TooltipState,
    ZoomRangeHandler,
};

impl<R: Renderer> InteractionEngine<R> {
    /// Options in effect, including zoom mode overrides.
    #[must_use]
    pub fn options(&self) -> InteractionOptions {
        self.core.model.effective_options()
    }

    /// Options as configured, without zoom mode overrides.
    #[must_use]
    pub fn configured_options(&self) -> &InteractionOptions {
        &self.core.model.options
    }

    /// Replaces the configuration.
    ///
    /// Selection state restarts empty in the newly configured mode and any
    /// gesture or retained rectangle is dropped.
    pub fn set_options(&mut self, options: InteractionOptions) -> ChartResult<()> {
        options.validate()?;
        self.core.model.zoom_mode = options.zoom.enabled;
        self.core.model.options = options;
        self.core
            .presentation
            .sync_formatter(&self.core.model.options);

        let runtime = &mut self.core.runtime;
        runtime.drag.cancel();
        runtime.drag.clear_backup();
        runtime.hover.clear();
        runtime.tooltip.hide();
        runtime.selected_item = None;
        self.init_selected_info();
        Ok(())
    }

    #[must_use]
    pub fn zoom_mode(&self) -> bool {
        self.core.model.zoom_mode
    }

    /// Enters or leaves zoom mode; drag-selection overrides follow.
    pub fn set_zoom_mode(&mut self, active: bool) {
        if self.core.model.zoom_mode == active {
            return;
        }
        debug!(active, "zoom mode changed");
        self.core.model.zoom_mode = active;
    }

    #[must_use]
    pub fn snapshot(&self) -> &ChartSnapshot {
        &self.core.model.snapshot
    }

    /// Replaces the chart geometry read by every interaction pass.
    ///
    /// The last hover result is dropped and label selections are re-derived
    /// against the new labels and series.
    pub fn set_snapshot(&mut self, snapshot: impl Into<Arc<ChartSnapshot>>) {
        self.core.model.snapshot = snapshot.into();
        self.core.runtime.hover.hit_info = None;

        let Some(SelectInfo::Label(selection)) = self.core.runtime.select_info.as_ref() else {
            return;
        };
        let policy = self.core.model.options.select_label.policy();
        let rederived = LabelSelection::derive(
            selection.data_index.iter().copied(),
            &self.core.model.snapshot,
            policy,
        );
        self.core.runtime.select_info = Some(SelectInfo::Label(rederived));
    }

    #[must_use]
    pub fn surface_bounds(&self) -> SurfaceBounds {
        self.core.model.surface
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.core.model.surface.viewport()
    }

    /// Updates the overlay surface position and size.
    pub fn set_surface_bounds(&mut self, surface: SurfaceBounds) -> ChartResult<()> {
        let viewport = surface.viewport();
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.core.model.surface = surface;
        Ok(())
    }

    /// Installs or removes the user tooltip formatter.
    pub fn set_tooltip_formatter(&mut self, formatter: Option<TooltipValueFormatter>) {
        self.core.presentation.value_formatter = formatter;
        self.core
            .presentation
            .sync_formatter(&self.core.model.options);
    }

    pub fn set_text_measurer(&mut self, measurer: impl TextMeasurer + 'static) {
        self.core.presentation.measurer = Box::new(measurer);
    }

    pub fn set_label_locator(&mut self, locator: impl LabelLocator + 'static) {
        self.core.presentation.label_locator = Box::new(locator);
    }

    /// Sets the hook attaching global listeners for drag gestures.
    ///
    /// A gesture already in progress keeps the capture it acquired.
    pub fn set_pointer_capture(&mut self, capture: Rc<dyn PointerCapture>) {
        self.core.runtime.pointer_capture = capture;
    }

    pub fn on_click(&mut self, listener: impl FnMut(&ClickArgs) + 'static) {
        self.core.runtime.listeners.click = Some(Box::new(listener));
    }

    pub fn on_dbl_click(&mut self, listener: impl FnMut(&ClickArgs) + 'static) {
        self.core.runtime.listeners.dbl_click = Some(Box::new(listener));
    }

    pub fn on_drag_select(&mut self, listener: impl FnMut(&DragSelectArgs) + 'static) {
        self.core.runtime.listeners.drag_select = Some(Box::new(listener));
    }

    pub fn clear_listeners(&mut self) {
        self.core.runtime.listeners = ChartListeners::default();
    }

    pub fn set_zoom_range_handler(&mut self, handler: impl ZoomRangeHandler + 'static) {
        self.core.runtime.zoom_handler = Some(Box::new(handler));
    }

    pub fn clear_zoom_range_handler(&mut self) {
        self.core.runtime.zoom_handler = None;
    }

    /// Result of the last processed hover.
    #[must_use]
    pub fn hit_info(&self) -> Option<&HitInfo> {
        self.core.runtime.hover.hit_info.as_ref()
    }

    #[must_use]
    pub fn tooltip_state(&self) -> &TooltipState {
        &self.core.runtime.tooltip
    }

    #[must_use]
    pub fn select_info(&self) -> Option<&SelectInfo> {
        self.core.runtime.select_info.as_ref()
    }

    #[must_use]
    pub fn selected_item(&self) -> Option<&ItemSelection> {
        self.core.runtime.selected_item.as_ref()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.core.runtime.drag.is_dragging()
    }

    /// Geometry of the gesture in progress.
    #[must_use]
    pub fn drag_info(&self) -> Option<&DragInfo> {
        self.core.runtime.drag.current()
    }

    /// Rectangle retained after the last completed gesture.
    #[must_use]
    pub fn drag_backup(&self) -> Option<&DragInfo> {
        self.core.runtime.drag.backup()
    }

    /// Listener payloads waiting for [`Self::after_render`].
    #[must_use]
    pub fn pending_emissions(&self) -> usize {
        self.core.runtime.after_render.len()
    }

    /// `true` while a throttled pointer move waits for the next frame tick.
    #[must_use]
    pub fn has_pending_hover(&self) -> bool {
        self.core.runtime.hover.pending.is_some()
    }
}
