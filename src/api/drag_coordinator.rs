use tracing::debug;

use crate::core::{ChartType, DataRange, SelectionArea};
use crate::error::ChartResult;
use crate::extensions::InteractionEvent;
use crate::interaction::{
    CaptureGuard, DragInfo, PointerEvent, SelectedSeriesItems, find_selected_items,
    heat_map_selection_range, map_pointer, pixel_range_to_data_range,
};
use crate::render::Renderer;

use super::render_coordinator::RenderCoordinator;
use super::{
    DragSelectArgs, DragSelectionInfo, InteractionEngine, PendingEmission, ZoomRangeArgs,
};

pub(super) struct DragCoordinator;

impl DragCoordinator {
    /// Starts a gesture when drag-selection is on for a chart type that
    /// supports it; any retained rectangle is removed first.
    pub(super) fn pointer_down<R: Renderer>(
        engine: &mut InteractionEngine<R>,
        event: PointerEvent,
    ) -> ChartResult<bool> {
        let options = engine.core.model.effective_options();
        if !options.drag_selection.enabled || !options.chart_type.supports_drag_selection() {
            return Ok(false);
        }
        Self::remove_selection_area(engine)?;
        Self::suspend_hover(engine)?;

        let point = map_pointer(event, engine.core.model.surface).point();
        let range = engine.core.model.snapshot.plot_range();
        let runtime = &mut engine.core.runtime;
        runtime.drag.take_click_swallow();
        let guard = CaptureGuard::acquire(runtime.pointer_capture.clone());
        runtime.drag.start(point, range, guard);

        let anchor = range.clamp(point);
        engine.emit_plugin_event(InteractionEvent::DragStarted {
            x: anchor.x,
            y: anchor.y,
        });
        Ok(true)
    }

    pub(super) fn pointer_move<R: Renderer>(
        engine: &mut InteractionEngine<R>,
        event: PointerEvent,
    ) -> ChartResult<()> {
        if !engine.core.runtime.drag.is_dragging() {
            return Ok(());
        }
        let Some(shape) = engine.core.model.options.chart_type.drag_shape() else {
            return Ok(());
        };

        let point = map_pointer(event, engine.core.model.surface).point();
        let snapshot = engine.core.model.snapshot.clone();
        let updated = engine.core.runtime.drag.update(point, shape, |query| {
            snapshot
                .series
                .values()
                .next()
                .and_then(|entry| entry.geometry.as_deref())
                .and_then(|geometry| geometry.find_block_range(query))
        });
        let Some(info) = updated else {
            return Ok(());
        };

        RenderCoordinator::render_overlay(engine)?;
        engine.emit_plugin_event(InteractionEvent::DragUpdated { rect: info.rect });
        Ok(())
    }

    /// Ends the gesture. Returns `true` when it produced a selection.
    pub(super) fn pointer_up<R: Renderer>(
        engine: &mut InteractionEngine<R>,
        event: PointerEvent,
    ) -> ChartResult<bool> {
        if !engine.core.runtime.drag.is_dragging() {
            return Ok(false);
        }
        let Some(info) = engine.core.runtime.drag.finish() else {
            RenderCoordinator::render_overlay(engine)?;
            engine.emit_plugin_event(InteractionEvent::DragDiscarded);
            return Ok(false);
        };

        let options = engine.core.model.effective_options();
        let (data, range) = Self::selection_payload(engine, &info, options.chart_type);
        engine.core.runtime.drag.keep_backup(info);
        debug!(
            series = data.len(),
            has_range = range.is_some(),
            zoom = engine.core.model.zoom_mode,
            "drag selection completed"
        );

        let runtime = &mut engine.core.runtime;
        if runtime.listeners.drag_select.is_some() && !engine.core.model.zoom_mode {
            runtime
                .after_render
                .schedule(PendingEmission::DragSelect(DragSelectArgs { event, data, range }));
        } else if engine.core.model.zoom_mode {
            let args = ZoomRangeArgs {
                event,
                data,
                range,
                drag_selection_info: Self::drag_selection_info(&info, &options.title.text),
            };
            if let Some(handler) = runtime.zoom_handler.as_mut() {
                handler.on_zoom_range(&args);
            }
        }

        engine.emit_plugin_event(InteractionEvent::DragSelected {
            rect: info.rect,
            range,
        });
        if options.drag_selection.keep_display {
            RenderCoordinator::render_overlay(engine)?;
        } else {
            Self::remove_selection_area(engine)?;
        }
        Ok(true)
    }

    /// Abandons a gesture; its capture is released with the state.
    pub(super) fn cancel<R: Renderer>(engine: &mut InteractionEngine<R>) -> ChartResult<()> {
        if !engine.core.runtime.drag.is_dragging() {
            return Ok(());
        }
        engine.core.runtime.drag.cancel();
        RenderCoordinator::render_overlay(engine)?;
        engine.emit_plugin_event(InteractionEvent::DragDiscarded);
        Ok(())
    }

    /// Drops the retained rectangle and clears the overlay.
    pub(super) fn remove_selection_area<R: Renderer>(
        engine: &mut InteractionEngine<R>,
    ) -> ChartResult<()> {
        let had_backup = engine.core.runtime.drag.backup().is_some();
        engine.core.runtime.drag.clear_backup();
        RenderCoordinator::clear_overlay(engine)?;
        if had_backup {
            engine.emit_plugin_event(InteractionEvent::SelectionAreaRemoved);
        }
        Ok(())
    }

    /// Forgets the last hover pass so nothing from it is repainted once the
    /// gesture ends.
    fn suspend_hover<R: Renderer>(engine: &mut InteractionEngine<R>) -> ChartResult<()> {
        let runtime = &mut engine.core.runtime;
        runtime.hover.clear();
        if runtime.tooltip.visible {
            runtime.tooltip.hide();
            RenderCoordinator::render_tooltip(engine)?;
        }
        Ok(())
    }

    fn selection_payload<R: Renderer>(
        engine: &InteractionEngine<R>,
        info: &DragInfo,
        chart_type: ChartType,
    ) -> (Vec<SelectedSeriesItems>, Option<DataRange>) {
        let snapshot = &engine.core.model.snapshot;
        let area = SelectionArea {
            rect: info.rect,
            range: info.range,
        };
        let data = find_selected_items(&snapshot.series, &area);
        let range = if chart_type == ChartType::HeatMap {
            heat_map_selection_range(&area, &snapshot.series, &snapshot.axes)
        } else {
            pixel_range_to_data_range(info.rect, info.range, &snapshot.axes)
        };
        (data, range)
    }

    fn drag_selection_info(info: &DragInfo, title: &str) -> DragSelectionInfo {
        let drag_xsp = info.rect.xsp - info.range.x1;
        DragSelectionInfo {
            drag_xsp,
            drag_xep: drag_xsp + info.rect.width,
            chart_width: info.range.width(),
            chart_height: info.range.height(),
            chart_range: info.range,
            chart_title: title.to_owned(),
        }
    }
}
