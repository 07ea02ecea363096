use tracing::trace;

use crate::core::PixelPoint;
use crate::error::ChartResult;
use crate::extensions::InteractionEvent;
use crate::interaction::{
    HitInfo, HitTestContext, PointerEvent, add_not_hit_info, find_hit_item, map_pointer,
};
use crate::render::Renderer;

use super::InteractionEngine;
use super::render_coordinator::RenderCoordinator;
use super::tooltip_layout::{TooltipLayoutInput, layout_tooltip};

pub(super) struct HoverCoordinator;

impl HoverCoordinator {
    pub(super) fn pointer_move<R: Renderer>(
        engine: &mut InteractionEngine<R>,
        event: PointerEvent,
    ) -> ChartResult<()> {
        if engine.core.runtime.drag.is_moving() {
            return Ok(());
        }
        if engine.core.model.options.tooltip().throttled_move {
            engine.core.runtime.hover.pending = Some(event);
            return Ok(());
        }
        Self::process(engine, event)
    }

    /// Processes the latest coalesced move, if any. Returns `true` when a
    /// hover pass ran.
    pub(super) fn flush_pending<R: Renderer>(engine: &mut InteractionEngine<R>) -> ChartResult<bool> {
        let Some(event) = engine.core.runtime.hover.pending.take() else {
            return Ok(false);
        };
        if engine.core.runtime.drag.is_moving() {
            return Ok(false);
        }
        Self::process(engine, event)?;
        Ok(true)
    }

    pub(super) fn pointer_leave<R: Renderer>(engine: &mut InteractionEngine<R>) -> ChartResult<()> {
        let options = engine.core.model.effective_options();
        let runtime = &mut engine.core.runtime;
        runtime.hover.clear();
        runtime.tooltip.hide();

        let drag = options.drag_selection;
        if drag.enabled && drag.keep_display {
            RenderCoordinator::render_overlay(engine)?;
        } else {
            RenderCoordinator::clear_overlay(engine)?;
        }
        RenderCoordinator::render_tooltip(engine)?;
        engine.emit_plugin_event(InteractionEvent::PointerLeft);
        Ok(())
    }

    /// Scrolls a visible scrollable tooltip. Returns `true` when the host
    /// should prevent the wheel's default action.
    pub(super) fn wheel<R: Renderer>(
        engine: &mut InteractionEngine<R>,
        event: PointerEvent,
    ) -> ChartResult<bool> {
        if !engine.core.model.options.tooltip().use_scrollbar || !engine.core.runtime.tooltip.visible
        {
            return Ok(false);
        }
        if engine.core.runtime.tooltip.scroll_by(event.delta_y) {
            RenderCoordinator::render_tooltip(engine)?;
        }
        Ok(true)
    }

    /// Hit-tests `point` against the current snapshot.
    pub(super) fn resolve_hits<R: Renderer>(
        engine: &InteractionEngine<R>,
        point: PixelPoint,
        with_not_hit: bool,
    ) -> HitInfo {
        let presentation = &engine.core.presentation;
        let ctx = HitTestContext {
            formatter: &presentation.formatter,
            measurer: presentation.measurer.as_ref(),
        };
        let series = &engine.core.model.snapshot.series;
        let mut info = find_hit_item(series, point, ctx);
        if with_not_hit && !info.is_empty() {
            add_not_hit_info(&mut info, series, ctx);
        }
        info
    }

    fn process<R: Renderer>(engine: &mut InteractionEngine<R>, event: PointerEvent) -> ChartResult<()> {
        let options = engine.core.model.effective_options();
        let tooltip = options.tooltip();
        let position = map_pointer(event, engine.core.model.surface);
        let point = position.point();
        engine.emit_plugin_event(InteractionEvent::PointerMoved {
            x: point.x,
            y: point.y,
        });

        let hit_info = Self::resolve_hits(engine, point, tooltip.show_all_value_in_range);
        let layout = if tooltip.enabled && !hit_info.is_empty() {
            layout_tooltip(TooltipLayoutInput {
                hit_info: &hit_info,
                chart_type: options.chart_type,
                horizontal: options.horizontal,
                pointer: point,
                surface: engine.core.model.surface,
                labels: &engine.core.model.snapshot.labels,
                sort_by_value: tooltip.sort_by_value,
                use_scrollbar: tooltip.use_scrollbar,
                measurer: engine.core.presentation.measurer.as_ref(),
            })
        } else {
            None
        };
        trace!(
            items = hit_info.items.len(),
            tooltip = layout.is_some(),
            "hover resolved"
        );

        let event = InteractionEvent::HoverResolved {
            items: hit_info.items.len(),
            hit_id: hit_info.hit_id.clone(),
        };
        let runtime = &mut engine.core.runtime;
        match layout {
            Some(layout) => runtime.tooltip.show(layout),
            None => runtime.tooltip.hide(),
        }
        runtime.hover.hit_info = Some(hit_info);
        runtime.hover.pointer = Some(point);
        engine.emit_plugin_event(event);

        RenderCoordinator::render_current(engine)
    }
}
