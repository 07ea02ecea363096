use crate::error::ChartResult;
use crate::extensions::InteractionEvent;
use crate::render::{CanvasLayerKind, RenderFrame, Renderer};

use super::InteractionEngine;
use super::overlay_frame_builder::{
    OverlayRenderContext, build_drag_overlay, build_hover_overlay, build_resting_overlay,
};
use super::tooltip_frame_builder::build_tooltip_frame;

pub(super) struct RenderCoordinator;

impl RenderCoordinator {
    /// Repaints both transient layers from the current interaction state.
    pub(super) fn render_current<R: Renderer>(engine: &mut InteractionEngine<R>) -> ChartResult<()> {
        Self::render_overlay(engine)?;
        Self::render_tooltip(engine)
    }

    /// Overlay precedence: a moving drag rectangle, then the hover visuals,
    /// then the retained selection rectangle alone.
    pub(super) fn render_overlay<R: Renderer>(engine: &mut InteractionEngine<R>) -> ChartResult<()> {
        let frame = Self::overlay_frame(engine);
        Self::paint(engine, frame)
    }

    pub(super) fn clear_overlay<R: Renderer>(engine: &mut InteractionEngine<R>) -> ChartResult<()> {
        let frame = RenderFrame::new(CanvasLayerKind::Overlay, engine.viewport());
        Self::paint(engine, frame)
    }

    pub(super) fn render_tooltip<R: Renderer>(engine: &mut InteractionEngine<R>) -> ChartResult<()> {
        let viewport = engine.viewport();
        let tooltip = &engine.core.runtime.tooltip;
        let frame = match tooltip.layout.as_ref().filter(|_| tooltip.visible) {
            Some(layout) => build_tooltip_frame(
                viewport,
                layout,
                tooltip.scroll_top,
                engine.core.model.options.tooltip(),
            ),
            None => RenderFrame::new(CanvasLayerKind::Tooltip, viewport),
        };
        Self::paint(engine, frame)
    }

    fn overlay_frame<R: Renderer>(engine: &InteractionEngine<R>) -> RenderFrame {
        let options = engine.core.model.effective_options();
        let viewport = engine.viewport();
        let runtime = &engine.core.runtime;
        let drag_style = options.drag_selection;

        if let Some(info) = runtime.drag.current().filter(|info| info.is_move) {
            return build_drag_overlay(viewport, info.rect, drag_style);
        }

        let backup = runtime.drag.backup().map(|info| info.rect);
        match (runtime.hover.hit_info.as_ref(), runtime.hover.pointer) {
            (Some(hit_info), Some(pointer)) => build_hover_overlay(OverlayRenderContext {
                viewport,
                plot: engine.core.model.snapshot.plot_range(),
                pointer,
                hit_info,
                selection_backup: backup,
                options: &options,
            }),
            _ => build_resting_overlay(viewport, backup, drag_style),
        }
    }

    fn paint<R: Renderer>(engine: &mut InteractionEngine<R>, frame: RenderFrame) -> ChartResult<()> {
        engine.renderer.render(&frame)?;
        engine.emit_plugin_event(InteractionEvent::LayerRendered { layer: frame.layer });
        Ok(())
    }
}
