use crate::extensions::{InteractionContext, InteractionEvent};
use crate::render::Renderer;

use super::InteractionEngine;

impl<R: Renderer> InteractionEngine<R> {
    pub(super) fn plugin_context(&self) -> InteractionContext {
        let model = &self.core.model;
        let runtime = &self.core.runtime;
        InteractionContext {
            viewport: model.surface.viewport(),
            chart_type: model.options.chart_type,
            horizontal: model.options.horizontal,
            series_len: model.snapshot.series.len(),
            zoom_mode: model.zoom_mode,
            dragging: runtime.drag.is_dragging(),
            tooltip_visible: runtime.tooltip.visible,
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: InteractionEvent) {
        if self.core.runtime.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.core.runtime.plugins {
            plugin.on_event(&event, context);
        }
    }
}
