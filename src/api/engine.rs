use crate::error::ChartResult;
use crate::render::Renderer;

use super::{engine_core::EngineCore, render_coordinator::RenderCoordinator};

/// Main interaction facade consumed by host applications.
///
/// `InteractionEngine` routes pointer input through hit-testing, drag and
/// selection state and paints the overlay and tooltip layers through `R`.
pub struct InteractionEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) core: EngineCore,
}

impl<R: Renderer> InteractionEngine<R> {
    /// Repaints the overlay and tooltip layers from the current state.
    pub fn render(&mut self) -> ChartResult<()> {
        RenderCoordinator::render_current(self)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
