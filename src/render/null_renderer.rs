use crate::error::ChartResult;
use crate::render::{CanvasLayerKind, RenderFrame, Renderer};

/// Primitive counts of the last frame drawn on one layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayerStats {
    pub lines: usize,
    pub rects: usize,
    pub circles: usize,
    pub texts: usize,
    /// Number of frames (including clears) drawn on the layer.
    pub passes: usize,
}

impl LayerStats {
    #[must_use]
    pub fn is_clear(self) -> bool {
        self.lines == 0 && self.rects == 0 && self.circles == 0 && self.texts == 0
    }
}

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry before
/// a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub overlay: LayerStats,
    pub tooltip: LayerStats,
    pub last_overlay_frame: Option<RenderFrame>,
    pub last_tooltip_frame: Option<RenderFrame>,
}

impl NullRenderer {
    #[must_use]
    pub fn stats(&self, layer: CanvasLayerKind) -> LayerStats {
        match layer {
            CanvasLayerKind::Overlay => self.overlay,
            CanvasLayerKind::Tooltip => self.tooltip,
            CanvasLayerKind::Base => LayerStats::default(),
        }
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        let (stats, last) = match frame.layer {
            CanvasLayerKind::Overlay => (&mut self.overlay, &mut self.last_overlay_frame),
            CanvasLayerKind::Tooltip => (&mut self.tooltip, &mut self.last_tooltip_frame),
            CanvasLayerKind::Base => return Ok(()),
        };
        *stats = LayerStats {
            lines: frame.lines.len(),
            rects: frame.rects.len(),
            circles: frame.circles.len(),
            texts: frame.texts.len(),
            passes: stats.passes + 1,
        };
        *last = Some(frame.clone());
        Ok(())
    }
}
