use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::core::{BlockRangeQuery, DragRect, DragShape, PixelPoint, PlotRect};

/// Host hook that installs and removes the surface-independent pointer
/// listeners a drag gesture needs while the button is held.
pub trait PointerCapture {
    fn attach(&self);
    fn detach(&self);
}

/// Capture for hosts that already route every pointer event to the engine.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPointerCapture;

impl PointerCapture for NoopPointerCapture {
    fn attach(&self) {}

    fn detach(&self) {}
}

/// Scoped pointer capture; listeners are detached when the guard drops.
pub struct CaptureGuard {
    capture: Rc<dyn PointerCapture>,
}

impl CaptureGuard {
    #[must_use]
    pub fn acquire(capture: Rc<dyn PointerCapture>) -> Self {
        capture.attach();
        Self { capture }
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        self.capture.detach();
    }
}

impl fmt::Debug for CaptureGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CaptureGuard")
    }
}

/// Geometry of one drag gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragInfo {
    pub xcp: f64,
    pub ycp: f64,
    /// Plot rectangle without label margins; every point is clamped to it.
    pub range: PlotRect,
    pub rect: DragRect,
    pub is_move: bool,
}

impl DragInfo {
    /// `true` when the gesture moved and spans more than one pixel both ways.
    #[must_use]
    pub fn is_selection(&self) -> bool {
        self.is_move && self.rect.width > 1.0 && self.rect.height > 1.0
    }
}

#[derive(Debug, Default)]
enum DragState {
    #[default]
    Idle,
    Dragging {
        info: DragInfo,
        _capture: CaptureGuard,
    },
}

/// Drag-selection state machine: idle, dragging, then back to idle on
/// release with an optional frozen backup of the final rectangle.
#[derive(Debug, Default)]
pub struct DragSelection {
    state: DragState,
    backup: Option<DragInfo>,
    swallow_click: bool,
}

impl DragSelection {
    /// Enters `dragging` anchored at `pointer` clamped onto `range`.
    ///
    /// A gesture still in progress is dropped, which releases its capture.
    pub fn start(&mut self, pointer: PixelPoint, range: PlotRect, capture: CaptureGuard) {
        let anchor = range.clamp(pointer);
        debug!(xcp = anchor.x, ycp = anchor.y, "drag start");
        self.state = DragState::Dragging {
            info: DragInfo {
                xcp: anchor.x,
                ycp: anchor.y,
                range,
                rect: DragRect::new(anchor.x, anchor.y, 0.0, 0.0),
                is_move: false,
            },
            _capture: capture,
        };
    }

    /// Follows the pointer; `block` snaps heat-map drags to whole cells.
    pub fn update<F>(&mut self, pointer: PixelPoint, shape: DragShape, block: F) -> Option<DragInfo>
    where
        F: FnOnce(&BlockRangeQuery) -> Option<DragRect>,
    {
        let DragState::Dragging { info, .. } = &mut self.state else {
            return None;
        };

        let end = info.range.clamp(pointer);
        info.is_move = true;
        self.swallow_click = true;

        let free = DragRect::new(
            info.xcp.min(end.x),
            info.ycp.min(end.y),
            (end.x - info.xcp).abs().ceil(),
            (end.y - info.ycp).abs().ceil(),
        );
        info.rect = match shape {
            DragShape::Free => free,
            DragShape::Column => DragRect::new(
                free.xsp,
                info.range.y1,
                free.width,
                info.range.height(),
            ),
            DragShape::Block => block(&BlockRangeQuery {
                xcp: info.xcp,
                xep: end.x,
                ycp: info.ycp,
                yep: end.y,
                range: info.range,
            })
            .unwrap_or(free),
        };
        Some(*info)
    }

    /// Leaves `dragging`; returns the gesture only when it forms a selection.
    pub fn finish(&mut self) -> Option<DragInfo> {
        let DragState::Dragging { info, .. } = std::mem::take(&mut self.state) else {
            return None;
        };
        debug!(
            xsp = info.rect.xsp,
            ysp = info.rect.ysp,
            width = info.rect.width,
            height = info.rect.height,
            is_move = info.is_move,
            "drag end"
        );
        info.is_selection().then_some(info)
    }

    /// Abandons a gesture without producing a selection.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// `true` once the active gesture has registered movement.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.current().is_some_and(|info| info.is_move)
    }

    #[must_use]
    pub fn current(&self) -> Option<&DragInfo> {
        match &self.state {
            DragState::Dragging { info, .. } => Some(info),
            DragState::Idle => None,
        }
    }

    #[must_use]
    pub fn backup(&self) -> Option<&DragInfo> {
        self.backup.as_ref()
    }

    pub fn keep_backup(&mut self, info: DragInfo) {
        self.backup = Some(info);
    }

    pub fn clear_backup(&mut self) {
        self.backup = None;
    }

    /// Consumes the "a drag just moved" flag that swallows the next click.
    pub fn take_click_swallow(&mut self) -> bool {
        std::mem::take(&mut self.swallow_click)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::{CaptureGuard, DragSelection, PointerCapture};
    use crate::core::{DragRect, DragShape, PixelPoint, PlotRect};

    #[derive(Default)]
    struct CountingCapture {
        attached: Cell<usize>,
        detached: Cell<usize>,
    }

    impl PointerCapture for CountingCapture {
        fn attach(&self) {
            self.attached.set(self.attached.get() + 1);
        }

        fn detach(&self) {
            self.detached.set(self.detached.get() + 1);
        }
    }

    fn plot() -> PlotRect {
        PlotRect::new(10.0, 110.0, 10.0, 60.0)
    }

    #[test]
    fn free_drag_clamps_and_ceils_size() {
        let capture = Rc::new(CountingCapture::default());
        let mut drag = DragSelection::default();
        drag.start(PixelPoint::new(0.0, 20.0), plot(), CaptureGuard::acquire(capture.clone()));
        assert_eq!(drag.current().map(|info| info.xcp), Some(10.0));

        let info = drag
            .update(PixelPoint::new(40.4, 500.0), DragShape::Free, |_| None)
            .expect("dragging");
        assert_eq!(info.rect, DragRect::new(10.0, 20.0, 31.0, 40.0));

        let finished = drag.finish().expect("selection");
        assert!(finished.is_move);
        assert!(!drag.is_dragging());
        assert_eq!(capture.attached.get(), 1);
        assert_eq!(capture.detached.get(), 1);
    }

    #[test]
    fn column_drag_spans_full_plot_height() {
        let mut drag = DragSelection::default();
        drag.start(
            PixelPoint::new(80.0, 30.0),
            plot(),
            CaptureGuard::acquire(Rc::new(CountingCapture::default())),
        );
        let info = drag
            .update(PixelPoint::new(50.0, 31.0), DragShape::Column, |_| None)
            .expect("dragging");
        assert_eq!(info.rect, DragRect::new(50.0, 10.0, 30.0, 50.0));
    }

    #[test]
    fn block_drag_uses_snapped_cells() {
        let mut drag = DragSelection::default();
        drag.start(
            PixelPoint::new(20.0, 20.0),
            plot(),
            CaptureGuard::acquire(Rc::new(CountingCapture::default())),
        );
        let info = drag
            .update(PixelPoint::new(33.0, 44.0), DragShape::Block, |query| {
                assert_eq!(query.xep, 33.0);
                Some(DragRect::new(10.0, 10.0, 40.0, 40.0))
            })
            .expect("dragging");
        assert_eq!(info.rect, DragRect::new(10.0, 10.0, 40.0, 40.0));
    }

    #[test]
    fn tiny_or_static_gestures_are_discarded() {
        let capture = Rc::new(CountingCapture::default());
        let mut drag = DragSelection::default();

        drag.start(PixelPoint::new(50.0, 30.0), plot(), CaptureGuard::acquire(capture.clone()));
        assert!(drag.finish().is_none());
        assert!(!drag.take_click_swallow());

        drag.start(PixelPoint::new(50.0, 30.0), plot(), CaptureGuard::acquire(capture.clone()));
        drag.update(PixelPoint::new(50.6, 45.0), DragShape::Free, |_| None);
        assert!(drag.finish().is_none());
        assert!(drag.take_click_swallow());
        assert!(!drag.take_click_swallow());

        assert_eq!(capture.attached.get(), 2);
        assert_eq!(capture.detached.get(), 2);
    }

    #[test]
    fn restart_and_cancel_release_capture_once() {
        let capture = Rc::new(CountingCapture::default());
        let mut drag = DragSelection::default();
        drag.start(PixelPoint::new(50.0, 30.0), plot(), CaptureGuard::acquire(capture.clone()));
        drag.start(PixelPoint::new(60.0, 30.0), plot(), CaptureGuard::acquire(capture.clone()));
        assert_eq!(capture.detached.get(), 1);

        drag.cancel();
        drag.cancel();
        assert!(drag.finish().is_none());
        assert_eq!(capture.attached.get(), 2);
        assert_eq!(capture.detached.get(), 2);
    }
}
