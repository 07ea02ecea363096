use serde::{Deserialize, Serialize};

/// Canvas layers stacked above the base chart.
///
/// The base layer belongs to the surrounding chart; the interaction core only
/// ever paints the transient `Overlay` and `Tooltip` layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Base,
    Overlay,
    Tooltip,
}

impl CanvasLayerKind {
    /// Bottom-to-top paint order.
    #[must_use]
    pub const fn canonical_order() -> [Self; 3] {
        [Self::Base, Self::Overlay, Self::Tooltip]
    }

    #[must_use]
    pub fn is_transient(self) -> bool {
        !matches!(self, Self::Base)
    }
}
