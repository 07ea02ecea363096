use std::sync::Arc;

use crate::core::ChartSnapshot;
use crate::interaction::SurfaceBounds;

use super::InteractionOptions;

/// Configuration and chart geometry the interaction passes read from.
pub(super) struct InteractionModel {
    /// Options as configured; zoom mode overrides are applied on read.
    pub(super) options: InteractionOptions,
    pub(super) zoom_mode: bool,
    pub(super) snapshot: Arc<ChartSnapshot>,
    pub(super) surface: SurfaceBounds,
}

impl InteractionModel {
    #[must_use]
    pub(super) fn effective_options(&self) -> InteractionOptions {
        self.options.effective(self.zoom_mode)
    }
}
