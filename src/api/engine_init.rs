use std::sync::Arc;

use tracing::debug;

use crate::core::ChartSnapshot;
use crate::error::{ChartError, ChartResult};
use crate::interaction::{LabelSelection, SelectInfo, SeriesSelection};
use crate::render::Renderer;

use super::{
    InteractionEngine, InteractionEngineConfig, chart_model::InteractionModel,
    chart_presentation::InteractionPresentation, chart_runtime::InteractionRuntime,
    engine_core::EngineCore,
};

impl<R: Renderer> InteractionEngine<R> {
    /// Creates an engine over an empty chart snapshot.
    pub fn new(renderer: R, config: InteractionEngineConfig) -> ChartResult<Self> {
        let viewport = config.surface.viewport();
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        config.options.validate()?;

        let presentation = InteractionPresentation::new(&config.options);
        let mut engine = Self {
            renderer,
            core: EngineCore {
                model: InteractionModel {
                    zoom_mode: config.options.zoom.enabled,
                    options: config.options,
                    snapshot: Arc::new(ChartSnapshot::default()),
                    surface: config.surface,
                },
                presentation,
                runtime: InteractionRuntime::default(),
            },
        };
        engine.init_selected_info();

        debug!(
            chart_type = ?engine.core.model.options.chart_type,
            width = viewport.width,
            height = viewport.height,
            "interaction engine created"
        );
        Ok(engine)
    }

    /// Resets selection state to the empty selection of the configured mode.
    pub(super) fn init_selected_info(&mut self) {
        let options = &self.core.model.options;
        self.core.runtime.select_info = if options.select_label.enabled {
            Some(SelectInfo::Label(LabelSelection::default()))
        } else if options.select_series.enabled {
            Some(SelectInfo::Series(SeriesSelection::default()))
        } else {
            None
        };
    }
}
