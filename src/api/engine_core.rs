use super::{
    chart_model::InteractionModel, chart_presentation::InteractionPresentation,
    chart_runtime::InteractionRuntime,
};

/// Internal engine state used by the public facade (`InteractionEngine`).
pub(super) struct EngineCore {
    pub(super) model: InteractionModel,
    pub(super) presentation: InteractionPresentation,
    pub(super) runtime: InteractionRuntime,
}
