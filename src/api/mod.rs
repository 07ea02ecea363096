//! Public facade: [`InteractionEngine`] plus its configuration and listener
//! contracts.
//!
//! Engine methods are split across files by concern; coordinators hold the
//! per-event flows and the frame builders turn state into overlay and
//! tooltip frames.

mod after_render;
mod chart_model;
mod chart_presentation;
mod chart_runtime;
mod click_coordinator;
mod drag_coordinator;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_core;
mod engine_init;
mod hover_coordinator;
mod interaction_controller;
mod interaction_options;
mod listeners;
mod overlay_frame_builder;
mod plugin_dispatch;
mod plugin_registry;
mod render_coordinator;
mod selection_coordinator;
mod tooltip_frame_builder;
mod tooltip_layout;
mod validation;

pub use after_render::{AfterRenderQueue, PendingEmission};
pub use engine::InteractionEngine;
pub use engine_config::InteractionEngineConfig;
pub use interaction_options::{
    ClickMode, DragSelectionOptions, IndicatorOptions, InteractionOptions, MaxTipOptions,
    SelectItemOptions, SelectionModeOptions, TitleOptions, TooltipOptions, ZoomOptions,
};
pub use listeners::{
    ChartListeners, ClickArgs, ClickListener, DragSelectArgs, DragSelectListener,
    DragSelectionInfo, ZoomRangeArgs, ZoomRangeHandler,
};
pub use tooltip_layout::{TooltipLayout, TooltipRow, TooltipState};
