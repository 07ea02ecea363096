//! chart-interact: pointer interaction core for layered chart surfaces.
//!
//! The crate hit-tests series under the cursor, formats and lays out
//! tooltips, paints overlay frames, tracks drag-selection gestures and keeps
//! label/series/item selection state. Rendering goes through the
//! backend-agnostic [`render::Renderer`] contract.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{InteractionEngine, InteractionEngineConfig, InteractionOptions};
pub use error::{ChartError, ChartResult};
