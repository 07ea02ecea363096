//! Optional observers of the interaction engine.

pub mod plugins;

pub use plugins::{InteractionContext, InteractionEvent, InteractionPlugin};
