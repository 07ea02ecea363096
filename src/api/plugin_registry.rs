use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::extensions::InteractionPlugin;
use crate::render::Renderer;

use super::InteractionEngine;

impl<R: Renderer> InteractionEngine<R> {
    /// Registers an observer. Ids must be non-blank and unique; plugins are
    /// notified in registration order.
    pub fn register_plugin(&mut self, plugin: Box<dyn InteractionPlugin>) -> ChartResult<()> {
        let plugin_id = plugin.id();
        if plugin_id.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "plugin id must not be blank".to_owned(),
            ));
        }
        if self.has_plugin(plugin_id) {
            return Err(ChartError::InvalidData(format!(
                "plugin `{plugin_id}` is already registered"
            )));
        }
        debug!(plugin = plugin_id, "interaction plugin registered");
        self.core.runtime.plugins.push(plugin);
        Ok(())
    }

    /// Removes the plugin with `plugin_id`, returning whether one was found.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        let before = self.core.runtime.plugins.len();
        self.core
            .runtime
            .plugins
            .retain(|plugin| plugin.id() != plugin_id);
        before != self.core.runtime.plugins.len()
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.core.runtime.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.plugin_ids().any(|id| id == plugin_id)
    }

    /// Registered plugin ids in notification order.
    pub fn plugin_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.core.runtime.plugins.iter().map(|plugin| plugin.id())
    }
}
