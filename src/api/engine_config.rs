use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::interaction::SurfaceBounds;

use super::InteractionOptions;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load the
/// interaction setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionEngineConfig {
    pub surface: SurfaceBounds,
    #[serde(default)]
    pub options: InteractionOptions,
}

impl InteractionEngineConfig {
    #[must_use]
    pub fn new(surface: SurfaceBounds) -> Self {
        Self {
            surface,
            options: InteractionOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: InteractionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))?;
        config.options.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::InteractionEngineConfig;
    use crate::core::ChartType;
    use crate::interaction::SurfaceBounds;

    #[test]
    fn json_round_trip_keeps_surface_and_chart_type() {
        let json = r#"{
            "surface": {"left": 8.0, "top": 4.0, "width": 640.0, "height": 320.0},
            "options": {"type": "scatter", "dragSelection": {"use": true}}
        }"#;
        let config = InteractionEngineConfig::from_json_str(json).expect("parse");
        assert_eq!(config.surface, SurfaceBounds::new(8.0, 4.0, 640.0, 320.0));
        assert_eq!(config.options.chart_type, ChartType::Scatter);
        assert!(config.options.drag_selection.enabled);

        let again = InteractionEngineConfig::from_json_str(&config.to_json_pretty().expect("json"))
            .expect("reparse");
        assert_eq!(again, config);
    }

    #[test]
    fn invalid_opacity_is_rejected() {
        let json = r#"{
            "surface": {"left": 0.0, "top": 0.0, "width": 10.0, "height": 10.0},
            "options": {"dragSelection": {"opacity": 3.0}}
        }"#;
        assert!(InteractionEngineConfig::from_json_str(json).is_err());
    }
}
