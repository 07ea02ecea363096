use serde::{Deserialize, Serialize};

use crate::core::ChartType;
use crate::error::{ChartError, ChartResult};
use crate::interaction::{OverflowPolicy, SelectionPolicy};
use crate::render::Color;

use super::validation::validate_options;

/// Tooltip behavior and styling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipOptions {
    #[serde(rename = "use", default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_true")]
    pub sort_by_value: bool,
    #[serde(default = "default_tooltip_background_color")]
    pub background_color: Color,
    #[serde(default = "default_tooltip_font_color")]
    pub font_color: Color,
    #[serde(default = "default_tooltip_border_color")]
    pub border_color: Color,
    /// Coalesces pointer moves to one hit-test per frame tick.
    #[serde(default)]
    pub throttled_move: bool,
    /// Scrolls an overflowing tooltip body with the wheel.
    #[serde(default)]
    pub use_scrollbar: bool,
    /// Adds rows for every series sharing the hovered category.
    #[serde(default)]
    pub show_all_value_in_range: bool,
}

impl Default for TooltipOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            sort_by_value: true,
            background_color: default_tooltip_background_color(),
            font_color: default_tooltip_font_color(),
            border_color: default_tooltip_border_color(),
            throttled_move: false,
            use_scrollbar: false,
            show_all_value_in_range: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorOptions {
    #[serde(rename = "use", default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_indicator_color")]
    pub color: Color,
}

impl Default for IndicatorOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            color: default_indicator_color(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaxTipOptions {
    #[serde(rename = "use", default)]
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectItemOptions {
    #[serde(rename = "use", default)]
    pub enabled: bool,
    #[serde(default = "default_true")]
    pub use_click: bool,
    /// Selects the nearest item even without a direct hit.
    #[serde(default)]
    pub use_approximate_value: bool,
}

impl Default for SelectItemOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            use_click: true,
            use_approximate_value: false,
        }
    }
}

/// Shared shape of the label and series selection blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionModeOptions {
    #[serde(rename = "use", default)]
    pub enabled: bool,
    #[serde(default = "default_true")]
    pub use_click: bool,
    /// Maximum number of selected entries; 0 is unlimited.
    #[serde(default = "default_selection_limit")]
    pub limit: usize,
    /// Drops the oldest entry on overflow instead of rejecting the newest.
    #[serde(default)]
    pub use_deselect_overflow: bool,
}

impl Default for SelectionModeOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            use_click: true,
            limit: default_selection_limit(),
            use_deselect_overflow: false,
        }
    }
}

impl SelectionModeOptions {
    #[must_use]
    pub fn policy(self) -> SelectionPolicy {
        SelectionPolicy::new(
            self.limit,
            OverflowPolicy::from_deselect_overflow(self.use_deselect_overflow),
        )
    }

    fn handles_click(self) -> bool {
        self.enabled && self.use_click
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragSelectionOptions {
    #[serde(rename = "use", default)]
    pub enabled: bool,
    /// Keeps the released rectangle on the overlay.
    #[serde(default = "default_true")]
    pub keep_display: bool,
    #[serde(default = "default_drag_fill_color")]
    pub fill_color: Color,
    #[serde(default = "default_drag_opacity")]
    pub opacity: f64,
}

impl Default for DragSelectionOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            keep_display: true,
            fill_color: default_drag_fill_color(),
            opacity: default_drag_opacity(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoomOptions {
    #[serde(rename = "use", default)]
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TitleOptions {
    #[serde(default)]
    pub text: String,
}

/// Interaction configuration of one chart.
///
/// Serializable so hosts can keep chart setup in JSON next to their data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionOptions {
    #[serde(rename = "type", default)]
    pub chart_type: ChartType,
    #[serde(default)]
    pub horizontal: bool,
    /// `None` when the host left the block out; see [`Self::tooltip`].
    #[serde(default, rename = "tooltip", skip_serializing_if = "Option::is_none")]
    pub tooltip_options: Option<TooltipOptions>,
    #[serde(default)]
    pub indicator: IndicatorOptions,
    #[serde(default)]
    pub max_tip: MaxTipOptions,
    #[serde(default)]
    pub select_item: SelectItemOptions,
    #[serde(default)]
    pub select_label: SelectionModeOptions,
    #[serde(default)]
    pub select_series: SelectionModeOptions,
    #[serde(default)]
    pub drag_selection: DragSelectionOptions,
    #[serde(default)]
    pub zoom: ZoomOptions,
    #[serde(default)]
    pub title: TitleOptions,
}

impl InteractionOptions {
    #[must_use]
    pub fn new(chart_type: ChartType) -> Self {
        Self {
            chart_type,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: TooltipOptions) -> Self {
        self.tooltip_options = Some(tooltip);
        self
    }

    #[must_use]
    pub fn with_indicator(mut self, indicator: IndicatorOptions) -> Self {
        self.indicator = indicator;
        self
    }

    #[must_use]
    pub fn with_max_tip(mut self, enabled: bool) -> Self {
        self.max_tip.enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_select_item(mut self, select_item: SelectItemOptions) -> Self {
        self.select_item = select_item;
        self
    }

    #[must_use]
    pub fn with_select_label(mut self, select_label: SelectionModeOptions) -> Self {
        self.select_label = select_label;
        self
    }

    #[must_use]
    pub fn with_select_series(mut self, select_series: SelectionModeOptions) -> Self {
        self.select_series = select_series;
        self
    }

    #[must_use]
    pub fn with_drag_selection(mut self, drag_selection: DragSelectionOptions) -> Self {
        self.drag_selection = drag_selection;
        self
    }

    #[must_use]
    pub fn with_title(mut self, text: impl Into<String>) -> Self {
        self.title.text = text.into();
        self
    }

    #[must_use]
    pub fn with_zoom(mut self, enabled: bool) -> Self {
        self.zoom.enabled = enabled;
        self
    }

    /// Effective tooltip block.
    ///
    /// Scatter and heat-map charts without an explicit tooltip block get the
    /// tooltip turned off.
    #[must_use]
    pub fn tooltip(&self) -> TooltipOptions {
        self.tooltip_options.unwrap_or_else(|| TooltipOptions {
            enabled: self.chart_type.tooltip_enabled_by_default(),
            ..TooltipOptions::default()
        })
    }

    /// Options in effect while zoom mode is `active`.
    ///
    /// Zoom mode forces drag-selection on and hides the released rectangle;
    /// leaving zoom mode gives back the configured values untouched.
    #[must_use]
    pub fn effective(&self, zoom_active: bool) -> Self {
        let mut options = self.clone();
        options.zoom.enabled = zoom_active;
        if zoom_active {
            options.drag_selection.enabled = true;
            options.drag_selection.keep_display = false;
        }
        options
    }

    /// Click precedence: item selection, then label, then series.
    #[must_use]
    pub fn click_mode(&self) -> ClickMode {
        if self.select_item.enabled && self.select_item.use_click {
            ClickMode::Item
        } else if self.select_label.handles_click() {
            ClickMode::Label
        } else if self.select_series.handles_click() {
            ClickMode::Series
        } else {
            ClickMode::None
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_options(self)
    }

    /// Serializes options to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize options: {e}")))
    }

    /// Deserializes and validates options from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let options: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse options: {e}")))?;
        options.validate()?;
        Ok(options)
    }
}

/// Selection mode a single click is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickMode {
    Item,
    Label,
    Series,
    None,
}

fn default_true() -> bool {
    true
}

fn default_selection_limit() -> usize {
    1
}

fn default_tooltip_background_color() -> Color {
    Color::rgb8(0x4C, 0x4C, 0x4C)
}

fn default_tooltip_font_color() -> Color {
    Color::rgb8(0xFF, 0xFF, 0xFF)
}

fn default_tooltip_border_color() -> Color {
    Color::rgb8(0x66, 0x66, 0x66)
}

fn default_indicator_color() -> Color {
    Color::rgb8(0xEE, 0x7F, 0x44)
}

fn default_drag_fill_color() -> Color {
    Color::rgb8(0x38, 0xAC, 0xEC)
}

fn default_drag_opacity() -> f64 {
    0.65
}

#[cfg(test)]
mod tests {
    use super::{ClickMode, InteractionOptions, SelectItemOptions, SelectionModeOptions};
    use crate::core::ChartType;
    use crate::interaction::OverflowPolicy;

    #[test]
    fn empty_json_yields_documented_defaults() {
        let options = InteractionOptions::from_json_str("{}").expect("parse");
        assert_eq!(options.chart_type, ChartType::Line);
        assert!(options.tooltip().enabled);
        assert!(options.tooltip().sort_by_value);
        assert!(options.indicator.enabled);
        assert!(!options.max_tip.enabled);
        assert_eq!(options.select_label.limit, 1);
        assert!(options.drag_selection.keep_display);
        assert_eq!(options.drag_selection.opacity, 0.65);
        assert_eq!(options.click_mode(), ClickMode::None);
    }

    #[test]
    fn scatter_without_tooltip_block_disables_tooltip() {
        let scatter = InteractionOptions::from_json_str(r#"{"type":"scatter"}"#).expect("parse");
        assert!(!scatter.tooltip().enabled);

        let explicit =
            InteractionOptions::from_json_str(r#"{"type":"heatMap","tooltip":{"throttledMove":true}}"#)
                .expect("parse");
        assert!(explicit.tooltip().enabled);
        assert!(explicit.tooltip().throttled_move);
    }

    #[test]
    fn zoom_mode_overrides_drag_selection_reversibly() {
        let options = InteractionOptions::new(ChartType::Line);
        let zoomed = options.effective(true);
        assert!(zoomed.zoom.enabled);
        assert!(zoomed.drag_selection.enabled);
        assert!(!zoomed.drag_selection.keep_display);

        let restored = options.effective(false);
        assert!(!restored.drag_selection.enabled);
        assert!(restored.drag_selection.keep_display);
    }

    #[test]
    fn click_mode_prefers_item_then_label_then_series() {
        let series = SelectionModeOptions {
            enabled: true,
            ..SelectionModeOptions::default()
        };
        let options = InteractionOptions::default()
            .with_select_series(series)
            .with_select_label(series);
        assert_eq!(options.click_mode(), ClickMode::Label);

        let options = options.with_select_item(SelectItemOptions {
            enabled: true,
            ..SelectItemOptions::default()
        });
        assert_eq!(options.click_mode(), ClickMode::Item);
    }

    #[test]
    fn deselect_overflow_maps_to_drop_oldest() {
        let options: InteractionOptions = serde_json::from_str(
            r#"{"selectLabel":{"use":true,"limit":0,"useDeselectOverflow":true}}"#,
        )
        .expect("parse");
        let policy = options.select_label.policy();
        assert_eq!(policy.limit, 0);
        assert_eq!(policy.overflow, OverflowPolicy::DropOldest);
    }

    #[test]
    fn json_round_trip_keeps_explicit_tooltip() {
        let options = InteractionOptions::new(ChartType::Bar).with_title("cpu");
        let json = options.to_json_pretty().expect("serialize");
        assert!(!json.contains("\"tooltip\""));
        let back = InteractionOptions::from_json_str(&json).expect("parse");
        assert_eq!(back, options);
    }
}
