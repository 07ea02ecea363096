use crate::interaction::{
    BandLabelLocator, EstimatedTextMeasurer, LabelLocator, TextMeasurer, TooltipFormatter,
    TooltipValueFormatter,
};

use super::InteractionOptions;

/// Text formatting and measurement collaborators.
pub(super) struct InteractionPresentation {
    pub(super) formatter: TooltipFormatter,
    pub(super) value_formatter: Option<TooltipValueFormatter>,
    pub(super) measurer: Box<dyn TextMeasurer>,
    pub(super) label_locator: Box<dyn LabelLocator>,
}

impl InteractionPresentation {
    #[must_use]
    pub(super) fn new(options: &InteractionOptions) -> Self {
        Self {
            formatter: TooltipFormatter::new(options.chart_type, options.horizontal),
            value_formatter: None,
            measurer: Box::new(EstimatedTextMeasurer::default()),
            label_locator: Box::new(BandLabelLocator),
        }
    }

    /// Rebuilds the formatter after the chart type, orientation or user
    /// formatter changed.
    pub(super) fn sync_formatter(&mut self, options: &InteractionOptions) {
        self.formatter = TooltipFormatter::new(options.chart_type, options.horizontal)
            .with_formatter(self.value_formatter.clone());
    }
}
