use crate::error::{ChartError, ChartResult};

use super::InteractionOptions;

pub(super) fn validate_options(options: &InteractionOptions) -> ChartResult<()> {
    let drag = options.drag_selection;
    if !drag.opacity.is_finite() || !(0.0..=1.0).contains(&drag.opacity) {
        return Err(ChartError::InvalidData(
            "drag-selection opacity must be finite and in [0, 1]".to_owned(),
        ));
    }
    drag.fill_color.validate()?;
    options.indicator.color.validate()?;

    if let Some(tooltip) = options.tooltip_options {
        tooltip.background_color.validate()?;
        tooltip.font_color.validate()?;
        tooltip.border_color.validate()?;
    }

    Ok(())
}
