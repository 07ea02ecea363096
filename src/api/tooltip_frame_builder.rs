use crate::core::Viewport;
use crate::render::{
    CanvasLayerKind, CirclePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::TooltipOptions;
use super::tooltip_layout::{
    TOOLTIP_FONT_SIZE_PX, TOOLTIP_MARKER_GAP_PX, TOOLTIP_MARKER_SIZE_PX, TOOLTIP_PADDING_PX,
    TOOLTIP_ROW_HEIGHT_PX, TooltipLayout,
};

const TOOLTIP_BORDER_WIDTH_PX: f64 = 1.0;
const TOOLTIP_CORNER_RADIUS_PX: f64 = 4.0;
const TEXT_BASELINE_OFFSET_PX: f64 = 14.0;

/// Materializes a tooltip layout into the tooltip layer.
///
/// Rows scrolled outside the visible body are skipped entirely.
pub(super) fn build_tooltip_frame(
    viewport: Viewport,
    layout: &TooltipLayout,
    scroll_top: f64,
    style: TooltipOptions,
) -> RenderFrame {
    let mut frame = RenderFrame::new(CanvasLayerKind::Tooltip, viewport);
    frame.rects.push(
        RectPrimitive::new(
            layout.x,
            layout.y,
            layout.width,
            layout.height,
            style.background_color,
        )
        .with_border(TOOLTIP_BORDER_WIDTH_PX, style.border_color)
        .with_corner_radius(TOOLTIP_CORNER_RADIUS_PX),
    );

    let left = layout.x + TOOLTIP_PADDING_PX;
    let right = layout.x + layout.width - TOOLTIP_PADDING_PX;

    if let Some(title) = layout.title.as_deref().filter(|title| !title.is_empty()) {
        frame.texts.push(TextPrimitive::new(
            title,
            left,
            layout.y + TOOLTIP_PADDING_PX + TEXT_BASELINE_OFFSET_PX,
            TOOLTIP_FONT_SIZE_PX,
            style.font_color,
            TextHAlign::Left,
        ));
    }

    let body_top = layout.body_top();
    let body_bottom = body_top + layout.body_height;
    for (index, row) in layout.rows.iter().enumerate() {
        let top = body_top + index as f64 * TOOLTIP_ROW_HEIGHT_PX - scroll_top;
        if top < body_top || top + TOOLTIP_ROW_HEIGHT_PX > body_bottom {
            continue;
        }
        let center_y = top + TOOLTIP_ROW_HEIGHT_PX / 2.0;
        let baseline = top + TEXT_BASELINE_OFFSET_PX;

        frame.circles.push(CirclePrimitive::new(
            left + TOOLTIP_MARKER_SIZE_PX / 2.0,
            center_y,
            TOOLTIP_MARKER_SIZE_PX / 2.0,
            row.color,
        ));
        if !row.name.is_empty() {
            frame.texts.push(TextPrimitive::new(
                row.name.as_str(),
                left + TOOLTIP_MARKER_SIZE_PX + TOOLTIP_MARKER_GAP_PX,
                baseline,
                TOOLTIP_FONT_SIZE_PX,
                style.font_color,
                TextHAlign::Left,
            ));
        }
        if !row.value_text.is_empty() {
            frame.texts.push(TextPrimitive::new(
                row.value_text.as_str(),
                right,
                baseline,
                TOOLTIP_FONT_SIZE_PX,
                style.font_color,
                TextHAlign::Right,
            ));
        }
    }

    frame
}
