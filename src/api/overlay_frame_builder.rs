use crate::core::{DragRect, PixelPoint, PlotRect, Viewport, format_with_thousands};
use crate::interaction::HitInfo;
use crate::render::{
    CanvasLayerKind, CirclePrimitive, Color, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign,
    TextPrimitive,
};

use super::{DragSelectionOptions, InteractionOptions};

const HIGHLIGHT_RADIUS_PX: f64 = 4.0;
const HIT_HIGHLIGHT_RADIUS_PX: f64 = 6.0;
const HIGHLIGHT_STROKE_PX: f64 = 2.0;
const INDICATOR_WIDTH_PX: f64 = 1.0;
const MAX_TIP_FONT_SIZE_PX: f64 = 12.0;
const MAX_TIP_GAP_PX: f64 = 10.0;
const HIGHLIGHT_STROKE_COLOR: Color = Color::rgb(1.0, 1.0, 1.0);
const MAX_TIP_COLOR: Color = Color::rgb(0.0, 0.0, 0.0);

/// Inputs of one hover overlay frame.
#[derive(Debug, Clone, Copy)]
pub(super) struct OverlayRenderContext<'a> {
    pub viewport: Viewport,
    pub plot: PlotRect,
    pub pointer: PixelPoint,
    pub hit_info: &'a HitInfo,
    pub selection_backup: Option<DragRect>,
    pub options: &'a InteractionOptions,
}

/// Builds the hover overlay: item highlights, max marker, the retained
/// selection rectangle and the indicator line, in that order.
pub(super) fn build_hover_overlay(ctx: OverlayRenderContext<'_>) -> RenderFrame {
    let options = ctx.options;
    let chart_type = options.chart_type;
    let mut frame = RenderFrame::new(CanvasLayerKind::Overlay, ctx.viewport);

    if !ctx.hit_info.is_empty()
        && (chart_type.highlights_without_tooltip() || options.tooltip().enabled)
    {
        append_item_highlights(&mut frame, ctx.hit_info);
        if options.max_tip.enabled {
            append_max_tip(&mut frame, ctx.hit_info);
        }
    }

    if let Some(rect) = ctx.selection_backup {
        append_selection_area(&mut frame, rect, options.drag_selection);
    }

    if options.indicator.enabled && chart_type.shows_indicator() {
        append_indicator(
            &mut frame,
            ctx.pointer,
            ctx.plot,
            options.horizontal,
            options.indicator.color,
        );
    }

    frame
}

/// Overlay shown while a drag is in progress: the rectangle only.
pub(super) fn build_drag_overlay(
    viewport: Viewport,
    rect: DragRect,
    style: DragSelectionOptions,
) -> RenderFrame {
    let mut frame = RenderFrame::new(CanvasLayerKind::Overlay, viewport);
    append_selection_area(&mut frame, rect, style);
    frame
}

/// Overlay keeping only the retained selection rectangle, if any.
pub(super) fn build_resting_overlay(
    viewport: Viewport,
    selection_backup: Option<DragRect>,
    style: DragSelectionOptions,
) -> RenderFrame {
    let mut frame = RenderFrame::new(CanvasLayerKind::Overlay, viewport);
    if let Some(rect) = selection_backup {
        append_selection_area(&mut frame, rect, style);
    }
    frame
}

fn append_item_highlights(frame: &mut RenderFrame, hit_info: &HitInfo) {
    for item in hit_info.items.values() {
        let Some(pixel) = item.data.pixel() else {
            continue;
        };
        let radius = if item.hit {
            HIT_HIGHLIGHT_RADIUS_PX
        } else {
            HIGHLIGHT_RADIUS_PX
        };
        frame.circles.push(
            CirclePrimitive::new(pixel.x, pixel.y, radius, item.color)
                .with_stroke(HIGHLIGHT_STROKE_PX, HIGHLIGHT_STROKE_COLOR),
        );
    }
}

fn append_max_tip(frame: &mut RenderFrame, hit_info: &HitInfo) {
    let Some((series_id, value)) = hit_info.max_highlight.as_ref() else {
        return;
    };
    let Some(pixel) = hit_info
        .items
        .get(series_id)
        .and_then(|item| item.data.pixel())
    else {
        return;
    };

    frame.circles.push(
        CirclePrimitive::new(pixel.x, pixel.y, HIT_HIGHLIGHT_RADIUS_PX, MAX_TIP_COLOR)
            .with_stroke(HIGHLIGHT_STROKE_PX, HIGHLIGHT_STROKE_COLOR),
    );
    frame.texts.push(TextPrimitive::new(
        format_with_thousands(*value),
        pixel.x,
        pixel.y - MAX_TIP_GAP_PX,
        MAX_TIP_FONT_SIZE_PX,
        MAX_TIP_COLOR,
        TextHAlign::Center,
    ));
}

fn append_selection_area(frame: &mut RenderFrame, rect: DragRect, style: DragSelectionOptions) {
    frame.rects.push(RectPrimitive::new(
        rect.xsp,
        rect.ysp,
        rect.width,
        rect.height,
        style.fill_color.with_alpha(style.opacity),
    ));
}

fn append_indicator(
    frame: &mut RenderFrame,
    pointer: PixelPoint,
    plot: PlotRect,
    horizontal: bool,
    color: Color,
) {
    if !plot.contains(pointer) {
        return;
    }
    let line = if horizontal {
        LinePrimitive::new(plot.x1, pointer.y, plot.x2, pointer.y, INDICATOR_WIDTH_PX, color)
    } else {
        LinePrimitive::new(pointer.x, plot.y1, pointer.x, plot.y2, INDICATOR_WIDTH_PX, color)
    };
    frame.lines.push(line);
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::{OverlayRenderContext, build_drag_overlay, build_hover_overlay};
    use crate::api::{DragSelectionOptions, InteractionOptions};
    use crate::core::{
        AxisPair, ChartType, DataPoint, DragRect, PixelPoint, PlotRect, SeriesId, Viewport,
    };
    use crate::interaction::{HitInfo, HitItem};
    use crate::render::Color;

    fn hit_info() -> HitInfo {
        let mut items = IndexMap::new();
        for (id, value, hit) in [("a", 3.0, true), ("b", 7.0, false)] {
            items.insert(
                SeriesId::new(id),
                HitItem {
                    data: DataPoint::xy(1.0, value).with_pixel(50.0, 40.0 - value),
                    name: id.to_owned(),
                    axis: AxisPair::default(),
                    color: Color::rgb(0.2, 0.4, 0.6),
                    hit,
                    index: Some(1),
                    value,
                },
            );
        }
        HitInfo {
            items,
            hit_id: Some(SeriesId::new("a")),
            max_highlight: Some((SeriesId::new("b"), 7.0)),
            ..HitInfo::default()
        }
    }

    fn ctx<'a>(info: &'a HitInfo, options: &'a InteractionOptions) -> OverlayRenderContext<'a> {
        OverlayRenderContext {
            viewport: Viewport::new(200, 100),
            plot: PlotRect::new(10.0, 190.0, 10.0, 90.0),
            pointer: PixelPoint::new(50.0, 50.0),
            hit_info: info,
            selection_backup: Some(DragRect::new(20.0, 10.0, 30.0, 80.0)),
            options,
        }
    }

    #[test]
    fn line_overlay_draws_highlights_backup_and_indicator() {
        let info = hit_info();
        let options = InteractionOptions::new(ChartType::Line).with_max_tip(true);
        let frame = build_hover_overlay(ctx(&info, &options));
        assert_eq!(frame.circles.len(), 3);
        assert_eq!(frame.texts.len(), 1);
        assert_eq!(frame.rects.len(), 1);
        assert_eq!(frame.lines.len(), 1);
        assert_eq!(frame.lines[0].x1, 50.0);
    }

    #[test]
    fn scatter_without_tooltip_skips_highlights_and_indicator() {
        let info = hit_info();
        let options = InteractionOptions::new(ChartType::Scatter);
        let frame = build_hover_overlay(ctx(&info, &options));
        assert!(frame.circles.is_empty());
        assert!(frame.lines.is_empty());
        assert_eq!(frame.rects.len(), 1);
    }

    #[test]
    fn drag_overlay_applies_fill_opacity() {
        let style = DragSelectionOptions::default();
        let frame = build_drag_overlay(Viewport::new(10, 10), DragRect::new(1.0, 1.0, 5.0, 5.0), style);
        assert_eq!(frame.rects[0].fill_color.alpha, style.opacity);
    }
}
