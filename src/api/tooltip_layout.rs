use std::cmp::Ordering;

use crate::core::{ChartType, PixelPoint, SeriesId, format_with_thousands};
use crate::interaction::{HitInfo, HitItem, SurfaceBounds, TextMeasurer};
use crate::render::Color;

pub(super) const TOOLTIP_FONT_SIZE_PX: f64 = 14.0;
pub(super) const TOOLTIP_ROW_HEIGHT_PX: f64 = 20.0;
pub(super) const TOOLTIP_PADDING_PX: f64 = 10.0;
pub(super) const TOOLTIP_MARKER_SIZE_PX: f64 = 12.0;
pub(super) const TOOLTIP_MARKER_GAP_PX: f64 = 6.0;
const TOOLTIP_COLUMN_GAP_PX: f64 = 20.0;
const TOOLTIP_POINTER_OFFSET_PX: f64 = 20.0;
const TOOLTIP_MAX_BODY_HEIGHT_PX: f64 = 200.0;

/// One series row of the tooltip box.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipRow {
    pub series_id: SeriesId,
    pub name: String,
    pub value_text: String,
    pub value: f64,
    pub color: Color,
    pub hit: bool,
}

/// Resolved tooltip box in surface pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipLayout {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub title: Option<String>,
    pub rows: Vec<TooltipRow>,
    /// Visible height of the row area.
    pub body_height: f64,
    /// Full height of all rows; exceeds `body_height` only when scrollable.
    pub content_height: f64,
}

impl TooltipLayout {
    #[must_use]
    pub fn max_scroll(&self) -> f64 {
        (self.content_height - self.body_height).max(0.0)
    }

    #[must_use]
    pub fn is_scrollable(&self) -> bool {
        self.max_scroll() > 0.0
    }

    pub(super) fn body_top(&self) -> f64 {
        let title = if self.title.is_some() {
            TOOLTIP_ROW_HEIGHT_PX
        } else {
            0.0
        };
        self.y + TOOLTIP_PADDING_PX + title
    }
}

/// Tooltip visibility plus the last layout and scroll offset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TooltipState {
    pub visible: bool,
    pub layout: Option<TooltipLayout>,
    pub scroll_top: f64,
}

impl TooltipState {
    pub(super) fn show(&mut self, layout: TooltipLayout) {
        let same_rows = self
            .layout
            .as_ref()
            .is_some_and(|previous| previous.rows == layout.rows);
        self.scroll_top = if same_rows {
            self.scroll_top.min(layout.max_scroll())
        } else {
            0.0
        };
        self.layout = Some(layout);
        self.visible = true;
    }

    pub(super) fn hide(&mut self) {
        *self = Self::default();
    }

    /// Scrolls by `delta_y`; returns `false` when nothing is scrollable.
    pub(super) fn scroll_by(&mut self, delta_y: f64) -> bool {
        let Some(layout) = self.layout.as_ref().filter(|_| self.visible) else {
            return false;
        };
        if !layout.is_scrollable() {
            return false;
        }
        self.scroll_top = (self.scroll_top + delta_y).clamp(0.0, layout.max_scroll());
        true
    }
}

#[derive(Clone, Copy)]
pub(super) struct TooltipLayoutInput<'a> {
    pub hit_info: &'a HitInfo,
    pub chart_type: ChartType,
    pub horizontal: bool,
    pub pointer: PixelPoint,
    pub surface: SurfaceBounds,
    pub labels: &'a [String],
    pub sort_by_value: bool,
    pub use_scrollbar: bool,
    pub measurer: &'a dyn TextMeasurer,
}

/// Sizes and positions the tooltip for one hover frame.
///
/// Cartesian charts list every row under the category title. Scatter charts
/// show the primary item under its series name, heat maps show the primary
/// cell under its coordinates. Pie charts list rows without a title.
pub(super) fn layout_tooltip(input: TooltipLayoutInput<'_>) -> Option<TooltipLayout> {
    let (primary_id, primary) = input.hit_info.primary()?;

    let (title, mut rows) = match input.chart_type {
        ChartType::Scatter => (
            Some(primary.name.clone()),
            vec![row(primary_id, primary, scatter_point_text(primary))],
        ),
        ChartType::HeatMap => (
            heat_map_cell_title(primary),
            vec![row(primary_id, primary, value_text(primary))],
        ),
        ChartType::Pie => (None, all_rows(input.hit_info)),
        ChartType::Line | ChartType::Bar => (
            category_title(primary, input.horizontal, input.labels),
            all_rows(input.hit_info),
        ),
    };

    if input.sort_by_value && rows.len() > 1 {
        rows.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
    }

    let measurer = input.measurer;
    let tip = &input.hit_info.max_tip;
    let name_width = rows
        .iter()
        .map(|row| measurer.measure_text_width(&row.name))
        .fold(measurer.measure_text_width(&tip.series_name), f64::max);
    let value_width = rows
        .iter()
        .map(|row| measurer.measure_text_width(&row.value_text))
        .fold(measurer.measure_text_width(&tip.value_text), f64::max);
    let title_width = title
        .as_deref()
        .map_or(0.0, |text| measurer.measure_text_width(text));

    let row_width = TOOLTIP_MARKER_SIZE_PX
        + TOOLTIP_MARKER_GAP_PX
        + name_width
        + TOOLTIP_COLUMN_GAP_PX
        + value_width;
    let width = row_width.max(title_width) + 2.0 * TOOLTIP_PADDING_PX;

    let content_height = rows.len() as f64 * TOOLTIP_ROW_HEIGHT_PX;
    let body_height = if input.use_scrollbar {
        content_height.min(TOOLTIP_MAX_BODY_HEIGHT_PX)
    } else {
        content_height
    };
    let title_height = if title.is_some() {
        TOOLTIP_ROW_HEIGHT_PX
    } else {
        0.0
    };
    let height = title_height + body_height + 2.0 * TOOLTIP_PADDING_PX;

    Some(TooltipLayout {
        x: place_along(input.pointer.x, width, input.surface.width),
        y: place_along(input.pointer.y, height, input.surface.height),
        width,
        height,
        title,
        rows,
        body_height,
        content_height,
    })
}

/// Places the box after the pointer, flipping before it at the surface edge.
fn place_along(pointer: f64, size: f64, extent: f64) -> f64 {
    let after = pointer + TOOLTIP_POINTER_OFFSET_PX;
    if after + size <= extent {
        return after;
    }
    (pointer - TOOLTIP_POINTER_OFFSET_PX - size).max(0.0)
}

fn all_rows(hit_info: &HitInfo) -> Vec<TooltipRow> {
    hit_info
        .items
        .iter()
        .map(|(id, item)| row(id, item, value_text(item)))
        .collect()
}

fn row(id: &SeriesId, item: &HitItem, value_text: String) -> TooltipRow {
    TooltipRow {
        series_id: id.clone(),
        name: item.name.clone(),
        value_text,
        value: item.value,
        color: item.color,
        hit: item.hit,
    }
}

fn value_text(item: &HitItem) -> String {
    item.data
        .formatted
        .clone()
        .unwrap_or_else(|| format_with_thousands(item.value))
}

fn scatter_point_text(item: &HitItem) -> String {
    match item.data.x {
        Some(x) => format!("{}, {}", format_with_thousands(x), value_text(item)),
        None => value_text(item),
    }
}

fn heat_map_cell_title(item: &HitItem) -> Option<String> {
    let x = item.data.x?;
    let y = item.data.y?;
    Some(format!(
        "{}, {}",
        format_with_thousands(x),
        format_with_thousands(y)
    ))
}

fn category_title(
    item: &HitItem,
    horizontal: bool,
    labels: &[String],
) -> Option<String> {
    if let Some(label) = item
        .index
        .and_then(|index| labels.get(index))
        .filter(|label| !label.is_empty())
    {
        return Some(label.clone());
    }
    item.data.category(horizontal).map(format_with_thousands)
}
