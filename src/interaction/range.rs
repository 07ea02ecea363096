use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{
    AxisSteps, DataPoint, DataRange, DragRect, PlotRect, SelectionArea, SeriesId, SeriesList,
    ratio_in_range, round_to_places,
};

const RANGE_DECIMALS: u32 = 3;

/// Translates a pixel rectangle inside `plot` into the data window it covers.
///
/// The y axis is inverted (the top pixel edge maps to `y_max`). Bounds are
/// rounded to three decimals and clamped to the axis range. Returns `None`
/// until both primary axes have established their bounds.
#[must_use]
pub fn pixel_range_to_data_range(
    rect: DragRect,
    plot: PlotRect,
    axes: &AxisSteps,
) -> Option<DataRange> {
    let (x_axis, y_axis) = axes.primary()?;

    let x_min = x_axis.value_at_ratio(ratio_in_range(plot.x1, plot.x2, rect.xsp));
    let x_max = x_axis.value_at_ratio(ratio_in_range(plot.x1, plot.x2, rect.xep()));
    let y_min = y_axis.value_at_ratio(1.0 - ratio_in_range(plot.y1, plot.y2, rect.yep()));
    let y_max = y_axis.value_at_ratio(1.0 - ratio_in_range(plot.y1, plot.y2, rect.ysp));

    let range = DataRange {
        x_min: round_to_places(x_min, RANGE_DECIMALS).max(x_axis.graph_min()),
        x_max: round_to_places(x_max, RANGE_DECIMALS).min(x_axis.graph_max()),
        y_min: round_to_places(y_min, RANGE_DECIMALS).max(y_axis.graph_min()),
        y_max: round_to_places(y_max, RANGE_DECIMALS).min(y_axis.graph_max()),
    };
    trace!(?rect, ?range, "pixel range translated");
    Some(range)
}

/// Heat-map variant: the first series resolves the range of its cells and
/// any bound it leaves open falls back to the full axis range.
#[must_use]
pub fn heat_map_selection_range(
    area: &SelectionArea,
    series: &SeriesList,
    axes: &AxisSteps,
) -> Option<DataRange> {
    let (x_axis, y_axis) = axes.primary()?;
    let resolved = series
        .values()
        .next()
        .and_then(|entry| entry.geometry.as_deref())
        .and_then(|geometry| geometry.find_selection_range(area))
        .unwrap_or_default();

    Some(DataRange {
        x_min: resolved.x_min.unwrap_or(x_axis.graph_min()),
        x_max: resolved.x_max.unwrap_or(x_axis.graph_max()),
        y_min: resolved.y_min.unwrap_or(y_axis.graph_min()),
        y_max: resolved.y_max.unwrap_or(y_axis.graph_max()),
    })
}

/// Items of one series that fall inside a drag-selection area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedSeriesItems {
    pub series_name: String,
    pub series_id: SeriesId,
    pub items: Vec<DataPoint>,
}

/// Collects, per series, the items inside `area`; series without matches
/// are omitted.
#[must_use]
pub fn find_selected_items(series: &SeriesList, area: &SelectionArea) -> Vec<SelectedSeriesItems> {
    series
        .iter()
        .filter_map(|(id, entry)| {
            let items = entry.geometry.as_deref()?.find_items(area);
            (!items.is_empty()).then(|| SelectedSeriesItems {
                series_name: entry.name.clone(),
                series_id: id.clone(),
                items,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use approx::assert_relative_eq;

    use super::{find_selected_items, heat_map_selection_range, pixel_range_to_data_range};
    use crate::core::{
        AxisRange, AxisSteps, DataPoint, DragRect, GraphHit, NearestPointGeometry,
        PartialDataRange, PixelPoint, PlotRect, SelectionArea, SeriesEntry, SeriesGeometry,
        series_list,
    };

    fn axes() -> AxisSteps {
        AxisSteps::new(
            AxisRange::new(0.0, 100.0).expect("x axis"),
            AxisRange::new(0.0, 50.0).expect("y axis"),
        )
    }

    #[test]
    fn translates_with_inverted_y_axis() {
        let plot = PlotRect::new(10.0, 110.0, 10.0, 60.0);
        let range = pixel_range_to_data_range(DragRect::new(10.0, 10.0, 50.0, 25.0), plot, &axes())
            .expect("range");
        assert_relative_eq!(range.x_min, 0.0, epsilon = 1e-9);
        assert_relative_eq!(range.x_max, 50.0, epsilon = 1e-9);
        assert_relative_eq!(range.y_min, 25.0, epsilon = 1e-9);
        assert_relative_eq!(range.y_max, 50.0, epsilon = 1e-9);
    }

    #[test]
    fn rounds_and_clamps_to_axis_bounds() {
        let plot = PlotRect::new(0.0, 3.0, 0.0, 3.0);
        let range = pixel_range_to_data_range(DragRect::new(-1.0, 1.0, 2.0, 5.0), plot, &axes())
            .expect("range");
        assert_relative_eq!(range.x_min, 0.0, epsilon = 1e-9);
        assert_relative_eq!(range.x_max, 33.333, epsilon = 1e-9);
        assert_relative_eq!(range.y_min, 0.0, epsilon = 1e-9);
        assert_relative_eq!(range.y_max, 33.333, epsilon = 1e-9);
    }

    #[test]
    fn missing_axes_skip_translation() {
        let plot = PlotRect::new(0.0, 10.0, 0.0, 10.0);
        assert!(
            pixel_range_to_data_range(DragRect::new(1.0, 1.0, 2.0, 2.0), plot, &AxisSteps::default())
                .is_none()
        );
    }

    struct HalfResolved;

    impl SeriesGeometry for HalfResolved {
        fn find_graph_data(&self, _position: PixelPoint, _horizontal: bool) -> Option<GraphHit> {
            None
        }

        fn find_selection_range(&self, _area: &SelectionArea) -> Option<PartialDataRange> {
            Some(PartialDataRange {
                x_min: Some(20.0),
                x_max: Some(40.0),
                y_min: None,
                y_max: None,
            })
        }
    }

    #[test]
    fn heat_map_range_falls_back_to_axis_bounds() {
        let series = series_list([SeriesEntry::new("h", "Heat").with_geometry(Arc::new(HalfResolved))]);
        let area = SelectionArea {
            rect: DragRect::new(0.0, 0.0, 10.0, 10.0),
            range: PlotRect::new(0.0, 100.0, 0.0, 100.0),
        };
        let range = heat_map_selection_range(&area, &series, &axes()).expect("range");
        assert_eq!((range.x_min, range.x_max), (20.0, 40.0));
        assert_eq!((range.y_min, range.y_max), (0.0, 50.0));
    }

    #[test]
    fn selected_items_skip_series_without_matches() {
        let inside = DataPoint::xy(1.0, 1.0).with_pixel(15.0, 15.0);
        let outside = DataPoint::xy(2.0, 2.0).with_pixel(90.0, 90.0);
        let series = series_list([
            SeriesEntry::new("a", "A").with_geometry(Arc::new(NearestPointGeometry::new(
                vec![inside.clone(), outside.clone()],
                4.0,
            ))),
            SeriesEntry::new("b", "B")
                .with_geometry(Arc::new(NearestPointGeometry::new(vec![outside], 4.0))),
        ]);
        let area = SelectionArea {
            rect: DragRect::new(10.0, 10.0, 20.0, 20.0),
            range: PlotRect::new(0.0, 100.0, 0.0, 100.0),
        };

        let selected = find_selected_items(&series, &area);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].series_name, "A");
        assert_eq!(selected[0].items, vec![inside]);
    }
}
