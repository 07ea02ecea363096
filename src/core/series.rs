use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{DragRect, PartialDataRange, PixelPoint, PlotRect};
use crate::render::Color;

/// Stable series identifier used as key in hit and selection maps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesId(String);

impl SeriesId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SeriesId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SeriesId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One data item of a series.
///
/// `x`/`y` are the item coordinates (the category coordinate may be a label
/// position or timestamp), `o` is an explicit aggregate value when the series
/// declares one. `xp`/`yp` hold the projected pixel position once the base
/// chart has laid the item out.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub o: Option<f64>,
    #[serde(default)]
    pub percentage: Option<f64>,
    #[serde(default)]
    pub xp: Option<f64>,
    #[serde(default)]
    pub yp: Option<f64>,
    /// Tooltip text attached by the formatter during hit-testing.
    #[serde(default)]
    pub formatted: Option<String>,
}

impl DataPoint {
    #[must_use]
    pub fn xy(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_aggregate(mut self, o: f64) -> Self {
        self.o = Some(o);
        self
    }

    #[must_use]
    pub fn with_percentage(mut self, percentage: f64) -> Self {
        self.percentage = Some(percentage);
        self
    }

    #[must_use]
    pub fn with_pixel(mut self, xp: f64, yp: f64) -> Self {
        self.xp = Some(xp);
        self.yp = Some(yp);
        self
    }

    /// Coordinate along the category axis.
    #[must_use]
    pub fn category(&self, horizontal: bool) -> Option<f64> {
        if horizontal { self.y } else { self.x }
    }

    /// Coordinate along the measured (value) axis.
    #[must_use]
    pub fn measured(&self, horizontal: bool) -> Option<f64> {
        if horizontal { self.x } else { self.y }
    }

    #[must_use]
    pub fn pixel(&self) -> Option<PixelPoint> {
        Some(PixelPoint::new(self.xp?, self.yp?))
    }
}

/// Owning axis indices of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AxisPair {
    pub x: usize,
    pub y: usize,
}

/// Candidate item returned by a series geometry query.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphHit {
    pub data: DataPoint,
    /// `true` when the cursor is close enough to count as a direct hit.
    pub hit: bool,
    /// Index of the item inside its series, when known.
    pub index: Option<usize>,
}

/// Active drag area handed to series item/range queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionArea {
    pub rect: DragRect,
    pub range: PlotRect,
}

/// Raw drag geometry handed to heat-map block snapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockRangeQuery {
    pub xcp: f64,
    pub xep: f64,
    pub ycp: f64,
    pub yep: f64,
    pub range: PlotRect,
}

/// Geometry queries one chart-type variant provides for its series.
///
/// Only `find_graph_data` is mandatory; the remaining queries default to
/// "not supported" so that point-like series implement just what they need.
pub trait SeriesGeometry {
    /// Finds the item under (or nearest to) `position`.
    fn find_graph_data(&self, position: PixelPoint, horizontal: bool) -> Option<GraphHit>;

    /// Returns items that fall inside a drag-selection area.
    fn find_items(&self, _area: &SelectionArea) -> Vec<DataPoint> {
        Vec::new()
    }

    /// Snaps a raw drag to whole cells (heat-map only).
    fn find_block_range(&self, _query: &BlockRangeQuery) -> Option<DragRect> {
        None
    }

    /// Resolves the data range of a snapped drag area (heat-map only).
    fn find_selection_range(&self, _area: &SelectionArea) -> Option<PartialDataRange> {
        None
    }
}

/// Read-only series description owned by the chart.
#[derive(Clone)]
pub struct SeriesEntry {
    pub id: SeriesId,
    pub name: String,
    pub color: Color,
    pub axis: AxisPair,
    pub data: Vec<DataPoint>,
    pub show: bool,
    /// Grouped/stacked series leave coordinate-derived values unresolved.
    pub stacked: bool,
    pub geometry: Option<Arc<dyn SeriesGeometry>>,
}

impl fmt::Debug for SeriesEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeriesEntry")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("color", &self.color)
            .field("axis", &self.axis)
            .field("data_len", &self.data.len())
            .field("show", &self.show)
            .field("stacked", &self.stacked)
            .field("has_geometry", &self.geometry.is_some())
            .finish()
    }
}

impl SeriesEntry {
    #[must_use]
    pub fn new(id: impl Into<SeriesId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: Color::rgb(0.0, 0.0, 0.0),
            axis: AxisPair::default(),
            data: Vec::new(),
            show: true,
            stacked: false,
            geometry: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_axis(mut self, x: usize, y: usize) -> Self {
        self.axis = AxisPair { x, y };
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: Vec<DataPoint>) -> Self {
        self.data = data;
        self
    }

    #[must_use]
    pub fn with_geometry(mut self, geometry: Arc<dyn SeriesGeometry>) -> Self {
        self.geometry = Some(geometry);
        self
    }

    #[must_use]
    pub fn with_show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    #[must_use]
    pub fn stacked(mut self, stacked: bool) -> Self {
        self.stacked = stacked;
        self
    }
}

/// Ordered series map; iteration order is the chart's series order.
pub type SeriesList = IndexMap<SeriesId, SeriesEntry>;

/// Builds a [`SeriesList`] keyed by each entry's id.
#[must_use]
pub fn series_list(entries: impl IntoIterator<Item = SeriesEntry>) -> SeriesList {
    entries
        .into_iter()
        .map(|entry| (entry.id.clone(), entry))
        .collect()
}
