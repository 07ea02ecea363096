pub mod chart_snapshot;
pub mod chart_type;
pub mod geometry;
pub mod primitives;
pub mod scale;
pub mod series;
pub mod types;

pub use chart_snapshot::ChartSnapshot;
pub use chart_type::{ChartType, DragShape};
pub use geometry::NearestPointGeometry;
pub use primitives::{format_with_thousands, round_to_places};
pub use scale::{AxisRange, AxisSteps, ratio_in_range};
pub use series::{
    AxisPair, BlockRangeQuery, DataPoint, GraphHit, SelectionArea, SeriesEntry, SeriesGeometry,
    SeriesId, SeriesList, series_list,
};
pub use types::{
    DataRange, DragRect, LabelOffset, PartialDataRange, PixelPoint, PlotRect, Viewport,
};
