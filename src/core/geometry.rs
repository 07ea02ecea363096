use ordered_float::OrderedFloat;

use crate::core::{DataPoint, GraphHit, PixelPoint, SelectionArea, SeriesGeometry};

/// Geometry provider for point-like series with pre-projected pixel positions.
///
/// The nearest item along the category axis is returned for any cursor
/// position; it counts as a direct hit when the cursor lies within
/// `hit_radius_px` of the item in both directions.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestPointGeometry {
    points: Vec<DataPoint>,
    hit_radius_px: f64,
    max_category_distance_px: Option<f64>,
}

impl NearestPointGeometry {
    #[must_use]
    pub fn new(points: Vec<DataPoint>, hit_radius_px: f64) -> Self {
        Self {
            points,
            hit_radius_px: hit_radius_px.max(0.0),
            max_category_distance_px: None,
        }
    }

    /// Ignores items farther than `distance_px` along the category axis.
    #[must_use]
    pub fn with_max_category_distance(mut self, distance_px: f64) -> Self {
        self.max_category_distance_px = Some(distance_px.max(0.0));
        self
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }
}

impl SeriesGeometry for NearestPointGeometry {
    fn find_graph_data(&self, position: PixelPoint, horizontal: bool) -> Option<GraphHit> {
        let (index, distance, pixel) = self
            .points
            .iter()
            .enumerate()
            .filter_map(|(index, point)| {
                let pixel = point.pixel()?;
                let distance = if horizontal {
                    (pixel.y - position.y).abs()
                } else {
                    (pixel.x - position.x).abs()
                };
                Some((index, distance, pixel))
            })
            .min_by_key(|(_, distance, _)| OrderedFloat(*distance))?;

        if let Some(limit) = self.max_category_distance_px {
            if distance > limit {
                return None;
            }
        }

        let hit = (pixel.x - position.x).abs() <= self.hit_radius_px
            && (pixel.y - position.y).abs() <= self.hit_radius_px;
        Some(GraphHit {
            data: self.points[index].clone(),
            hit,
            index: Some(index),
        })
    }

    fn find_items(&self, area: &SelectionArea) -> Vec<DataPoint> {
        self.points
            .iter()
            .filter(|point| point.pixel().is_some_and(|pixel| area.rect.contains(pixel)))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::NearestPointGeometry;
    use crate::core::{DataPoint, DragRect, PixelPoint, PlotRect, SelectionArea, SeriesGeometry};

    fn geometry() -> NearestPointGeometry {
        NearestPointGeometry::new(
            vec![
                DataPoint::xy(0.0, 5.0).with_pixel(10.0, 50.0),
                DataPoint::xy(1.0, 8.0).with_pixel(30.0, 20.0),
                DataPoint::xy(2.0, 1.0).with_pixel(50.0, 58.0),
            ],
            4.0,
        )
    }

    #[test]
    fn nearest_item_follows_category_axis() {
        let found = geometry()
            .find_graph_data(PixelPoint::new(33.0, 90.0), false)
            .expect("nearest item");
        assert_eq!(found.index, Some(1));
        assert!(!found.hit);

        let direct = geometry()
            .find_graph_data(PixelPoint::new(31.0, 22.0), false)
            .expect("direct hit");
        assert!(direct.hit);
    }

    #[test]
    fn category_distance_limit_drops_far_items() {
        let geometry = geometry().with_max_category_distance(2.0);
        assert!(
            geometry
                .find_graph_data(PixelPoint::new(40.0, 20.0), false)
                .is_none()
        );
    }

    #[test]
    fn find_items_returns_points_inside_rectangle() {
        let area = SelectionArea {
            rect: DragRect::new(5.0, 40.0, 50.0, 20.0),
            range: PlotRect::new(0.0, 100.0, 0.0, 60.0),
        };
        let items = geometry().find_items(&area);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].x, Some(0.0));
        assert_eq!(items[1].x, Some(2.0));
    }
}
