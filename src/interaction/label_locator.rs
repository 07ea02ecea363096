use crate::core::{PixelPoint, PlotRect};

/// Resolves a pixel position to the label (category) index under it.
pub trait LabelLocator {
    fn label_index_at(
        &self,
        position: PixelPoint,
        plot: PlotRect,
        label_count: usize,
        horizontal: bool,
    ) -> Option<usize>;
}

/// Splits the plot rectangle into equal bands along the category axis.
#[derive(Debug, Default, Clone, Copy)]
pub struct BandLabelLocator;

impl LabelLocator for BandLabelLocator {
    fn label_index_at(
        &self,
        position: PixelPoint,
        plot: PlotRect,
        label_count: usize,
        horizontal: bool,
    ) -> Option<usize> {
        if label_count == 0 || !plot.contains(position) {
            return None;
        }

        let (offset, span) = if horizontal {
            (position.y - plot.y1, plot.height())
        } else {
            (position.x - plot.x1, plot.width())
        };
        if span <= 0.0 {
            return None;
        }

        let band = span / label_count as f64;
        let index = (offset / band).floor() as usize;
        Some(index.min(label_count - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::{BandLabelLocator, LabelLocator};
    use crate::core::{PixelPoint, PlotRect};

    #[test]
    fn bands_split_category_axis_evenly() {
        let plot = PlotRect::new(0.0, 100.0, 0.0, 40.0);
        let locator = BandLabelLocator;
        assert_eq!(locator.label_index_at(PixelPoint::new(0.0, 5.0), plot, 4, false), Some(0));
        assert_eq!(locator.label_index_at(PixelPoint::new(60.0, 5.0), plot, 4, false), Some(2));
        assert_eq!(locator.label_index_at(PixelPoint::new(100.0, 5.0), plot, 4, false), Some(3));
        assert_eq!(locator.label_index_at(PixelPoint::new(60.0, 25.0), plot, 4, true), Some(2));
    }

    #[test]
    fn outside_plot_or_without_labels_is_none() {
        let plot = PlotRect::new(10.0, 110.0, 0.0, 40.0);
        let locator = BandLabelLocator;
        assert_eq!(locator.label_index_at(PixelPoint::new(5.0, 5.0), plot, 4, false), None);
        assert_eq!(locator.label_index_at(PixelPoint::new(50.0, 5.0), plot, 0, false), None);
    }
}
