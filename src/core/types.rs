use serde::{Deserialize, Serialize};

/// Pixel size of one canvas layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Position in canvas-local pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Margins reserved for axis labels inside the chart rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LabelOffset {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Axis-aligned pixel rectangle described by its edges.
///
/// `x1 <= x2` and `y1 <= y2`; `y1` is the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlotRect {
    pub x1: f64,
    pub x2: f64,
    pub y1: f64,
    pub y2: f64,
}

impl PlotRect {
    #[must_use]
    pub const fn new(x1: f64, x2: f64, y1: f64, y2: f64) -> Self {
        Self { x1, x2, y1, y2 }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.x2 - self.x1
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.y2 - self.y1
    }

    #[must_use]
    pub fn contains(self, point: PixelPoint) -> bool {
        point.x >= self.x1 && point.x <= self.x2 && point.y >= self.y1 && point.y <= self.y2
    }

    /// Shrinks the rectangle by label margins.
    #[must_use]
    pub fn inset(self, offset: LabelOffset) -> Self {
        Self {
            x1: self.x1 + offset.left,
            x2: self.x2 - offset.right,
            y1: self.y1 + offset.top,
            y2: self.y2 - offset.bottom,
        }
    }

    /// Clamps a point onto the rectangle, edges included.
    #[must_use]
    pub fn clamp(self, point: PixelPoint) -> PixelPoint {
        let x = if point.x < self.x1 {
            self.x1
        } else if point.x > self.x2 {
            self.x2
        } else {
            point.x
        };
        let y = if point.y < self.y1 {
            self.y1
        } else if point.y > self.y2 {
            self.y2
        } else {
            point.y
        };
        PixelPoint::new(x, y)
    }
}

/// Rectangle in top-left/size form, as produced by a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DragRect {
    pub xsp: f64,
    pub ysp: f64,
    pub width: f64,
    pub height: f64,
}

impl DragRect {
    #[must_use]
    pub const fn new(xsp: f64, ysp: f64, width: f64, height: f64) -> Self {
        Self {
            xsp,
            ysp,
            width,
            height,
        }
    }

    #[must_use]
    pub fn xep(self) -> f64 {
        self.xsp + self.width
    }

    #[must_use]
    pub fn yep(self) -> f64 {
        self.ysp + self.height
    }

    #[must_use]
    pub fn contains(self, point: PixelPoint) -> bool {
        point.x >= self.xsp && point.x <= self.xep() && point.y >= self.ysp && point.y <= self.yep()
    }
}

/// Data-space window covered by a pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataRange {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// Data range where each bound may be left unresolved by a series query.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialDataRange {
    pub x_min: Option<f64>,
    pub x_max: Option<f64>,
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
}
