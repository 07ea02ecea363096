use serde::{Deserialize, Serialize};

use crate::core::{PixelPoint, PlotRect, Viewport};

/// Native pointer event as delivered by the host, in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerEvent {
    pub client_x: f64,
    pub client_y: f64,
    /// Vertical wheel delta; zero for non-wheel events.
    #[serde(default)]
    pub delta_y: f64,
}

impl PointerEvent {
    #[must_use]
    pub const fn at(client_x: f64, client_y: f64) -> Self {
        Self {
            client_x,
            client_y,
            delta_y: 0.0,
        }
    }

    #[must_use]
    pub const fn wheel(client_x: f64, client_y: f64, delta_y: f64) -> Self {
        Self {
            client_x,
            client_y,
            delta_y,
        }
    }
}

/// Bounding box of the overlay surface in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceBounds {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Layer viewport covering the surface (rounded up to whole pixels).
    #[must_use]
    pub fn viewport(self) -> Viewport {
        let to_px = |value: f64| {
            if value.is_finite() && value > 0.0 {
                value.ceil().min(f64::from(u32::MAX)) as u32
            } else {
                0
            }
        };
        Viewport::new(to_px(self.width), to_px(self.height))
    }
}

/// Pointer position in canvas-local pixels plus the surface size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
    pub surface_width: f64,
    pub surface_height: f64,
}

impl PointerPosition {
    #[must_use]
    pub fn point(self) -> PixelPoint {
        PixelPoint::new(self.x, self.y)
    }
}

/// Converts a client-space event into surface-local pixels.
///
/// No clamping happens here; drag gestures clamp with [`clamp_to_plot`].
#[must_use]
pub fn map_pointer(event: PointerEvent, bounds: SurfaceBounds) -> PointerPosition {
    PointerPosition {
        x: event.client_x - bounds.left,
        y: event.client_y - bounds.top,
        surface_width: bounds.width,
        surface_height: bounds.height,
    }
}

/// Clamps a surface-local point onto the plot rectangle.
#[must_use]
pub fn clamp_to_plot(position: PointerPosition, range: PlotRect) -> PixelPoint {
    range.clamp(position.point())
}
