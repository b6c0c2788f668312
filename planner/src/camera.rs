#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_PX_PER_CM, MIN_GRID_STEP_PX, MIN_PX_PER_CM};

/// A point in either pixel or room (cm) space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pan/zoom state mapping room centimeters onto viewport pixels.
///
/// `pan_x` / `pan_y` are in CSS pixels.
/// `px_per_cm` is the zoom factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub px_per_cm: f64,
    pub pan_x: f64,
    pub pan_y: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { px_per_cm: 1.0, pan_x: 0.0, pan_y: 0.0 }
    }
}

/// Grid lines visible in a viewport, in pixel coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridLines {
    /// X positions of vertical lines.
    pub xs: Vec<f64>,
    /// Y positions of horizontal lines.
    pub ys: Vec<f64>,
}

impl Camera {
    /// Convert a room point (cm) to viewport pixels.
    #[must_use]
    pub fn cm_to_px(&self, cm: Point) -> Point {
        Point {
            x: cm.x * self.px_per_cm + self.pan_x,
            y: cm.y * self.px_per_cm + self.pan_y,
        }
    }

    /// Convert a viewport pixel point to room coordinates (cm).
    #[must_use]
    pub fn px_to_cm(&self, px: Point) -> Point {
        Point {
            x: (px.x - self.pan_x) / self.px_per_cm,
            y: (px.y - self.pan_y) / self.px_per_cm,
        }
    }

    /// Convert a pixel distance to centimeters.
    #[must_use]
    pub fn px_dist_to_cm(&self, px: f64) -> f64 {
        px / self.px_per_cm
    }

    /// Convert a centimeter distance to pixels.
    #[must_use]
    pub fn cm_dist_to_px(&self, cm: f64) -> f64 {
        cm * self.px_per_cm
    }

    /// Change zoom while keeping the room point under `anchor` fixed on screen.
    ///
    /// The requested zoom is clamped to the supported range first.
    #[must_use]
    pub fn zoom_at(&self, anchor: Point, px_per_cm: f64) -> Self {
        let zoom = px_per_cm.clamp(MIN_PX_PER_CM, MAX_PX_PER_CM);
        let fixed = self.px_to_cm(anchor);
        Self {
            px_per_cm: zoom,
            pan_x: anchor.x - fixed.x * zoom,
            pan_y: anchor.y - fixed.y * zoom,
        }
    }

    /// Camera at `px_per_cm` that centres a `width_cm` × `depth_cm` room in the viewport.
    #[must_use]
    pub fn centered_on_room(width_cm: f64, depth_cm: f64, viewport_w: f64, viewport_h: f64, px_per_cm: f64) -> Self {
        Self {
            px_per_cm,
            pan_x: (viewport_w - width_cm * px_per_cm) * 0.5,
            pan_y: (viewport_h - depth_cm * px_per_cm) * 0.5,
        }
    }

    /// Background grid lines covering a `viewport_w` × `viewport_h` viewport.
    ///
    /// Lines are spaced `snap_cm` apart in room space, but never closer than
    /// [`MIN_GRID_STEP_PX`] on screen. The phase follows the pan so the grid
    /// moves with the room.
    #[must_use]
    pub fn grid_lines(&self, snap_cm: f64, viewport_w: f64, viewport_h: f64) -> GridLines {
        let step = (snap_cm * self.px_per_cm).max(MIN_GRID_STEP_PX);
        GridLines {
            xs: axis_lines(self.pan_x, step, viewport_w),
            ys: axis_lines(self.pan_y, step, viewport_h),
        }
    }
}

fn axis_lines(pan: f64, step: f64, extent: f64) -> Vec<f64> {
    let mut lines = Vec::new();
    let mut pos = -pan.rem_euclid(step);
    while pos < extent {
        lines.push(pos);
        pos += step;
    }
    lines
}
