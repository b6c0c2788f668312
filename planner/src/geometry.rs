//! Pure geometry helpers shared by the reducer, controller and rig layout.
//!
//! Angles are in degrees and positive angles rotate clockwise on a Y-down
//! screen, matching the renderer's convention.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::camera::Point;

/// Axis-aligned rectangle described by its min/max corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Whether `other` lies entirely inside this rectangle (edges inclusive).
    #[must_use]
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.min.x >= self.min.x && other.min.y >= self.min.y && other.max.x <= self.max.x && other.max.y <= self.max.y
    }
}

/// Bound `value` to `[min, max]`.
///
/// When the range is inverted (`min > max`, e.g. an object wider than the
/// room) the upper bound wins, like `Math.min(Math.max(v, min), max)`.
#[must_use]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

#[must_use]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg.to_radians()
}

/// Wrap any angle into `[0, 360)`.
#[must_use]
pub fn normalize_degrees_360(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Round `value` to the nearest multiple of `grid`. A non-positive grid disables snapping.
#[must_use]
pub fn snap_to_grid_cm(value: f64, grid: f64) -> f64 {
    if grid <= 0.0 {
        return value;
    }
    (value / grid).round() * grid
}

/// Rotate `p` about `pivot` by `angle_deg`.
#[must_use]
pub fn rotate_point(p: Point, pivot: Point, angle_deg: f64) -> Point {
    let (sin, cos) = deg_to_rad(angle_deg).sin_cos();
    let dx = p.x - pivot.x;
    let dy = p.y - pivot.y;
    Point {
        x: pivot.x + dx * cos - dy * sin,
        y: pivot.y + dx * sin + dy * cos,
    }
}

/// Corners of a `width` × `height` rectangle centred at `center`, rotated about
/// that centre. Order is NW, NE, SE, SW as seen before rotation.
#[must_use]
pub fn rect_corners(center: Point, width: f64, height: f64, rotation_deg: f64) -> [Point; 4] {
    let hw = width / 2.0;
    let hh = height / 2.0;
    [
        Point::new(center.x - hw, center.y - hh),
        Point::new(center.x + hw, center.y - hh),
        Point::new(center.x + hw, center.y + hh),
        Point::new(center.x - hw, center.y + hh),
    ]
    .map(|p| rotate_point(p, center, rotation_deg))
}

/// Axis-aligned bounds of a set of points. `None` for an empty set.
#[must_use]
pub fn bounding_box(points: &[Point]) -> Option<Rect> {
    let first = points.first()?;
    let init = Rect { min: *first, max: *first };
    Some(points.iter().skip(1).fold(init, |acc, p| Rect {
        min: Point::new(acc.min.x.min(p.x), acc.min.y.min(p.y)),
        max: Point::new(acc.max.x.max(p.x), acc.max.y.max(p.y)),
    }))
}

/// Whether `p` lies inside a rotated rectangle (edges inclusive).
#[must_use]
pub fn point_in_rotated_rect(p: Point, center: Point, width: f64, height: f64, rotation_deg: f64) -> bool {
    let local = rotate_point(p, center, -rotation_deg);
    (local.x - center.x).abs() <= width / 2.0 && (local.y - center.y).abs() <= height / 2.0
}

#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Shortest distance from `p` to the segment `a`–`b`.
#[must_use]
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq <= f64::EPSILON {
        return distance(p, a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    distance(p, Point::new(a.x + t * dx, a.y + t * dy))
}
