//! Dimension annotations derived from the document for the view layer.

#[cfg(test)]
#[path = "dimensions_test.rs"]
mod dimensions_test;

use serde::Serialize;

use crate::camera::Point;
use crate::doc::{Document, ObjectId};
use crate::geometry::distance;
use crate::units::format_length;

/// What a dimension line measures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "camelCase")]
pub enum Measured {
    RoomWidth,
    RoomDepth,
    ObjectWidth(ObjectId),
    ObjectDepth(ObjectId),
    /// Outer span of an object's monitor rig.
    RigSpan(ObjectId),
}

/// A labelled measurement between two room points.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimension {
    pub measured: Measured,
    pub from: Point,
    pub to: Point,
    pub length_cm: f64,
    pub label: String,
}

impl Dimension {
    fn between(measured: Measured, from: Point, to: Point, doc: &Document) -> Self {
        let length_cm = distance(from, to);
        Self { measured, from, to, length_cm, label: format_length(length_cm, doc.units) }
    }
}

/// Dimension lines for the current document; empty while annotations are hidden.
///
/// Room edges come first, then each object's width (along its rotated top
/// edge) and depth (along its rotated right edge), then the rig span of any
/// object carrying a monitor.
#[must_use]
pub fn annotations(doc: &Document) -> Vec<Dimension> {
    if !doc.show_dimensions() {
        return Vec::new();
    }

    let room = doc.room;
    let mut dims = vec![
        Dimension::between(Measured::RoomWidth, Point::new(0.0, 0.0), Point::new(room.width_cm, 0.0), doc),
        Dimension::between(Measured::RoomDepth, Point::new(0.0, 0.0), Point::new(0.0, room.depth_cm), doc),
    ];

    for object in &doc.objects {
        let [nw, ne, se, _] = object.corners();
        dims.push(Dimension::between(Measured::ObjectWidth(object.id.clone()), nw, ne, doc));
        dims.push(Dimension::between(Measured::ObjectDepth(object.id.clone()), ne, se, doc));
    }

    for object in &doc.objects {
        if let Some(rig) = object.rig() {
            dims.push(Dimension::between(Measured::RigSpan(object.id.clone()), rig.outer_left, rig.outer_right, doc));
        }
    }

    dims
}
