#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::{Camera, Point};
use crate::consts::{DOOR_HIT_SLOP_PX, ROTATE_HANDLE_INSET_PX, ROTATE_HANDLE_RADIUS_PX};
use crate::doc::{Document, DoorId, ObjectId, PlacedObject};
use crate::geometry::{distance, distance_to_segment, point_in_rotated_rect, rotate_point};

/// What a pointer-down landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    /// The rotate handle of the selected object.
    RotateHandle(ObjectId),
    /// The body of an object.
    Object(ObjectId),
    /// A door opening.
    Door(DoorId),
}

/// Screen position of an object's rotate handle.
///
/// The handle sits inside the object's local north-east corner, inset by a
/// fixed pixel amount, and turns with the object.
#[must_use]
pub fn rotate_handle_center(object: &PlacedObject, camera: &Camera) -> Point {
    let center = camera.cm_to_px(object.center());
    let half_w = camera.cm_dist_to_px(object.width_cm) / 2.0;
    let half_d = camera.cm_dist_to_px(object.depth_cm) / 2.0;
    let local = Point::new(
        center.x + half_w - ROTATE_HANDLE_INSET_PX,
        center.y - half_d + ROTATE_HANDLE_INSET_PX,
    );
    rotate_point(local, center, object.rotation_deg)
}

/// Find what lies under `screen_pt`.
///
/// The selected object's rotate handle wins, then objects from top-most
/// (last drawn) down, then doors.
#[must_use]
pub fn hit_test(screen_pt: Point, doc: &Document, camera: &Camera) -> Option<Hit> {
    if let Some(selected) = doc.selected_object() {
        if distance(screen_pt, rotate_handle_center(selected, camera)) <= ROTATE_HANDLE_RADIUS_PX {
            return Some(Hit::RotateHandle(selected.id.clone()));
        }
    }

    let world = camera.px_to_cm(screen_pt);
    if let Some(object) = doc
        .objects
        .iter()
        .rev()
        .find(|o| point_in_rotated_rect(world, o.center(), o.width_cm, o.depth_cm, o.rotation_deg))
    {
        return Some(Hit::Object(object.id.clone()));
    }

    doc.doors
        .iter()
        .rev()
        .find(|door| {
            let (a, b) = door.segment(&doc.room);
            distance_to_segment(screen_pt, camera.cm_to_px(a), camera.cm_to_px(b)) <= DOOR_HIT_SLOP_PX
        })
        .map(|door| Hit::Door(door.id.clone()))
}
