#![allow(clippy::float_cmp)]

use super::*;
use crate::monitor::{MonitorPreset, attachment};

fn door(id: &str, wall: Wall, offset_cm: f64, width_cm: f64) -> Door {
    Door { id: id.to_owned(), wall, offset_cm, width_cm }
}

fn chair() -> PlacedObject {
    PlacedObject::furniture("obj_chair".into(), "Chair", 120.0, 60.0, Point::new(50.0, 50.0), "#E8B298")
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_document_values() {
    let doc = Document::default();
    assert_eq!(doc.units, Units::Metric);
    assert!(doc.theme.is_none());
    assert_eq!(doc.room.width_cm, 400.0);
    assert_eq!(doc.room.depth_cm, 300.0);
    assert_eq!(doc.simulator.width_cm, 160.0);
    assert_eq!(doc.simulator.depth_cm, 60.0);
    assert!(doc.doors.is_empty());
    assert!(doc.objects.is_empty());
    assert_eq!(doc.selection, Selection::None);
    assert_eq!(doc.canvas.px_per_cm, 1.5);
    assert_eq!(doc.canvas.snap_cm, 5.0);
    assert!(!doc.show_dimensions());
}

#[test]
fn generated_ids_are_prefixed_and_unique() {
    let a = new_object_id();
    let b = new_object_id();
    assert!(a.starts_with("obj_"));
    assert_ne!(a, b);
    assert!(new_door_id().starts_with("door_"));
}

// =============================================================
// Serde shape
// =============================================================

#[test]
fn document_serializes_camel_case_fields() {
    let mut doc = Document::default();
    doc.objects.push(chair());
    doc.selection = Selection::Object("obj_chair".into());
    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(json["room"]["widthCm"], 400.0);
    assert_eq!(json["objects"][0]["xCm"], 50.0);
    assert_eq!(json["objects"][0]["kind"], "furniture");
    assert_eq!(json["selectedObjectId"], "obj_chair");
    assert!(json["selectedDoorId"].is_null());
    assert_eq!(json["canvas"]["pxPerCm"], 1.5);
    assert!(json.get("theme").is_none());
}

#[test]
fn partial_document_fills_defaults() {
    let doc: Document = serde_json::from_str(r#"{ "room": { "widthCm": 500, "depthCm": 350 } }"#).unwrap();
    assert_eq!(doc.room.width_cm, 500.0);
    assert_eq!(doc.canvas, CanvasState::default());
    assert_eq!(doc.simulator, SimulatorSpec::default());
    assert_eq!(doc.selection, Selection::None);
}

#[test]
fn selection_reads_door_field() {
    let doc: Document = serde_json::from_str(r#"{ "selectedObjectId": null, "selectedDoorId": "door_1" }"#).unwrap();
    assert_eq!(doc.selection, Selection::Door("door_1".into()));
}

#[test]
fn selection_prefers_object_when_both_fields_are_set() {
    let doc: Document = serde_json::from_str(r#"{ "selectedObjectId": "a", "selectedDoorId": "b" }"#).unwrap();
    assert_eq!(doc.selection, Selection::Object("a".into()));
}

#[test]
fn document_json_round_trip() {
    let mut doc = Document { theme: Some(ThemeName::Slate), show_dimensions: Some(true), ..Document::default() };
    doc.objects.push(PlacedObject::simulator(&doc.simulator, &doc.room));
    doc.doors.push(door("door_1", Wall::East, 30.0, 80.0));
    doc.selection = Selection::Door("door_1".into());
    let text = serde_json::to_string(&doc).unwrap();
    let back: Document = serde_json::from_str(&text).unwrap();
    assert_eq!(back, doc);
}

// =============================================================
// Objects
// =============================================================

#[test]
fn simulator_object_is_centered_with_fixed_identity() {
    let room = Room { width_cm: 500.0, depth_cm: 400.0 };
    let sim = PlacedObject::simulator(&SimulatorSpec::default(), &room);
    assert_eq!(sim.id, "simulator");
    assert_eq!(sim.name, "Racing Simulator");
    assert_eq!(sim.color, "#9EABA2");
    assert_eq!(sim.kind, ObjectKind::Simulator);
    assert_eq!(sim.center(), Point::new(250.0, 200.0));
}

#[test]
fn clamp_center_keeps_footprint_in_room() {
    let room = Room::default();
    let obj = chair();
    assert_eq!(obj.clamp_center(Point::new(-100.0, -100.0), &room), Point::new(60.0, 30.0));
    assert_eq!(obj.clamp_center(Point::new(999.0, 999.0), &room), Point::new(340.0, 270.0));
}

#[test]
fn rotated_bounds_grow_with_rotation() {
    let mut obj = chair();
    let flat = obj.rotated_bounds();
    assert!((flat.width() - 120.0).abs() < 1e-9);
    obj.rotation_deg = 90.0;
    let turned = obj.rotated_bounds();
    assert!((turned.width() - 60.0).abs() < 1e-9);
    assert!((turned.height() - 120.0).abs() < 1e-9);
    assert_eq!(obj.unrotated_bounds(), flat);
}

#[test]
fn display_color_follows_palette_index() {
    let mut obj = chair();
    assert_eq!(obj.display_color(Some(ThemeName::Vibrant)), "#E8B298");
    obj.theme_color_index = Some(2);
    assert_eq!(obj.display_color(Some(ThemeName::Vibrant)), "#f43f5e");
}

#[test]
fn template_prefers_stored_value_over_name() {
    let mut obj = chair();
    obj.name = "PRO".into();
    assert_eq!(obj.template(), PlacementTemplate::Pro);
    obj.placement_template = Some(PlacementTemplate::ProAm);
    assert_eq!(obj.template(), PlacementTemplate::ProAm);
}

#[test]
fn rig_requires_monitor() {
    let mut sim = PlacedObject::simulator(&SimulatorSpec::default(), &Room::default());
    assert!(sim.rig().is_none());
    sim.monitor = Some(attachment(MonitorPreset::Single49));
    let rig = sim.rig().unwrap();
    assert_eq!(rig.panels.len(), 1);
}

// =============================================================
// apply_partial
// =============================================================

#[test]
fn apply_partial_merges_present_fields_only() {
    let mut obj = chair();
    obj.apply_partial(&PartialObject { x_cm: Some(75.0), ..PartialObject::default() }, None);
    assert_eq!(obj.x_cm, 75.0);
    assert_eq!(obj.y_cm, 50.0);
    assert_eq!(obj.name, "Chair");
}

#[test]
fn apply_partial_normalizes_rotation() {
    let mut obj = chair();
    obj.apply_partial(&PartialObject { rotation_deg: Some(375.0), ..PartialObject::default() }, None);
    assert_eq!(obj.rotation_deg, 15.0);
    obj.apply_partial(&PartialObject { rotation_deg: Some(-15.0), ..PartialObject::default() }, None);
    assert_eq!(obj.rotation_deg, 345.0);
}

#[test]
fn apply_partial_palette_index_resolves_color() {
    let mut obj = chair();
    let partial = PartialObject { theme_color_index: Some(2), ..PartialObject::default() };
    obj.apply_partial(&partial, Some(ThemeName::Vibrant));
    assert_eq!(obj.color, "#f43f5e");
    assert_eq!(obj.theme_color_index, Some(2));
}

#[test]
fn apply_partial_explicit_color_detaches_palette() {
    let mut obj = chair();
    obj.theme_color_index = Some(1);
    obj.apply_partial(&PartialObject { color: Some("#123456".into()), ..PartialObject::default() }, None);
    assert_eq!(obj.color, "#123456");
    assert!(obj.theme_color_index.is_none());
}

// =============================================================
// Doors
// =============================================================

#[test]
fn door_segments_per_wall() {
    let room = Room::default();
    assert_eq!(
        door("n", Wall::North, 10.0, 80.0).segment(&room),
        (Point::new(10.0, 0.0), Point::new(90.0, 0.0))
    );
    assert_eq!(
        door("s", Wall::South, 10.0, 80.0).segment(&room),
        (Point::new(10.0, 300.0), Point::new(90.0, 300.0))
    );
    assert_eq!(
        door("w", Wall::West, 10.0, 80.0).segment(&room),
        (Point::new(0.0, 10.0), Point::new(0.0, 90.0))
    );
    assert_eq!(
        door("e", Wall::East, 10.0, 80.0).segment(&room),
        (Point::new(400.0, 10.0), Point::new(400.0, 90.0))
    );
}

#[test]
fn door_conflicts_reports_overlap_and_out_of_wall() {
    let room = Room::default();
    let doors = vec![
        door("a", Wall::North, 0.0, 100.0),
        door("b", Wall::North, 90.0, 80.0),
        door("c", Wall::South, 90.0, 80.0),
        door("d", Wall::East, 250.0, 80.0),
    ];
    let conflicts = door_conflicts(&doors, &room);
    assert_eq!(
        conflicts,
        vec![DoorConflict::Overlap("a".into(), "b".into()), DoorConflict::OutOfBounds("d".into())]
    );
}

#[test]
fn adjacent_doors_do_not_conflict() {
    let room = Room::default();
    let doors = vec![door("a", Wall::West, 0.0, 100.0), door("b", Wall::West, 100.0, 100.0)];
    assert!(door_conflicts(&doors, &room).is_empty());
}

// =============================================================
// Lookup
// =============================================================

#[test]
fn selected_lookups_resolve_ids() {
    let mut doc = Document::default();
    doc.objects.push(chair());
    doc.doors.push(door("door_1", Wall::North, 0.0, 80.0));
    doc.selection = Selection::Object("obj_chair".into());
    assert_eq!(doc.selected_object().map(|o| o.name.as_str()), Some("Chair"));
    assert!(doc.selected_door().is_none());
    doc.selection = Selection::Door("door_1".into());
    assert!(doc.selected_object().is_none());
    assert_eq!(doc.selected_door().map(|d| d.width_cm), Some(80.0));
    doc.selection = Selection::Object("gone".into());
    assert!(doc.selected_object().is_none());
}
