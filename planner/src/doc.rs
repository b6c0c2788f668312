//! Document model: room, doors, placed objects, canvas and selection.
//!
//! `Document` is the single source of truth for a layout. It is replaced
//! wholesale on load and otherwise changed only through
//! [`crate::reducer::reduce`]. All lengths and positions are centimeters with
//! the origin at the room's north-west interior corner.
//!
//! The JSON shape (camelCase field names) is the interchange format used for
//! persistence and export. Every field has a default so partial documents load
//! with the missing parts filled in. Values this build cannot read fall back to
//! their defaults, and unreadable doors or objects are dropped one by one, so a
//! single odd field never discards a saved layout.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::camera::{Camera, Point};
use crate::consts::{
    DEFAULT_PX_PER_CM, DEFAULT_ROOM_DEPTH_CM, DEFAULT_ROOM_WIDTH_CM, DEFAULT_SIM_DEPTH_CM, DEFAULT_SIM_WIDTH_CM,
    DEFAULT_SNAP_CM, SIMULATOR_COLOR, SIMULATOR_ID, SIMULATOR_NAME,
};
use crate::geometry::{Rect, bounding_box, clamp, normalize_degrees_360, rect_corners};
use crate::monitor::{MonitorAttachment, PlacementTemplate, RigGeometry, rig_geometry};
use crate::theme::{ThemeName, resolve_color};
use crate::units::Units;

/// Unique identifier for a placed object.
pub type ObjectId = String;

/// Unique identifier for a door.
pub type DoorId = String;

/// Fresh id for a furniture object.
#[must_use]
pub fn new_object_id() -> ObjectId {
    format!("obj_{}", Uuid::new_v4().simple())
}

/// Fresh id for a door.
#[must_use]
pub fn new_door_id() -> DoorId {
    format!("door_{}", Uuid::new_v4().simple())
}

// =============================================================================
// ROOM
// =============================================================================

/// Interior dimensions of the room.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Room {
    pub width_cm: f64,
    pub depth_cm: f64,
}

impl Default for Room {
    fn default() -> Self {
        Self { width_cm: DEFAULT_ROOM_WIDTH_CM, depth_cm: DEFAULT_ROOM_DEPTH_CM }
    }
}

impl Room {
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect { min: Point::new(0.0, 0.0), max: Point::new(self.width_cm, self.depth_cm) }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.width_cm / 2.0, self.depth_cm / 2.0)
    }

    /// Length of a wall: north/south run along the width, east/west along the depth.
    #[must_use]
    pub fn wall_length(&self, wall: Wall) -> f64 {
        match wall {
            Wall::North | Wall::South => self.width_cm,
            Wall::East | Wall::West => self.depth_cm,
        }
    }
}

/// Template dimensions for the simulator object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulatorSpec {
    pub width_cm: f64,
    pub depth_cm: f64,
}

impl Default for SimulatorSpec {
    fn default() -> Self {
        Self { width_cm: DEFAULT_SIM_WIDTH_CM, depth_cm: DEFAULT_SIM_DEPTH_CM }
    }
}

// =============================================================================
// DOORS
// =============================================================================

/// Room wall a door sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wall {
    North,
    South,
    East,
    West,
}

/// A door opening on one wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Door {
    pub id: DoorId,
    pub wall: Wall,
    /// Distance from the wall's origin corner (west end for north/south, north end for east/west).
    pub offset_cm: f64,
    pub width_cm: f64,
}

impl Door {
    /// End points of the door opening in room coordinates.
    #[must_use]
    pub fn segment(&self, room: &Room) -> (Point, Point) {
        let from = self.offset_cm;
        let to = self.offset_cm + self.width_cm;
        match self.wall {
            Wall::North => (Point::new(from, 0.0), Point::new(to, 0.0)),
            Wall::South => (Point::new(from, room.depth_cm), Point::new(to, room.depth_cm)),
            Wall::West => (Point::new(0.0, from), Point::new(0.0, to)),
            Wall::East => (Point::new(room.width_cm, from), Point::new(room.width_cm, to)),
        }
    }

    /// Whether the opening runs past either end of its wall.
    #[must_use]
    pub fn exceeds_wall(&self, room: &Room) -> bool {
        self.offset_cm < 0.0 || self.offset_cm + self.width_cm > room.wall_length(self.wall)
    }

    fn overlaps(&self, other: &Door) -> bool {
        self.wall == other.wall
            && self.offset_cm < other.offset_cm + other.width_cm
            && other.offset_cm < self.offset_cm + self.width_cm
    }
}

/// A door placement the document accepts but the view should flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DoorConflict {
    /// Two doors share part of the same wall.
    Overlap(DoorId, DoorId),
    /// A door runs past the end of its wall.
    OutOfBounds(DoorId),
}

/// Report overlapping and out-of-wall doors, in collection order.
#[must_use]
pub fn door_conflicts(doors: &[Door], room: &Room) -> Vec<DoorConflict> {
    let mut conflicts = Vec::new();
    for (i, door) in doors.iter().enumerate() {
        if door.exceeds_wall(room) {
            conflicts.push(DoorConflict::OutOfBounds(door.id.clone()));
        }
        for other in &doors[i + 1..] {
            if door.overlaps(other) {
                conflicts.push(DoorConflict::Overlap(door.id.clone(), other.id.clone()));
            }
        }
    }
    conflicts
}

// =============================================================================
// PLACED OBJECTS
// =============================================================================

/// What a placed object represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    /// The distinguished simulator rig. At most one exists.
    Simulator,
    /// Any other movable object.
    #[default]
    Furniture,
}

/// A movable, rotatable rectangle on the floor plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedObject {
    pub id: ObjectId,
    #[serde(default)]
    pub name: String,
    pub width_cm: f64,
    pub depth_cm: f64,
    /// Centre x in room coordinates.
    pub x_cm: f64,
    /// Centre y in room coordinates.
    pub y_cm: f64,
    /// Clockwise rotation about the centre, in `[0, 360)`.
    #[serde(default)]
    pub rotation_deg: f64,
    #[serde(default)]
    pub color: String,
    #[serde(default, deserialize_with = "crate::lenient::or_default")]
    pub kind: ObjectKind,
    /// Palette index; when present the colour follows the active theme.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "crate::lenient::or_default")]
    pub theme_color_index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "crate::lenient::or_default")]
    pub monitor: Option<MonitorAttachment>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "crate::lenient::or_default")]
    pub placement_template: Option<PlacementTemplate>,
}

impl PlacedObject {
    /// A furniture object centred at `center` with an explicit colour.
    #[must_use]
    pub fn furniture(id: ObjectId, name: &str, width_cm: f64, depth_cm: f64, center: Point, color: &str) -> Self {
        Self {
            id,
            name: name.to_owned(),
            width_cm,
            depth_cm,
            x_cm: center.x,
            y_cm: center.y,
            rotation_deg: 0.0,
            color: color.to_owned(),
            kind: ObjectKind::Furniture,
            theme_color_index: None,
            monitor: None,
            placement_template: None,
        }
    }

    /// The simulator object for `spec`, centred in `room`.
    #[must_use]
    pub fn simulator(spec: &SimulatorSpec, room: &Room) -> Self {
        Self {
            kind: ObjectKind::Simulator,
            ..Self::furniture(
                SIMULATOR_ID.to_owned(),
                SIMULATOR_NAME,
                spec.width_cm,
                spec.depth_cm,
                room.center(),
                SIMULATOR_COLOR,
            )
        }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x_cm, self.y_cm)
    }

    /// Footprint corners after rotation, NW/NE/SE/SW.
    #[must_use]
    pub fn corners(&self) -> [Point; 4] {
        rect_corners(self.center(), self.width_cm, self.depth_cm, self.rotation_deg)
    }

    /// Axis-aligned footprint ignoring rotation. This is the box kept inside the room.
    #[must_use]
    pub fn unrotated_bounds(&self) -> Rect {
        let hw = self.width_cm / 2.0;
        let hd = self.depth_cm / 2.0;
        Rect {
            min: Point::new(self.x_cm - hw, self.y_cm - hd),
            max: Point::new(self.x_cm + hw, self.y_cm + hd),
        }
    }

    /// Axis-aligned box around the rotated footprint.
    #[must_use]
    pub fn rotated_bounds(&self) -> Rect {
        bounding_box(&self.corners()).unwrap_or_else(|| self.unrotated_bounds())
    }

    /// Nearest centre to `target` that keeps the unrotated footprint inside `room`.
    #[must_use]
    pub fn clamp_center(&self, target: Point, room: &Room) -> Point {
        let hw = self.width_cm / 2.0;
        let hd = self.depth_cm / 2.0;
        Point::new(clamp(target.x, hw, room.width_cm - hw), clamp(target.y, hd, room.depth_cm - hd))
    }

    /// Colour to draw with under `theme`. A palette index wins over the stored colour.
    #[must_use]
    pub fn display_color(&self, theme: Option<ThemeName>) -> &str {
        match self.theme_color_index {
            Some(index) => resolve_color(theme, index),
            None => &self.color,
        }
    }

    /// Rig placement template, falling back to the name for untagged objects.
    #[must_use]
    pub fn template(&self) -> PlacementTemplate {
        self.placement_template
            .unwrap_or_else(|| PlacementTemplate::from_name(&self.name))
    }

    /// Monitor rig geometry in room coordinates, if this object carries a rig.
    #[must_use]
    pub fn rig(&self) -> Option<RigGeometry> {
        let monitor = self.monitor.as_ref()?;
        let local = rig_geometry(monitor, self.width_cm, self.template())?;
        Some(local.to_room(self.center(), self.width_cm, self.depth_cm, self.rotation_deg))
    }

    /// Merge `partial` into this object.
    ///
    /// Rotation is wrapped into `[0, 360)`. Setting a palette index re-resolves
    /// the colour under `theme`; setting an explicit colour without an index
    /// detaches the object from the palette.
    pub fn apply_partial(&mut self, partial: &PartialObject, theme: Option<ThemeName>) {
        if let Some(ref name) = partial.name {
            self.name.clone_from(name);
        }
        if let Some(w) = partial.width_cm {
            self.width_cm = w;
        }
        if let Some(d) = partial.depth_cm {
            self.depth_cm = d;
        }
        if let Some(x) = partial.x_cm {
            self.x_cm = x;
        }
        if let Some(y) = partial.y_cm {
            self.y_cm = y;
        }
        if let Some(r) = partial.rotation_deg {
            self.rotation_deg = normalize_degrees_360(r);
        }
        if let Some(ref monitor) = partial.monitor {
            self.monitor = Some(monitor.clone());
        }
        if let Some(template) = partial.placement_template {
            self.placement_template = Some(template);
        }
        match (partial.theme_color_index, &partial.color) {
            (Some(index), _) => {
                self.theme_color_index = Some(index);
                self.color = resolve_color(theme, index).to_owned();
            }
            (None, Some(color)) => {
                self.theme_color_index = None;
                self.color.clone_from(color);
            }
            (None, None) => {}
        }
    }
}

/// Sparse update for a placed object. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialObject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width_cm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth_cm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_cm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_cm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_deg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_color_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor: Option<MonitorAttachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement_template: Option<PlacementTemplate>,
}

// =============================================================================
// CANVAS & SELECTION
// =============================================================================

/// Viewport state persisted with the document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CanvasState {
    /// Zoom: pixels per centimeter.
    pub px_per_cm: f64,
    pub pan_x: f64,
    pub pan_y: f64,
    /// Grid size in centimeters; 0 disables snapping.
    pub snap_cm: f64,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self { px_per_cm: DEFAULT_PX_PER_CM, pan_x: 0.0, pan_y: 0.0, snap_cm: DEFAULT_SNAP_CM }
    }
}

impl CanvasState {
    #[must_use]
    pub fn camera(&self) -> Camera {
        Camera { px_per_cm: self.px_per_cm, pan_x: self.pan_x, pan_y: self.pan_y }
    }
}

/// What is currently selected. Objects and doors are never selected together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SelectionFields", into = "SelectionFields")]
pub enum Selection {
    #[default]
    None,
    Object(ObjectId),
    Door(DoorId),
}

impl Selection {
    #[must_use]
    pub fn object_id(&self) -> Option<&str> {
        match self {
            Self::Object(id) => Some(id),
            _ => None,
        }
    }

    #[must_use]
    pub fn door_id(&self) -> Option<&str> {
        match self {
            Self::Door(id) => Some(id),
            _ => None,
        }
    }
}

/// Wire form of [`Selection`]: the two nullable id fields of the document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct SelectionFields {
    #[serde(deserialize_with = "crate::lenient::or_default")]
    selected_object_id: Option<ObjectId>,
    #[serde(deserialize_with = "crate::lenient::or_default")]
    selected_door_id: Option<DoorId>,
}

impl From<SelectionFields> for Selection {
    fn from(fields: SelectionFields) -> Self {
        match (fields.selected_object_id, fields.selected_door_id) {
            (Some(id), _) => Self::Object(id),
            (None, Some(id)) => Self::Door(id),
            (None, None) => Self::None,
        }
    }
}

impl From<Selection> for SelectionFields {
    fn from(selection: Selection) -> Self {
        match selection {
            Selection::None => Self::default(),
            Selection::Object(id) => Self { selected_object_id: Some(id), selected_door_id: None },
            Selection::Door(id) => Self { selected_object_id: None, selected_door_id: Some(id) },
        }
    }
}

// =============================================================================
// DOCUMENT
// =============================================================================

/// The complete layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    #[serde(deserialize_with = "crate::lenient::or_default")]
    pub units: Units,
    /// Active palette. Unknown names load as `None` and draw with the fallback palette.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "crate::lenient::or_default")]
    pub theme: Option<ThemeName>,
    #[serde(deserialize_with = "crate::lenient::or_default")]
    pub room: Room,
    #[serde(deserialize_with = "crate::lenient::or_default")]
    pub simulator: SimulatorSpec,
    #[serde(deserialize_with = "crate::lenient::items")]
    pub doors: Vec<Door>,
    #[serde(deserialize_with = "crate::lenient::items")]
    pub objects: Vec<PlacedObject>,
    #[serde(flatten)]
    pub selection: Selection,
    #[serde(deserialize_with = "crate::lenient::or_default")]
    pub canvas: CanvasState,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "crate::lenient::or_default")]
    pub show_dimensions: Option<bool>,
}

impl Document {
    #[must_use]
    pub fn object(&self, id: &str) -> Option<&PlacedObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    #[must_use]
    pub fn door(&self, id: &str) -> Option<&Door> {
        self.doors.iter().find(|d| d.id == id)
    }

    /// The simulator object, if one exists.
    #[must_use]
    pub fn simulator_object(&self) -> Option<&PlacedObject> {
        self.objects.iter().find(|o| o.kind == ObjectKind::Simulator)
    }

    #[must_use]
    pub fn selected_object(&self) -> Option<&PlacedObject> {
        self.selection.object_id().and_then(|id| self.object(id))
    }

    #[must_use]
    pub fn selected_door(&self) -> Option<&Door> {
        self.selection.door_id().and_then(|id| self.door(id))
    }

    #[must_use]
    pub fn show_dimensions(&self) -> bool {
        self.show_dimensions.unwrap_or(false)
    }

    /// Colour to draw `object` with under the active theme.
    #[must_use]
    pub fn object_color<'a>(&self, object: &'a PlacedObject) -> &'a str {
        object.display_color(self.theme)
    }
}
