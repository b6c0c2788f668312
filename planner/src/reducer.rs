//! Closed action set and the document reducer.
//!
//! Every change to a [`Document`] goes through [`reduce`]. The reducer is pure
//! and total: any action applied to any document yields a document, and
//! actions naming unknown ids leave it unchanged.
//!
//! Actions serialise as `{"type": "SET_ROOM", "widthCm": ..., ...}`, so they
//! can be fed in from JSON by a host or the command line.

#[cfg(test)]
#[path = "reducer_test.rs"]
mod reducer_test;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::doc::{Document, Door, DoorId, ObjectId, ObjectKind, PartialObject, PlacedObject, Selection, SimulatorSpec};
use crate::geometry::normalize_degrees_360;
use crate::theme::{ThemeName, resolve_color};
use crate::units::Units;

/// Every mutation the document accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE", rename_all_fields = "camelCase")]
pub enum Action {
    /// Replace the whole document.
    Load { state: Box<Document> },
    SetUnits { units: Units },
    /// Switch palette and re-resolve every palette-bound colour.
    SetTheme { theme: ThemeName },
    /// Replace the room. Objects are not re-clamped.
    SetRoom { width_cm: f64, depth_cm: f64 },
    /// Update the simulator template, creating the simulator object if missing.
    SetSimulator { width_cm: f64, depth_cm: f64 },
    /// Merge the present canvas fields.
    SetCanvas {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        px_per_cm: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pan_x: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pan_y: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        snap_cm: Option<f64>,
    },
    /// Append an object and select it.
    AddObject { object: PlacedObject },
    UpdateObject { id: ObjectId, updates: PartialObject },
    DeleteObject { id: ObjectId },
    SelectObject {
        #[serde(default)]
        id: Option<ObjectId>,
    },
    SelectDoor {
        #[serde(default)]
        id: Option<DoorId>,
    },
    /// Replace the door collection, preserving the given order.
    SetDoors { doors: Vec<Door> },
    ClearSelection,
    SetShowDimensions { show: bool },
}

impl Action {
    /// Wire name of the action, for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Load { .. } => "LOAD",
            Self::SetUnits { .. } => "SET_UNITS",
            Self::SetTheme { .. } => "SET_THEME",
            Self::SetRoom { .. } => "SET_ROOM",
            Self::SetSimulator { .. } => "SET_SIMULATOR",
            Self::SetCanvas { .. } => "SET_CANVAS",
            Self::AddObject { .. } => "ADD_OBJECT",
            Self::UpdateObject { .. } => "UPDATE_OBJECT",
            Self::DeleteObject { .. } => "DELETE_OBJECT",
            Self::SelectObject { .. } => "SELECT_OBJECT",
            Self::SelectDoor { .. } => "SELECT_DOOR",
            Self::SetDoors { .. } => "SET_DOORS",
            Self::ClearSelection => "CLEAR_SELECTION",
            Self::SetShowDimensions { .. } => "SET_SHOW_DIMENSIONS",
        }
    }
}

/// Apply `action` to `doc`, returning the next document.
#[must_use]
pub fn reduce(doc: &Document, action: Action) -> Document {
    let mut next = doc.clone();
    apply(&mut next, action);
    next
}

/// In-place form of [`reduce`].
pub fn apply(doc: &mut Document, action: Action) {
    debug!(action = action.name(), "reduce");
    match action {
        Action::Load { state } => {
            *doc = *state;
            for object in &mut doc.objects {
                object.rotation_deg = normalize_degrees_360(object.rotation_deg);
            }
        }
        Action::SetUnits { units } => doc.units = units,
        Action::SetTheme { theme } => {
            doc.theme = Some(theme);
            for object in &mut doc.objects {
                if let Some(index) = object.theme_color_index {
                    object.color = resolve_color(doc.theme, index).to_owned();
                }
            }
        }
        Action::SetRoom { width_cm, depth_cm } => {
            doc.room.width_cm = width_cm;
            doc.room.depth_cm = depth_cm;
        }
        Action::SetSimulator { width_cm, depth_cm } => {
            doc.simulator = SimulatorSpec { width_cm, depth_cm };
            ensure_simulator(doc);
        }
        Action::SetCanvas { px_per_cm, pan_x, pan_y, snap_cm } => {
            let canvas = &mut doc.canvas;
            canvas.px_per_cm = px_per_cm.unwrap_or(canvas.px_per_cm);
            canvas.pan_x = pan_x.unwrap_or(canvas.pan_x);
            canvas.pan_y = pan_y.unwrap_or(canvas.pan_y);
            canvas.snap_cm = snap_cm.unwrap_or(canvas.snap_cm);
        }
        Action::AddObject { mut object } => {
            object.rotation_deg = normalize_degrees_360(object.rotation_deg);
            doc.selection = Selection::Object(object.id.clone());
            doc.objects.push(object);
        }
        Action::UpdateObject { id, updates } => {
            let theme = doc.theme;
            match doc.objects.iter_mut().find(|o| o.id == id) {
                Some(object) => object.apply_partial(&updates, theme),
                None => debug!(%id, "update for unknown object ignored"),
            }
        }
        Action::DeleteObject { id } => {
            doc.objects.retain(|o| o.id != id);
            if doc.selection.object_id() == Some(id.as_str()) {
                doc.selection = Selection::None;
            }
        }
        Action::SelectObject { id } => match id {
            Some(id) => doc.selection = Selection::Object(id),
            None => {
                if doc.selection.object_id().is_some() {
                    doc.selection = Selection::None;
                }
            }
        },
        Action::SelectDoor { id } => match id {
            Some(id) => doc.selection = Selection::Door(id),
            None => {
                if doc.selection.door_id().is_some() {
                    doc.selection = Selection::None;
                }
            }
        },
        Action::SetDoors { doors } => {
            doc.doors = doors;
            let dangling = doc.selection.door_id().is_some_and(|id| doc.door(id).is_none());
            if dangling {
                doc.selection = Selection::None;
            }
        }
        Action::ClearSelection => doc.selection = Selection::None,
        Action::SetShowDimensions { show } => doc.show_dimensions = Some(show),
    }
}

/// Make sure exactly one simulator object exists and matches the template.
///
/// A missing simulator is created centred in the room. An existing one is
/// resized in place and keeps its position, rotation and identity. Any further
/// simulators are demoted to furniture.
pub fn ensure_simulator(doc: &mut Document) {
    let spec = doc.simulator;
    if !doc.objects.iter().any(|o| o.kind == ObjectKind::Simulator) {
        debug!("creating simulator object");
        doc.objects.push(PlacedObject::simulator(&spec, &doc.room));
        return;
    }
    let mut sims = doc.objects.iter_mut().filter(|o| o.kind == ObjectKind::Simulator);
    if let Some(sim) = sims.next() {
        sim.width_cm = spec.width_cm;
        sim.depth_cm = spec.depth_cm;
    }
    for extra in sims {
        debug!(id = %extra.id, "demoting extra simulator to furniture");
        extra.kind = ObjectKind::Furniture;
    }
}
