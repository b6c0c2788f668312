//! Interaction controller and editor orchestration.
//!
//! [`EngineCore`] turns pointer and wheel events into reducer [`Action`]s. It
//! reads the document but never mutates it, so it can be driven and tested
//! without a store or a view. [`Editor`] owns the document, the controller and
//! a [`Store`]; it applies every action through the reducer and persists the
//! result.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use tracing::{debug, info, warn};

use crate::camera::Point;
use crate::codec::{DocumentError, export_document, import_document};
use crate::consts::{FALLBACK_OBJECT_COLOR, MAX_PX_PER_CM, MAX_SNAP_CM, MIN_PX_PER_CM, ROTATE_STEP_DEG, WHEEL_ZOOM_STEP};
use crate::doc::{
    Door, DoorConflict, DoorId, Document, ObjectId, ObjectKind, PartialObject, PlacedObject, Wall, door_conflicts,
    new_door_id, new_object_id,
};
use crate::geometry::{normalize_degrees_360, snap_to_grid_cm};
use crate::hit::{Hit, hit_test};
use crate::input::{Button, InputState, WheelDelta};
use crate::monitor::{MonitorError, PlacementTemplate, attachment_for_key};
use crate::reducer::{Action, apply, ensure_simulator};
use crate::store::Store;
use crate::theme::normalize_hex_color;

/// Error from an editor command.
#[derive(Debug, thiserror::Error)]
pub enum EditError {
    #[error("nothing is selected")]
    NothingSelected,
    #[error("the simulator cannot be deleted")]
    SimulatorLocked,
    #[error("the layout already has a simulator")]
    SimulatorExists,
    #[error("object id already in use: {0}")]
    DuplicateObject(ObjectId),
    #[error("the layout has no simulator")]
    NoSimulator,
    #[error("unknown door: {0}")]
    UnknownDoor(DoorId),
    #[error(transparent)]
    Monitor(#[from] MonitorError),
    #[error(transparent)]
    Document(#[from] DocumentError),
}

// =============================================================================
// CONTROLLER
// =============================================================================

/// Gesture controller. Holds only transient input state.
#[derive(Debug, Clone, Default)]
pub struct EngineCore {
    pub input: InputState,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a gesture. Any gesture still in progress is dropped first.
    pub fn on_pointer_down(&mut self, doc: &Document, screen_pt: Point, button: Button) -> Vec<Action> {
        self.input = InputState::Idle;
        if button != Button::Primary {
            return Vec::new();
        }

        match hit_test(screen_pt, doc, &doc.canvas.camera()) {
            Some(Hit::RotateHandle(id)) => rotate_action(doc, &id, ROTATE_STEP_DEG).into_iter().collect(),
            Some(Hit::Object(id)) => {
                let Some(object) = doc.object(&id) else {
                    return Vec::new();
                };
                self.input = InputState::DraggingObject {
                    id: id.clone(),
                    start_x_cm: object.x_cm,
                    start_y_cm: object.y_cm,
                    pointer_start: screen_pt,
                };
                vec![Action::SelectObject { id: Some(id) }]
            }
            Some(Hit::Door(id)) => vec![Action::SelectDoor { id: Some(id) }],
            None => {
                self.input = InputState::Panning {
                    anchor: Point::new(screen_pt.x - doc.canvas.pan_x, screen_pt.y - doc.canvas.pan_y),
                };
                vec![Action::ClearSelection]
            }
        }
    }

    /// Continue the active gesture.
    pub fn on_pointer_move(&mut self, doc: &Document, screen_pt: Point) -> Vec<Action> {
        match &self.input {
            InputState::Idle => Vec::new(),
            InputState::Panning { anchor } => vec![Action::SetCanvas {
                px_per_cm: None,
                pan_x: Some(screen_pt.x - anchor.x),
                pan_y: Some(screen_pt.y - anchor.y),
                snap_cm: None,
            }],
            InputState::DraggingObject { id, start_x_cm, start_y_cm, pointer_start } => {
                let Some(object) = doc.object(id) else {
                    return Vec::new();
                };
                let camera = doc.canvas.camera();
                let snap = doc.canvas.snap_cm;
                let mut target = Point::new(
                    start_x_cm + camera.px_dist_to_cm(screen_pt.x - pointer_start.x),
                    start_y_cm + camera.px_dist_to_cm(screen_pt.y - pointer_start.y),
                );
                if snap > 0.0 {
                    target = Point::new(snap_to_grid_cm(target.x, snap), snap_to_grid_cm(target.y, snap));
                }
                let next = object.clamp_center(target, &doc.room);
                vec![Action::UpdateObject {
                    id: id.clone(),
                    updates: PartialObject { x_cm: Some(next.x), y_cm: Some(next.y), ..PartialObject::default() },
                }]
            }
        }
    }

    /// End the active gesture. Releasing never produces document changes.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.input = InputState::Idle;
        Vec::new()
    }

    /// Zoom about the pointer: scrolling up zooms in, down zooms out.
    pub fn on_wheel(&mut self, doc: &Document, screen_pt: Point, delta: WheelDelta) -> Vec<Action> {
        let factor = if delta.dy < 0.0 {
            WHEEL_ZOOM_STEP
        } else if delta.dy > 0.0 {
            1.0 / WHEEL_ZOOM_STEP
        } else {
            return Vec::new();
        };
        let camera = doc.canvas.camera().zoom_at(screen_pt, doc.canvas.px_per_cm * factor);
        vec![Action::SetCanvas {
            px_per_cm: Some(camera.px_per_cm),
            pan_x: Some(camera.pan_x),
            pan_y: Some(camera.pan_y),
            snap_cm: None,
        }]
    }
}

fn rotate_action(doc: &Document, id: &str, amount_deg: f64) -> Option<Action> {
    let object = doc.object(id)?;
    Some(Action::UpdateObject {
        id: object.id.clone(),
        updates: PartialObject {
            rotation_deg: Some(normalize_degrees_360(object.rotation_deg + amount_deg)),
            ..PartialObject::default()
        },
    })
}

// =============================================================================
// EDITOR
// =============================================================================

/// Document owner: applies actions, runs the controller and persists changes.
pub struct Editor<S: Store> {
    doc: Document,
    core: EngineCore,
    store: S,
}

impl<S: Store> Editor<S> {
    /// Load the saved layout from `store`, or start from defaults. Either way
    /// the layout gets its simulator.
    ///
    /// A failing store is logged and treated like an empty one. Opening never
    /// writes: whatever is stored stays as it is until the first change.
    #[must_use]
    pub fn open(store: S) -> Self {
        let saved = match store.load() {
            Ok(saved) => saved,
            Err(e) => {
                warn!(error = %e, "failed to load saved layout; starting fresh");
                None
            }
        };
        let mut doc = Document::default();
        if let Some(saved) = saved {
            info!(objects = saved.objects.len(), doors = saved.doors.len(), "loaded saved layout");
            apply(&mut doc, Action::Load { state: Box::new(saved) });
        }
        ensure_simulator(&mut doc);
        let editor = Self { doc, core: EngineCore::new(), store };
        editor.report_door_conflicts();
        editor
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.doc
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The active gesture.
    #[must_use]
    pub fn input(&self) -> &InputState {
        &self.core.input
    }

    /// Apply an action from outside the editor, such as one parsed from JSON.
    ///
    /// Loaded documents get their simulator, and actions that would delete the
    /// simulator or add another one are refused.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::SimulatorLocked`] for deleting the simulator,
    /// [`EditError::SimulatorExists`] for adding a simulator and
    /// [`EditError::DuplicateObject`] for adding an object under a taken id.
    pub fn submit(&mut self, action: Action) -> Result<(), EditError> {
        let action = match action {
            Action::DeleteObject { id } if self.is_simulator(&id) => return Err(EditError::SimulatorLocked),
            Action::AddObject { object } if object.kind == ObjectKind::Simulator => {
                return Err(EditError::SimulatorExists);
            }
            Action::AddObject { object } if self.doc.object(&object.id).is_some() => {
                return Err(EditError::DuplicateObject(object.id));
            }
            Action::Load { mut state } => {
                ensure_simulator(&mut state);
                Action::Load { state }
            }
            other => other,
        };
        self.dispatch(action);
        Ok(())
    }

    /// Reduce `action` into the document and save if anything changed.
    ///
    /// No simulator checks are made here; actions from outside the editor go
    /// through [`Editor::submit`]. Save failures are logged and otherwise
    /// ignored; the in-memory document stays authoritative.
    pub fn dispatch(&mut self, action: Action) {
        let checks_doors = matches!(action, Action::Load { .. } | Action::SetRoom { .. } | Action::SetDoors { .. });
        let before = self.doc.clone();
        apply(&mut self.doc, action);
        if self.doc == before {
            return;
        }
        if checks_doors {
            self.report_door_conflicts();
        }
        if let Err(e) = self.store.save(&self.doc) {
            warn!(error = %e, "failed to save layout");
        }
    }

    fn dispatch_all(&mut self, actions: Vec<Action>) {
        for action in actions {
            self.dispatch(action);
        }
    }

    fn report_door_conflicts(&self) {
        for conflict in door_conflicts(&self.doc.doors, &self.doc.room) {
            match conflict {
                DoorConflict::Overlap(a, b) => warn!(%a, %b, "doors overlap on the same wall"),
                DoorConflict::OutOfBounds(id) => warn!(%id, "door extends past its wall"),
            }
        }
    }

    // --- Pointer input ---

    pub fn pointer_down(&mut self, screen_pt: Point, button: Button) {
        let actions = self.core.on_pointer_down(&self.doc, screen_pt, button);
        self.dispatch_all(actions);
    }

    pub fn pointer_move(&mut self, screen_pt: Point) {
        let actions = self.core.on_pointer_move(&self.doc, screen_pt);
        self.dispatch_all(actions);
    }

    pub fn pointer_up(&mut self) {
        let actions = self.core.on_pointer_up();
        self.dispatch_all(actions);
    }

    pub fn wheel(&mut self, screen_pt: Point, delta: WheelDelta) {
        let actions = self.core.on_wheel(&self.doc, screen_pt, delta);
        self.dispatch_all(actions);
    }

    // --- Commands ---

    /// Add a furniture object centred in the room and select it.
    pub fn add_object(&mut self, name: &str, width_cm: f64, depth_cm: f64, color: &str) -> ObjectId {
        let id = new_object_id();
        let name = if name.trim().is_empty() { "Object" } else { name };
        let color = normalize_hex_color(color, FALLBACK_OBJECT_COLOR);
        let object = PlacedObject::furniture(id.clone(), name, width_cm, depth_cm, self.doc.room.center(), &color);
        self.dispatch(Action::AddObject { object });
        id
    }

    /// Append a door. Overlapping or out-of-wall doors are kept and logged.
    pub fn add_door(&mut self, wall: Wall, offset_cm: f64, width_cm: f64) -> DoorId {
        let id = new_door_id();
        let mut doors = self.doc.doors.clone();
        doors.push(Door { id: id.clone(), wall, offset_cm, width_cm });
        self.dispatch(Action::SetDoors { doors });
        id
    }

    /// Remove a door, keeping the order of the rest.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::UnknownDoor`] if no door has `id`.
    pub fn delete_door(&mut self, id: &str) -> Result<(), EditError> {
        if self.doc.door(id).is_none() {
            return Err(EditError::UnknownDoor(id.to_owned()));
        }
        let doors = self.doc.doors.iter().filter(|d| d.id != id).cloned().collect();
        self.dispatch(Action::SetDoors { doors });
        Ok(())
    }

    /// Delete the selected object or door. The simulator is never deleted.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::NothingSelected`] with no selection and
    /// [`EditError::SimulatorLocked`] when the simulator is selected.
    pub fn delete_selection(&mut self) -> Result<(), EditError> {
        if let Some(id) = self.doc.selection.door_id() {
            let id = id.to_owned();
            return self.delete_door(&id);
        }
        let id = self.doc.selected_object().ok_or(EditError::NothingSelected)?.id.clone();
        self.submit(Action::DeleteObject { id })
    }

    /// Rotate the selected object by `amount_deg`.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::NothingSelected`] if no object is selected.
    pub fn rotate_selected(&mut self, amount_deg: f64) -> Result<(), EditError> {
        let id = self.doc.selection.object_id().ok_or(EditError::NothingSelected)?;
        let action = rotate_action(&self.doc, id, amount_deg).ok_or(EditError::NothingSelected)?;
        self.dispatch(action);
        Ok(())
    }

    /// Attach the monitor preset named `key` to the simulator.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::Monitor`] for an unknown key, leaving the document
    /// untouched, and [`EditError::NoSimulator`] if there is no simulator.
    pub fn set_monitor_preset(&mut self, key: &str) -> Result<(), EditError> {
        let monitor = attachment_for_key(key)?;
        let id = self.simulator_id()?;
        debug!(%key, "attaching monitor preset");
        self.dispatch(Action::UpdateObject {
            id,
            updates: PartialObject { monitor: Some(monitor), ..PartialObject::default() },
        });
        Ok(())
    }

    /// Tag the simulator with a placement template, renaming and recolouring it to match.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::NoSimulator`] if there is no simulator.
    pub fn apply_template(&mut self, template: PlacementTemplate) -> Result<(), EditError> {
        let id = self.simulator_id()?;
        self.dispatch(Action::UpdateObject {
            id,
            updates: PartialObject {
                name: Some(template.display_name().to_owned()),
                placement_template: Some(template),
                theme_color_index: template.color_index(),
                ..PartialObject::default()
            },
        });
        Ok(())
    }

    /// Set the zoom directly, clamped to the supported range.
    pub fn set_zoom(&mut self, px_per_cm: f64) {
        let zoom = px_per_cm.clamp(MIN_PX_PER_CM, MAX_PX_PER_CM);
        self.dispatch(Action::SetCanvas { px_per_cm: Some(zoom), pan_x: None, pan_y: None, snap_cm: None });
    }

    /// Set the snap grid; 0 disables snapping.
    pub fn set_snap(&mut self, snap_cm: f64) {
        let snap = snap_cm.clamp(0.0, MAX_SNAP_CM);
        self.dispatch(Action::SetCanvas { px_per_cm: None, pan_x: None, pan_y: None, snap_cm: Some(snap) });
    }

    /// Replace the layout with defaults plus a fresh simulator.
    pub fn reset(&mut self) {
        let mut doc = Document::default();
        ensure_simulator(&mut doc);
        self.dispatch(Action::Load { state: Box::new(doc) });
    }

    // --- Interchange ---

    /// The document as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::Document`] if encoding fails.
    pub fn export(&self) -> Result<String, EditError> {
        Ok(export_document(&self.doc)?)
    }

    /// Replace the document with one parsed from `text`.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::Document`] for text that is not a layout; the
    /// current document is left untouched.
    pub fn import(&mut self, text: &str) -> Result<(), EditError> {
        let doc = import_document(text)?;
        self.submit(Action::Load { state: Box::new(doc) })
    }

    fn is_simulator(&self, id: &str) -> bool {
        self.doc.object(id).is_some_and(|o| o.kind == ObjectKind::Simulator)
    }

    fn simulator_id(&self) -> Result<ObjectId, EditError> {
        self.doc
            .simulator_object()
            .map(|o| o.id.clone())
            .ok_or(EditError::NoSimulator)
    }
}
