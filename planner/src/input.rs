//! Input model: pointer buttons, wheel deltas and the gesture state machine.
//!
//! `InputState` is the gesture being tracked between pointer-down and
//! pointer-up. It is transient editor state, never part of the document, and
//! carries whatever the controller needs to turn later pointer moves into
//! document actions.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::doc::ObjectId;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button.
    Middle,
    /// Right mouse button.
    Secondary,
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down, zooms out).
    pub dy: f64,
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Dragging the empty floor to move the view.
    Panning {
        /// Pointer position minus the pan at gesture start.
        anchor: Point,
    },
    /// Moving an object with the pointer.
    DraggingObject {
        id: ObjectId,
        /// Object centre at the start of the drag.
        start_x_cm: f64,
        start_y_cm: f64,
        /// Screen position of the pointer at the start of the drag.
        pointer_start: Point,
    },
}

impl InputState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Id of the object being dragged, if any.
    #[must_use]
    pub fn dragging_id(&self) -> Option<&str> {
        match self {
            Self::DraggingObject { id, .. } => Some(id),
            _ => None,
        }
    }
}
