use super::*;

#[test]
fn default_is_idle() {
    assert!(InputState::default().is_idle());
    assert_eq!(InputState::default(), InputState::Idle);
}

#[test]
fn panning_is_not_idle() {
    let state = InputState::Panning { anchor: Point::new(10.0, 20.0) };
    assert!(!state.is_idle());
    assert!(state.dragging_id().is_none());
}

#[test]
fn dragging_exposes_id() {
    let state = InputState::DraggingObject {
        id: "obj_1".into(),
        start_x_cm: 50.0,
        start_y_cm: 50.0,
        pointer_start: Point::new(0.0, 0.0),
    };
    assert_eq!(state.dragging_id(), Some("obj_1"));
}

#[test]
fn buttons_are_distinct() {
    assert_ne!(Button::Primary, Button::Middle);
    assert_ne!(Button::Primary, Button::Secondary);
}
