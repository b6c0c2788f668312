//! Geometric editing engine for the simspace room planner.
//!
//! The crate owns everything between raw pointer input and the pixels drawn by
//! a host view: the canonical layout document and its reducer, the cm/pixel
//! camera, rotation-aware hit testing, the drag/pan/snap controller, and the
//! monitor-rig geometry for the simulator object. The host is responsible only
//! for painting what the engine derives and for wiring its input events into
//! [`engine::Editor`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Interaction controller and the [`engine::Editor`] orchestrator |
//! | [`doc`] | Layout document, room/door/object types, selection |
//! | [`reducer`] | Closed action set and the pure document reducer |
//! | [`camera`] | cm ↔ pixel transform, wheel zoom, grid lines |
//! | [`geometry`] | Clamping, snapping, rotation, rectangle corners |
//! | [`units`] | Metric/imperial display conversion |
//! | [`theme`] | Theme palettes and colour normalisation |
//! | [`monitor`] | Monitor rig presets and panel layout |
//! | [`dimensions`] | Dimension annotations for the view layer |
//! | [`input`] | Pointer event types and the gesture state machine |
//! | [`hit`] | Hit-testing against objects, handles and doors |
//! | [`store`] | Persistence port and its memory/file implementations |
//! | [`codec`] | Document export/import |
//! | [`consts`] | Shared numeric constants and defaults |

pub mod camera;
pub mod codec;
pub mod consts;
pub mod dimensions;
pub mod doc;
pub mod engine;
pub mod geometry;
pub mod hit;
pub mod input;
mod lenient;
pub mod monitor;
pub mod reducer;
pub mod store;
pub mod theme;
pub mod units;
