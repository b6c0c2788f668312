//! Shared numeric constants for the planner crate.

// ── Document defaults ───────────────────────────────────────────

/// Default room width in centimeters.
pub const DEFAULT_ROOM_WIDTH_CM: f64 = 400.0;

/// Default room depth in centimeters.
pub const DEFAULT_ROOM_DEPTH_CM: f64 = 300.0;

/// Default simulator template width in centimeters.
pub const DEFAULT_SIM_WIDTH_CM: f64 = 160.0;

/// Default simulator template depth in centimeters.
pub const DEFAULT_SIM_DEPTH_CM: f64 = 60.0;

/// Reserved id of the single simulator object.
pub const SIMULATOR_ID: &str = "simulator";

/// Display name given to an auto-created simulator.
pub const SIMULATOR_NAME: &str = "Racing Simulator";

/// Fill colour given to an auto-created simulator.
pub const SIMULATOR_COLOR: &str = "#9EABA2";

/// Fallback colour for objects whose colour cannot be parsed.
pub const FALLBACK_OBJECT_COLOR: &str = "#E8B298";

// ── Canvas ──────────────────────────────────────────────────────

/// Default zoom: pixels per centimeter.
pub const DEFAULT_PX_PER_CM: f64 = 1.5;

/// Default snap grid in centimeters.
pub const DEFAULT_SNAP_CM: f64 = 5.0;

/// Lower zoom bound.
pub const MIN_PX_PER_CM: f64 = 0.5;

/// Upper zoom bound.
pub const MAX_PX_PER_CM: f64 = 4.0;

/// Largest snap grid accepted from controls, in centimeters.
pub const MAX_SNAP_CM: f64 = 50.0;

/// Minimum on-screen spacing between grid lines.
pub const MIN_GRID_STEP_PX: f64 = 8.0;

/// Multiplicative zoom change per 100px of wheel travel.
pub const WHEEL_ZOOM_STEP: f64 = 1.1;

// ── Interaction ─────────────────────────────────────────────────

/// Rotation applied by one click on a rotate control.
pub const ROTATE_STEP_DEG: f64 = 15.0;

/// Radius of the rotate handle drawn at a selected object's corner.
pub const ROTATE_HANDLE_RADIUS_PX: f64 = 10.0;

/// Inset of the rotate handle centre from the object's NE corner.
pub const ROTATE_HANDLE_INSET_PX: f64 = 10.0;

/// Half the width of the invisible stroke used to pick doors.
pub const DOOR_HIT_SLOP_PX: f64 = 8.0;

// ── Units ───────────────────────────────────────────────────────

/// Centimeters per inch.
pub const CM_PER_INCH: f64 = 2.54;

// ── Monitor rigs ────────────────────────────────────────────────

/// Bezel gap between adjacent panels of a triple rig.
pub const TRIPLE_GAP_CM: f64 = 2.0;

/// Toe-in angle of the side panels of a triple rig.
pub const TRIPLE_TOE_IN_DEG: f64 = 60.0;

/// Stand depth added to a triple rig's panel depth.
pub const TRIPLE_STAND_DEPTH_CM: f64 = 10.0;

/// Rig offset from the simulator's front edge for the PRO AM template.
pub const PRO_AM_RIG_OFFSET_CM: f64 = 20.0;

/// Rig offset from the simulator's front edge for the PRO template.
pub const PRO_RIG_OFFSET_CM: f64 = 30.0;
