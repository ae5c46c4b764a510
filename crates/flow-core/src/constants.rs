// Engine fixed values and authoritative tuning defaults.
//
// `FlowConfig::default()` mirrors every `DEFAULT_*` constant here, and the
// `*_MIN`/`*_MAX` pairs feed the bounds table exposed to external editors.

/// Number of items in a browsing session.
pub const SLIDE_COUNT: usize = 15;

/// Distance between adjacent slots along the principal axis.
pub const SPACING: f64 = 1.0;

/// Upper clamp on one frame's delta time; slower frames integrate as 1/30 s.
pub const MAX_FRAME_DT: f64 = 1.0 / 30.0;

/// Fixed number of integration substeps per frame.
pub const SUBSTEPS: u32 = 10;

/// Per-frame spin increment for the focused item, in degrees.
pub const SPIN_STEP_DEG: f64 = 1.0;

// Field shape: axis displacement
pub const DEFAULT_EDGE_SLOPE: f64 = 0.3; // spacing slope between both ends
pub const EDGE_SLOPE_MIN: f64 = 0.0;
pub const EDGE_SLOPE_MAX: f64 = 1.0;

pub const DEFAULT_POSITION_ROUGHNESS: f64 = 0.7; // width of the middle area
pub const POSITION_ROUGHNESS_MIN: f64 = 0.0;
pub const POSITION_ROUGHNESS_MAX: f64 = 4.0;

pub const DEFAULT_CENTER_AREA: f64 = 1.1; // extra spread across the middle area
pub const CENTER_AREA_MIN: f64 = 0.0;
pub const CENTER_AREA_MAX: f64 = 10.0;

// Field shape: rotation
pub const DEFAULT_ROTATION_AREA: f64 = 0.7; // width of the rotating area
pub const ROTATION_AREA_MIN: f64 = 0.0;
pub const ROTATION_AREA_MAX: f64 = 4.0;

pub const DEFAULT_ROTATION_DEG: f64 = 70.0; // saturated rotation amount
pub const ROTATION_DEG_MIN: f64 = 0.0;
pub const ROTATION_DEG_MAX: f64 = 90.0;

// Field shape: depth
pub const DEFAULT_ZOOM_AREA: f64 = 0.7; // zoom width in the depth direction
pub const ZOOM_AREA_MIN: f64 = 0.0;
pub const ZOOM_AREA_MAX: f64 = 4.0;

pub const DEFAULT_ZOOM: f64 = 0.5; // zoom amount in the depth direction
pub const ZOOM_MIN: f64 = 0.0;
pub const ZOOM_MAX: f64 = 2.0;

// Movement: approach controller
pub const DEFAULT_KP: f64 = 5.0; // proportional gain; sets the base speed
pub const KP_MIN: f64 = 0.0;
pub const KP_MAX: f64 = 10.0;

pub const DEFAULT_V_MAX: f64 = 15.0; // speed limit
pub const V_MAX_MIN: f64 = 0.0;
pub const V_MAX_MAX: f64 = 30.0;

pub const DEFAULT_A_MAX: f64 = 40.0; // acceleration limit, speeding up only
pub const A_MAX_MIN: f64 = 0.0;
pub const A_MAX_MAX: f64 = 200.0;

pub const DEFAULT_APPROACH: f64 = 1.0; // catch-up gain for short distances
pub const APPROACH_MIN: f64 = 0.0;
pub const APPROACH_MAX: f64 = 5.0;

pub const DEFAULT_APPROACH_WIDTH: f64 = 0.5; // catch-up bump width; never zero
pub const APPROACH_WIDTH_MIN: f64 = 0.0;
pub const APPROACH_WIDTH_MAX: f64 = 5.0;
