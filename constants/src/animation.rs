/// Fraction of the remaining distance covered per rendered frame by every
/// exponential lerp in the scene (scale, focus slot, hidden recede, formation).
pub const FRAME_LERP: f32 = 0.1;

/// Per-axis idle angular speed range, radians per second.
pub const ROTATION_SPEED_MIN: f32 = 0.012;
pub const ROTATION_SPEED_MAX: f32 = 0.24;

/// Vertical float frequency range, radians per second.
pub const FLOAT_SPEED_MIN: f32 = 0.3;
pub const FLOAT_SPEED_MAX: f32 = 0.8;

/// Horizontal/vertical drift frequency range, radians per second.
pub const DRIFT_SPEED_MIN: f32 = 0.2;
pub const DRIFT_SPEED_MAX: f32 = 0.5;

pub const FLOAT_AMPLITUDE: f32 = 0.2;
pub const DRIFT_AMPLITUDE_X: f32 = 0.3;
pub const DRIFT_AMPLITUDE_Y: f32 = 0.2;

/// Scale multiplier applied while the pointer rests on an object.
pub const HOVER_SCALE_FACTOR: f32 = 1.2;

/// Spin around the vertical axis while focused, radians per second.
pub const FOCUS_SPIN_SPEED: f32 = 0.15;

/// Distance hidden objects travel along depth when another object is focused.
pub const HIDDEN_DEPTH_OFFSET: f32 = 18.0;

/// Remaining blend weight below which an object returning to idle snaps onto
/// its procedural path.
pub const IDLE_SETTLE_EPSILON: f32 = 1e-3;
