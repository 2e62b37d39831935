pub const FOCUS_POSITION_X: f32 = 0.0;
pub const FOCUS_POSITION_Y: f32 = 0.0;

/// Focus depth for regular objects (pushed back for framing).
pub const FOCUS_POSITION_Z: f32 = 2.0;
/// Focus depth for the dominant object, closer to the camera.
pub const FOCUS_POSITION_Z_DOMINANT: f32 = 5.0;

/// Apparent uniform scale every object converges to while focused.
pub const FOCUS_SCALE: f32 = 1.8;
/// Lower bound on the base scale used when normalising focus size.
pub const MIN_SCALE_FLOOR: f32 = 0.01;

/// Formation values closer than this to their target snap onto it.
pub const FORMATION_SNAP_EPSILON: f32 = 1e-4;

/// Canonical focus depth for an object.
pub fn focus_depth(dominant: bool) -> f32 {
    if dominant {
        FOCUS_POSITION_Z_DOMINANT
    } else {
        FOCUS_POSITION_Z
    }
}
