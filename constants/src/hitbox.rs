/// Hit sphere radii in model space; multiplied by the object's base scale.
pub const HIT_RADIUS: f32 = 2.0;
pub const HIT_RADIUS_DOMINANT: f32 = 20.0;
/// Dominant object radius while focused or landing.
pub const HIT_RADIUS_DOMINANT_ACTIVE: f32 = 32.0;
