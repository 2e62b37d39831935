use bevy::math::Vec3;

/// Resting camera position; the scene origin is always in front of it.
pub const CAMERA_HOME: Vec3 = Vec3::new(0.0, 0.0, 12.0);
pub const CAMERA_FOV_DEGREES: f32 = 60.0;

pub const SWAY_SPEED_X: f32 = 0.1;
pub const SWAY_SPEED_Y: f32 = 0.15;
pub const SWAY_AMPLITUDE_X: f32 = 0.5;
pub const SWAY_AMPLITUDE_Y: f32 = 0.3;

/// Wall-clock length of the landing animation.
pub const LANDING_DURATION_SECS: f32 = 2.0;

/// Distance in front of the target (towards +z) where the standard dolly ends.
pub const LANDING_STANDOFF: f32 = 1.5;
/// Height above the target where the standard dolly ends.
pub const LANDING_CAMERA_RISE: f32 = 0.6;
/// Peak of the vertical swoop added on top of the dolly.
pub const LANDING_ARC_HEIGHT: f32 = 1.2;
/// Look-at offset beyond the target along -z.
pub const LANDING_LOOK_DEPTH_OFFSET: f32 = 10.0;
/// Look-at offset above the target; keeps the target in the lower frame.
pub const LANDING_LOOK_HEIGHT_OFFSET: f32 = 0.8;

/// Distance in front of the dominant object where its dolly-in ends.
pub const DOMINANT_LANDING_STANDOFF: f32 = 3.0;
/// Field of view reached at the end of the dominant object's zoom.
pub const DOMINANT_LANDING_FOV_DEGREES: f32 = 25.0;

/// Camera transform smoothing rate, scaled by frame delta.
pub const CAMERA_FOLLOW_RATE: f32 = 12.0;
