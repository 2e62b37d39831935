use bevy::math::Vec3;

pub const AMBIENT_BRIGHTNESS: f32 = 800.0;

pub const MAIN_LIGHT_POSITION: Vec3 = Vec3::new(10.0, 10.0, 5.0);
pub const MAIN_LIGHT_ILLUMINANCE: f32 = 1_500.0;

pub const FILL_LIGHT_POSITION: Vec3 = Vec3::new(-10.0, -10.0, -5.0);
pub const FILL_LIGHT_ILLUMINANCE: f32 = 800.0;

pub const POINT_LIGHT_POSITION: Vec3 = Vec3::new(0.0, 0.0, 5.0);
pub const POINT_LIGHT_INTENSITY: f32 = 120_000.0;

/// Linear fog colour (sRGB) and range.
pub const FOG_COLOUR: [f32; 3] = [0.0, 0.0, 0.2];
pub const FOG_NEAR: f32 = 5.0;
pub const FOG_FAR: f32 = 25.0;
