/// Widths below this use the mobile tier.
pub const MOBILE_MAX_WIDTH: f32 = 640.0;
/// Widths below this (and at least `MOBILE_MAX_WIDTH`) use the tablet tier.
pub const TABLET_MAX_WIDTH: f32 = 1024.0;

pub const MOBILE_SCALE_FACTOR: f32 = 0.6;
pub const TABLET_SCALE_FACTOR: f32 = 0.8;
pub const DESKTOP_SCALE_FACTOR: f32 = 1.0;
