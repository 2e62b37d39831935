use crate::engine::navigation::easing::{approach, ease_in_out_cubic};
use crate::engine::navigation::state::NavigationState;
use bevy::prelude::*;
use constants::camera::*;
use std::f32::consts::PI;

/// Marks the scene camera driven by the navigation rig.
#[derive(Component, Debug, Default)]
pub struct NavigationCamera;

/// Camera output for one frame. Nothing owns it between frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
    pub fov_degrees: f32,
}

impl CameraPose {
    pub fn to_transform(&self) -> Transform {
        Transform::from_translation(self.position).looking_at(self.look_at, Vec3::Y)
    }
}

/// Where the landing object ends up, and whether it is the dominant object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandingTarget {
    pub focus_point: Vec3,
    pub dominant: bool,
}

/// Camera choreography as a pure function of navigation state and time.
#[derive(Debug, Clone, Copy, Default)]
pub struct CameraRig;

impl CameraRig {
    pub fn pose(
        &self,
        state: &NavigationState,
        elapsed: f32,
        target: Option<LandingTarget>,
    ) -> CameraPose {
        match (*state, target) {
            (NavigationState::Idle | NavigationState::Hovered(_), _) => Self::idle(elapsed),
            (NavigationState::Focused(_), _) | (NavigationState::Landing { .. }, None) => {
                Self::focused()
            }
            (NavigationState::Landing { progress, .. }, Some(target)) if target.dominant => {
                Self::dominant_landing(progress, target.focus_point)
            }
            (NavigationState::Landing { progress, .. }, Some(target)) => {
                Self::landing(progress, target.focus_point)
            }
        }
    }

    /// Bounded sway around the home position, always facing the origin.
    fn idle(t: f32) -> CameraPose {
        CameraPose {
            position: CAMERA_HOME
                + Vec3::new(
                    (t * SWAY_SPEED_X).sin() * SWAY_AMPLITUDE_X,
                    (t * SWAY_SPEED_Y).cos() * SWAY_AMPLITUDE_Y,
                    0.0,
                ),
            look_at: Vec3::ZERO,
            fov_degrees: CAMERA_FOV_DEGREES,
        }
    }

    /// The camera holds still; the formation moves the objects instead.
    fn focused() -> CameraPose {
        CameraPose {
            position: CAMERA_HOME,
            look_at: Vec3::ZERO,
            fov_degrees: CAMERA_FOV_DEGREES,
        }
    }

    /// Dolly toward the target with a back-loaded swoop, looking past and
    /// slightly above it so it settles in the lower part of the frame.
    fn landing(progress: f32, focus_point: Vec3) -> CameraPose {
        let eased = ease_in_out_cubic(progress);
        let arc_progress = eased * eased;

        let end = focus_point + Vec3::new(0.0, LANDING_CAMERA_RISE, LANDING_STANDOFF);
        let arc = (PI * arc_progress).sin() * LANDING_ARC_HEIGHT;
        let look_target = focus_point
            + Vec3::new(0.0, LANDING_LOOK_HEIGHT_OFFSET, -LANDING_LOOK_DEPTH_OFFSET);

        CameraPose {
            position: CAMERA_HOME.lerp(end, eased) + Vec3::Y * arc,
            look_at: Vec3::ZERO.lerp(look_target, eased),
            fov_degrees: CAMERA_FOV_DEGREES,
        }
    }

    /// Straight dolly-in with a narrowing field of view.
    fn dominant_landing(progress: f32, focus_point: Vec3) -> CameraPose {
        let eased = ease_in_out_cubic(progress);
        let end = focus_point + Vec3::Z * DOMINANT_LANDING_STANDOFF;

        CameraPose {
            position: CAMERA_HOME.lerp(end, eased),
            look_at: Vec3::ZERO.lerp(focus_point, eased),
            fov_degrees: approach(CAMERA_FOV_DEGREES, DOMINANT_LANDING_FOV_DEGREES, eased),
        }
    }
}
