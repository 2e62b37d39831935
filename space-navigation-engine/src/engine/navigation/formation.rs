//! Shared group transform that re-centres the focused object.
//!
//! Every object that is not focused or landing is placed in formation space;
//! its world pose is the formation transform applied to its local pose. The
//! formation rotates about the vertical axis so the focused object's base
//! position swings onto the forward (+z) axis, then shifts along depth so its
//! orbital radius lands on the canonical focus depth.

use super::easing::approach;
use super::state::ObjectPose;
use bevy::prelude::*;
use constants::animation::FRAME_LERP;
use constants::focus::{FORMATION_SNAP_EPSILON, focus_depth};
use std::f32::consts::{PI, TAU};

/// Wrap an angle into `(−π, π]`.
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI { wrapped + TAU } else { wrapped }
}

/// Rotation about +y followed by a translation along z.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FormationTransform {
    pub rotation: f32,
    pub depth_shift: f32,
}

impl FormationTransform {
    pub const IDENTITY: Self = Self {
        rotation: 0.0,
        depth_shift: 0.0,
    };

    /// Formation that brings an object at `base_position` onto the forward
    /// axis at its canonical focus depth.
    pub fn centring(base_position: Vec3, dominant: bool) -> Self {
        let orbital_radius = (base_position.x * base_position.x
            + base_position.z * base_position.z)
            .sqrt();
        Self {
            rotation: -base_position.x.atan2(base_position.z),
            depth_shift: focus_depth(dominant) - orbital_radius,
        }
    }

    pub fn is_identity(&self) -> bool {
        self.rotation == 0.0 && self.depth_shift == 0.0
    }

    fn quat(&self) -> Quat {
        Quat::from_rotation_y(self.rotation)
    }

    pub fn point_to_world(&self, local: Vec3) -> Vec3 {
        if self.is_identity() {
            return local;
        }
        self.quat() * local + Vec3::Z * self.depth_shift
    }

    pub fn to_world(&self, pose: ObjectPose) -> ObjectPose {
        if self.is_identity() {
            return pose;
        }
        ObjectPose {
            translation: self.point_to_world(pose.translation),
            rotation: self.quat() * pose.rotation,
            scale: pose.scale,
        }
    }

    pub fn to_local(&self, pose: ObjectPose) -> ObjectPose {
        if self.is_identity() {
            return pose;
        }
        let inverse = self.quat().inverse();
        ObjectPose {
            translation: inverse * (pose.translation - Vec3::Z * self.depth_shift),
            rotation: inverse * pose.rotation,
            scale: pose.scale,
        }
    }
}

/// Lerps the live formation toward its target at the scene-wide frame rate.
#[derive(Debug, Clone, Default)]
pub struct FormationAnimator {
    current: FormationTransform,
    target: FormationTransform,
}

impl FormationAnimator {
    pub fn current(&self) -> FormationTransform {
        self.current
    }

    pub fn target(&self) -> FormationTransform {
        self.target
    }

    /// Retarget onto a focused object, or back to identity with `None`.
    pub fn retarget(&mut self, focus: Option<(Vec3, bool)>) {
        self.target = match focus {
            Some((base_position, dominant)) => {
                FormationTransform::centring(base_position, dominant)
            }
            None => FormationTransform::IDENTITY,
        };
    }

    /// Advance one frame. Rotation always takes the shorter arc.
    pub fn step(&mut self) {
        let delta = wrap_angle(self.target.rotation - self.current.rotation);
        self.current.rotation = if delta.abs() < FORMATION_SNAP_EPSILON {
            self.target.rotation
        } else {
            wrap_angle(self.current.rotation + delta * FRAME_LERP)
        };

        let depth_delta = self.target.depth_shift - self.current.depth_shift;
        self.current.depth_shift = if depth_delta.abs() < FORMATION_SNAP_EPSILON {
            self.target.depth_shift
        } else {
            approach(self.current.depth_shift, self.target.depth_shift, FRAME_LERP)
        };
    }

    #[cfg(test)]
    pub(crate) fn set_current(&mut self, current: FormationTransform) {
        self.current = current;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_angle_lands_in_half_open_range() {
        assert!((wrap_angle(3.0 * PI) - PI).abs() < 1e-5);
        assert!((wrap_angle(-PI) - PI).abs() < 1e-5);
        assert!((wrap_angle(TAU + 0.5) - 0.5).abs() < 1e-5);
        assert!((wrap_angle(-0.5) + 0.5).abs() < 1e-6);
    }

    #[test]
    fn rotation_takes_shorter_arc() {
        let mut animator = FormationAnimator::default();
        animator.set_current(FormationTransform {
            rotation: 170f32.to_radians(),
            depth_shift: 0.0,
        });
        animator.target = FormationTransform {
            rotation: (-170f32).to_radians(),
            depth_shift: 0.0,
        };

        animator.step();

        // 10% of a 20° approach, crossing +180°, not 10% of 340° backwards.
        let moved = wrap_angle(animator.current().rotation - 170f32.to_radians());
        assert!((moved - 2f32.to_radians()).abs() < 1e-4, "moved {moved}");
    }

    #[test]
    fn centring_puts_object_on_forward_axis_at_focus_depth() {
        let base = Vec3::new(-5.0, 1.0, 0.0);
        let formation = FormationTransform::centring(base, false);
        let world = formation.point_to_world(base);
        assert!(world.x.abs() < 1e-4);
        assert!((world.z - focus_depth(false)).abs() < 1e-4);
        assert!((world.y - base.y).abs() < 1e-5);
    }

    #[test]
    fn dominant_object_uses_shallower_focus_depth() {
        let base = Vec3::new(5.5, 0.5, 0.5);
        let world = FormationTransform::centring(base, true).point_to_world(base);
        assert!((world.z - focus_depth(true)).abs() < 1e-4);
        assert!(focus_depth(true) > focus_depth(false));
    }

    #[test]
    fn local_and_world_round_trip() {
        let formation = FormationTransform {
            rotation: 1.1,
            depth_shift: -3.0,
        };
        let pose = ObjectPose {
            translation: Vec3::new(1.0, 2.0, 3.0),
            rotation: Quat::from_rotation_x(0.4),
            scale: 0.7,
        };
        let back = formation.to_local(formation.to_world(pose));
        assert!(back.translation.distance(pose.translation) < 1e-4);
        assert!(back.rotation.angle_between(pose.rotation) < 1e-4);
    }

    #[test]
    fn retarget_to_none_converges_exactly_to_identity() {
        let mut animator = FormationAnimator::default();
        animator.retarget(Some((Vec3::new(0.0, 2.0, -6.0), false)));
        for _ in 0..60 {
            animator.step();
        }
        assert!(!animator.current().is_identity());

        animator.retarget(None);
        assert_eq!(animator.target(), FormationTransform::IDENTITY);
        for _ in 0..400 {
            animator.step();
        }
        assert!(animator.current().is_identity());
    }
}
