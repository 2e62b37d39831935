use super::idle_motion::IdleMotion;
use crate::engine::assets::scene_catalog::{ObjectId, SceneObject};
use crate::engine::navigation::easing::{approach, ease_in_out_cubic};
use crate::engine::navigation::formation::FormationTransform;
use crate::engine::navigation::state::{FrameClock, ObjectPose, ObjectRole};
use bevy::prelude::*;
use constants::animation::{
    FOCUS_SPIN_SPEED, FRAME_LERP, HIDDEN_DEPTH_OFFSET, HOVER_SCALE_FACTOR, IDLE_SETTLE_EPSILON,
};
use constants::focus::{
    FOCUS_POSITION_X, FOCUS_POSITION_Y, FOCUS_POSITION_Z, FOCUS_SCALE, MIN_SCALE_FLOOR,
    focus_depth,
};
use constants::hitbox::{HIT_RADIUS, HIT_RADIUS_DOMINANT, HIT_RADIUS_DOMINANT_ACTIVE};

/// Multiplier that normalises an object's focused size regardless of how
/// large its model's base scale is.
pub fn focus_scale_multiplier(base_scale: f32) -> f32 {
    FOCUS_SCALE / base_scale.max(MIN_SCALE_FLOOR)
}

/// Blend from wherever an object was back onto its procedural idle path.
#[derive(Debug, Clone, Copy)]
struct SettleBlend {
    from_translation: Vec3,
    from_rotation: Quat,
    weight: f32,
}

/// Animation and hit-test geometry for one catalog object.
///
/// The pose is held in formation space while the object rides the shared
/// formation and in world space while it is focused, landing or hidden;
/// [`SceneObjectController::sync_space`] converts between the two when the
/// object's role changes.
#[derive(Debug, Clone)]
pub struct SceneObjectController {
    id: ObjectId,
    base_position: Vec3,
    base_scale: f32,
    dominant: bool,
    focus_offset: Vec3,
    motion: IdleMotion,
    pose: Option<ObjectPose>,
    in_formation: bool,
    was_ambient: bool,
    settle: Option<SettleBlend>,
    hidden_target_z: Option<f32>,
}

impl SceneObjectController {
    pub fn new(id: ObjectId, object: &SceneObject) -> Self {
        Self {
            id,
            base_position: object.base_position(),
            base_scale: object.scale,
            dominant: object.dominant,
            focus_offset: object.focus_offset(),
            motion: IdleMotion::from_seed(object.seed),
            pose: None,
            in_formation: true,
            was_ambient: true,
            settle: None,
            hidden_target_z: None,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn is_dominant(&self) -> bool {
        self.dominant
    }

    pub fn base_position(&self) -> Vec3 {
        self.base_position
    }

    /// Last computed pose, `None` until the first frame has run.
    pub fn current_pose(&self) -> Option<ObjectPose> {
        self.pose
    }

    pub fn in_formation(&self) -> bool {
        self.in_formation
    }

    pub fn focus_slot(&self) -> Vec3 {
        Vec3::new(FOCUS_POSITION_X, FOCUS_POSITION_Y, focus_depth(self.dominant)) + self.focus_offset
    }

    pub fn focus_scale(&self, scale_factor: f32) -> f32 {
        self.base_scale * scale_factor * focus_scale_multiplier(self.base_scale)
    }

    /// Pose the object animates toward while focused.
    pub fn focus_pose(&self, scale_factor: f32) -> ObjectPose {
        ObjectPose {
            translation: self.focus_slot(),
            rotation: Quat::IDENTITY,
            scale: self.focus_scale(scale_factor),
        }
    }

    /// Undisturbed idle pose at time `t`, in formation space.
    pub fn idle_pose(&self, t: f32, scale_factor: f32) -> ObjectPose {
        let (translation, rotation) = self.motion.sample(self.base_position, t);
        ObjectPose {
            translation,
            rotation,
            scale: self.base_scale * scale_factor,
        }
    }

    /// Hit sphere radius in world units. Hover never changes it; while
    /// active the sphere follows the normalised focus scale.
    pub fn hit_radius(&self, role: &ObjectRole, scale_factor: f32) -> f32 {
        match (self.dominant, role.is_active()) {
            (true, true) => HIT_RADIUS_DOMINANT_ACTIVE * self.focus_scale(scale_factor),
            (false, true) => HIT_RADIUS * self.focus_scale(scale_factor),
            (true, false) => HIT_RADIUS_DOMINANT * self.base_scale * scale_factor,
            (false, false) => HIT_RADIUS * self.base_scale * scale_factor,
        }
    }

    pub fn is_pickable(role: &ObjectRole) -> bool {
        matches!(role, ObjectRole::Ambient { .. } | ObjectRole::Focused)
    }

    /// Start from the idle pose if no frame has run yet, so the first role
    /// switch has something to convert.
    pub fn prime(&mut self, t: f32, scale_factor: f32) {
        if self.pose.is_none() {
            self.pose = Some(self.idle_pose(t, scale_factor));
            self.in_formation = true;
        }
    }

    /// Move the stored pose between formation and world space when the role
    /// switches between riding the formation and not.
    pub fn sync_space(&mut self, role: &ObjectRole, formation: FormationTransform) {
        let wants_formation = role.rides_formation();
        if wants_formation == self.in_formation {
            return;
        }
        if let Some(pose) = self.pose {
            self.pose = Some(if wants_formation {
                formation.to_local(pose)
            } else {
                formation.to_world(pose)
            });
        }
        self.in_formation = wants_formation;
    }

    /// Pose in world space given the live formation.
    pub fn world_pose(&self, formation: FormationTransform) -> Option<ObjectPose> {
        self.pose.map(|pose| {
            if self.in_formation {
                formation.to_world(pose)
            } else {
                pose
            }
        })
    }

    /// Advance one frame and return the new pose in the controller's space.
    pub fn update(&mut self, role: ObjectRole, clock: FrameClock, scale_factor: f32) -> ObjectPose {
        let ambient = matches!(role, ObjectRole::Ambient { .. });
        let current = match self.pose {
            Some(pose) => {
                if ambient && !self.was_ambient {
                    self.settle = Some(SettleBlend {
                        from_translation: pose.translation,
                        from_rotation: pose.rotation,
                        weight: 0.0,
                    });
                }
                pose
            }
            None => self.idle_pose(clock.elapsed, scale_factor),
        };
        if !ambient {
            self.settle = None;
        }
        if !matches!(role, ObjectRole::Hidden) {
            self.hidden_target_z = None;
        }

        let next = match role {
            ObjectRole::Ambient { hovered } => {
                self.ambient_pose(current, hovered, clock.elapsed, scale_factor)
            }
            ObjectRole::Focused => self.focused_pose(current, clock.delta, scale_factor),
            ObjectRole::Landing { seed, progress } => {
                let eased = ease_in_out_cubic(progress);
                ObjectPose {
                    translation: seed.translation.lerp(self.focus_slot(), eased),
                    rotation: seed.rotation,
                    scale: approach(seed.scale, self.focus_scale(scale_factor), eased),
                }
            }
            ObjectRole::Hidden => self.hidden_pose(current),
        };

        self.was_ambient = ambient;
        self.pose = Some(next);
        next
    }

    fn ambient_pose(&mut self, current: ObjectPose, hovered: bool, t: f32, scale_factor: f32) -> ObjectPose {
        let (idle_translation, idle_rotation) = self.motion.sample(self.base_position, t);

        let blend = self.settle.as_mut().map(|blend| {
            blend.weight = approach(blend.weight, 1.0, FRAME_LERP);
            *blend
        });
        let (translation, rotation) = match blend {
            Some(blend) if 1.0 - blend.weight >= IDLE_SETTLE_EPSILON => (
                blend.from_translation.lerp(idle_translation, blend.weight),
                blend.from_rotation.slerp(idle_rotation, blend.weight),
            ),
            _ => {
                self.settle = None;
                (idle_translation, idle_rotation)
            }
        };

        let base = self.base_scale * scale_factor;
        let target_scale = if hovered { base * HOVER_SCALE_FACTOR } else { base };

        ObjectPose {
            translation,
            rotation,
            scale: approach(current.scale, target_scale, FRAME_LERP),
        }
    }

    fn focused_pose(&self, current: ObjectPose, delta: f32, scale_factor: f32) -> ObjectPose {
        ObjectPose {
            translation: current.translation.lerp(self.focus_slot(), FRAME_LERP),
            rotation: Quat::from_rotation_y(FOCUS_SPIN_SPEED * delta) * current.rotation,
            scale: approach(current.scale, self.focus_scale(scale_factor), FRAME_LERP),
        }
    }

    /// Fix the world depth this object heads for while hidden, relative to
    /// the focus depth of the active object. Latched on the first hidden
    /// frame; must be called after [`Self::sync_space`].
    pub fn hide_behind(&mut self, focus_depth: f32) {
        if self.hidden_target_z.is_none() {
            let z = self.pose.map_or(self.base_position.z, |pose| pose.translation.z);
            self.hidden_target_z = Some(hidden_depth(z, focus_depth));
        }
    }

    /// Objects behind the focus depth recede; objects in front rush past the
    /// camera. Scale decays toward zero but never reaches it.
    fn hidden_pose(&mut self, current: ObjectPose) -> ObjectPose {
        let target_z = *self
            .hidden_target_z
            .get_or_insert_with(|| hidden_depth(current.translation.z, FOCUS_POSITION_Z));
        ObjectPose {
            translation: Vec3::new(
                current.translation.x,
                current.translation.y,
                approach(current.translation.z, target_z, FRAME_LERP),
            ),
            rotation: current.rotation,
            scale: approach(current.scale, 0.0, FRAME_LERP),
        }
    }
}

/// World depth a hidden object at depth `z` moves toward.
fn hidden_depth(z: f32, focus_depth: f32) -> f32 {
    if z > focus_depth {
        z + HIDDEN_DEPTH_OFFSET
    } else {
        z - HIDDEN_DEPTH_OFFSET
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::scene_catalog::SceneCatalog;
    use crate::engine::navigation::state::LandingSeed;

    const DT: f32 = 1.0 / 60.0;

    fn controller(index: usize) -> SceneObjectController {
        let catalog = SceneCatalog::builtin();
        SceneObjectController::new(ObjectId(index), &catalog.objects[index])
    }

    #[test]
    fn focused_size_is_normalised_across_base_scales() {
        let large = 1.5 * focus_scale_multiplier(1.5);
        let tiny = 0.025 * focus_scale_multiplier(0.025);
        assert!((large - tiny).abs() < 1e-4);
    }

    #[test]
    fn idle_motion_is_a_pure_function_of_time() {
        let mut c = controller(1);
        let mut clock = FrameClock::new(0.0, DT);
        for _ in 0..30 {
            clock = clock.advanced(DT);
            let pose = c.update(ObjectRole::Ambient { hovered: false }, clock, 1.0);
            let expected = c.idle_pose(clock.elapsed, 1.0);
            assert_eq!(pose.translation, expected.translation);
            assert_eq!(pose.rotation, expected.rotation);
        }
    }

    #[test]
    fn hover_grows_scale_without_touching_hit_radius() {
        let mut c = controller(1);
        let role = ObjectRole::Ambient { hovered: true };
        let radius_before = c.hit_radius(&ObjectRole::Ambient { hovered: false }, 1.0);

        let mut clock = FrameClock::default();
        let mut last_scale = 0.0;
        for _ in 0..60 {
            clock = clock.advanced(DT);
            let pose = c.update(role, clock, 1.0);
            assert!(pose.scale >= last_scale);
            last_scale = pose.scale;
        }

        assert!((last_scale - HOVER_SCALE_FACTOR).abs() < 1e-2);
        assert_eq!(c.hit_radius(&role, 1.0), radius_before);
    }

    /// Run `c` hidden for `frames` frames behind `focus_depth` and return
    /// its depth on entry plus its final pose.
    fn hide_for(c: &mut SceneObjectController, focus_depth: f32, frames: usize) -> (f32, ObjectPose) {
        let mut clock = FrameClock::default();
        let start = c.update(ObjectRole::Ambient { hovered: false }, clock, 1.0);
        c.sync_space(&ObjectRole::Hidden, FormationTransform::IDENTITY);
        for _ in 0..frames {
            clock = clock.advanced(DT);
            c.hide_behind(focus_depth);
            c.update(ObjectRole::Hidden, clock, 1.0);
        }
        let pose = c.current_pose().expect("pose after frames");
        (start.translation.z, pose)
    }

    #[test]
    fn hidden_objects_shrink_below_epsilon() {
        // Base depth 4.0 is in front of the focus depth, so it rushes past.
        let mut c = controller(0);
        let (start_z, pose) = hide_for(&mut c, focus_depth(false), 120);
        assert!(!c.in_formation());
        assert!(pose.scale > 0.0);
        assert!(pose.scale < 1e-3);
        assert!((pose.translation.z - (start_z + HIDDEN_DEPTH_OFFSET)).abs() < 1e-2);
    }

    #[test]
    fn hidden_objects_behind_focus_depth_recede() {
        let mut c = controller(2);
        let (start_z, pose) = hide_for(&mut c, focus_depth(false), 120);
        assert!((pose.translation.z - (start_z - HIDDEN_DEPTH_OFFSET)).abs() < 1e-2);
    }

    #[test]
    fn hidden_direction_follows_active_focus_depth() {
        // Between the regular and dominant focus depths: in front of one,
        // behind the other.
        let mut c = controller(0);
        let (start_z, _) = hide_for(&mut c, focus_depth(false), 0);
        assert!(start_z > focus_depth(false) && start_z < focus_depth(true));

        let (_, pose) = hide_for(&mut controller(0), focus_depth(true), 120);
        assert!(pose.translation.z < start_z - HIDDEN_DEPTH_OFFSET * 0.99);
    }

    #[test]
    fn focused_object_converges_on_focus_slot() {
        let mut c = controller(3);
        let mut clock = FrameClock::default();
        for _ in 0..200 {
            clock = clock.advanced(DT);
            c.update(ObjectRole::Focused, clock, 1.0);
        }
        let pose = c.current_pose().expect("pose after frames");
        assert!(pose.translation.distance(c.focus_slot()) < 1e-3);
        assert!((pose.scale - FOCUS_SCALE).abs() < 1e-3);
    }

    #[test]
    fn landing_interpolates_from_seed_with_frozen_orientation() {
        let mut c = controller(1);
        let seed = LandingSeed {
            translation: Vec3::new(1.0, 1.0, 1.0),
            scale: 1.4,
            rotation: Quat::from_rotation_z(0.8),
        };
        let clock = FrameClock::new(1.0, DT);

        let start = c.update(ObjectRole::Landing { seed, progress: 0.0 }, clock, 1.0);
        assert_eq!(start.translation, seed.translation);
        assert_eq!(start.scale, seed.scale);

        let middle = c.update(ObjectRole::Landing { seed, progress: 0.5 }, clock.advanced(DT), 1.0);
        assert_eq!(middle.rotation, seed.rotation);

        let end = c.update(ObjectRole::Landing { seed, progress: 1.0 }, clock.advanced(DT), 1.0);
        assert!(end.translation.distance(c.focus_slot()) < 1e-5);
        assert!((end.scale - c.focus_scale(1.0)).abs() < 1e-5);
        assert_eq!(end.rotation, seed.rotation);
    }

    #[test]
    fn dominant_hit_radius_inflates_while_active() {
        let station = controller(3);
        let planet = controller(0);
        let idle = ObjectRole::Ambient { hovered: false };

        assert!(station.hit_radius(&ObjectRole::Focused, 1.0) > station.hit_radius(&idle, 1.0));
        assert_eq!(planet.hit_radius(&idle, 1.0), HIT_RADIUS * 1.5);
        assert!((planet.hit_radius(&ObjectRole::Focused, 1.0) - HIT_RADIUS * FOCUS_SCALE).abs() < 1e-5);
        assert!(!SceneObjectController::is_pickable(&ObjectRole::Hidden));
        assert!(SceneObjectController::is_pickable(&ObjectRole::Focused));
        let seed = LandingSeed {
            translation: Vec3::ZERO,
            scale: 1.0,
            rotation: Quat::IDENTITY,
        };
        assert!(!SceneObjectController::is_pickable(&ObjectRole::Landing {
            seed,
            progress: 0.0
        }));
    }

    #[test]
    fn focused_dominant_object_is_at_least_as_pickable_as_any_other() {
        let station = controller(3);
        for other in 0..3 {
            let ordinary = controller(other);
            assert!(
                station.hit_radius(&ObjectRole::Focused, 1.0)
                    >= ordinary.hit_radius(&ObjectRole::Focused, 1.0)
            );
        }
    }

    #[test]
    fn returning_to_idle_settles_exactly_onto_idle_path() {
        let mut c = controller(1);
        let mut clock = FrameClock::default();
        for _ in 0..60 {
            clock = clock.advanced(DT);
            c.update(ObjectRole::Hidden, clock, 1.0);
        }

        let mut settled = false;
        for _ in 0..300 {
            clock = clock.advanced(DT);
            let pose = c.update(ObjectRole::Ambient { hovered: false }, clock, 1.0);
            let idle = c.idle_pose(clock.elapsed, 1.0);
            if pose.translation == idle.translation && pose.rotation == idle.rotation {
                settled = true;
                break;
            }
        }
        assert!(settled);
    }
}
