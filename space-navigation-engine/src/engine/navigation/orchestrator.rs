use super::formation::FormationAnimator;
use super::scale_tier::ScaleTier;
use super::state::{
    FrameClock, LandingSeed, NavigationState, ObjectPose, ObjectRole, StateSnapshot,
};
use crate::engine::assets::scene_catalog::{ObjectId, SceneCatalog};
use crate::engine::camera::camera_rig::{CameraPose, CameraRig, LandingTarget};
use crate::engine::input::intent::{ClickTarget, NavigationIntent, NavigationRequest};
use crate::engine::objects::controller::SceneObjectController;
use bevy::prelude::*;
use constants::camera::LANDING_DURATION_SECS;
use constants::focus::focus_depth;
use serde::Serialize;

/// Invoked once with the landed object's section when a landing completes.
pub type NavigateCallback = Box<dyn FnMut(&str) + Send + Sync>;

/// Hover overlay content for the object under the pointer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayPayload {
    pub id: String,
    pub title: String,
    pub description: String,
    pub stats: Vec<String>,
}

/// World-space result for one object this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectFrame {
    pub id: ObjectId,
    pub pose: ObjectPose,
    pub pickable: bool,
    pub hit_radius: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutput {
    pub camera: CameraPose,
    pub objects: Vec<ObjectFrame>,
}

/// Owns the navigation state and derives every object and camera pose from
/// it once per frame. Input never touches transforms directly; it arrives
/// as a [`NavigationIntent`] and is applied in [`Self::dispatch`].
#[derive(Resource)]
pub struct NavigationOrchestrator {
    catalog: SceneCatalog,
    controllers: Vec<SceneObjectController>,
    state: NavigationState,
    landing_seed: Option<LandingSeed>,
    navigated: bool,
    formation: FormationAnimator,
    camera: CameraRig,
    scale_tier: ScaleTier,
    last_frame: Option<FrameOutput>,
    on_navigate: NavigateCallback,
}

impl NavigationOrchestrator {
    pub fn new(
        catalog: SceneCatalog,
        on_navigate: impl FnMut(&str) + Send + Sync + 'static,
    ) -> Self {
        let controllers = catalog
            .objects
            .iter()
            .enumerate()
            .map(|(index, object)| SceneObjectController::new(ObjectId(index), object))
            .collect();

        Self {
            catalog,
            controllers,
            state: NavigationState::Idle,
            landing_seed: None,
            navigated: false,
            formation: FormationAnimator::default(),
            camera: CameraRig,
            scale_tier: ScaleTier::default(),
            last_frame: None,
            on_navigate: Box::new(on_navigate),
        }
    }

    pub fn catalog(&self) -> &SceneCatalog {
        &self.catalog
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn formation(&self) -> &FormationAnimator {
        &self.formation
    }

    pub fn controller(&self, id: ObjectId) -> Option<&SceneObjectController> {
        self.controllers.get(id.0)
    }

    pub fn scale_tier(&self) -> ScaleTier {
        self.scale_tier
    }

    pub fn last_frame(&self) -> Option<&FrameOutput> {
        self.last_frame.as_ref()
    }

    fn contains(&self, id: ObjectId) -> bool {
        id.0 < self.controllers.len()
    }

    fn name_of(&self, id: ObjectId) -> &str {
        self.catalog.get(id).map(|o| o.id.as_str()).unwrap_or("<unknown>")
    }

    /// Apply one frame's worth of input. Hover is resolved before the click
    /// so a click on a freshly hovered object selects it.
    pub fn dispatch(&mut self, intent: NavigationIntent) {
        self.set_hovered(intent.hovered);

        if let Some(click) = intent.click {
            self.click(click);
        }

        for request in intent.requests {
            match request {
                NavigationRequest::Select(id) => {
                    self.select_object(id);
                }
                NavigationRequest::Confirm(id) => {
                    self.confirm_selection(id);
                }
                NavigationRequest::Cancel => {
                    self.cancel();
                }
                NavigationRequest::Traverse(direction) => {
                    self.traverse(direction);
                }
                NavigationRequest::Reset => self.reset(),
            }
        }
    }

    /// Pointer hover only matters while nothing is focused.
    pub fn set_hovered(&mut self, hovered: Option<ObjectId>) -> bool {
        if !matches!(
            self.state,
            NavigationState::Idle | NavigationState::Hovered(_)
        ) {
            return false;
        }

        let next = match hovered {
            Some(id) if self.contains(id) => NavigationState::Hovered(id),
            _ => NavigationState::Idle,
        };
        let changed = next != self.state;
        self.state = next;
        changed
    }

    fn click(&mut self, target: ClickTarget) -> bool {
        match (target, self.state) {
            (ClickTarget::Object(id), NavigationState::Focused(active)) if id == active => {
                self.confirm_selection(id)
            }
            (ClickTarget::Object(id), NavigationState::Idle | NavigationState::Hovered(_)) => {
                self.select_object(id)
            }
            (ClickTarget::EmptySpace, NavigationState::Focused(_)) => self.cancel(),
            _ => false,
        }
    }

    /// Focus `id` and swing the formation to centre it. Only valid while
    /// nothing is focused or landing.
    pub fn select_object(&mut self, id: ObjectId) -> bool {
        if !self.contains(id) {
            warn!("Ignoring selection of unknown object {:?}", id);
            return false;
        }
        if let Some(active) = self.state.active_id() {
            debug!(
                "Selection of '{}' ignored while '{}' is {}",
                self.name_of(id),
                self.name_of(active),
                self.state.label()
            );
            return false;
        }

        self.focus(id);
        true
    }

    fn focus(&mut self, id: ObjectId) {
        let Some(controller) = self.controllers.get(id.0) else {
            return;
        };
        self.formation
            .retarget(Some((controller.base_position(), controller.is_dominant())));
        self.state = NavigationState::Focused(id);
        info!("Focused '{}'", self.name_of(id));
    }

    /// Start landing on the focused object, seeded from its live pose.
    pub fn confirm_selection(&mut self, id: ObjectId) -> bool {
        if self.state != NavigationState::Focused(id) {
            debug!(
                "Confirm of '{}' ignored in state {}",
                self.name_of(id),
                self.state.label()
            );
            return false;
        }
        let Some(controller) = self.controllers.get(id.0) else {
            return false;
        };

        let seed = match controller.world_pose(self.formation.current()) {
            Some(pose) => LandingSeed::from(pose),
            None => {
                debug!("No live pose for '{}', seeding landing from focus pose", self.name_of(id));
                LandingSeed::from(controller.focus_pose(self.scale_tier.factor()))
            }
        };

        self.landing_seed = Some(seed);
        self.navigated = false;
        self.state = NavigationState::Landing { id, progress: 0.0 };
        info!("Landing on '{}'", self.name_of(id));
        true
    }

    /// Leave focus and return the formation to identity. Landing cannot be
    /// cancelled.
    pub fn cancel(&mut self) -> bool {
        match self.state {
            NavigationState::Focused(id) => {
                info!("Cancelled focus on '{}'", self.name_of(id));
                self.state = NavigationState::Idle;
                self.formation.retarget(None);
                true
            }
            _ => {
                debug!("Cancel ignored in state {}", self.state.label());
                false
            }
        }
    }

    /// Move focus to the next (`+1`) or previous (`-1`) object in ring
    /// order. Only valid while focused.
    pub fn traverse(&mut self, direction: i32) -> bool {
        let NavigationState::Focused(current) = self.state else {
            debug!("Traverse ignored in state {}", self.state.label());
            return false;
        };
        if direction == 0 {
            return false;
        }

        let next = self.catalog.ring_neighbour(current, direction.signum());
        if next == current {
            return false;
        }
        self.focus(next);
        true
    }

    /// Return to Idle from any state, letting objects settle back onto their
    /// idle paths.
    pub fn reset(&mut self) {
        info!("Navigation reset from {}", self.state.label());
        self.state = NavigationState::Idle;
        self.landing_seed = None;
        self.navigated = false;
        self.formation.retarget(None);
    }

    pub fn set_scale_tier(&mut self, tier: ScaleTier) -> bool {
        if tier == self.scale_tier {
            return false;
        }
        info!("Viewport scale tier {:?} -> {:?}", self.scale_tier, tier);
        self.scale_tier = tier;
        true
    }

    /// Overlay content; present only while an object is hovered.
    pub fn overlay(&self) -> Option<OverlayPayload> {
        let id = self.state.hovered_id()?;
        let object = self.catalog.get(id)?;
        Some(OverlayPayload {
            id: object.id.clone(),
            title: object.metadata.title.clone(),
            description: object.metadata.description.clone(),
            stats: object.metadata.stats.clone(),
        })
    }

    pub fn snapshot(&self) -> StateSnapshot {
        let (id, progress) = match self.state {
            NavigationState::Idle => (None, None),
            NavigationState::Hovered(id) | NavigationState::Focused(id) => (Some(id), None),
            NavigationState::Landing { id, progress } => (Some(id), Some(progress)),
        };
        StateSnapshot {
            state: self.state.label(),
            id: id.map(|id| self.name_of(id).to_string()),
            progress,
        }
    }

    /// Pickable objects from the last frame as `(id, centre, radius)`.
    pub fn hit_targets(&self) -> Vec<(ObjectId, Vec3, f32)> {
        self.last_frame()
            .into_iter()
            .flat_map(|frame| frame.objects.iter())
            .filter(|object| object.pickable)
            .map(|object| (object.id, object.pose.translation, object.hit_radius))
            .collect()
    }

    /// Advance one frame: landing progress, formation, every object, then
    /// the camera.
    pub fn tick(&mut self, clock: FrameClock) -> &FrameOutput {
        self.advance_landing(clock.delta);
        self.formation.step();

        let formation = self.formation.current();
        let state = self.state;
        let seed = self.landing_seed;
        let factor = self.scale_tier.factor();
        let active_depth = state
            .active_id()
            .and_then(|id| self.controllers.get(id.0))
            .map(|controller| focus_depth(controller.is_dominant()));

        let objects = self
            .controllers
            .iter_mut()
            .map(|controller| {
                let role = state.role_of(controller.id(), seed);
                controller.prime(clock.elapsed, factor);
                controller.sync_space(&role, formation);
                if let (ObjectRole::Hidden, Some(depth)) = (role, active_depth) {
                    controller.hide_behind(depth);
                }
                let pose = controller.update(role, clock, factor);
                ObjectFrame {
                    id: controller.id(),
                    pose: if controller.in_formation() {
                        formation.to_world(pose)
                    } else {
                        pose
                    },
                    pickable: SceneObjectController::is_pickable(&role),
                    hit_radius: controller.hit_radius(&role, factor),
                }
            })
            .collect();

        let target = self
            .state
            .active_id()
            .and_then(|id| self.controllers.get(id.0))
            .map(|controller| LandingTarget {
                focus_point: controller.focus_slot(),
                dominant: controller.is_dominant(),
            });
        let camera = self.camera.pose(&self.state, clock.elapsed, target);

        self.last_frame.insert(FrameOutput { camera, objects })
    }

    fn advance_landing(&mut self, delta: f32) {
        let NavigationState::Landing { id, progress } = self.state else {
            return;
        };

        let progress = (progress + delta.max(0.0) / LANDING_DURATION_SECS).min(1.0);
        self.state = NavigationState::Landing { id, progress };

        if progress >= 1.0 && !self.navigated {
            self.navigated = true;
            if let Some(section) = self.catalog.get(id).map(|o| o.section.clone()) {
                info!("Landing on '{}' complete, navigating to '{}'", self.name_of(id), section);
                (self.on_navigate)(&section);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::navigation::formation::FormationTransform;
    use constants::animation::HIDDEN_DEPTH_OFFSET;
    use constants::camera::{CAMERA_FOV_DEGREES, CAMERA_HOME};
    use std::sync::{Arc, Mutex};

    const DT: f32 = 1.0 / 60.0;

    fn orchestrator() -> (NavigationOrchestrator, Arc<Mutex<Vec<String>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = calls.clone();
        let orchestrator = NavigationOrchestrator::new(SceneCatalog::builtin(), move |section: &str| {
            sink.lock().unwrap().push(section.to_string());
        });
        (orchestrator, calls)
    }

    fn run(orchestrator: &mut NavigationOrchestrator, clock: &mut FrameClock, frames: usize) {
        for _ in 0..frames {
            *clock = clock.advanced(DT);
            orchestrator.tick(*clock);
        }
    }

    fn active_count(frame: &FrameOutput, orchestrator: &NavigationOrchestrator) -> usize {
        let state = orchestrator.state();
        frame
            .objects
            .iter()
            .filter(|o| state.role_of(o.id, Some(LandingSeed::from(o.pose))).is_active())
            .count()
    }

    #[test]
    fn hover_then_click_focuses_and_centres_formation() {
        let (mut nav, _) = orchestrator();
        let skills = ObjectId(1);
        let mut clock = FrameClock::default();

        nav.dispatch(NavigationIntent {
            hovered: Some(skills),
            ..default()
        });
        assert_eq!(nav.state(), NavigationState::Hovered(skills));
        let overlay = nav.overlay().expect("overlay while hovered");
        assert_eq!(overlay.id, "skills");

        run(&mut nav, &mut clock, 30);
        let frame = nav.last_frame().expect("frame");
        let hovered = &frame.objects[1];
        let idle_scale = nav.controller(skills).expect("controller").idle_pose(0.0, 1.0).scale;
        assert!(hovered.pose.scale > idle_scale);
        for other in [0, 2, 3] {
            let controller = nav.controller(ObjectId(other)).expect("controller");
            let idle = controller.idle_pose(clock.elapsed, 1.0);
            assert_eq!(frame.objects[other].pose.translation, idle.translation);
        }

        nav.dispatch(NavigationIntent {
            hovered: Some(skills),
            click: Some(ClickTarget::Object(skills)),
            ..default()
        });
        assert_eq!(nav.state(), NavigationState::Focused(skills));
        assert!(nav.overlay().is_none());

        let base = nav.controller(skills).expect("controller").base_position();
        let target = nav.formation().target();
        assert!((target.rotation - -base.x.atan2(base.z)).abs() < 1e-6);

        let camera = nav.tick(clock.advanced(DT)).camera;
        assert_eq!(camera.position, CAMERA_HOME);
        assert_eq!(camera.look_at, Vec3::ZERO);
        assert_eq!(camera.fov_degrees, CAMERA_FOV_DEGREES);
    }

    #[test]
    fn only_one_object_can_be_focused() {
        let (mut nav, _) = orchestrator();
        assert!(nav.select_object(ObjectId(0)));
        assert!(!nav.select_object(ObjectId(1)));
        assert_eq!(nav.state(), NavigationState::Focused(ObjectId(0)));

        let mut clock = FrameClock::default();
        run(&mut nav, &mut clock, 10);
        let frame = nav.last_frame().expect("frame").clone();
        assert_eq!(active_count(&frame, &nav), 1);
        assert!(frame.objects[0].pickable);
        assert!(frame.objects[1..].iter().all(|o| !o.pickable));
    }

    #[test]
    fn landing_progress_is_monotone_and_navigates_once() {
        let (mut nav, calls) = orchestrator();
        let skills = ObjectId(1);
        let mut clock = FrameClock::default();

        nav.select_object(skills);
        run(&mut nav, &mut clock, 20);
        assert!(nav.confirm_selection(skills));

        let mut last = 0.0;
        for _ in 0..200 {
            clock = clock.advanced(DT);
            nav.tick(clock);
            let NavigationState::Landing { progress, .. } = nav.state() else {
                panic!("left landing unexpectedly");
            };
            assert!(progress >= last);
            assert!(progress <= 1.0);
            let expected_calls = if progress < 1.0 { 0 } else { 1 };
            assert_eq!(calls.lock().unwrap().len(), expected_calls, "at progress {progress}");
            last = progress;
        }

        assert_eq!(last, 1.0);
        assert_eq!(*calls.lock().unwrap(), vec!["skills".to_string()]);
        assert!(!nav.cancel());
    }

    #[test]
    fn landing_starts_from_live_pose() {
        let (mut nav, _) = orchestrator();
        let planet = ObjectId(0);
        let mut clock = FrameClock::default();

        nav.select_object(planet);
        run(&mut nav, &mut clock, 15);
        let before = nav.last_frame().expect("frame").objects[0].pose;

        nav.confirm_selection(planet);
        let after = nav.tick(clock.advanced(0.0)).objects[0].pose;
        assert!(after.translation.distance(before.translation) < 1e-5);
        assert!((after.scale - before.scale).abs() < 1e-5);
        assert_eq!(after.rotation, before.rotation);
    }

    #[test]
    fn confirm_without_any_frame_seeds_from_focus_pose() {
        let (mut nav, _) = orchestrator();
        let station = ObjectId(3);
        nav.select_object(station);
        assert!(nav.confirm_selection(station));

        let landed = nav.tick(FrameClock::new(0.0, 0.0)).objects[3].pose;
        let focus = nav.controller(station).expect("controller").focus_pose(1.0);
        assert!(landed.translation.distance(focus.translation) < 1e-5);
    }

    #[test]
    fn hidden_objects_move_along_world_depth_after_formation_turns() {
        let (mut nav, _) = orchestrator();
        let skills = ObjectId(1);
        let contact = ObjectId(2);
        let mut clock = FrameClock::default();

        run(&mut nav, &mut clock, 5);
        let before = nav.last_frame().expect("frame").objects[contact.0].pose.translation;

        nav.select_object(skills);
        run(&mut nav, &mut clock, 400);
        assert!(!nav.formation().current().is_identity());
        let after = nav.last_frame().expect("frame").objects[contact.0].pose.translation;

        let delta = after - before;
        assert!(delta.z.abs() > delta.x.abs(), "delta {delta}");
        // Contact sits behind the focus depth, so it recedes from the camera.
        assert!(delta.z < -HIDDEN_DEPTH_OFFSET * 0.9, "delta {delta}");
    }

    #[test]
    fn hidden_direction_uses_dominant_focus_depth() {
        let (mut nav, _) = orchestrator();
        let projects = ObjectId(0);
        let about = ObjectId(3);
        let mut clock = FrameClock::default();

        run(&mut nav, &mut clock, 1);
        let before = nav.last_frame().expect("frame").objects[projects.0].pose.translation;

        // Projects sits in front of the regular focus depth but behind the
        // station's, so focusing the station sends it away from the camera.
        nav.select_object(about);
        run(&mut nav, &mut clock, 300);
        let after = nav.last_frame().expect("frame").objects[projects.0].pose.translation;
        assert!(after.z < before.z - HIDDEN_DEPTH_OFFSET * 0.9, "{before} -> {after}");
    }

    #[test]
    fn confirm_requires_the_focused_object() {
        let (mut nav, _) = orchestrator();
        assert!(!nav.confirm_selection(ObjectId(0)));
        nav.select_object(ObjectId(0));
        assert!(!nav.confirm_selection(ObjectId(2)));
        assert_eq!(nav.state(), NavigationState::Focused(ObjectId(0)));
    }

    #[test]
    fn traverse_walks_the_ring_and_never_returns_to_idle() {
        let (mut nav, _) = orchestrator();
        assert!(!nav.traverse(1));

        nav.select_object(ObjectId(3));
        assert!(nav.traverse(1));
        assert_eq!(nav.state(), NavigationState::Focused(ObjectId(0)));
        assert!(nav.traverse(-1));
        assert!(nav.traverse(-1));
        assert_eq!(nav.state(), NavigationState::Focused(ObjectId(2)));

        for step in 0..9 {
            nav.traverse(if step % 3 == 0 { -1 } else { 1 });
            assert!(nav.state().active_id().is_some());
        }
    }

    #[test]
    fn traverse_retargets_formation_onto_next_object() {
        let (mut nav, _) = orchestrator();
        nav.select_object(ObjectId(1));
        nav.traverse(1);

        let contact = nav.controller(ObjectId(2)).expect("controller");
        let expected = FormationTransform::centring(contact.base_position(), false);
        assert_eq!(nav.formation().target(), expected);
    }

    #[test]
    fn cancel_returns_everything_to_idle_motion() {
        let (mut nav, _) = orchestrator();
        let mut clock = FrameClock::default();

        nav.select_object(ObjectId(1));
        run(&mut nav, &mut clock, 60);

        nav.dispatch(NavigationIntent {
            click: Some(ClickTarget::EmptySpace),
            ..default()
        });
        assert_eq!(nav.state(), NavigationState::Idle);
        assert_eq!(nav.formation().target(), FormationTransform::IDENTITY);

        run(&mut nav, &mut clock, 400);
        assert!(nav.formation().current().is_identity());

        let frame = nav.last_frame().expect("frame");
        for object in &frame.objects {
            let idle = nav.controller(object.id).expect("controller").idle_pose(clock.elapsed, 1.0);
            assert!(object.pose.translation.distance(idle.translation) < 1e-5);
            assert!(object.pose.rotation.angle_between(idle.rotation) < 1e-3);
            assert!((object.pose.scale - idle.scale).abs() < 1e-3);
        }
    }

    #[test]
    fn clicks_follow_state_semantics() {
        let (mut nav, _) = orchestrator();
        let contact = ObjectId(2);

        nav.dispatch(NavigationIntent {
            click: Some(ClickTarget::EmptySpace),
            ..default()
        });
        assert_eq!(nav.state(), NavigationState::Idle);

        nav.dispatch(NavigationIntent {
            click: Some(ClickTarget::Object(contact)),
            ..default()
        });
        assert_eq!(nav.state(), NavigationState::Focused(contact));

        // Hover is ignored once something is focused.
        nav.dispatch(NavigationIntent {
            hovered: Some(ObjectId(0)),
            ..default()
        });
        assert_eq!(nav.state(), NavigationState::Focused(contact));

        nav.dispatch(NavigationIntent {
            click: Some(ClickTarget::Object(contact)),
            ..default()
        });
        assert!(nav.state().is_landing());
    }

    #[test]
    fn reset_allows_a_second_navigation() {
        let (mut nav, calls) = orchestrator();
        let mut clock = FrameClock::default();

        nav.select_object(ObjectId(0));
        nav.confirm_selection(ObjectId(0));
        run(&mut nav, &mut clock, 150);

        nav.dispatch(NavigationIntent {
            requests: vec![NavigationRequest::Reset],
            ..default()
        });
        assert_eq!(nav.state(), NavigationState::Idle);
        assert_eq!(nav.snapshot().state, "idle");

        nav.select_object(ObjectId(2));
        nav.confirm_selection(ObjectId(2));
        run(&mut nav, &mut clock, 150);

        assert_eq!(
            *calls.lock().unwrap(),
            vec!["projects".to_string(), "contact".to_string()]
        );
    }

    #[test]
    fn snapshot_reports_string_ids_and_progress() {
        let (mut nav, _) = orchestrator();
        nav.select_object(ObjectId(3));
        assert_eq!(
            nav.snapshot(),
            StateSnapshot {
                state: "focused",
                id: Some("about".to_string()),
                progress: None,
            }
        );
        nav.confirm_selection(ObjectId(3));
        nav.tick(FrameClock::new(0.5, 0.5));
        let snapshot = nav.snapshot();
        assert_eq!(snapshot.state, "landing");
        assert_eq!(snapshot.progress, Some(0.25));
    }

    #[test]
    fn scale_tier_shrinks_idle_objects() {
        let (mut nav, _) = orchestrator();
        assert!(nav.set_scale_tier(ScaleTier::Mobile));
        assert!(!nav.set_scale_tier(ScaleTier::Mobile));
        let frame = nav.tick(FrameClock::new(0.0, DT));
        assert!((frame.objects[0].pose.scale - 1.5 * 0.6).abs() < 1e-5);
    }
}
