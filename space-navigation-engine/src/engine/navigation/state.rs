use crate::engine::assets::scene_catalog::ObjectId;
use bevy::prelude::*;
use serde::Serialize;

/// The single navigation value. At most one object can be focused or
/// landing because there is only ever one active id.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum NavigationState {
    #[default]
    Idle,
    Hovered(ObjectId),
    Focused(ObjectId),
    Landing { id: ObjectId, progress: f32 },
}

impl NavigationState {
    /// The focused or landing object, if any.
    pub fn active_id(&self) -> Option<ObjectId> {
        match *self {
            Self::Focused(id) | Self::Landing { id, .. } => Some(id),
            Self::Idle | Self::Hovered(_) => None,
        }
    }

    pub fn hovered_id(&self) -> Option<ObjectId> {
        match *self {
            Self::Hovered(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_landing(&self) -> bool {
        matches!(self, Self::Landing { .. })
    }

    /// Short label for logs and host notifications.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Hovered(_) => "hovered",
            Self::Focused(_) => "focused",
            Self::Landing { .. } => "landing",
        }
    }

    /// How `id` should animate this frame.
    pub fn role_of(&self, id: ObjectId, seed: Option<LandingSeed>) -> ObjectRole {
        match *self {
            Self::Idle => ObjectRole::Ambient { hovered: false },
            Self::Hovered(hovered) => ObjectRole::Ambient {
                hovered: hovered == id,
            },
            Self::Focused(active) if active == id => ObjectRole::Focused,
            Self::Landing {
                id: active,
                progress,
            } if active == id => match seed {
                Some(seed) => ObjectRole::Landing { seed, progress },
                None => ObjectRole::Focused,
            },
            Self::Focused(_) | Self::Landing { .. } => ObjectRole::Hidden,
        }
    }
}

/// Per-object view of the navigation state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObjectRole {
    /// Nothing is focused; free procedural motion.
    Ambient { hovered: bool },
    Focused,
    Landing { seed: LandingSeed, progress: f32 },
    /// Another object is focused or landing.
    Hidden,
}

impl ObjectRole {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Focused | Self::Landing { .. })
    }

    /// Only ambient objects ride the formation; active and hidden objects
    /// live in world space so depth always means distance from the camera.
    pub fn rides_formation(&self) -> bool {
        matches!(self, Self::Ambient { .. })
    }
}

/// Position, orientation and uniform scale of one object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectPose {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: f32,
}

impl ObjectPose {
    pub fn to_transform(&self) -> Transform {
        Transform {
            translation: self.translation,
            rotation: self.rotation,
            scale: Vec3::splat(self.scale),
        }
    }
}

/// Pose of the focused object captured at the confirming click, so landing
/// starts where the object actually is on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandingSeed {
    pub translation: Vec3,
    pub scale: f32,
    pub rotation: Quat,
}

impl From<ObjectPose> for LandingSeed {
    fn from(pose: ObjectPose) -> Self {
        Self {
            translation: pose.translation,
            scale: pose.scale,
            rotation: pose.rotation,
        }
    }
}

/// Wall-clock timing of the frame being simulated, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameClock {
    pub elapsed: f32,
    pub delta: f32,
}

impl FrameClock {
    pub fn new(elapsed: f32, delta: f32) -> Self {
        Self { elapsed, delta }
    }

    pub fn from_time(time: &Time) -> Self {
        Self {
            elapsed: time.elapsed_secs(),
            delta: time.delta_secs(),
        }
    }

    /// Clock for the next frame at a fixed step.
    pub fn advanced(&self, delta: f32) -> Self {
        Self {
            elapsed: self.elapsed + delta,
            delta,
        }
    }
}

/// Host-facing snapshot of the navigation state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateSnapshot {
    pub state: &'static str,
    pub id: Option<String>,
    pub progress: Option<f32>,
}
