use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Arena index of a catalog entry. Stable for the lifetime of a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub usize);

/// Descriptive text shown by the hover overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectMetadata {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub stats: Vec<String>,
}

/// Immutable catalog entry for one selectable object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub id: String,
    pub model_path: String,
    pub position: [f32; 3],
    pub scale: f32,
    /// Content identifier handed to the host once landing completes.
    pub section: String,
    /// Corrects the focus pose for off-centre model geometry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_offset: Option<[f32; 3]>,
    /// The one disproportionately large, sparse model in the scene.
    #[serde(default)]
    pub dominant: bool,
    /// Fixed seed for the procedural idle motion.
    pub seed: u64,
    pub metadata: ObjectMetadata,
}

impl SceneObject {
    pub fn base_position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn focus_offset(&self) -> Vec3 {
        self.focus_offset.map(Vec3::from_array).unwrap_or(Vec3::ZERO)
    }
}

/// Static link used by hosts that cannot render the 3D scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallbackLink {
    pub title: String,
    pub section: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("catalog contains no objects")]
    Empty,

    #[error("duplicate object id '{0}'")]
    DuplicateId(String),

    #[error("object '{id}' has invalid scale {scale}")]
    InvalidScale { id: String, scale: f32 },

    #[error("more than one dominant object: '{0}' and '{1}'")]
    MultipleDominant(String, String),
}

/// Ordered object catalog as a Bevy asset. Entry order is the ring order
/// used for traversal.
#[derive(Asset, Debug, Clone, PartialEq, Serialize, Deserialize, TypePath, Resource)]
pub struct SceneCatalog {
    pub objects: Vec<SceneObject>,
}

impl SceneCatalog {
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id.0)
    }

    /// Resolve a string id (as used by the host) to its arena index.
    pub fn index_of(&self, id: &str) -> Option<ObjectId> {
        self.objects.iter().position(|o| o.id == id).map(ObjectId)
    }

    /// Neighbour of `id` in ring order, wrapping at both ends.
    pub fn ring_neighbour(&self, id: ObjectId, direction: i32) -> ObjectId {
        let len = self.objects.len() as i64;
        if len == 0 {
            return id;
        }
        let next = (id.0 as i64 + direction as i64).rem_euclid(len);
        ObjectId(next as usize)
    }

    pub fn fallback_links(&self) -> Vec<FallbackLink> {
        self.objects
            .iter()
            .map(|o| FallbackLink {
                title: o.metadata.title.clone(),
                section: o.section.clone(),
            })
            .collect()
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.objects.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        let mut dominant: Option<&str> = None;
        for object in &self.objects {
            if !seen.insert(object.id.as_str()) {
                return Err(CatalogError::DuplicateId(object.id.clone()));
            }
            if !object.scale.is_finite() || object.scale <= 0.0 {
                return Err(CatalogError::InvalidScale {
                    id: object.id.clone(),
                    scale: object.scale,
                });
            }
            if object.dominant {
                if let Some(first) = dominant {
                    return Err(CatalogError::MultipleDominant(
                        first.to_string(),
                        object.id.clone(),
                    ));
                }
                dominant = Some(object.id.as_str());
            }
        }
        Ok(())
    }

    /// The four-object scene used when no catalog asset can be loaded.
    pub fn builtin() -> Self {
        Self {
            objects: vec![
                builtin_entry(
                    "projects",
                    "3D planets/planet1.glb",
                    [0.0, -4.0, 4.0],
                    1.5,
                    None,
                    false,
                    0x5eed_0001,
                    "Projects Galaxy",
                    "Things I have built, shipped and broken along the way.",
                    &["12 projects", "4 languages", "2 hackathon wins"],
                ),
                builtin_entry(
                    "skills",
                    "3D planets/planet2.glb",
                    [-5.0, 1.0, 0.0],
                    1.0,
                    None,
                    false,
                    0x5eed_0002,
                    "Skills Nebula",
                    "Languages, frameworks and tools in orbit.",
                    &["Frontend", "Backend", "3D graphics"],
                ),
                builtin_entry(
                    "contact",
                    "3D planets/planet3.glb",
                    [0.0, 2.0, -6.0],
                    0.9,
                    None,
                    false,
                    0x5eed_0003,
                    "Contact Portal",
                    "Open a channel and say hello.",
                    &["Email", "GitHub", "LinkedIn"],
                ),
                builtin_entry(
                    "about",
                    "3D planets/space_station.glb",
                    [5.5, 0.5, 0.5],
                    0.025,
                    Some([0.0, -0.4, 0.0]),
                    true,
                    0x5eed_0004,
                    "About Station",
                    "Where the crew lives: background and story.",
                    &["Student", "Builder", "Explorer"],
                ),
            ],
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn builtin_entry(
    id: &str,
    model_path: &str,
    position: [f32; 3],
    scale: f32,
    focus_offset: Option<[f32; 3]>,
    dominant: bool,
    seed: u64,
    title: &str,
    description: &str,
    stats: &[&str],
) -> SceneObject {
    SceneObject {
        id: id.to_string(),
        model_path: model_path.to_string(),
        position,
        scale,
        section: id.to_string(),
        focus_offset,
        dominant,
        seed,
        metadata: ObjectMetadata {
            title: title.to_string(),
            description: description.to_string(),
            stats: stats.iter().map(|s| s.to_string()).collect(),
        },
    }
}
