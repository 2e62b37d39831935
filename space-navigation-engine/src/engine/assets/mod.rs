//! Scene catalog and model assets.
//!
//! Handles the JSON object catalog, its validation and the built-in scene,
//! plus the shared glTF scene handle cache.

/// Scene handle cache keyed by model path.
pub mod model_cache;

/// Ordered object catalog with metadata, ring order and validation.
pub mod scene_catalog;
