//! Catalog loading and scene construction.
//!
//! Loads the JSON object catalog, falls back to the built-in scene on
//! failure, spawns the object entities and starts navigation.

/// Catalog asset loading, validation fallback and transition to running.
pub mod catalog_loader;
