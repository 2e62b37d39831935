//! Per-object animation and scene entities.

/// Object animation state and hit-sphere geometry.
///
/// Produces one pose per frame from the object's role: ambient idle motion,
/// focus, landing, or hidden.
pub mod controller;

/// Seeded procedural float, drift and spin.
pub mod idle_motion;

/// Scene entity spawning for catalog objects.
pub mod spawn;
