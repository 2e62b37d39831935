//! Scene camera choreography.
//!
//! The rig derives a target pose from navigation state every frame; the
//! frame system eases the live camera toward it.

/// Camera marker, per-state camera profiles and landing dolly paths.
pub mod camera_rig;
