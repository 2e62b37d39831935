//! Shared tuning constants for the space navigation scene.
//!
//! Split by concern so the engine crate can pull in only what a system needs.

/// Idle motion, hover and per-frame convergence constants.
pub mod animation;

/// Camera home pose, sway and landing choreography.
pub mod camera;

/// Canonical focus slot, focus scale normalisation and formation depths.
pub mod focus;

/// Invisible hit-test sphere radii.
pub mod hitbox;

/// Asset paths relative to the asset root.
pub mod path;

/// Lighting and fog configuration.
pub mod render_settings;

/// Viewport width breakpoints and their uniform scale factors.
pub mod viewport;
