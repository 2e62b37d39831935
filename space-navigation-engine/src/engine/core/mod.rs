//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, scene setup and
//! plugin initialisation for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with catalog loading, navigation systems, lighting,
/// fog and the scene camera.
pub mod app_setup;

/// Application state machine from catalog loading to runtime navigation.
pub mod app_state;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
