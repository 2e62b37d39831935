//! Runtime systems driving navigation each frame.
//!
//! Provides the per-frame navigation tick, host notifications for state,
//! overlay and navigation events, and viewport scale tracking.

/// Host notifications for completed landings and navigation state changes.
///
/// Drains the orchestrator callback queue into `navigate` RPC notifications.
pub mod navigation_events;

/// Single per-frame navigation update.
///
/// Applies gathered input, ticks the orchestrator, writes object transforms and eases the camera.
pub mod navigation_frame;

/// Hover overlay publishing to RPC and the native label.
pub mod overlay;

/// Viewport width tracking for responsive object scale.
pub mod viewport_scale;
