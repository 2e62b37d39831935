//! Navigation state machine and the shared formation transform.
//!
//! The orchestrator owns the single [`state::NavigationState`] value and
//! turns it, once per frame, into object and camera poses.

/// Easing curves and scalar interpolation.
pub mod easing;

/// Group rotation and depth shift that re-centres the focused object.
pub mod formation;

/// Input dispatch, per-frame ticking and the navigation callback.
pub mod orchestrator;

/// Viewport size classes and their scale factors.
pub mod scale_tier;

/// Navigation states, per-object roles and frame timing.
pub mod state;
