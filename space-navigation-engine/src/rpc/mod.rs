//! JSON-RPC 2.0 communication layer for host page integration.
//!
//! Implements bidirectional messaging between the Bevy engine and the page
//! embedding it via iframe postMessage, supporting both request-response and
//! notification patterns.
//!
//! ## Message Flow
//!
//! ```text
//! Host (Parent Window)   <──postMessage──>  Bevy (iframe)
//!        │                                        │
//!        ├─ Request (with ID) ──────────────────> │
//!        │                                        ├─ Queue navigation intent
//!        │ <───────────────── Response (with ID) ─┤
//!        │                                        │
//!        │ <────────── Notification (no ID) ─────┤
//! ```
//!
//! Navigation requests never change state directly. They are queued on the
//! `NavigationIntent` resource and applied by the next navigation tick, so
//! the host and pointer input go through the same transition rules.
//!
//! ## Error Handling
//!
//! Standard JSON-RPC 2.0 error codes:
//! - `-32601`: Method not found
//! - `-32602`: Invalid params
//! - `-32603`: Internal error (scene still loading)
//!
//! ## Requests
//!
//! - `get_catalog`: Object summaries plus `fallback_links` for hosts without 3D
//! - `get_state`: Current navigation state and viewport scale tier
//! - `select_object {id}`: Focus an object
//! - `confirm_selection {id}`: Start landing on the focused object
//! - `cancel`: Leave focus
//! - `traverse {direction}`: Move focus to the next (`1`) or previous (`-1`) object
//! - `reset`: Return to idle from any state
//!
//! ## Notifications
//!
//! - `scene_ready {objects}`: Catalog loaded and objects spawned
//! - `navigation_state {state, id, progress}`: State changed
//! - `overlay_changed {id, title, description, stats} | null`: Hover overlay
//! - `navigate {section}`: Landing completed
//! - `debug_message {message}`: Unparseable incoming message

/// JSON-RPC 2.0 bidirectional communication system for host integration.
///
/// Handles request-response patterns, notifications, and WASM message listeners.
pub mod web_rpc;
