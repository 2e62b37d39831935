use crate::engine::navigation::orchestrator::NavigationOrchestrator;
use crate::engine::navigation::state::StateSnapshot;
use crate::rpc::web_rpc::WebRpcInterface;
use bevy::prelude::*;
use std::sync::{Arc, Mutex};

/// Sections produced by the navigation callback, waiting to be forwarded to
/// the host page.
#[derive(Resource, Clone, Default)]
pub struct NavigationOutbox(Arc<Mutex<Vec<String>>>);

impl NavigationOutbox {
    /// Callback for the orchestrator that queues each section.
    pub fn callback(&self) -> impl FnMut(&str) + Send + Sync + 'static {
        let queue = self.0.clone();
        move |section: &str| {
            if let Ok(mut queue) = queue.lock() {
                queue.push(section.to_string());
            }
        }
    }

    pub fn drain(&self) -> Vec<String> {
        match self.0.lock() {
            Ok(mut queue) => std::mem::take(&mut *queue),
            Err(_) => Vec::new(),
        }
    }
}

/// Forward completed landings to the host as `navigate` notifications.
pub fn navigation_outbox_system(
    outbox: Res<NavigationOutbox>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for section in outbox.drain() {
        info!("Navigating to section '{}'", section);
        rpc_interface.send_notification(
            "navigate",
            serde_json::json!({
                "section": section
            }),
        );
    }
}

/// Whether the host should hear about the new snapshot. Landing progress
/// alone is reported only when it completes.
fn state_changed(last: Option<&StateSnapshot>, current: &StateSnapshot) -> bool {
    match last {
        None => true,
        Some(last) => {
            last.state != current.state
                || last.id != current.id
                || (current.progress == Some(1.0) && last.progress != Some(1.0))
        }
    }
}

/// Notify the host whenever the navigation state changes.
pub fn navigation_state_notification_system(
    orchestrator: Res<NavigationOrchestrator>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut last: Local<Option<StateSnapshot>>,
) {
    let snapshot = orchestrator.snapshot();
    if !state_changed(last.as_ref(), &snapshot) {
        return;
    }

    match serde_json::to_value(&snapshot) {
        Ok(params) => rpc_interface.send_notification("navigation_state", params),
        Err(e) => error!("Failed to serialise navigation state: {}", e),
    }
    *last = Some(snapshot);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(state: &'static str, id: Option<&str>, progress: Option<f32>) -> StateSnapshot {
        StateSnapshot {
            state,
            id: id.map(str::to_string),
            progress,
        }
    }

    #[test]
    fn outbox_collects_callback_sections() {
        let outbox = NavigationOutbox::default();
        let mut callback = outbox.callback();
        callback("skills");
        callback("contact");
        assert_eq!(outbox.drain(), vec!["skills", "contact"]);
        assert!(outbox.drain().is_empty());
    }

    #[test]
    fn progress_ticks_are_not_state_changes() {
        let a = snapshot("landing", Some("skills"), Some(0.2));
        let b = snapshot("landing", Some("skills"), Some(0.4));
        let done = snapshot("landing", Some("skills"), Some(1.0));

        assert!(state_changed(None, &a));
        assert!(!state_changed(Some(&a), &b));
        assert!(state_changed(Some(&b), &done));
        assert!(!state_changed(Some(&done), &done));
        assert!(state_changed(Some(&done), &snapshot("idle", None, None)));
    }
}
