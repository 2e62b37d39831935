use super::intent::{NavigationIntent, NavigationRequest};
use crate::engine::navigation::orchestrator::NavigationOrchestrator;
use crate::engine::navigation::state::NavigationState;
use bevy::prelude::*;

/// Requests produced by this frame's key presses.
pub fn key_requests(
    just_pressed: impl Fn(KeyCode) -> bool,
    state: NavigationState,
) -> Vec<NavigationRequest> {
    let mut requests = Vec::new();

    if just_pressed(KeyCode::Escape) {
        requests.push(NavigationRequest::Cancel);
    }
    if just_pressed(KeyCode::ArrowRight) {
        requests.push(NavigationRequest::Traverse(1));
    }
    if just_pressed(KeyCode::ArrowLeft) {
        requests.push(NavigationRequest::Traverse(-1));
    }
    if just_pressed(KeyCode::Enter) {
        if let NavigationState::Focused(id) = state {
            requests.push(NavigationRequest::Confirm(id));
        }
    }

    requests
}

pub fn keyboard_navigation_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    orchestrator: Res<NavigationOrchestrator>,
    mut intent: ResMut<NavigationIntent>,
) {
    for request in key_requests(|key| keyboard.just_pressed(key), orchestrator.state()) {
        intent.request(request);
    }
}
