use crate::engine::navigation::orchestrator::NavigationOrchestrator;
use crate::engine::navigation::scale_tier::ScaleTier;
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

/// Re-evaluate the scale tier on resize, and once when navigation starts.
pub fn viewport_scale_system(
    mut resized: EventReader<WindowResized>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut orchestrator: ResMut<NavigationOrchestrator>,
) {
    let resized = resized.read().last().is_some();
    if !resized && !orchestrator.is_added() {
        return;
    }

    let Ok(window) = windows.single() else {
        return;
    };
    orchestrator.set_scale_tier(ScaleTier::from_width(window.width()));
}
