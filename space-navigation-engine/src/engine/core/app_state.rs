use crate::engine::navigation::orchestrator::NavigationOrchestrator;
use crate::rpc::web_rpc::WebRpcInterface;
use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

// Tell the host the scene is interactive
pub fn announce_scene_ready(
    orchestrator: Res<NavigationOrchestrator>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    let catalog = orchestrator.catalog();
    rpc_interface.send_notification(
        "scene_ready",
        serde_json::json!({
            "objects": catalog.objects.iter().map(|o| o.id.as_str()).collect::<Vec<_>>(),
        }),
    );
}
