use crate::engine::navigation::orchestrator::{NavigationOrchestrator, OverlayPayload};
use crate::rpc::web_rpc::WebRpcInterface;
use bevy::prelude::*;

/// Native text label showing the hovered object's metadata.
#[derive(Component)]
pub struct HoverLabel;

pub fn overlay_text(payload: Option<&OverlayPayload>) -> String {
    let Some(payload) = payload else {
        return String::new();
    };

    let mut text = format!("{}\n{}", payload.title, payload.description);
    for stat in &payload.stats {
        text.push_str("\n- ");
        text.push_str(stat);
    }
    text
}

/// Notification params: the payload, or `null` once nothing is hovered.
pub fn overlay_params(overlay: Option<&OverlayPayload>) -> serde_json::Result<serde_json::Value> {
    match overlay {
        Some(payload) => serde_json::to_value(payload),
        None => Ok(serde_json::Value::Null),
    }
}

/// Publish overlay changes to the host page and the native label.
pub fn overlay_system(
    orchestrator: Res<NavigationOrchestrator>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut labels: Query<&mut Text, With<HoverLabel>>,
    mut last: Local<Option<OverlayPayload>>,
) {
    let overlay = orchestrator.overlay();
    if overlay == *last {
        return;
    }

    match overlay_params(overlay.as_ref()) {
        Ok(params) => rpc_interface.send_notification("overlay_changed", params),
        Err(e) => error!("Failed to serialise overlay: {}", e),
    }

    for mut text in &mut labels {
        text.0 = overlay_text(overlay.as_ref());
    }

    *last = overlay;
}
