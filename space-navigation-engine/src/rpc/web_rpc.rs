use crate::engine::assets::scene_catalog::ObjectId;
use crate::engine::input::intent::{NavigationIntent, NavigationRequest};
use crate::engine::navigation::orchestrator::NavigationOrchestrator;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

/// JSON-RPC 2.0 request structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

/// JSON-RPC error structure following specification.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Resource managing bidirectional RPC communication between the host page and Bevy.
/// Handles both request-response patterns and notification broadcasting.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the host page without expecting response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    /// Queue response for transmission to the host page.
    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }
}

/// Plugin establishing WebRPC communication layer for iframe-based deployment.
pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .init_resource::<NavigationIntent>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (
                    process_incoming_messages,
                    handle_rpc_messages,
                    send_outgoing_messages,
                )
                    .chain(),
            );

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::Arc;
    use std::sync::Mutex;

    // Thread-safe message queue for cross-thread communication.
    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        // Filter messages to ensure they contain string data.
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();

            // Attempt JSON parsing to validate RPC format before queuing.
            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    if let Some(window) = window() {
        if let Err(e) =
            window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
        {
            error!("Failed to register message listener: {:?}", e);
        }
    }

    // Prevent closure from being dropped by transferring ownership to JS.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

/// Resource wrapping thread-safe message queue for WASM event handling.
#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

/// Event representing incoming RPC message from the host page.
#[derive(Event)]
struct IncomingRpcMessage {
    content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = if let Ok(mut queue) = queue_res.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    // Write events using the non-deprecated method.
    for message_str in messages {
        message_events.write(IncomingRpcMessage {
            content: message_str,
        });
    }
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    orchestrator: Option<Res<NavigationOrchestrator>>,
    mut intent: ResMut<NavigationIntent>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for event in events.read() {
        debug!("Received RPC: {}", event.content);

        match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => {
                if let Some(response) =
                    handle_rpc_request(&request, orchestrator.as_deref(), &mut intent)
                {
                    rpc_interface.queue_response(response);
                }
            }
            Err(parse_error) => {
                rpc_interface.send_notification(
                    "debug_message",
                    serde_json::json!({
                        "message": format!("Parse error: {}", parse_error)
                    }),
                );
            }
        }
    }
}

/// Handle individual RPC request and generate response based on method.
/// Commands sent without an id are still applied; only requests get a reply.
fn handle_rpc_request(
    request: &RpcRequest,
    orchestrator: Option<&NavigationOrchestrator>,
    intent: &mut NavigationIntent,
) -> Option<RpcResponse> {
    let result = match request.method.as_str() {
        "get_catalog" => ready(orchestrator).map(handle_get_catalog),
        "get_state" => ready(orchestrator).map(handle_get_state),
        "select_object" => ready(orchestrator).and_then(|nav| {
            handle_object_request(&request.params, nav, intent, NavigationRequest::Select)
        }),
        "confirm_selection" => ready(orchestrator).and_then(|nav| {
            handle_object_request(&request.params, nav, intent, NavigationRequest::Confirm)
        }),
        "traverse" => handle_traverse(&request.params, intent),
        "cancel" => Ok(queue_request(intent, NavigationRequest::Cancel)),
        "reset" => Ok(queue_request(intent, NavigationRequest::Reset)),
        _ => {
            warn!("Unknown RPC method: {}", request.method);
            let id = request.id.clone()?;
            return Some(create_error_response(
                id,
                -32601,
                "Method not found",
                Some(serde_json::json!({"method": request.method})),
            ));
        }
    };

    // Only generate responses for requests with IDs (notifications have no ID).
    let id = request.id.clone()?;

    match result {
        Ok(result_value) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: Some(result_value),
            error: None,
            id: Some(id),
        }),
        Err(error) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id: Some(id),
        }),
    }
}

fn ready(orchestrator: Option<&NavigationOrchestrator>) -> Result<&NavigationOrchestrator, RpcError> {
    orchestrator.ok_or_else(|| RpcError::internal_error("Scene is still loading"))
}

fn queue_request(intent: &mut NavigationIntent, request: NavigationRequest) -> serde_json::Value {
    info!("RPC navigation request queued: {:?}", request);
    intent.request(request);
    serde_json::json!({ "queued": true })
}

/// Catalog summary plus the static link list for hosts without 3D.
fn handle_get_catalog(orchestrator: &NavigationOrchestrator) -> serde_json::Value {
    let catalog = orchestrator.catalog();
    let objects: Vec<_> = catalog
        .objects
        .iter()
        .map(|object| {
            serde_json::json!({
                "id": object.id,
                "section": object.section,
                "title": object.metadata.title,
                "description": object.metadata.description,
                "stats": object.metadata.stats,
                "dominant": object.dominant,
            })
        })
        .collect();

    serde_json::json!({
        "objects": objects,
        "fallback_links": catalog.fallback_links(),
    })
}

fn handle_get_state(orchestrator: &NavigationOrchestrator) -> serde_json::Value {
    serde_json::json!({
        "navigation": orchestrator.snapshot(),
        "scale_tier": orchestrator.scale_tier(),
    })
}

/// Resolve the `id` parameter to an object and queue the request for it.
fn handle_object_request(
    params: &serde_json::Value,
    orchestrator: &NavigationOrchestrator,
    intent: &mut NavigationIntent,
    request: fn(ObjectId) -> NavigationRequest,
) -> Result<serde_json::Value, RpcError> {
    #[derive(serde::Deserialize)]
    struct ObjectParams {
        id: String,
    }

    let object_params = serde_json::from_value::<ObjectParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'id' parameter"))?;

    let id = orchestrator
        .catalog()
        .index_of(&object_params.id)
        .ok_or_else(|| RpcError::invalid_params(&format!("Unknown object: {}", object_params.id)))?;

    Ok(queue_request(intent, request(id)))
}

fn handle_traverse(
    params: &serde_json::Value,
    intent: &mut NavigationIntent,
) -> Result<serde_json::Value, RpcError> {
    #[derive(serde::Deserialize)]
    struct TraverseParams {
        direction: i32,
    }

    let traverse_params = serde_json::from_value::<TraverseParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'direction' parameter"))?;

    if traverse_params.direction != 1 && traverse_params.direction != -1 {
        return Err(RpcError::invalid_params("'direction' must be 1 or -1"));
    }

    Ok(queue_request(
        intent,
        NavigationRequest::Traverse(traverse_params.direction),
    ))
}

/// Create standardized error response with optional data payload.
fn create_error_response(
    id: serde_json::Value,
    code: i32,
    message: &str,
    data: Option<serde_json::Value>,
) -> RpcResponse {
    RpcResponse {
        jsonrpc: "2.0".to_string(),
        result: None,
        error: Some(RpcError {
            code,
            message: message.to_string(),
            data,
        }),
        id: Some(id),
    }
}

/// Send queued notifications and responses to the host page.
fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    // Send notifications first.
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }

    // Send responses second to maintain order.
    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

/// Send serialized message to the parent window.
fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Some(window) = window() {
                    if let Some(parent) = window.parent().ok().flatten() {
                        if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                            error!("Failed to send message to parent: {:?}", e);
                        }
                    } else {
                        warn!("No parent window available for message transmission");
                    }
                } else {
                    error!("Window object not available");
                }
            }
            Err(e) => {
                error!("Failed to serialize message: {}", e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        // No-op for non-WASM targets.
        let _ = message;
    }
}

/// Standard RPC error codes and constructors.
impl RpcError {
    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }

    pub fn internal_error(message: &str) -> Self {
        Self {
            code: -32603,
            message: message.to_string(),
            data: None,
        }
    }
}
