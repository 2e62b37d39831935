use crate::engine::assets::scene_catalog::ObjectId;
use bevy::prelude::*;

/// Where a click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Object(ObjectId),
    EmptySpace,
}

/// Explicit navigation request from the keyboard or the host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationRequest {
    Select(ObjectId),
    Confirm(ObjectId),
    Cancel,
    Traverse(i32),
    Reset,
}

/// Declarative input gathered between frames. Event handlers only write
/// here; the frame system consumes it before any transform is touched.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct NavigationIntent {
    /// Object under the pointer, refreshed by picking every frame.
    pub hovered: Option<ObjectId>,
    pub click: Option<ClickTarget>,
    pub requests: Vec<NavigationRequest>,
}

impl NavigationIntent {
    pub fn request(&mut self, request: NavigationRequest) {
        self.requests.push(request);
    }

    /// Take the one-shot parts of the intent, keeping the hover id.
    pub fn take(&mut self) -> NavigationIntent {
        NavigationIntent {
            hovered: self.hovered,
            click: self.click.take(),
            requests: std::mem::take(&mut self.requests),
        }
    }
}
