use bevy::prelude::*;
use std::collections::HashMap;

/// Scene handles memoized by model path, so objects sharing a model resolve
/// to the same load instead of re-fetching it.
#[derive(Resource, Default)]
pub struct ModelCache {
    scenes: HashMap<String, Handle<Scene>>,
}

impl ModelCache {
    /// Return the cached handle for `path`, invoking `load` only on a miss.
    pub fn get_or_load(
        &mut self,
        path: &str,
        load: impl FnOnce(&str) -> Handle<Scene>,
    ) -> Handle<Scene> {
        if let Some(handle) = self.scenes.get(path) {
            return handle.clone();
        }
        let handle = load(path);
        self.scenes.insert(path.to_string(), handle.clone());
        handle
    }

    /// Load the first glTF scene of `path` through the asset server.
    pub fn scene(&mut self, path: &str, asset_server: &AssetServer) -> Handle<Scene> {
        self.get_or_load(path, |p| {
            asset_server.load(GltfAssetLabel::Scene(0).from_asset(p.to_string()))
        })
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }
}
