use crate::engine::assets::model_cache::ModelCache;
use crate::engine::assets::scene_catalog::SceneCatalog;
use crate::engine::core::app_state::AppState;
use crate::engine::navigation::orchestrator::NavigationOrchestrator;
use crate::engine::objects::spawn::spawn_scene_objects;
use crate::engine::systems::navigation_events::NavigationOutbox;
use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::path::CATALOG_PATH;

#[derive(Resource, Default)]
pub struct CatalogLoader {
    handle: Option<Handle<SceneCatalog>>,
}

// Start the loading process
pub fn start_loading(mut catalog_loader: ResMut<CatalogLoader>, asset_server: Res<AssetServer>) {
    catalog_loader.handle = Some(asset_server.load(CATALOG_PATH));
}

/// Pick the catalog to run with. `None` while the asset is still loading.
pub fn resolve_catalog(loaded: Option<&SceneCatalog>, failed: bool) -> Option<SceneCatalog> {
    match loaded {
        Some(catalog) => match catalog.validate() {
            Ok(()) => {
                info!("✓ Catalog loaded with {} objects", catalog.len());
                Some(catalog.clone())
            }
            Err(e) => {
                warn!("Catalog rejected ({}), using built-in scene", e);
                Some(SceneCatalog::builtin())
            }
        },
        None if failed => {
            warn!("Catalog '{}' failed to load, using built-in scene", CATALOG_PATH);
            Some(SceneCatalog::builtin())
        }
        None => None,
    }
}

// Build the navigation scene once the catalog is available
pub fn load_catalog_system(
    catalog_loader: Res<CatalogLoader>,
    catalogs: Res<Assets<SceneCatalog>>,
    asset_server: Res<AssetServer>,
    outbox: Res<NavigationOutbox>,
    mut models: ResMut<ModelCache>,
    mut commands: Commands,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(ref handle) = catalog_loader.handle else {
        return;
    };

    let failed = matches!(asset_server.load_state(handle), LoadState::Failed(_));
    let Some(catalog) = resolve_catalog(catalogs.get(handle), failed) else {
        return;
    };

    spawn_scene_objects(&mut commands, &catalog, &mut models, &asset_server);
    commands.insert_resource(NavigationOrchestrator::new(catalog, outbox.callback()));

    println!("→ Catalog ready, transitioning to Running state");
    next_state.set(AppState::Running);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waits_while_loading() {
        assert!(resolve_catalog(None, false).is_none());
    }

    #[test]
    fn failed_load_falls_back_to_builtin() {
        assert_eq!(resolve_catalog(None, true), Some(SceneCatalog::builtin()));
    }

    #[test]
    fn invalid_catalog_falls_back_to_builtin() {
        let empty = SceneCatalog { objects: vec![] };
        assert_eq!(resolve_catalog(Some(&empty), false), Some(SceneCatalog::builtin()));
    }

    #[test]
    fn valid_catalog_is_used_as_is() {
        let mut catalog = SceneCatalog::builtin();
        catalog.objects.truncate(2);
        assert_eq!(resolve_catalog(Some(&catalog), false), Some(catalog.clone()));
    }
}
