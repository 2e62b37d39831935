use crate::engine::assets::model_cache::ModelCache;
use crate::engine::assets::scene_catalog::{ObjectId, SceneCatalog};
use bevy::prelude::*;

/// Links a spawned model to its catalog entry.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneObjectEntity(pub ObjectId);

/// Spawn one scene root per catalog entry, sharing model handles between
/// entries that use the same file.
pub fn spawn_scene_objects(
    commands: &mut Commands,
    catalog: &SceneCatalog,
    models: &mut ModelCache,
    asset_server: &AssetServer,
) {
    for (index, object) in catalog.objects.iter().enumerate() {
        let scene = models.scene(&object.model_path, asset_server);
        commands.spawn((
            SceneRoot(scene),
            Transform::from_translation(object.base_position())
                .with_scale(Vec3::splat(object.scale)),
            SceneObjectEntity(ObjectId(index)),
            Name::new(object.id.clone()),
        ));
    }

    info!(
        "Spawned {} scene objects from {} model files",
        catalog.len(),
        models.len()
    );
}
