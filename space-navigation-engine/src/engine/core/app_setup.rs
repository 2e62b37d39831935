use bevy::asset::AssetMetaCheck;
use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::camera::{CAMERA_FOV_DEGREES, CAMERA_HOME};
use constants::path::CATALOG_EXTENSION;
use constants::render_settings::*;

// Crate engine modules
use crate::engine::assets::model_cache::ModelCache;
use crate::engine::assets::scene_catalog::SceneCatalog;
use crate::engine::camera::camera_rig::NavigationCamera;
use crate::engine::core::app_state::{AppState, announce_scene_ready};
use crate::engine::core::window_config::create_window_config;
use crate::engine::input::intent::NavigationIntent;
use crate::engine::input::keyboard::keyboard_navigation_system;
use crate::engine::input::pointer::pointer_picking_system;
use crate::engine::loading::catalog_loader::{CatalogLoader, load_catalog_system, start_loading};
use crate::engine::systems::navigation_events::{
    NavigationOutbox, navigation_outbox_system, navigation_state_notification_system,
};
use crate::engine::systems::navigation_frame::navigation_frame_system;
use crate::engine::systems::overlay::{HoverLabel, overlay_system};
use crate::engine::systems::viewport_scale::viewport_scale_system;
// Create Web RPC modules
use crate::rpc::web_rpc::WebRpcPlugin;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        // Registers SceneCatalog as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<SceneCatalog>::new(&[CATALOG_EXTENSION]))
        .add_plugins(WebRpcPlugin)
        .insert_resource(ClearColor(fog_colour()))
        .insert_resource(AmbientLight {
            color: Color::WHITE,
            brightness: AMBIENT_BRIGHTNESS,
            ..default()
        });

    // Initialise resources early
    app.init_resource::<CatalogLoader>()
        .init_resource::<ModelCache>()
        .init_resource::<NavigationIntent>()
        .init_resource::<NavigationOutbox>();

    // State-based system scheduling
    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            load_catalog_system.run_if(in_state(AppState::Loading)),
        )
        .add_systems(OnEnter(AppState::Running), announce_scene_ready);

    // Input is gathered before the single navigation tick; notifications
    // read the state it produced.
    let runtime_systems = (
        (
            pointer_picking_system,
            keyboard_navigation_system,
            viewport_scale_system,
        ),
        navigation_frame_system,
        (
            navigation_outbox_system,
            navigation_state_notification_system,
            overlay_system,
        ),
    )
        .chain();

    app.add_systems(Update, runtime_systems.run_if(in_state(AppState::Running)));

    app
}

fn fog_colour() -> Color {
    let [r, g, b] = FOG_COLOUR;
    Color::srgb(r, g, b)
}

fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: MAIN_LIGHT_ILLUMINANCE,
            ..default()
        },
        Transform::from_translation(MAIN_LIGHT_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        DirectionalLight {
            illuminance: FILL_LIGHT_ILLUMINANCE,
            ..default()
        },
        Transform::from_translation(FILL_LIGHT_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        PointLight {
            intensity: POINT_LIGHT_INTENSITY,
            ..default()
        },
        Transform::from_translation(POINT_LIGHT_POSITION),
    ));
}

fn create_navigation_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            ..default()
        }),
        Transform::from_translation(CAMERA_HOME).looking_at(Vec3::ZERO, Vec3::Y),
        DistanceFog {
            color: fog_colour(),
            falloff: FogFalloff::Linear {
                start: FOG_NEAR,
                end: FOG_FAR,
            },
            ..default()
        },
        NavigationCamera,
    ));
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands) {
    spawn_lighting(&mut commands);
    create_navigation_camera(&mut commands);

    #[cfg(not(target_arch = "wasm32"))]
    {
        create_native_overlays(&mut commands);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn create_native_overlays(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    left: Val::Px(12.0),
                    ..default()
                },
                HoverLabel,
            ));
        });
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
