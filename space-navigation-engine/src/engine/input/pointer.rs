use super::intent::{ClickTarget, NavigationIntent};
use super::ray::nearest_hit;
use crate::engine::camera::camera_rig::NavigationCamera;
use crate::engine::navigation::orchestrator::NavigationOrchestrator;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Casts a ray from the pointer against last frame's hit spheres, updating
/// the hovered id and recording a click when the primary button or a touch
/// goes down.
pub fn pointer_picking_system(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<NavigationCamera>>,
    buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    orchestrator: Res<NavigationOrchestrator>,
    mut intent: ResMut<NavigationIntent>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };

    let tap = touches.iter_just_pressed().next().map(|touch| touch.position());
    let Some(cursor) = tap.or_else(|| window.cursor_position()) else {
        // Pointer left the canvas.
        intent.hovered = None;
        return;
    };

    let hit = camera
        .viewport_to_world(camera_transform, cursor)
        .ok()
        .and_then(|ray| nearest_hit(ray.origin, *ray.direction, &orchestrator.hit_targets()))
        .map(|(id, _)| id);

    intent.hovered = hit;

    if buttons.just_pressed(MouseButton::Left) || tap.is_some() {
        intent.click = Some(match hit {
            Some(id) => ClickTarget::Object(id),
            None => ClickTarget::EmptySpace,
        });
    }
}
