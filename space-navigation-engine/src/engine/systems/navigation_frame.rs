use crate::engine::camera::camera_rig::{CameraPose, NavigationCamera};
use crate::engine::input::intent::NavigationIntent;
use crate::engine::navigation::easing::approach;
use crate::engine::navigation::orchestrator::NavigationOrchestrator;
use crate::engine::navigation::state::FrameClock;
use crate::engine::objects::spawn::SceneObjectEntity;
use bevy::prelude::*;
use constants::camera::CAMERA_FOLLOW_RATE;

/// Consume this frame's intent, advance navigation once, then write every
/// object transform and ease the camera toward the rig's pose.
pub fn navigation_frame_system(
    time: Res<Time>,
    mut intent: ResMut<NavigationIntent>,
    mut orchestrator: ResMut<NavigationOrchestrator>,
    mut objects: Query<(&SceneObjectEntity, &mut Transform), Without<NavigationCamera>>,
    mut cameras: Query<(&mut Transform, &mut Projection), With<NavigationCamera>>,
) {
    orchestrator.dispatch(intent.take());
    let frame = orchestrator.tick(FrameClock::from_time(&time));

    for (entity, mut transform) in &mut objects {
        if let Some(object) = frame.objects.get(entity.0.0) {
            *transform = object.pose.to_transform();
        }
    }

    // Smooth camera movement
    let lerp_speed = (CAMERA_FOLLOW_RATE * time.delta_secs()).min(1.0);
    for (mut transform, mut projection) in &mut cameras {
        follow_camera_pose(&mut transform, &frame.camera, lerp_speed);
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.fov = approach(perspective.fov, frame.camera.fov_degrees.to_radians(), lerp_speed);
        }
    }
}

/// Move `transform` a fraction of the way toward `pose`.
pub fn follow_camera_pose(transform: &mut Transform, pose: &CameraPose, lerp_speed: f32) {
    let target = pose.to_transform();
    transform.translation = transform.translation.lerp(target.translation, lerp_speed);
    transform.rotation = transform.rotation.slerp(target.rotation, lerp_speed);
}
