use crate::engine::assets::scene_catalog::ObjectId;
use bevy::prelude::*;

/// Ray-sphere intersection, returns the nearest non-negative distance along
/// `dir` or None. `dir` need not be normalised.
pub fn ray_sphere_hit_t(origin: Vec3, dir: Vec3, centre: Vec3, radius: f32) -> Option<f32> {
    let a = dir.length_squared();
    if a == 0.0 || radius <= 0.0 {
        return None;
    }

    let oc = origin - centre;
    let half_b = oc.dot(dir);
    let c = oc.length_squared() - radius * radius;
    let discriminant = half_b * half_b - a * c;
    if discriminant < 0.0 {
        return None;
    }

    let root = discriminant.sqrt();
    let near = (-half_b - root) / a;
    let far = (-half_b + root) / a;
    if far < 0.0 {
        return None;
    }
    // Origin inside the sphere counts as a hit at the exit point.
    Some(if near >= 0.0 { near } else { far })
}

/// Closest sphere along the ray among `(id, centre, radius)` targets.
pub fn nearest_hit(
    origin: Vec3,
    dir: Vec3,
    targets: &[(ObjectId, Vec3, f32)],
) -> Option<(ObjectId, f32)> {
    targets
        .iter()
        .filter_map(|&(id, centre, radius)| {
            ray_sphere_hit_t(origin, dir, centre, radius).map(|t| (id, t))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
}
