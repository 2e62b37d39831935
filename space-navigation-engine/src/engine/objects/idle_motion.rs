use bevy::prelude::*;
use constants::animation::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded parameters of an object's free-floating motion. Sampling is a pure
/// function of elapsed time, so the same seed always replays the same path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdleMotion {
    /// Signed angular speed per axis, radians per second.
    pub rotation_speed: Vec3,
    pub float_speed: f32,
    pub drift_speed: Vec2,
}

impl IdleMotion {
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let spin = |rng: &mut StdRng| {
            let speed = rng.gen_range(ROTATION_SPEED_MIN..ROTATION_SPEED_MAX);
            if rng.gen_bool(0.5) { speed } else { -speed }
        };

        let rotation_speed = Vec3::new(spin(&mut rng), spin(&mut rng), spin(&mut rng));
        let float_speed = rng.gen_range(FLOAT_SPEED_MIN..FLOAT_SPEED_MAX);
        let drift_speed = Vec2::new(
            rng.gen_range(DRIFT_SPEED_MIN..DRIFT_SPEED_MAX),
            rng.gen_range(DRIFT_SPEED_MIN..DRIFT_SPEED_MAX),
        );

        Self {
            rotation_speed,
            float_speed,
            drift_speed,
        }
    }

    /// Position offset from the base position at time `t`.
    pub fn offset(&self, t: f32) -> Vec3 {
        let float_y = (t * self.float_speed).sin() * FLOAT_AMPLITUDE;
        let drift_x = (t * self.drift_speed.x).sin() * DRIFT_AMPLITUDE_X;
        let drift_y = (t * self.drift_speed.y).cos() * DRIFT_AMPLITUDE_Y;
        Vec3::new(drift_x, float_y + drift_y, 0.0)
    }

    pub fn rotation(&self, t: f32) -> Quat {
        let angles = self.rotation_speed * t;
        Quat::from_euler(EulerRot::XYZ, angles.x, angles.y, angles.z)
    }

    /// Local translation and rotation at time `t`.
    pub fn sample(&self, base_position: Vec3, t: f32) -> (Vec3, Quat) {
        (base_position + self.offset(t), self.rotation(t))
    }
}
