/// Cubic ease-in-out over `t ∈ [0, 1]`.
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) * 0.5
    }
}

/// Move `current` a fixed fraction of the way to `target`.
pub fn approach(current: f32, target: f32, fraction: f32) -> f32 {
    current + (target - current) * fraction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_hits_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
        assert_eq!(ease_in_out_cubic(-1.0), 0.0);
        assert_eq!(ease_in_out_cubic(2.0), 1.0);
    }

    #[test]
    fn ease_is_monotonic() {
        let mut last = 0.0;
        for i in 1..=100 {
            let v = ease_in_out_cubic(i as f32 / 100.0);
            assert!(v >= last);
            last = v;
        }
    }
}
