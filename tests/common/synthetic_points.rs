use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use surface_anchor::types::FeaturePoint;

/// Generates a feature cloud with `inliers` points jittered around `height`
/// and `outliers` points displaced at least 40 units away from it.
pub fn noisy_floor(
    seed: u64,
    height: f32,
    jitter: f32,
    inliers: usize,
    outliers: usize,
) -> Vec<FeaturePoint> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut points = Vec::with_capacity(inliers + outliers);
    for _ in 0..inliers {
        let x = rng.gen_range(0.0..640.0);
        let dy = rng.gen_range(-jitter..=jitter);
        points.push(FeaturePoint::new(x, height + dy));
    }
    for _ in 0..outliers {
        let x = rng.gen_range(0.0..640.0);
        let magnitude = rng.gen_range(40.0..200.0);
        let offset = if rng.gen_bool(0.5) {
            magnitude
        } else {
            -magnitude
        };
        points.push(FeaturePoint::new(x, height + offset));
    }
    points
}
