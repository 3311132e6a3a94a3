/// Parameters controlling the RANSAC consensus loop.
///
/// Defaults match the tuning the capture prototypes shipped with: 100
/// candidates against a 5 px vertical tolerance.
#[derive(Clone, Copy, Debug)]
pub struct RansacParams {
    /// Number of random 3-point candidates to evaluate.
    pub iterations: usize,
    /// Maximum vertical distance (feature-space units) for a point to count
    /// as an inlier of a candidate plane.
    pub distance_threshold: f32,
}

impl Default for RansacParams {
    fn default() -> Self {
        Self {
            iterations: 100,
            distance_threshold: 5.0,
        }
    }
}

/// Parameters for the frame-to-frame adoption loop.
#[derive(Clone, Copy, Debug)]
pub struct TrackerParams {
    pub ransac: RansacParams,
    /// Minimum consensus size before an estimate replaces the current
    /// reference surface.
    pub min_inliers: usize,
}

impl Default for TrackerParams {
    fn default() -> Self {
        Self {
            ransac: RansacParams::default(),
            min_inliers: 12,
        }
    }
}
