//! Serializable reports surfaced by the estimation entry points and the
//! demo binaries.

use crate::types::PlaneModel;
use serde::Serialize;

/// Summary of one RANSAC estimation call.
#[derive(Clone, Debug, Serialize)]
pub struct EstimateReport {
    /// Best plane found, `None` when no candidate was ever evaluated.
    pub plane: Option<PlaneModel>,
    pub total_points: usize,
    pub iterations_requested: usize,
    /// Iterations that drew a sample and scored a candidate.
    pub iterations_evaluated: usize,
    /// Iterations skipped for lack of sample points.
    pub iterations_skipped: usize,
    /// Consensus size of the returned plane.
    pub best_inliers: usize,
    /// `best_inliers / total_points`, 0 when the point set is empty.
    pub inlier_ratio: f32,
    pub elapsed_ms: f64,
}
