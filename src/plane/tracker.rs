//! Keeps the most recently adopted surface across repeated estimation runs.
//!
//! Feature clouds coming from a live session are noisy and intermittently
//! sparse, so a raw per-frame estimate would make the surface jitter or
//! vanish outright. [`SurfaceTracker`] smooths that out with a simple
//! policy: start from a caller-provided fallback plane, re-run the
//! estimator on every update and adopt the result only when its consensus
//! set is large enough to trust. Rejected updates leave the previous
//! surface in place.

use log::debug;
use rand::Rng;

use crate::plane::estimator::PlaneEstimator;
use crate::plane::options::TrackerParams;
use crate::types::{FeaturePoint, PlaneModel};

/// Stateful wrapper around [`PlaneEstimator`] with an adoption gate.
#[derive(Clone, Debug)]
pub struct SurfaceTracker {
    estimator: PlaneEstimator,
    min_inliers: usize,
    surface: PlaneModel,
    adopted: bool,
}

impl SurfaceTracker {
    /// Creates a tracker that reports `initial` until an estimate passes
    /// the inlier gate.
    pub fn new(params: TrackerParams, initial: PlaneModel) -> Self {
        Self {
            estimator: PlaneEstimator::new(params.ransac),
            min_inliers: params.min_inliers,
            surface: initial,
            adopted: false,
        }
    }

    /// Currently tracked surface (the fallback until the first adoption).
    pub fn surface(&self) -> &PlaneModel {
        &self.surface
    }

    /// Whether any estimate has replaced the initial fallback surface.
    pub fn has_adopted(&self) -> bool {
        self.adopted
    }

    /// Re-estimates from `points` and adopts the result when it is backed by
    /// at least the configured number of inliers.
    ///
    /// Returns the newly adopted surface, or `None` when this update was
    /// rejected and the tracker kept its previous plane.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        points: &[FeaturePoint],
        rng: &mut R,
    ) -> Option<&PlaneModel> {
        let (plane, report) = self.estimator.estimate_with_report(points, rng);
        let Some(plane) = plane else {
            debug!(
                "tracker: no candidate from {} points, keeping height {:.2}",
                report.total_points,
                self.surface.height()
            );
            return None;
        };
        if report.best_inliers < self.min_inliers {
            debug!(
                "tracker: rejected plane at height {:.2} ({} inliers < {} required)",
                plane.height(),
                report.best_inliers,
                self.min_inliers
            );
            return None;
        }
        self.surface = plane;
        self.adopted = true;
        Some(&self.surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plane::options::RansacParams;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn floor_points(height: f32, count: usize) -> Vec<FeaturePoint> {
        (0..count)
            .map(|i| FeaturePoint::new(i as f32, height))
            .collect()
    }

    #[test]
    fn reports_fallback_until_first_adoption() {
        let tracker = SurfaceTracker::new(TrackerParams::default(), PlaneModel::horizontal(-1.5));
        assert!(!tracker.has_adopted());
        assert_eq!(tracker.surface().height(), -1.5);
    }

    #[test]
    fn adopts_plane_backed_by_enough_inliers() {
        let params = TrackerParams {
            ransac: RansacParams::default(),
            min_inliers: 12,
        };
        let mut tracker = SurfaceTracker::new(params, PlaneModel::horizontal(0.0));
        let mut rng = StdRng::seed_from_u64(3);
        let adopted = tracker.update(&floor_points(-2.0, 20), &mut rng);
        assert!(adopted.is_some());
        assert!(tracker.has_adopted());
        assert_eq!(tracker.surface().height(), -2.0);
    }

    #[test]
    fn keeps_previous_surface_when_support_is_thin() {
        let params = TrackerParams {
            ransac: RansacParams::default(),
            min_inliers: 12,
        };
        let mut tracker = SurfaceTracker::new(params, PlaneModel::horizontal(0.5));
        let mut rng = StdRng::seed_from_u64(3);
        // Only 5 coplanar points: a valid candidate, but under the gate.
        assert!(tracker.update(&floor_points(-2.0, 5), &mut rng).is_none());
        assert!(!tracker.has_adopted());
        assert_eq!(tracker.surface().height(), 0.5);
    }

    #[test]
    fn too_few_points_is_a_rejected_update() {
        let mut tracker =
            SurfaceTracker::new(TrackerParams::default(), PlaneModel::horizontal(1.0));
        let mut rng = StdRng::seed_from_u64(3);
        assert!(tracker.update(&floor_points(0.0, 2), &mut rng).is_none());
        assert_eq!(tracker.surface().height(), 1.0);
    }
}
