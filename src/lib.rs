#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod anchor;
pub mod diagnostics;
pub mod gesture;
pub mod plane;
pub mod raycast;
pub mod types;

// Demo-binary configuration; public so the bins and external tooling can
// share the JSON formats.
pub mod config;

// --- High-level re-exports -------------------------------------------------

// Main entry points: estimator, resolver, and the values they trade in.
pub use crate::gesture::{GestureOptions, GesturePhase, GestureResolver};
pub use crate::plane::{PlaneEstimator, RansacParams};
pub use crate::types::{FeaturePoint, PlacementIntent, PlaneModel, TouchSample};

// Diagnostics returned by the reporting estimator entry point.
pub use crate::diagnostics::EstimateReport;

// Screen-to-world plumbing shared by the resolver and hosts.
pub use crate::raycast::{PerspectiveCamera, Ray, ResolveError, SceneRef};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use surface_anchor::prelude::*;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let floor: Vec<FeaturePoint> = (0..30)
///     .map(|i| FeaturePoint::new(i as f32 * 4.0, -1.5))
///     .collect();
///
/// let estimator = PlaneEstimator::default();
/// let mut rng = StdRng::seed_from_u64(7);
/// let plane = estimator.estimate(&floor, &mut rng).unwrap();
/// assert_eq!(plane.height(), -1.5);
/// ```
pub mod prelude {
    pub use crate::anchor::Anchor;
    pub use crate::gesture::{GestureOptions, GesturePhase, GestureResolver};
    pub use crate::plane::{PlaneEstimator, RansacParams, SurfaceTracker, TrackerParams};
    pub use crate::raycast::{PerspectiveCamera, RayProjector, ReferenceSurface, SceneRef};
    pub use crate::types::{FeaturePoint, PlacementIntent, PlaneModel, TouchSample, Viewport};
}
