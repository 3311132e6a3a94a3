//! Horizontal-plane estimation from sparse feature points.
//!
//! Overview
//! - [`estimator`] fits a single horizontal plane to a 2D feature cloud
//!   (lateral offset + height per point) with a RANSAC consensus loop:
//!   sample three distinct points, propose the plane at their mean height,
//!   count points within a vertical distance threshold, keep the best.
//! - [`tracker`] wraps the estimator with session state: it holds a fallback
//!   surface and only adopts a fresh estimate when enough inliers back it.
//! - [`options`] carries the tuning knobs for both, with defaults matched to
//!   handheld AR feature clouds.
//!
//! Key ideas
//! - The plane family is deliberately restricted to horizontal (normal
//!   `(0, 1, 0)`), so a candidate is fully described by its height and the
//!   residual is a plain vertical distance. Floors and tabletops are the
//!   target; slanted surfaces are out of scope.
//! - RANSAC never fails once it can sample: when no candidate collects a
//!   single inlier the last evaluated candidate is still returned, so a
//!   degenerate cloud yields a usable (if rough) surface instead of nothing.
//! - Randomness comes from a caller-supplied [`rand::Rng`], which keeps
//!   replays and tests deterministic with a seeded generator.

pub mod estimator;
pub mod options;
pub mod tracker;

pub use estimator::PlaneEstimator;
pub use options::{RansacParams, TrackerParams};
pub use tracker::SurfaceTracker;
