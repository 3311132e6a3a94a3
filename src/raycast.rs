//! Screen-touch to world-position resolution.
//!
//! Converts a screen point to canonical device coordinates, projects a ray
//! through a [`RayProjector`], and intersects it against a
//! [`ReferenceSurface`]. Both sides of the cast are traits so the engine
//! stays independent of any concrete scene graph: the host hands in whatever
//! camera and surface it owns, by non-owning reference, for the duration of
//! one call.

use crate::types::{PlaneModel, TouchSample, Viewport};
use nalgebra::{UnitQuaternion, Vector3};
use serde::Serialize;
use thiserror::Error;

const EPS: f32 = 1e-6;

/// Failure modes of a resolve call. Never fatal: callers skip the affected
/// sample and leave their state intact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The touch ray misses the reference surface.
    #[error("ray does not intersect the reference surface")]
    NoIntersection,
    /// The current gesture needs more active touches than were supplied.
    #[error("not enough touch samples: need {needed}, got {got}")]
    InsufficientSamples { needed: usize, got: usize },
}

/// World-space ray with unit direction.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Ray {
    pub origin: Vector3<f32>,
    pub dir: Vector3<f32>,
}

/// Camera-side half of a raycast: builds a world ray through a point in
/// [-1, 1] device coordinates.
pub trait RayProjector {
    fn project_ray(&self, ndc: [f32; 2]) -> Ray;
}

/// Surface-side half of a raycast: nearest intersection with the ray, if
/// any.
pub trait ReferenceSurface {
    fn intersect(&self, ray: &Ray) -> Option<Vector3<f32>>;
}

impl ReferenceSurface for PlaneModel {
    fn intersect(&self, ray: &Ray) -> Option<Vector3<f32>> {
        let denom = self.normal.dot(&ray.dir);
        if denom.abs() <= EPS {
            // Ray runs parallel to the plane.
            return None;
        }
        let t = self.normal.dot(&(self.point - ray.origin)) / denom;
        if t < 0.0 {
            // Intersection behind the ray origin.
            return None;
        }
        Some(ray.origin + ray.dir * t)
    }
}

/// Pinhole camera with an explicit pose, the projector bundled with the
/// crate. Hosts with their own camera type implement [`RayProjector`]
/// directly instead.
#[derive(Clone, Copy, Debug)]
pub struct PerspectiveCamera {
    pub position: Vector3<f32>,
    /// Rotation from camera space to world space; the camera looks down its
    /// local -Z axis.
    pub orientation: UnitQuaternion<f32>,
    /// Vertical field of view in degrees.
    pub fov_y_deg: f32,
    /// Viewport width over height.
    pub aspect: f32,
}

impl PerspectiveCamera {
    pub const DEFAULT_FOV_Y_DEG: f32 = 70.0;

    pub fn new(position: Vector3<f32>, orientation: UnitQuaternion<f32>) -> Self {
        Self {
            position,
            orientation,
            fov_y_deg: Self::DEFAULT_FOV_Y_DEG,
            aspect: 1.0,
        }
    }

    /// Camera at `position` facing `target`. When `up` is (near-)parallel to
    /// the view direction a stable fallback axis is substituted, so looking
    /// straight down with a +Y up still yields a valid pose.
    pub fn looking_at(position: Vector3<f32>, target: Vector3<f32>, up: Vector3<f32>) -> Self {
        let view = (target - position).normalize();
        let up = if view.cross(&up).norm_squared() <= EPS {
            if view.x.abs() < 0.9 {
                Vector3::x()
            } else {
                Vector3::z()
            }
        } else {
            up
        };
        // face_towards aligns local +Z with its direction argument; the
        // camera convention looks down -Z.
        let orientation = UnitQuaternion::face_towards(&-view, &up);
        Self::new(position, orientation)
    }

    pub fn with_fov_y_deg(mut self, fov_y_deg: f32) -> Self {
        self.fov_y_deg = fov_y_deg;
        self
    }

    pub fn with_aspect(mut self, aspect: f32) -> Self {
        self.aspect = aspect;
        self
    }
}

impl RayProjector for PerspectiveCamera {
    fn project_ray(&self, ndc: [f32; 2]) -> Ray {
        let half_y = (self.fov_y_deg.to_radians() * 0.5).tan();
        let local = Vector3::new(ndc[0] * half_y * self.aspect, ndc[1] * half_y, -1.0);
        Ray {
            origin: self.position,
            dir: (self.orientation * local).normalize(),
        }
    }
}

/// Non-owning camera/surface/viewport bundle passed into every resolve call.
#[derive(Clone, Copy)]
pub struct SceneRef<'a> {
    pub camera: &'a dyn RayProjector,
    pub surface: &'a dyn ReferenceSurface,
    pub viewport: Viewport,
}

impl SceneRef<'_> {
    /// Resolves a screen touch into a world position on the reference
    /// surface.
    pub fn raycast(&self, screen: [f32; 2]) -> Result<Vector3<f32>, ResolveError> {
        let ray = self.camera.project_ray(self.viewport.to_ndc(screen));
        self.surface
            .intersect(&ray)
            .ok_or(ResolveError::NoIntersection)
    }

    /// Resolves the primary (first) touch of an active-touch list.
    ///
    /// Hosts that bypass the gesture machine, such as a controller "select"
    /// handler, use this to place directly from the platform's touch array.
    pub fn raycast_primary(&self, samples: &[TouchSample]) -> Result<Vector3<f32>, ResolveError> {
        let touch = samples.first().ok_or(ResolveError::InsufficientSamples {
            needed: 1,
            got: 0,
        })?;
        self.raycast(touch.position())
    }
}
