//! Value-level stand-in for the host's placed scene node.
//!
//! The engine never touches a scene graph directly; it hands out
//! [`PlacementIntent`] values and lets the host apply them. [`Anchor`]
//! mirrors the transform subset those intents affect (position, orientation,
//! uniform scale) so the full pipeline can be driven and asserted on without
//! a renderer, and so the demo binaries have something concrete to print.

use nalgebra::{UnitQuaternion, Vector3};
use serde::Serialize;

use crate::types::{PlacementIntent, PlaneModel};

/// Transform of the placed model.
#[derive(Clone, Debug, Serialize)]
pub struct Anchor {
    pub position: Vector3<f32>,
    pub rotation: UnitQuaternion<f32>,
    /// Uniform scale, kept inside `scale_range`.
    pub scale: f32,
    /// Set once any placement intent has landed. Hosts typically keep the
    /// model hidden until this flips.
    pub placed: bool,
    /// Inclusive bounds applied to `scale` after every `ScaleBy`.
    pub scale_range: (f32, f32),
}

impl Default for Anchor {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            rotation: UnitQuaternion::identity(),
            scale: 1.0,
            placed: false,
            scale_range: (0.2, 5.0),
        }
    }
}

impl Anchor {
    /// Applies one gesture intent to the transform.
    ///
    /// `ScaleBy` factors multiply the current scale and are clamped to
    /// `scale_range`, so repeated pinches compound but cannot run away.
    pub fn apply(&mut self, intent: PlacementIntent) {
        match intent {
            PlacementIntent::PlaceAt(world) | PlacementIntent::MoveTo(world) => {
                self.position = world;
                self.placed = true;
            }
            PlacementIntent::ScaleBy(factor) => {
                let (lo, hi) = self.scale_range;
                self.scale = (self.scale * factor).clamp(lo, hi);
            }
        }
    }

    /// Rotates the model so its +Y axis matches the surface normal.
    pub fn align_to_surface(&mut self, surface: &PlaneModel) {
        self.rotation = match UnitQuaternion::rotation_between(&Vector3::y(), &surface.normal) {
            Some(rotation) => rotation,
            // Anti-parallel normal leaves the axis ambiguous; flip about x.
            None => UnitQuaternion::from_axis_angle(&Vector3::x_axis(), std::f32::consts::PI),
        };
    }
}
