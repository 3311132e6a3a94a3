use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// One 2D feature sample in screen/feature space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeaturePoint {
    pub x: f32,
    pub y: f32,
}

impl FeaturePoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One finger's screen position at one touch event.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TouchSample {
    /// Platform touch identifier, stable for the lifetime of the finger.
    pub id: i32,
    pub x: f32,
    pub y: f32,
}

impl TouchSample {
    pub fn new(id: i32, x: f32, y: f32) -> Self {
        Self { id, x, y }
    }

    pub fn position(&self) -> [f32; 2] {
        [self.x, self.y]
    }
}

/// Best-fit plane: a point on the plane and its unit normal.
///
/// Produced fresh per estimation call; carries no identity across calls.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaneModel {
    pub point: Vector3<f32>,
    pub normal: Vector3<f32>,
}

impl PlaneModel {
    /// Horizontal plane at the given height, normal fixed to +Y.
    pub fn horizontal(height: f32) -> Self {
        Self {
            point: Vector3::new(0.0, height, 0.0),
            normal: Vector3::y(),
        }
    }

    /// Plane height along the up axis.
    pub fn height(&self) -> f32 {
        self.point.y
    }

    /// Absolute vertical distance from a feature sample to the plane.
    ///
    /// The horizontal fit only ever estimates height, so consensus is
    /// measured along the vertical coordinate alone.
    pub fn height_distance(&self, p: &FeaturePoint) -> f32 {
        (p.y - self.point.y).abs()
    }
}

/// Discrete interaction command emitted by the gesture resolver.
///
/// The only channel by which the core affects external scene state: the host
/// applies `PlaceAt`/`MoveTo` to a node's position and `ScaleBy` to its
/// scale.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PlacementIntent {
    /// Place the model at a world position resolved from a tap.
    PlaceAt(Vector3<f32>),
    /// Move the model to a world position resolved from a drag sample.
    MoveTo(Vector3<f32>),
    /// Scale the model by an incremental factor from a pinch step.
    ScaleBy(f32),
}

/// Viewport dimensions used to normalize screen touches.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Maps a screen point to canonical [-1, 1] device coordinates.
    ///
    /// Screen y grows downward while NDC y grows upward, so the vertical
    /// axis is flipped.
    pub fn to_ndc(&self, screen: [f32; 2]) -> [f32; 2] {
        [
            (screen[0] / self.width) * 2.0 - 1.0,
            -((screen[1] / self.height) * 2.0 - 1.0),
        ]
    }
}
