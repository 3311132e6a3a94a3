use nalgebra::Vector3;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::gesture::GestureOptions;
use crate::raycast::PerspectiveCamera;
use crate::types::{TouchSample, Viewport};

#[derive(Debug, Deserialize)]
pub struct GestureReplayConfig {
    /// JSON file holding the touch script to replay.
    pub script: PathBuf,
    pub camera: CameraConfig,
    pub viewport: Viewport,
    /// Height of the horizontal reference surface touches resolve against.
    #[serde(default)]
    pub plane_height: f32,
    #[serde(default)]
    pub gesture: GestureConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub target: [f32; 3],
    #[serde(default = "default_up")]
    pub up: [f32; 3],
    pub fov_y_deg: Option<f32>,
}

fn default_up() -> [f32; 3] {
    [0.0, 1.0, 0.0]
}

impl CameraConfig {
    /// Builds the replay camera, deriving aspect from the viewport.
    pub fn resolve(&self, viewport: Viewport) -> PerspectiveCamera {
        let camera = PerspectiveCamera::looking_at(
            Vector3::from(self.position),
            Vector3::from(self.target),
            Vector3::from(self.up),
        )
        .with_aspect(viewport.width / viewport.height);
        match self.fov_y_deg {
            Some(fov) => camera.with_fov_y_deg(fov),
            None => camera,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    pub drag_threshold_px: Option<f32>,
    pub min_pinch_span_px: Option<f32>,
}

impl GestureConfig {
    pub fn resolve(&self) -> GestureOptions {
        let mut options = GestureOptions::default();
        if let Some(v) = self.drag_threshold_px {
            options.drag_threshold_px = v;
        }
        if let Some(v) = self.min_pinch_span_px {
            options.min_pinch_span_px = v;
        }
        options
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Where to dump the replay trace; stdout summary only if unset.
    pub trace_json: Option<PathBuf>,
}

/// One entry of the replay script: which handler to call and the active
/// touches to pass it (for `end` events, the touches still down).
#[derive(Clone, Debug, Deserialize)]
pub struct ScriptEvent {
    pub phase: ScriptPhase,
    #[serde(default)]
    pub touches: Vec<TouchSample>,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScriptPhase {
    Start,
    Move,
    End,
}

pub fn load_config(path: &Path) -> Result<GestureReplayConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn load_script(path: &Path) -> Result<Vec<ScriptEvent>, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read script {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse script {}: {e}", path.display()))
}
