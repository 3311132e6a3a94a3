use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::plane::RansacParams;
use crate::types::FeaturePoint;

#[derive(Debug, Deserialize)]
pub struct PlaneDemoConfig {
    /// JSON file holding the feature points to fit: `[{"x": .., "y": ..}]`.
    pub input: PathBuf,
    #[serde(default)]
    pub ransac: RansacConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RansacConfig {
    pub iterations: Option<usize>,
    pub distance_threshold: Option<f32>,
    /// Seed for the estimator's RNG; omit for entropy-seeded runs.
    pub seed: Option<u64>,
}

impl RansacConfig {
    pub fn resolve(&self) -> RansacParams {
        let mut params = RansacParams::default();
        if let Some(v) = self.iterations {
            params.iterations = v;
        }
        if let Some(v) = self.distance_threshold {
            params.distance_threshold = v;
        }
        params
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Where to dump the full estimate report; stdout summary only if unset.
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<PlaneDemoConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn load_points(path: &Path) -> Result<Vec<FeaturePoint>, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read points {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse points {}: {e}", path.display()))
}
