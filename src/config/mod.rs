//! JSON-backed configuration for the demo binaries.
//!
//! Each binary has its own config module with a `Deserialize` struct and a
//! `load_config` returning `Result<_, String>`, so the binaries can print a
//! single flat error and exit. Optional fields overlay library defaults via
//! `resolve()` helpers.

pub mod gesture_replay;
pub mod plane_demo;

use serde::Serialize;
use std::fs;
use std::path::Path;

/// Pretty-prints a serializable value to disk, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
