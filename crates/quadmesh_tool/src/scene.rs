//! Scene file parsing for mesh export.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Optional scene description loaded from TOML.
///
/// Every field has a command-line counterpart; flags win over the file.
#[derive(Debug, Default, Deserialize)]
pub struct Scene {
  /// Maximum subdivision depth.
  pub lod_level: Option<i32>,
  /// Focal point in normalized device coordinates.
  pub focal_point: Option<[f32; 2]>,
  /// Cap on exported triangles.
  pub triangle_budget: Option<usize>,
}

impl Scene {
  pub fn load(path: &Path) -> Result<Self> {
    let text = std::fs::read_to_string(path)
      .with_context(|| format!("Failed to read scene file: {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("Failed to parse scene file: {}", path.display()))
  }
}
