//! RefineConfig - refinement parameters and focal-point grid projection.

use glam::{IVec2, Vec2};

/// Vertices emitted by the largest single-node template (the plain quad).
pub(crate) const MAX_NODE_VERTS: usize = 12;

/// Refinement parameters for one generation pass.
///
/// The single steering input is the focal point: nodes nearer it subdivide
/// deeper, up to `lod_level`. This is an explicit value struct - there is no
/// shared global state between passes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RefineConfig {
  /// Maximum subdivision depth. 0 = a single quad. Must be non-negative.
  pub lod_level: i32,

  /// Point in `[-1,1]²` toward which mesh detail concentrates.
  pub focal_point: Vec2,
}

impl RefineConfig {
  pub fn new(lod_level: i32, focal_point: Vec2) -> Self {
    Self {
      lod_level,
      focal_point,
    }
  }

  pub fn with_lod_level(mut self, lod_level: i32) -> Self {
    self.lod_level = lod_level;
    self
  }

  pub fn with_focal_point(mut self, focal_point: Vec2) -> Self {
    self.focal_point = focal_point;
    self
  }

  /// Gating radius for children of a node at `depth`, in two-cell band
  /// steps.
  ///
  /// Shrinks by one step per level, producing a cone of refinement that
  /// narrows toward the focal point.
  #[inline]
  pub fn gate_threshold(&self, depth: i32) -> i32 {
    (self.lod_level - depth - 1).max(0)
  }

  /// Anchor of the refinement band at `depth`: the even grid line nearest
  /// the focal point's projection onto the `2^depth` grid.
  ///
  /// Even lines are the parent-cell boundaries one level up, so a band of
  /// cells straddling the anchor always splits symmetrically across the
  /// parent grid - the property that keeps neighboring parents agreeing on
  /// their shared edge granularity.
  ///
  /// Not clamped to the grid: a focal point outside `[-1,1]²` anchors to an
  /// out-of-range line, so gating distances grow and refinement falls off to
  /// the coarsest tiling.
  #[inline]
  pub fn focal_anchor(&self, depth: i32) -> IVec2 {
    let cells = (1u64 << depth) as f64;
    let gx = (self.focal_point.x as f64 + 1.0) * 0.5 * cells;
    let gy = (self.focal_point.y as f64 + 1.0) * 0.5 * cells;
    IVec2::new(
      ((gx / 2.0).round() * 2.0) as i32,
      ((gy / 2.0).round() * 2.0) as i32,
    )
  }

  /// Upper bound on vertices one generation pass can emit.
  ///
  /// Counts the nodes the gating can possibly visit per level: at most 4
  /// children per visited parent, and only cells inside the gating rectangle
  /// around the focal anchor. Every visited node emits at most 12 vertices
  /// (the plain quad).
  pub fn worst_case_vertex_count(&self) -> usize {
    let mut total = 1usize;
    let mut level = 1usize;
    for depth in 0..self.lod_level.max(0) {
      let t = self.gate_threshold(depth) as usize;
      let gate_box = (4 * t + 2) * (4 * t + 2);
      level = (level * 4).min(gate_box);
      total += level;
    }
    total * MAX_NODE_VERTS
  }
}

impl Default for RefineConfig {
  fn default() -> Self {
    Self {
      lod_level: 6,
      focal_point: Vec2::ZERO,
    }
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
