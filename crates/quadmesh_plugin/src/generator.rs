//! MeshGenerator - dirty-flag gated regeneration and the triangle budget.
//!
//! Hosts poll the mesh every frame but the pass only re-runs when the focal
//! point, depth, or triangle budget actually changed. The output buffer is
//! allocated once at construction, sized for the worst case of the
//! configured depth, and overwritten wholesale on each regeneration.

use glam::Vec2;

use crate::quadtree::{generate_into, GenerationStats, RefineConfig};
use crate::types::{MeshOutput, Vertex};

/// Owns the refinement parameters, the output buffer, and the dirty flag
/// between generation passes.
pub struct MeshGenerator {
  config: RefineConfig,
  triangle_budget: usize,
  mesh: MeshOutput,
  stats: GenerationStats,
  dirty: bool,
  generation: u64,
}

impl MeshGenerator {
  /// Create a generator with the buffer reserved for `config`'s worst case.
  pub fn new(config: RefineConfig) -> Self {
    Self {
      mesh: MeshOutput::with_capacity(config.worst_case_vertex_count()),
      config,
      triangle_budget: usize::MAX,
      stats: GenerationStats::default(),
      dirty: true,
      generation: 0,
    }
  }

  /// Current refinement parameters.
  pub fn config(&self) -> &RefineConfig {
    &self.config
  }

  /// Move the focal point; marks dirty only on an actual change.
  pub fn set_focal_point(&mut self, focal_point: Vec2) {
    if self.config.focal_point != focal_point {
      self.config.focal_point = focal_point;
      self.dirty = true;
    }
  }

  /// Change the maximum subdivision depth; marks dirty only on a change.
  pub fn set_lod_level(&mut self, lod_level: i32) {
    if self.config.lod_level != lod_level {
      self.config.lod_level = lod_level;
      self.dirty = true;
    }
  }

  /// Cap how many triangles [`Self::visible_vertices`] exposes. Generation
  /// itself is never truncated, but a changed cap still re-runs the pass so
  /// hosts observe one consistent regeneration trigger set.
  pub fn set_triangle_budget(&mut self, triangle_budget: usize) {
    if self.triangle_budget != triangle_budget {
      self.triangle_budget = triangle_budget;
      self.dirty = true;
    }
  }

  /// True if the next [`Self::mesh`] call will re-run the pass.
  pub fn is_dirty(&self) -> bool {
    self.dirty
  }

  /// Number of passes actually executed so far.
  pub fn generation(&self) -> u64 {
    self.generation
  }

  /// Counters from the most recent pass.
  pub fn last_stats(&self) -> GenerationStats {
    self.stats
  }

  fn regenerate_if_dirty(&mut self) {
    if !self.dirty {
      return;
    }
    self.stats = generate_into(&self.config, &mut self.mesh);
    self.generation += 1;
    self.dirty = false;
  }

  /// The current mesh, regenerating first if a parameter changed.
  pub fn mesh(&mut self) -> &MeshOutput {
    self.regenerate_if_dirty();
    &self.mesh
  }

  /// Triangles within the budget cap.
  pub fn visible_triangle_count(&mut self) -> usize {
    self.regenerate_if_dirty();
    self.mesh.triangle_count().min(self.triangle_budget)
  }

  /// The vertex prefix covering the budgeted triangles.
  pub fn visible_vertices(&mut self) -> &[Vertex] {
    let count = self.visible_triangle_count() * 3;
    &self.mesh.vertices[..count]
  }
}

#[cfg(test)]
#[path = "generator_test.rs"]
mod generator_test;
