//! Core data types for adaptive quad meshing.

/// One output vertex: a 2D position in normalized device coordinates.
pub type Vertex = [f32; 2];

/// Mesh generation result.
///
/// A flat vertex sequence, logically grouped in triples (one per triangle).
/// The buffer is overwritten wholesale each regeneration, never patched in
/// place; `clear` preserves capacity so a pass never reallocates once the
/// buffer has been reserved for the worst case.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshOutput {
  /// Output vertices, three per triangle, counter-clockwise winding.
  pub vertices: Vec<Vertex>,
}

impl MeshOutput {
  pub fn new() -> Self {
    Self::default()
  }

  /// Create with capacity reserved up front (vertices, not triangles).
  pub fn with_capacity(vertex_capacity: usize) -> Self {
    Self {
      vertices: Vec::with_capacity(vertex_capacity),
    }
  }

  /// Clear the buffer, preserving capacity.
  pub fn clear(&mut self) {
    self.vertices.clear();
  }

  /// Returns true if no geometry was generated.
  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  /// Number of triangles in the mesh.
  pub fn triangle_count(&self) -> usize {
    self.vertices.len() / 3
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
