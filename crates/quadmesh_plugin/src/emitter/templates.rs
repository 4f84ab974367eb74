//! Geometric templates for quad, corner, edge, and fill emission.
//!
//! Every template is defined once in node-local offsets (units of the
//! node's half-size) and rotated into place by quarter turns about the node
//! center - the four hand-written orientation cases collapse into one
//! canonical pattern each. Winding is counter-clockwise throughout.
//!
//! # Canonical layouts
//!
//! ```text
//! plain quad          corner (NE refined)    edge (east refined)
//! ┌─────────┐         ┌────┬────┐            ┌────┬░░░░░░┐
//! │ \  N  / │         │ \ n│░░░░│            │ \ n│░░░░░░│
//! │  \   /  │         │  \ ├────┤            │  \ ├░░░░░░│
//! │ W  X  E │         │ W  X──e │            │ W  X░░░░░░│
//! │  /   \  │         │  /   \  │            │  / ├░░░░░░│
//! │ /  S  \ │         │ /  S  \ │            │ / s│░░░░░░│
//! └─────────┘         └─────────┘            └────┴░░░░░░┘
//! ```
//!
//! Shaded quadrants are covered by the refined children themselves; the
//! template's split triangles (`n`, `e`, `s`) end exactly on the child
//! corner points, so no T-junction survives on a shared edge.

use glam::Vec2;

use super::QuadEmitter;
use crate::quadtree::QuadNode;

/// Plain quad: 4 wedge triangles (north, east, south, west).
const QUAD_WEDGES: [[(f32, f32); 3]; 4] = [
  [(0.0, 0.0), (1.0, 1.0), (-1.0, 1.0)],
  [(0.0, 0.0), (1.0, -1.0), (1.0, 1.0)],
  [(0.0, 0.0), (-1.0, -1.0), (1.0, -1.0)],
  [(0.0, 0.0), (-1.0, 1.0), (-1.0, -1.0)],
];

/// Corner transition, canonical NE orientation: the east and north wedges
/// step down to half-size against the refined quadrant, south and west stay
/// full.
const CORNER_PATCH: [[(f32, f32); 3]; 4] = [
  [(0.0, 0.0), (1.0, -1.0), (1.0, 0.0)],
  [(0.0, 0.0), (0.0, 1.0), (-1.0, 1.0)],
  [(0.0, 0.0), (-1.0, 1.0), (-1.0, -1.0)],
  [(0.0, 0.0), (-1.0, -1.0), (1.0, -1.0)],
];

/// Edge transition, canonical east orientation: covers the west half while
/// the two refined children tile the east half.
const EDGE_PATCH: [[(f32, f32); 3]; 3] = [
  [(0.0, 0.0), (-1.0, 1.0), (-1.0, -1.0)],
  [(0.0, 0.0), (0.0, 1.0), (-1.0, 1.0)],
  [(0.0, 0.0), (-1.0, -1.0), (0.0, -1.0)],
];

/// Quadrant fill, canonical NE orientation: a two-triangle fan closing one
/// untouched quadrant against refined siblings on both of its inner edges.
const CORNER_FILL: [[(f32, f32); 3]; 2] = [
  [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)],
  [(0.0, 0.0), (1.0, 1.0), (0.0, 1.0)],
];

/// Quarter turns taking the canonical NE template to each corner index
/// (0 = SW, 1 = SE, 2 = NW, 3 = NE).
const CORNER_TURNS: [u8; 4] = [2, 3, 1, 0];

/// Quarter turns taking the canonical east template to each edge index
/// (0 = south, 1 = west, 2 = north, 3 = east).
const EDGE_TURNS: [u8; 4] = [3, 2, 1, 0];

/// Rotate a node-local offset by `turns` quarter turns counter-clockwise.
#[inline]
fn rotate(offset: Vec2, turns: u8) -> Vec2 {
  match turns & 3 {
    0 => offset,
    1 => Vec2::new(-offset.y, offset.x),
    2 => -offset,
    _ => Vec2::new(offset.y, -offset.x),
  }
}

impl QuadEmitter<'_> {
  /// Emit a template rotated into place around the node center.
  fn emit_template(&mut self, node: &QuadNode, triangles: &[[(f32, f32); 3]], turns: u8) {
    let center = node.center();
    let half = node.half_size();
    for triangle in triangles {
      for &(x, y) in triangle {
        self.emit_vertex(center + rotate(Vec2::new(x, y), turns) * half);
      }
    }
  }

  /// Plain quad: 4 triangles, 12 vertices. No neighbor is finer.
  pub fn emit_quad(&mut self, node: &QuadNode) {
    self.emit_template(node, &QUAD_WEDGES, 0);
  }

  /// Corner transition toward the refined child in `corner` (0-3, quadrant
  /// bit layout): 4 triangles, 12 vertices.
  pub fn emit_quad_corner(&mut self, node: &QuadNode, corner: u8) {
    self.emit_template(node, &CORNER_PATCH, CORNER_TURNS[corner as usize]);
  }

  /// Edge transition away from the refined pair on `edge` (0 = south,
  /// 1 = west, 2 = north, 3 = east): 3 triangles, 9 vertices.
  pub fn emit_quad_edge(&mut self, node: &QuadNode, edge: u8) {
    self.emit_template(node, &EDGE_PATCH, EDGE_TURNS[edge as usize]);
  }

  /// Fill one untouched quadrant: 2 triangles, 6 vertices.
  pub fn emit_corner_fill(&mut self, node: &QuadNode, corner: u8) {
    self.emit_template(node, &CORNER_FILL, CORNER_TURNS[corner as usize]);
  }
}

#[cfg(test)]
#[path = "templates_test.rs"]
mod templates_test;
