//! Recursive refinement - decides subdivision per node and stitches the
//! emitted mesh crack-free.
//!
//! # Algorithm
//!
//! Each visited node gates its four children by grid distance from the
//! focal point's anchor line; the gating radius shrinks by one step per
//! level. Children are visited favored-quadrant-first (the quadrant
//! containing the focal point), then the node classifies which of its child
//! slots were refined and emits the matching template as recursion unwinds:
//!
//! ```text
//! refined children   emission
//! ────────────────   ─────────────────────────────────────────
//! 0                  plain quad (4 wedges)
//! 1                  corner transition toward the refined slot
//! 2, adjacent        edge transition covering the far half
//! 2, diagonal        two corner fills over the untouched slots
//! 3                  one corner fill over the untouched slot
//! 4                  nothing - children tile the node completely
//! ```
//!
//! Child slots are world-fixed quadrant bits (`bit = (dy << 1) | dx`), so
//! template orientation never depends on visit order. The per-axis gate
//! only ever produces masks from the first three and the last row (the
//! gated set is a rectangle, so diagonal and three-child masks cannot
//! arise); the fill cases are still defined so every mask has a
//! closed-tessellation emission.
//!
//! # Crack-Freeness
//!
//! The transition templates stitch depth differences inside a parent, but
//! two *neighboring* parents never see each other - each only knows its own
//! children. The mesh stays closed anyway because of how the gate is built:
//!
//! - The refinement band is anchored on the even grid line nearest the
//!   focal point. Even lines are parent boundaries, so the two cells
//!   touching the anchor always sit in different parents and refine
//!   together.
//! - Distance is measured in two-cell steps from that band and the radius
//!   applies per axis, so the gated set at every level is a rectangle whose
//!   edges lie on odd (within-parent) grid lines. Neighboring parents
//!   therefore always agree on how finely their shared edge is split.
//! - The rectangle of a child level always maps into the rectangle of its
//!   parent level (the radius grows by one step per level going up), so a
//!   gated cell is never orphaned by an unvisited parent.
//!
//! A Manhattan-summed gate does not have the second property - its diamond
//! rows alternate alignment and leave T-junctions on parent boundaries -
//! which is why the radius is applied per axis here.

use smallvec::SmallVec;

use super::{QuadNode, RefineConfig};
use crate::emitter::QuadEmitter;
use crate::types::MeshOutput;

/// Counters from one generation pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationStats {
  /// Nodes visited by the recursive walk.
  pub nodes_visited: usize,
  /// Plain quads emitted (no refined children).
  pub plain_quads: usize,
  /// Corner transitions emitted (exactly one refined child).
  pub corner_patches: usize,
  /// Edge transitions emitted (two adjacent refined children).
  pub edge_patches: usize,
  /// Diagonal transitions emitted (two diagonally opposite refined children).
  pub diagonal_patches: usize,
  /// Single corner fills emitted (three refined children).
  pub corner_fills: usize,
  /// Total vertices written to the output buffer.
  pub vertices_emitted: usize,
}

impl GenerationStats {
  /// Total templates emitted across all classifications.
  #[inline]
  pub fn total_patches(&self) -> usize {
    self.plain_quads
      + self.corner_patches
      + self.edge_patches
      + self.diagonal_patches
      + self.corner_fills
  }
}

/// Edge index for each adjacent two-child mask.
///
/// `{3, 5, 12, 10}` map to edges `{0 = south, 1 = west, 2 = north,
/// 3 = east}`; the two remaining two-bit masks (6 and 9) are the diagonal
/// pairs and have no shared edge.
#[inline]
fn edge_from_mask(mask: u8) -> Option<u8> {
  match mask {
    0b0011 => Some(0),
    0b0101 => Some(1),
    0b1100 => Some(2),
    0b1010 => Some(3),
    _ => None,
  }
}

/// Per-axis distance from a child cell to the refinement band, in two-cell
/// steps.
///
/// The band is the cell pair straddling the anchor line; both its cells
/// count as distance zero (the cell below the line has its raw distance
/// reduced by one). Halving the raw distance makes cells advance in
/// parent-aligned pairs, so the gated interval always ends on a
/// within-parent line.
#[inline]
fn axis_distance(cell: i32, anchor: i32) -> i64 {
  // Widened before subtracting: a far-away focal point can anchor near the
  // i32 range limits.
  let (cell, anchor) = (cell as i64, anchor as i64);
  let raw = if cell >= anchor {
    cell - anchor
  } else {
    anchor - cell - 1
  };
  (raw + 1) / 2
}

/// Recursive refinement step.
///
/// Returns true for every visited node; the terminal test at the top is the
/// only false return and bounds the recursion at `lod_level + 1` levels.
fn refine_node(
  config: &RefineConfig,
  emitter: &mut QuadEmitter<'_>,
  stats: &mut GenerationStats,
  node: QuadNode,
) -> bool {
  if node.depth > config.lod_level {
    return false;
  }
  stats.nodes_visited += 1;

  let delta = config.focal_point - node.center();
  // The axis farther from the focal point is major; it takes the slow bit of
  // the visit counter so the favored quadrant is always visited first.
  let x_major = delta.x.abs() >= delta.y.abs();
  let fav_x = (delta.x >= 0.0) as i32;
  let fav_y = (delta.y >= 0.0) as i32;

  let threshold = config.gate_threshold(node.depth) as i64;
  let anchor = config.focal_anchor(node.depth + 1);

  let mut gated: SmallVec<[QuadNode; 4]> = SmallVec::new();
  for visit in 0..4u8 {
    let fast = (visit & 1) as i32;
    let slow = ((visit >> 1) & 1) as i32;
    let (ox, oy) = if x_major { (slow, fast) } else { (fast, slow) };
    let child = node.child(((fav_y ^ oy) << 1 | (fav_x ^ ox)) as u8);
    let dist = axis_distance(child.x, anchor.x).max(axis_distance(child.y, anchor.y));
    if dist <= threshold {
      gated.push(child);
    }
  }

  let mut mask = 0u8;
  for child in gated {
    if refine_node(config, emitter, stats, child) {
      let slot = ((child.y & 1) << 1) | (child.x & 1);
      mask |= 1 << slot;
    }
  }

  match mask.count_ones() {
    0 => {
      emitter.emit_quad(&node);
      stats.plain_quads += 1;
    }
    1 => {
      emitter.emit_quad_corner(&node, mask.trailing_zeros() as u8);
      stats.corner_patches += 1;
    }
    2 => match edge_from_mask(mask) {
      Some(edge) => {
        emitter.emit_quad_edge(&node, edge);
        stats.edge_patches += 1;
      }
      None => {
        // Diagonally opposite children: fill both untouched quadrants.
        for corner in 0..4u8 {
          if mask & (1 << corner) == 0 {
            emitter.emit_corner_fill(&node, corner);
          }
        }
        stats.diagonal_patches += 1;
      }
    },
    3 => {
      // One untouched quadrant left behind; a plain fill closes it.
      emitter.emit_corner_fill(&node, (!mask & 0b1111).trailing_zeros() as u8);
      stats.corner_fills += 1;
    }
    _ => {}
  }

  true
}

/// Run one generation pass into an existing buffer.
///
/// The buffer is cleared and re-reserved for the worst case of the
/// configured depth, then overwritten wholesale; partial updates never
/// happen. The pass runs to completion on the calling thread and owns the
/// buffer exclusively for its duration.
#[cfg_attr(
  feature = "tracing",
  tracing::instrument(skip_all, name = "quadtree::generate", fields(lod = config.lod_level))
)]
pub fn generate_into(config: &RefineConfig, out: &mut MeshOutput) -> GenerationStats {
  debug_assert!(config.lod_level >= 0, "lod_level must be non-negative");

  out.clear();
  let want = config.worst_case_vertex_count();
  if out.vertices.capacity() < want {
    // len is 0 after the clear, so this reserves the full worst case.
    out.vertices.reserve_exact(want);
  }

  let mut stats = GenerationStats::default();
  let mut emitter = QuadEmitter::new(out);
  refine_node(config, &mut emitter, &mut stats, QuadNode::ROOT);
  stats.vertices_emitted = emitter.emitted();
  stats
}

/// Run one generation pass into a freshly allocated buffer.
pub fn generate(config: &RefineConfig) -> (MeshOutput, GenerationStats) {
  let mut out = MeshOutput::with_capacity(config.worst_case_vertex_count());
  let stats = generate_into(config, &mut out);
  (out, stats)
}

#[cfg(test)]
#[path = "refiner_test.rs"]
mod refiner_test;
