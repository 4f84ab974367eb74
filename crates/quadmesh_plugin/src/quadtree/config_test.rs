use glam::Vec2;

use super::*;

/// Threshold shrinks by one per level and clamps at zero.
#[test]
fn test_gate_threshold_shrinks() {
  let config = RefineConfig::new(4, Vec2::ZERO);
  assert_eq!(config.gate_threshold(0), 3);
  assert_eq!(config.gate_threshold(1), 2);
  assert_eq!(config.gate_threshold(2), 1);
  assert_eq!(config.gate_threshold(3), 0);
  assert_eq!(config.gate_threshold(4), 0);
  assert_eq!(config.gate_threshold(9), 0);
}

/// The anchor is always an even grid line.
#[test]
fn test_focal_anchor_even() {
  for &focal in &[
    Vec2::ZERO,
    Vec2::new(0.3, -0.7),
    Vec2::new(-0.51, 0.49),
    Vec2::new(0.999, -0.999),
  ] {
    let config = RefineConfig::new(6, focal);
    for depth in 1..=6 {
      let anchor = config.focal_anchor(depth);
      assert_eq!(anchor.x % 2, 0, "focal {:?} depth {}", focal, depth);
      assert_eq!(anchor.y % 2, 0, "focal {:?} depth {}", focal, depth);
    }
  }
}

/// The focal point's own cell always touches the anchor band.
#[test]
fn test_focal_cell_touches_band() {
  for &focal in &[
    Vec2::new(0.37, -0.21),
    Vec2::new(-0.8, 0.05),
    Vec2::new(0.62, 0.61),
  ] {
    let config = RefineConfig::new(8, focal);
    for depth in 1..=8 {
      let cells = (1u64 << depth) as f64;
      let cell_x = ((focal.x as f64 + 1.0) * 0.5 * cells).floor() as i32;
      let anchor = config.focal_anchor(depth);
      assert!(
        cell_x == anchor.x || cell_x == anchor.x - 1,
        "cell {} outside band at anchor {} (depth {})",
        cell_x,
        anchor.x,
        depth
      );
    }
  }
}

/// A focal point at the center anchors on the grid midline once the
/// midline is a parent boundary (depth 2 and finer).
#[test]
fn test_center_anchor_on_midline() {
  let config = RefineConfig::new(4, Vec2::ZERO);
  for depth in 2..=4 {
    let midline = 1 << (depth - 1);
    assert_eq!(config.focal_anchor(depth).x, midline);
    assert_eq!(config.focal_anchor(depth).y, midline);
  }
}

/// A far-away focal point anchors outside the grid.
#[test]
fn test_far_focal_anchor_outside_grid() {
  let config = RefineConfig::new(4, Vec2::new(9.0, -9.0));
  let anchor = config.focal_anchor(3);
  assert!(anchor.x > 8);
  assert!(anchor.y < 0);
}

/// Worst case for lod 0 is a single plain quad.
#[test]
fn test_worst_case_lod_zero() {
  let config = RefineConfig::new(0, Vec2::ZERO);
  assert_eq!(config.worst_case_vertex_count(), 12);
}

/// Worst case grows with depth but stays far below the full-tree bound
/// thanks to the shrinking gate.
#[test]
fn test_worst_case_bounded() {
  let mut previous = 0;
  for lod in 0..=10 {
    let config = RefineConfig::new(lod, Vec2::ZERO);
    let bound = config.worst_case_vertex_count();
    assert!(bound > previous);
    previous = bound;
  }
  // Polynomial, not 4^lod: the gate prunes each level to a rectangle.
  assert!(previous < 200_000);
}

/// Builder helpers replace the targeted field.
#[test]
fn test_builder_helpers() {
  let config = RefineConfig::default()
    .with_lod_level(3)
    .with_focal_point(Vec2::new(0.25, -0.5));
  assert_eq!(config.lod_level, 3);
  assert_eq!(config.focal_point, Vec2::new(0.25, -0.5));
}
