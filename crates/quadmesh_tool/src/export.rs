//! Mesh export as Wavefront OBJ or SVG wireframe.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use quadmesh_plugin::Vertex;

/// Wavefront OBJ with the mesh on the XY plane.
pub fn write_obj(path: &Path, vertices: &[Vertex]) -> Result<()> {
  let mut text = String::new();
  for v in vertices {
    writeln!(text, "v {} {} 0", v[0], v[1]).expect("write to string");
  }
  for tri in 0..vertices.len() / 3 {
    let base = tri * 3 + 1; // OBJ indices are 1-based
    writeln!(text, "f {} {} {}", base, base + 1, base + 2).expect("write to string");
  }
  std::fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))
}

/// SVG wireframe; the viewBox maps the unit square to the page with the
/// Y axis flipped to match normalized device coordinates.
pub fn write_svg(path: &Path, vertices: &[Vertex]) -> Result<()> {
  let mut text = String::from(
    "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"-1.05 -1.05 2.1 2.1\">\n\
     <g transform=\"scale(1,-1)\" fill=\"none\" stroke=\"black\" stroke-width=\"0.004\">\n",
  );
  for tri in vertices.chunks_exact(3) {
    writeln!(
      text,
      "<polygon points=\"{},{} {},{} {},{}\"/>",
      tri[0][0], tri[0][1], tri[1][0], tri[1][1], tri[2][0], tri[2][1]
    )
    .expect("write to string");
  }
  text.push_str("</g>\n</svg>\n");
  std::fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))
}
