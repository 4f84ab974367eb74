//! Adaptive quad mesh exporter.
//!
//! Generates a focal-point refined mesh over the unit square and writes it
//! as a Wavefront OBJ or an SVG wireframe, with the generation counters
//! printed to stdout.

mod export;
mod scene;

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use glam::Vec2;
use quadmesh_plugin::{MeshGenerator, RefineConfig};

use scene::Scene;

/// Adaptive quad mesh exporter.
#[derive(Parser, Debug)]
#[command(name = "quadmesh")]
#[command(about = "Generates a focal-point refined quad mesh and exports it")]
struct Args {
  /// Output file (.obj or .svg).
  output: PathBuf,

  /// Maximum subdivision depth.
  #[arg(short, long)]
  lod_level: Option<i32>,

  /// Focal point, two values in [-1,1] (e.g. --focal -0.25 0.5).
  #[arg(short, long, num_args = 2, allow_negative_numbers = true)]
  focal: Option<Vec<f32>>,

  /// Cap on exported triangles.
  #[arg(short, long)]
  triangle_budget: Option<usize>,

  /// Scene TOML file; command-line flags override its values.
  #[arg(short, long)]
  config: Option<PathBuf>,

  /// Output format (default: inferred from the output extension).
  #[arg(long, value_enum)]
  format: Option<Format>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
  Obj,
  Svg,
}

fn main() -> Result<()> {
  let args = Args::parse();

  let scene = match &args.config {
    Some(path) => {
      println!("Loading scene from: {}", path.display());
      Scene::load(path)?
    }
    None => Scene::default(),
  };

  let lod_level = args.lod_level.or(scene.lod_level).unwrap_or(6);
  if lod_level < 0 {
    bail!("lod level must be non-negative, got {}", lod_level);
  }
  let focal_point = match &args.focal {
    Some(values) => Vec2::new(values[0], values[1]),
    None => scene.focal_point.map(Vec2::from_array).unwrap_or(Vec2::ZERO),
  };
  let triangle_budget = args.triangle_budget.or(scene.triangle_budget);

  let format = match args.format {
    Some(format) => format,
    None => match args.output.extension().and_then(|e| e.to_str()) {
      Some("obj") => Format::Obj,
      Some("svg") => Format::Svg,
      other => bail!(
        "cannot infer format from extension {:?}; pass --format",
        other
      ),
    },
  };

  let mut generator = MeshGenerator::new(RefineConfig::new(lod_level, focal_point));
  if let Some(budget) = triangle_budget {
    generator.set_triangle_budget(budget);
  }

  println!(
    "Generating: lod {}, focal ({}, {})",
    lod_level, focal_point.x, focal_point.y
  );
  let triangles = generator.visible_triangle_count();
  let stats = generator.last_stats();
  println!(
    "Generated {} triangles ({} visited nodes: {} quads, {} corner, {} edge patches)",
    triangles,
    stats.nodes_visited,
    stats.plain_quads,
    stats.corner_patches,
    stats.edge_patches
  );

  let vertices = generator.visible_vertices().to_vec();
  match format {
    Format::Obj => export::write_obj(&args.output, &vertices)?,
    Format::Svg => export::write_svg(&args.output, &vertices)?,
  }
  println!("Wrote: {}", args.output.display());

  Ok(())
}
