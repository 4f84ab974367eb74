//! quadmesh_plugin - Framework/engine independent adaptive quad meshing
//!
//! This crate generates crack-free triangle meshes over the unit square
//! `[-1,1]²`, with detail concentrated around a movable focal point. A
//! recursive quadtree refiner decides subdivision per node from the focal
//! point's grid projection, and transition templates stitch every boundary
//! between refinement depths without T-junctions.
//!
//! # Features
//!
//! - **Focal-point refinement**: a shrinking Manhattan-distance cone prunes
//!   the tree to the cells near the cursor/viewer
//! - **Crack-free stitching**: corner and edge transition patches bridge
//!   depth differences between neighboring quads
//! - **Dirty-flag lifecycle**: [`MeshGenerator`] re-runs the pass only when
//!   a parameter actually changed, into a buffer reserved once up front
//!
//! # Example
//!
//! ```ignore
//! use glam::Vec2;
//! use quadmesh_plugin::{MeshGenerator, RefineConfig};
//!
//! let mut generator = MeshGenerator::new(RefineConfig::new(6, Vec2::ZERO));
//!
//! // Per frame: steer detail toward the cursor, regenerate only on change.
//! generator.set_focal_point(Vec2::new(0.25, -0.4));
//! let mesh = generator.mesh();
//!
//! println!("{} triangles", mesh.triangle_count());
//! ```

pub mod types;
pub use types::{MeshOutput, Vertex};

// Quadtree refinement - the core algorithm
pub mod quadtree;
pub use quadtree::{generate, generate_into, GenerationStats, QuadNode, RefineConfig};

// Vertex emission templates
pub mod emitter;
pub use emitter::QuadEmitter;

// Host-facing lifecycle with dirty-flag gating
pub mod generator;
pub use generator::MeshGenerator;
