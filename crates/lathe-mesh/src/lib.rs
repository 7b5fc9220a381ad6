//! Lathe tessellation: turns parametric surfaces into GPU-ready triangle meshes.

pub mod builder;
pub mod config;
pub mod grid;
pub mod normals;
pub mod triangulate;

pub use builder::{build, build_with_step, MeshBuilder};
pub use config::{GalleryConfig, ShapeConfig};
pub use grid::GridLayout;
pub use triangulate::TriangleMesh;
