pub mod pipeline;

// Re-export main types
pub use pipeline::{prepare_mesh, GpuMesh, GpuVertex};
