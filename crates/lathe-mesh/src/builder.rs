//! Uniform ring-grid mesh builder for surfaces of revolution.
//!
//! The surface is sampled on a `vertical × rotation` grid, each sample gets a
//! finite-difference normal, and adjacent grid cells are split into two
//! triangles. The rotation axis wraps, so the last ring connects back to the
//! first and no seam vertices are duplicated.

use lathe_core::{DifferenceStep, Result, Validate};
use lathe_geometry::Surface;
use lathe_math::Point2;

use crate::grid::GridLayout;
use crate::normals::estimate_normal;
use crate::TriangleMesh;

/// Builds a [`TriangleMesh`] from any [`Surface`].
#[derive(Debug, Clone, Copy)]
pub struct MeshBuilder {
    layout: GridLayout,
    step: DifferenceStep,
}

impl MeshBuilder {
    /// Fails with `InvalidParameter` when `vertical_segments < 2` or
    /// `rotation_segments == 0`.
    pub fn new(vertical_segments: usize, rotation_segments: usize) -> Result<Self> {
        Ok(Self {
            layout: GridLayout::new(vertical_segments, rotation_segments)?,
            step: DifferenceStep::default(),
        })
    }

    /// Use `step` for the finite-difference normal estimate.
    pub fn with_step(mut self, step: DifferenceStep) -> Result<Self> {
        step.validate()?;
        self.step = step;
        Ok(self)
    }

    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    pub fn step(&self) -> DifferenceStep {
        self.step
    }

    pub fn build(&self, surface: &dyn Surface) -> TriangleMesh {
        let layout = self.layout;
        let span = tracing::debug_span!(
            "build_mesh",
            vertical = layout.vertical(),
            rotation = layout.rotation()
        );
        let _guard = span.enter();

        let total = layout.vertex_count();
        let mut positions = Vec::with_capacity(total);
        let mut normals = Vec::with_capacity(total);
        let mut uvs = Vec::with_capacity(total);

        for r in 0..layout.rotation() {
            let nr = layout.r_at(r);
            for v in 0..layout.vertical() {
                let nv = layout.t_at(v);
                positions.push(surface.point_at(nv, nr));
                normals.push(estimate_normal(surface, nv, nr, self.step));
                uvs.push(Point2::new(nr, nv));
            }
        }

        let indices = triangulate(&layout);

        tracing::debug!(
            vertices = positions.len(),
            triangles = indices.len() / 3,
            epsilon = self.step.epsilon,
            "built ring-grid mesh"
        );

        TriangleMesh {
            positions,
            normals,
            indices,
            uvs,
        }
    }
}

/// Index buffer connecting each grid cell `(v, r)..(v+1, r+1)` with two triangles.
///
/// Winding per cell is `(v+1, r) → (v, r+1) → (v, r)` then
/// `(v+1, r) → (v+1, r+1) → (v, r+1)`.
pub fn triangulate(layout: &GridLayout) -> Vec<u32> {
    let mut indices = Vec::with_capacity(layout.triangle_count() * 3);
    for r in 0..layout.rotation() as isize {
        for v in 0..layout.vertical() - 1 {
            let idx = |vv: usize, rr: isize| layout.index(vv, rr);
            // First triangle
            indices.push(idx(v + 1, r));
            indices.push(idx(v, r + 1));
            indices.push(idx(v, r));
            // Second triangle
            indices.push(idx(v + 1, r));
            indices.push(idx(v + 1, r + 1));
            indices.push(idx(v, r + 1));
        }
    }
    indices
}

/// Build a mesh of `surface` with the default (machine epsilon) difference step.
pub fn build(
    surface: &dyn Surface,
    vertical_segments: usize,
    rotation_segments: usize,
) -> Result<TriangleMesh> {
    Ok(MeshBuilder::new(vertical_segments, rotation_segments)?.build(surface))
}

/// Build a mesh of `surface` with an explicit difference step.
pub fn build_with_step(
    surface: &dyn Surface,
    vertical_segments: usize,
    rotation_segments: usize,
    step: DifferenceStep,
) -> Result<TriangleMesh> {
    Ok(MeshBuilder::new(vertical_segments, rotation_segments)?
        .with_step(step)?
        .build(surface))
}
