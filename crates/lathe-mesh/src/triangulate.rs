use lathe_core::{LatheError, Result, Validate};
use lathe_math::aabb::Aabb3;
use lathe_math::{Point2, Point3, Transform, Vector3};
use serde::{Deserialize, Serialize};

/// GPU-ready triangle mesh with per-vertex positions, normals and UVs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriangleMesh {
    pub positions: Vec<Point3>,
    pub normals: Vec<Vector3>,
    pub indices: Vec<u32>,
    pub uvs: Vec<Point2>,
}

impl TriangleMesh {
    /// Number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate over triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// Apply a placement transform to positions and normals in place.
    pub fn transform(&mut self, transform: &Transform) {
        for p in &mut self.positions {
            *p = transform.transform_point(*p);
        }
        for n in &mut self.normals {
            *n = transform.transform_normal(*n);
        }
    }

    /// Compute the axis-aligned bounding box of all positions.
    pub fn bounding_box(&self) -> Aabb3 {
        Aabb3::from_points(&self.positions).unwrap_or(Aabb3::new(Point3::ZERO, Point3::ZERO))
    }
}

impl Validate for TriangleMesh {
    fn validate(&self) -> Result<()> {
        let n = self.positions.len();
        if self.normals.len() != n {
            return Err(LatheError::invalid_parameter(
                "normals",
                format!("{} normals for {} positions", self.normals.len(), n),
            ));
        }
        if !self.uvs.is_empty() && self.uvs.len() != n {
            return Err(LatheError::invalid_parameter(
                "uvs",
                format!("{} uvs for {} positions", self.uvs.len(), n),
            ));
        }
        if self.indices.len() % 3 != 0 {
            return Err(LatheError::invalid_parameter(
                "indices",
                format!("length {} is not a multiple of 3", self.indices.len()),
            ));
        }
        if let Some(&bad) = self.indices.iter().find(|&&i| i as usize >= n) {
            return Err(LatheError::invalid_parameter(
                "indices",
                format!("index {bad} out of bounds (n={n})"),
            ));
        }
        if let Some(i) = self.normals.iter().position(|v| !v.is_finite()) {
            return Err(LatheError::invalid_parameter(
                "normals",
                format!("normal {i} is not finite"),
            ));
        }
        Ok(())
    }
}
