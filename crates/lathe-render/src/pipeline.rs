use bytemuck::{Pod, Zeroable};
use lathe_math::{Point2, Point3, Vector3};
use lathe_mesh::TriangleMesh;

/// Vertex with f32 data packed for GPU.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl GpuVertex {
    /// Byte stride of one interleaved vertex.
    pub const STRIDE: usize = std::mem::size_of::<GpuVertex>();

    /// Create a GPU vertex from mesh vertex data.
    pub fn from_mesh_vertex(pos: Point3, normal: Vector3, uv: Point2) -> Self {
        let pos = pos.as_vec3();
        let normal = normal.as_vec3();
        let uv = uv.as_vec2();
        Self {
            position: pos.to_array(),
            normal: normal.to_array(),
            uv: uv.to_array(),
        }
    }
}

/// Interleaved vertex buffer plus index buffer, ready for upload.
#[derive(Debug, Clone, Default)]
pub struct GpuMesh {
    pub vertices: Vec<GpuVertex>,
    pub indices: Vec<u32>,
}

impl GpuMesh {
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Convert a TriangleMesh to GPU-ready buffers.
///
/// Missing normals default to +Y and missing UVs to zero.
pub fn prepare_mesh(mesh: &TriangleMesh) -> GpuMesh {
    let vertices: Vec<GpuVertex> = mesh
        .positions
        .iter()
        .enumerate()
        .map(|(i, &pos)| {
            let normal = mesh.normals.get(i).copied().unwrap_or(Vector3::Y);
            let uv = mesh.uvs.get(i).copied().unwrap_or(Point2::ZERO);
            GpuVertex::from_mesh_vertex(pos, normal, uv)
        })
        .collect();

    tracing::trace!(
        vertices = vertices.len(),
        indices = mesh.indices.len(),
        "packed mesh for upload"
    );

    GpuMesh {
        vertices,
        indices: mesh.indices.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_mesh() -> TriangleMesh {
        TriangleMesh {
            positions: vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            normals: vec![Vector3::Z; 3],
            indices: vec![0, 1, 2],
            uvs: vec![
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(0.0, 1.0),
            ],
        }
    }

    #[test]
    fn test_gpu_vertex_size() {
        // 3 floats (position) + 3 floats (normal) + 2 floats (uv) = 8 floats = 32 bytes
        assert_eq!(GpuVertex::STRIDE, 32);
    }

    #[test]
    fn test_buffer_byte_sizes() {
        let gpu = prepare_mesh(&create_test_mesh());
        assert_eq!(gpu.vertices.len(), 3);
        assert_eq!(gpu.vertex_bytes().len(), 3 * 32);
        assert_eq!(gpu.index_bytes().len(), 3 * 4);
    }

    #[test]
    fn test_vertex_layout_is_interleaved() {
        let gpu = prepare_mesh(&create_test_mesh());
        let floats: &[f32] = bytemuck::cast_slice(gpu.vertex_bytes());
        // Second vertex: position, normal, uv
        assert_eq!(&floats[8..16], &[1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0]);

        let indices: &[u32] = bytemuck::cast_slice(gpu.index_bytes());
        assert_eq!(indices, &[0, 1, 2]);
    }

    #[test]
    fn test_gpu_vertex_from_mesh_vertex() {
        let vertex = GpuVertex::from_mesh_vertex(
            Point3::new(1.0, 2.0, 3.0),
            Vector3::new(0.0, 1.0, 0.0),
            Point2::new(0.5, 0.5),
        );
        assert_eq!(vertex.position, [1.0, 2.0, 3.0]);
        assert_eq!(vertex.normal, [0.0, 1.0, 0.0]);
        assert_eq!(vertex.uv, [0.5, 0.5]);
    }

    #[test]
    fn test_mesh_with_missing_data() {
        let mesh = TriangleMesh {
            positions: vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)],
            normals: vec![],
            indices: vec![0, 1],
            uvs: vec![],
        };
        let gpu = prepare_mesh(&mesh);
        assert_eq!(gpu.vertices.len(), 2);
        assert_eq!(gpu.vertices[0].normal, [0.0, 1.0, 0.0]);
        assert_eq!(gpu.vertices[0].uv, [0.0, 0.0]);
    }

    #[test]
    fn test_empty_mesh() {
        let gpu = prepare_mesh(&TriangleMesh::default());
        assert!(gpu.vertex_bytes().is_empty());
        assert!(gpu.index_bytes().is_empty());
    }
}
