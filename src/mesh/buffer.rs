//! Interleaved vertex data for extracted surfaces

use bytemuck::{Pod, Zeroable};

use crate::core::types::Vec3;
use crate::voxel::face::Face;

/// Vertices emitted per cube face (two triangles)
pub const VERTICES_PER_FACE: usize = 6;

/// One interleaved vertex record: position then normal
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Growable vertex buffer holding one extracted surface.
///
/// Regenerated wholesale on each rebuild: the extractor clears and refills
/// a buffer, never patches one in place. The backing allocation is kept
/// across rebuilds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshBuffer {
    vertices: Vec<Vertex>,
}

impl MeshBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all vertices, keeping the allocation
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Append one cube face at the given cube center
    pub fn push_face(&mut self, face: Face, center: Vec3) {
        let normal = face.normal().to_array();
        for v in face.vertices() {
            self.vertices.push(Vertex {
                position: (center + *v).to_array(),
                normal,
            });
        }
    }

    /// The vertex records, in emission order
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Raw bytes for GPU upload by the host
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Number of vertex records
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of complete faces
    pub fn face_count(&self) -> usize {
        self.vertices.len() / VERTICES_PER_FACE
    }

    /// Whether the buffer holds no geometry.
    ///
    /// An empty buffer is a normal state (every voxel in the region
    /// removed); hosts skip the draw call rather than submit zero-length
    /// geometry.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        // Interleaved position + normal, tightly packed.
        assert_eq!(std::mem::size_of::<Vertex>(), 6 * 4);
    }

    #[test]
    fn test_push_face_translates_by_center() {
        let mut mesh = MeshBuffer::new();
        mesh.push_face(Face::PosY, Vec3::new(2.0, 0.0, -3.0));

        assert_eq!(mesh.vertex_count(), VERTICES_PER_FACE);
        assert_eq!(mesh.face_count(), 1);
        for v in mesh.vertices() {
            assert_eq!(v.normal, [0.0, 1.0, 0.0]);
            // Top face vertices sit half a unit above the center.
            assert_eq!(v.position[1], 0.5);
            assert!((v.position[0] - 2.0).abs() <= 0.5);
            assert!((v.position[2] + 3.0).abs() <= 0.5);
        }
    }

    #[test]
    fn test_clear_keeps_allocation() {
        let mut mesh = MeshBuffer::new();
        mesh.push_face(Face::PosX, Vec3::ZERO);
        let capacity = mesh.vertices.capacity();

        mesh.clear();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertices.capacity(), capacity);
    }

    #[test]
    fn test_as_bytes_length() {
        let mut mesh = MeshBuffer::new();
        mesh.push_face(Face::NegZ, Vec3::ZERO);
        assert_eq!(mesh.as_bytes().len(), VERTICES_PER_FACE * 6 * 4);
    }
}
