//! Visible-surface extraction
//!
//! Turns "which voxels are active" into "which unit-cube faces are
//! visible". A face is visible iff its own voxel is active and the voxel
//! immediately across that face is not solid (inactive, absent, or out of
//! the store's domain).

use crate::mesh::buffer::MeshBuffer;
use crate::voxel::face::Face;
use crate::voxel::store::VoxelStore;

/// Rebuilds surface meshes from voxel stores.
///
/// Holds the scratch buffer rebuilds are assembled in, so repeated
/// rebuilds reuse one allocation. The finished buffer is swapped into the
/// caller's mesh wholesale; a reader of that mesh never observes a
/// partially built state.
pub struct SurfaceExtractor {
    scratch: MeshBuffer,
}

impl SurfaceExtractor {
    /// Create an extractor
    pub fn new() -> Self {
        Self {
            scratch: MeshBuffer::new(),
        }
    }

    /// Rebuild `mesh` from the store's current state.
    ///
    /// Visits active voxels in ascending `(x, y, z)` order and tests the
    /// six face directions in fixed order, so output is deterministic:
    /// two rebuilds of an unchanged store produce byte-identical vertex
    /// sequences. Side-effect-free on the store; dirty-flag bookkeeping
    /// belongs to the caller.
    pub fn rebuild<S: VoxelStore>(&mut self, store: &S, mesh: &mut MeshBuffer) {
        self.scratch.clear();

        store.for_each_active(|coord| {
            for face in Face::ALL {
                if !store.is_solid(coord.neighbor(face)) {
                    self.scratch.push_face(face, coord.to_vec3());
                }
            }
        });

        std::mem::swap(&mut self.scratch, mesh);
        log::trace!("surface rebuild emitted {} faces", mesh.face_count());
    }
}

impl Default for SurfaceExtractor {
    fn default() -> Self {
        Self::new()
    }
}
