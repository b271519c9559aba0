//! Per-frame visibility filtering
//!
//! Selects which voxels or meshes are worth submitting this frame.
//! Unmeshed sparse stores go through distance, occlusion, and frustum
//! culls per voxel and are emitted back-to-front; meshed chunks are culled
//! as a whole against the plane frustum and submitted as one draw.

use crate::core::frame::FrameContext;
use crate::core::types::{Result, Vec3};
use crate::math::frustum::{Frustum, cube_in_frustum};
use crate::render::sink::{DrawCommand, MeshHandle, RenderSink};
use crate::voxel::chunk::Chunk;
use crate::voxel::coord::VoxelCoord;
use crate::voxel::face::Face;
use crate::voxel::store::VoxelStore;

/// Culling policy constants
#[derive(Clone, Debug)]
pub struct CullingParams {
    /// Voxels farther than this from the eye are never drawn
    pub max_distance: f32,
}

impl Default for CullingParams {
    fn default() -> Self {
        Self { max_distance: 400.0 }
    }
}

/// Per-frame visibility filter.
///
/// Holds no state across frames beyond reusable scratch storage; each call
/// reads the store and the frame context fresh.
pub struct VisibilityFilter {
    params: CullingParams,
    /// Scratch: (squared distance, coordinate) of surviving voxels
    survivors: Vec<(f32, VoxelCoord)>,
}

impl VisibilityFilter {
    /// Create a filter with the given culling policy
    pub fn new(params: CullingParams) -> Self {
        Self {
            params,
            survivors: Vec::new(),
        }
    }

    /// The culling policy in effect
    pub fn params(&self) -> &CullingParams {
        &self.params
    }

    /// Emit one cube draw per visible voxel, back-to-front.
    ///
    /// A voxel survives when it is within the draw distance, has at least
    /// one non-solid neighbor, and its unit cube touches the view volume.
    /// Survivors are sorted by descending distance from the eye before
    /// emission to keep eventual blending correct.
    pub fn emit_voxels<S: VoxelStore>(
        &mut self,
        store: &S,
        frame: &FrameContext,
        color: Vec3,
        sink: &mut dyn RenderSink,
    ) -> Result<()> {
        let max_dist_sq = self.params.max_distance * self.params.max_distance;
        let mut considered = 0u32;

        self.survivors.clear();
        store.for_each_active(|coord| {
            considered += 1;
            let center = coord.to_vec3();

            let dist_sq = (center - frame.eye).length_squared();
            if dist_sq > max_dist_sq {
                return;
            }

            // Fully enclosed voxels can never show a face.
            if Face::ALL.iter().all(|f| store.is_solid(coord.neighbor(*f))) {
                return;
            }

            if !cube_in_frustum(center, &frame.view_proj) {
                return;
            }

            self.survivors.push((dist_sq, coord));
        });

        self.survivors
            .sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(&b.1)));

        for &(_, coord) in &self.survivors {
            sink.submit_cube(DrawCommand::at(coord.to_vec3(), color))?;
        }

        log::debug!(
            "visibility pass: {} of {considered} voxels submitted",
            self.survivors.len()
        );
        Ok(())
    }

    /// Submit a chunk's mesh as a single draw.
    ///
    /// Skips the draw entirely when the mesh is empty (the normal state
    /// after every voxel in the chunk is removed) or when the chunk's
    /// bounds miss the view frustum. The mesh is in chunk-local
    /// coordinates, so the command carries the chunk-origin translation.
    /// No depth sort is needed on this opaque path.
    pub fn emit_chunk(
        &self,
        chunk: &Chunk,
        mesh: MeshHandle,
        frame: &FrameContext,
        color: Vec3,
        sink: &mut dyn RenderSink,
    ) -> Result<()> {
        if chunk.mesh().is_empty() {
            return Ok(());
        }

        let frustum = Frustum::from_view_projection(&frame.view_proj);
        if !frustum.intersects_aabb(&chunk.world_bounds()) {
            return Ok(());
        }

        let origin = chunk.coord().world_origin().to_vec3();
        sink.submit_mesh(mesh, DrawCommand::at(origin, color))
    }
}

impl Default for VisibilityFilter {
    fn default() -> Self {
        Self::new(CullingParams::default())
    }
}
