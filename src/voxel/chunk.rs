//! Dense fixed-size chunk storage
//!
//! A [`ChunkGrid`] is the bounded-grid half of the [`VoxelStore`] contract:
//! a `CHUNK_SIZE`^3 array addressed only through checked accessors, so an
//! out-of-range local coordinate resolves to "not solid" instead of
//! indexing past the array. A [`Chunk`] pairs the grid with its world-grid
//! position and the triangle mesh derived from it.

use crate::math::Aabb;
use crate::mesh::buffer::MeshBuffer;
use crate::mesh::extract::SurfaceExtractor;
use crate::voxel::coord::{ChunkCoord, VoxelCoord};
use crate::voxel::store::VoxelStore;
use crate::voxel::voxel::Voxel;

/// Number of voxels along each chunk edge
pub const CHUNK_SIZE: i32 = 16;

/// Total number of voxels in a chunk
const CHUNK_VOLUME: usize = (CHUNK_SIZE * CHUNK_SIZE * CHUNK_SIZE) as usize;

/// Bounded dense voxel grid addressed by local coordinates in
/// `[0, CHUNK_SIZE)` on every axis.
pub struct ChunkGrid {
    voxels: Box<[Voxel]>,
    dirty: bool,
}

impl ChunkGrid {
    /// Create a grid with every voxel inactive
    pub fn new() -> Self {
        Self {
            voxels: vec![Voxel::INACTIVE; CHUNK_VOLUME].into_boxed_slice(),
            dirty: true,
        }
    }

    /// Whether the grid has been mutated since the last mesh rebuild
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Linear index for an in-bounds local coordinate, `None` otherwise.
    /// Ascending z is the fastest-moving axis, matching extraction order.
    fn index(coord: VoxelCoord) -> Option<usize> {
        let in_bounds = |v: i32| (0..CHUNK_SIZE).contains(&v);
        if in_bounds(coord.x) && in_bounds(coord.y) && in_bounds(coord.z) {
            Some(((coord.x * CHUNK_SIZE + coord.y) * CHUNK_SIZE + coord.z) as usize)
        } else {
            None
        }
    }
}

impl Default for ChunkGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl VoxelStore for ChunkGrid {
    fn get(&self, coord: VoxelCoord) -> Option<&Voxel> {
        Self::index(coord).map(|i| &self.voxels[i])
    }

    fn set_active(&mut self, coord: VoxelCoord, active: bool) {
        let Some(i) = Self::index(coord) else {
            log::debug!("set_active outside chunk bounds at {coord:?}, ignored");
            return;
        };
        if self.voxels[i].active != active {
            self.voxels[i].active = active;
            self.dirty = true;
        }
    }

    fn for_each_active<F: FnMut(VoxelCoord)>(&self, mut f: F) {
        for x in 0..CHUNK_SIZE {
            for y in 0..CHUNK_SIZE {
                for z in 0..CHUNK_SIZE {
                    let coord = VoxelCoord::new(x, y, z);
                    if self.is_solid(coord) {
                        f(coord);
                    }
                }
            }
        }
    }
}

/// A chunk: dense voxel grid, world-grid position, and the surface mesh
/// derived from the grid.
///
/// The mesh is valid exactly when the grid is clean; every mutation made
/// through the store accessors re-marks it dirty.
pub struct Chunk {
    coord: ChunkCoord,
    grid: ChunkGrid,
    mesh: MeshBuffer,
}

impl Chunk {
    /// Create an empty chunk at the given world-grid coordinate
    pub fn new(coord: ChunkCoord) -> Self {
        Self {
            coord,
            grid: ChunkGrid::new(),
            mesh: MeshBuffer::new(),
        }
    }

    /// This chunk's position in the world grid
    pub fn coord(&self) -> ChunkCoord {
        self.coord
    }

    /// The voxel grid
    pub fn grid(&self) -> &ChunkGrid {
        &self.grid
    }

    /// The voxel grid, mutable
    pub fn grid_mut(&mut self) -> &mut ChunkGrid {
        &mut self.grid
    }

    /// The current surface mesh (stale whenever [`Chunk::is_dirty`])
    pub fn mesh(&self) -> &MeshBuffer {
        &self.mesh
    }

    /// Whether the mesh is stale
    pub fn is_dirty(&self) -> bool {
        self.grid.is_dirty()
    }

    /// World-space bounds of the chunk's voxel cubes.
    ///
    /// Cube centers sit on integer coordinates, so the box extends 0.5
    /// beyond the outermost centers on every side.
    pub fn world_bounds(&self) -> Aabb {
        let origin = self.coord.world_origin().to_vec3();
        Aabb::new(
            origin - 0.5,
            origin + CHUNK_SIZE as f32 - 0.5,
        )
    }

    /// Rebuild the surface mesh from the grid and mark it clean.
    ///
    /// The mesh is in chunk-local coordinates; drawing applies the chunk's
    /// world-origin translation.
    pub fn rebuild_mesh(&mut self, extractor: &mut SurfaceExtractor) {
        extractor.rebuild(&self.grid, &mut self.mesh);
        self.grid.mark_clean();
    }

    /// Rebuild only when the grid is dirty. Returns whether a rebuild ran.
    pub fn rebuild_if_dirty(&mut self, extractor: &mut SurfaceExtractor) -> bool {
        if !self.is_dirty() {
            return false;
        }
        self.rebuild_mesh(extractor);
        true
    }
}

impl VoxelStore for Chunk {
    fn get(&self, coord: VoxelCoord) -> Option<&Voxel> {
        self.grid.get(coord)
    }

    fn set_active(&mut self, coord: VoxelCoord, active: bool) {
        self.grid.set_active(coord, active);
    }

    fn for_each_active<F: FnMut(VoxelCoord)>(&self, f: F) {
        self.grid.for_each_active(f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_is_never_solid() {
        let mut grid = ChunkGrid::new();
        // Fill everything so only the bounds check can report false.
        for x in 0..CHUNK_SIZE {
            for y in 0..CHUNK_SIZE {
                for z in 0..CHUNK_SIZE {
                    grid.set_active(VoxelCoord::new(x, y, z), true);
                }
            }
        }

        for &coord in &[
            VoxelCoord::new(-1, 0, 0),
            VoxelCoord::new(CHUNK_SIZE, 0, 0),
            VoxelCoord::new(0, -1, 0),
            VoxelCoord::new(0, CHUNK_SIZE, 0),
            VoxelCoord::new(0, 0, -1),
            VoxelCoord::new(0, 0, CHUNK_SIZE),
            VoxelCoord::new(100, 100, 100),
        ] {
            assert!(!grid.is_solid(coord), "{coord:?} must be outside");
            assert!(grid.get(coord).is_none());
        }
    }

    #[test]
    fn test_set_active_out_of_bounds_is_ignored() {
        let mut grid = ChunkGrid::new();
        grid.mark_clean();
        grid.set_active(VoxelCoord::new(-1, 0, 0), true);
        assert!(!grid.is_dirty());
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = ChunkGrid::new();
        let coord = VoxelCoord::new(3, 4, 5);

        assert!(!grid.is_solid(coord));
        grid.set_active(coord, true);
        assert!(grid.is_solid(coord));
        assert_eq!(grid.get(coord), Some(&Voxel::ACTIVE));
    }

    #[test]
    fn test_mutation_marks_dirty() {
        let mut grid = ChunkGrid::new();
        grid.mark_clean();

        grid.set_active(VoxelCoord::new(0, 0, 0), true);
        assert!(grid.is_dirty());

        // Writing the value already stored is not a mutation.
        grid.mark_clean();
        grid.set_active(VoxelCoord::new(0, 0, 0), true);
        assert!(!grid.is_dirty());
    }

    #[test]
    fn test_deactivate_is_idempotent() {
        let mut grid = ChunkGrid::new();
        let coord = VoxelCoord::new(1, 1, 1);
        grid.set_active(coord, true);

        grid.deactivate(coord);
        assert!(!grid.is_solid(coord));

        grid.mark_clean();
        grid.deactivate(coord);
        assert!(!grid.is_solid(coord));
        assert!(!grid.is_dirty(), "second deactivate must be a no-op");
    }

    #[test]
    fn test_for_each_active_is_ascending() {
        let mut grid = ChunkGrid::new();
        for &(x, y, z) in &[(4, 0, 0), (0, 2, 0), (0, 0, 7), (0, 0, 0)] {
            grid.set_active(VoxelCoord::new(x, y, z), true);
        }

        let mut visited = Vec::new();
        grid.for_each_active(|c| visited.push(c));

        let mut sorted = visited.clone();
        sorted.sort();
        assert_eq!(visited, sorted);
        assert_eq!(visited.len(), 4);
    }

    #[test]
    fn test_chunk_world_bounds() {
        let chunk = Chunk::new(ChunkCoord::new(1, 0, -1));
        let bounds = chunk.world_bounds();
        assert_eq!(bounds.min, glam::Vec3::new(15.5, -0.5, -16.5));
        assert_eq!(bounds.max, glam::Vec3::new(31.5, 15.5, -0.5));
    }
}
