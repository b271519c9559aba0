//! Integer voxel and chunk coordinates

use crate::core::types::{IVec3, Vec3};
use crate::voxel::chunk::CHUNK_SIZE;
use crate::voxel::face::Face;

/// Integer coordinate of a single voxel.
///
/// Used both as an absolute world coordinate and, within a chunk, as a
/// local coordinate in `[0, CHUNK_SIZE)`. Equality and hashing are
/// structural; the derived ordering compares `(x, y, z)` lexicographically,
/// which is exactly the ascending x → y → z order surface extraction
/// iterates in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VoxelCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl VoxelCoord {
    /// Create a new voxel coordinate
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Coordinate offset by the given deltas
    pub fn offset(&self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// Coordinate of the neighbor across the given face
    pub fn neighbor(&self, face: Face) -> Self {
        let d = face.offset();
        self.offset(d.x, d.y, d.z)
    }

    /// Chunk containing this absolute coordinate (floor division)
    pub fn to_chunk_coord(&self) -> ChunkCoord {
        ChunkCoord::new(
            self.x.div_euclid(CHUNK_SIZE),
            self.y.div_euclid(CHUNK_SIZE),
            self.z.div_euclid(CHUNK_SIZE),
        )
    }

    /// Position within the containing chunk, each axis in `[0, CHUNK_SIZE)`
    pub fn to_local(&self) -> VoxelCoord {
        Self::new(
            self.x.rem_euclid(CHUNK_SIZE),
            self.y.rem_euclid(CHUNK_SIZE),
            self.z.rem_euclid(CHUNK_SIZE),
        )
    }

    /// Center of this voxel's unit cube in world space
    pub fn to_vec3(&self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }
}

impl From<IVec3> for VoxelCoord {
    fn from(v: IVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<VoxelCoord> for IVec3 {
    fn from(c: VoxelCoord) -> Self {
        IVec3::new(c.x, c.y, c.z)
    }
}

/// Integer coordinate identifying a chunk in the world grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl ChunkCoord {
    /// Create a new chunk coordinate
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Absolute coordinate of this chunk's minimum-corner voxel
    pub fn world_origin(&self) -> VoxelCoord {
        VoxelCoord::new(
            self.x * CHUNK_SIZE,
            self.y * CHUNK_SIZE,
            self.z * CHUNK_SIZE,
        )
    }
}
