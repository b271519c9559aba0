//! Voxel data structures and operations

pub mod voxel;
pub mod coord;
pub mod face;
pub mod store;
pub mod chunk;
pub mod world;

pub use voxel::Voxel;
pub use coord::{ChunkCoord, VoxelCoord};
pub use face::Face;
pub use store::VoxelStore;
pub use chunk::{CHUNK_SIZE, Chunk, ChunkGrid};
pub use world::VoxelWorld;
