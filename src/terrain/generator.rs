//! Noise-based heightfield terrain generation

use noise::{NoiseFn, Perlin};

use crate::voxel::chunk::{CHUNK_SIZE, Chunk};
use crate::voxel::coord::VoxelCoord;
use crate::voxel::store::VoxelStore;

/// Parameters controlling terrain generation
#[derive(Clone, Debug)]
pub struct TerrainParams {
    /// Noise seed
    pub seed: u32,
    /// Horizontal noise scale (smaller = smoother terrain)
    pub scale: f64,
    /// Maximum column height in voxels
    pub max_height: i32,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            seed: 0,
            scale: 0.1,
            max_height: 8,
        }
    }
}

/// Deterministic heightfield generator.
///
/// Heights are a pure function of the column coordinate and the fixed
/// parameters: the same inputs always produce the same terrain.
pub struct TerrainGenerator {
    params: TerrainParams,
    noise: Perlin,
}

impl TerrainGenerator {
    /// Create a generator with the given parameters
    pub fn new(params: TerrainParams) -> Self {
        let noise = Perlin::new(params.seed);
        Self { params, noise }
    }

    /// Generator parameters
    pub fn params(&self) -> &TerrainParams {
        &self.params
    }

    /// Terrain height of the column at `(x, z)`.
    ///
    /// One noise sample at `(x * scale, 0, z * scale)`, mapped from the
    /// nominal `[-1, 1]` range to `[0, max_height]`. A non-positive
    /// `max_height` yields empty or single-voxel columns, never a fault.
    pub fn height_at(&self, x: i32, z: i32) -> i32 {
        let sample = self.noise.get([
            x as f64 * self.params.scale,
            0.0,
            z as f64 * self.params.scale,
        ]);
        (((sample + 1.0) / 2.0) * self.params.max_height as f64).floor() as i32
    }

    /// Fill a rectangle of noise terrain into `store`.
    ///
    /// Covers `(x, z)` over the symmetric range `[-width/2, width/2) x
    /// [-depth/2, depth/2)` offset by `origin`, activating every voxel
    /// with `y` in `[0, height]` inclusive.
    pub fn fill_region<S: VoxelStore>(
        &self,
        store: &mut S,
        origin: VoxelCoord,
        width: i32,
        depth: i32,
    ) {
        let mut columns = 0u32;
        self.for_each_column(origin, width, depth, |x, z| {
            let height = self.height_at(x, z);
            for y in 0..=height {
                store.set_active(VoxelCoord::new(x, y, z), true);
            }
            columns += 1;
        });
        log::info!(
            "generated {columns} terrain columns ({}x{} at {origin:?}, max height {})",
            width,
            depth,
            self.params.max_height
        );
    }

    /// Fill a flat rectangle of ground into `store`.
    ///
    /// Policy variant of [`TerrainGenerator::fill_region`]: same rectangle
    /// convention, but only `y = 0` is activated and the noise step is
    /// skipped.
    pub fn fill_flat<S: VoxelStore>(
        &self,
        store: &mut S,
        origin: VoxelCoord,
        width: i32,
        depth: i32,
    ) {
        self.for_each_column(origin, width, depth, |x, z| {
            store.set_active(VoxelCoord::new(x, 0, z), true);
        });
    }

    /// Fill one chunk with the slice of the heightfield it covers.
    ///
    /// The same height function evaluated at the chunk's absolute column
    /// coordinates; a cell activates when its absolute `y` lies in
    /// `[0, height]` and inside the chunk's slab.
    pub fn fill_chunk(&self, chunk: &mut Chunk) {
        let origin = chunk.coord().world_origin();
        for x in 0..CHUNK_SIZE {
            for z in 0..CHUNK_SIZE {
                let height = self.height_at(origin.x + x, origin.z + z);
                for y in 0..CHUNK_SIZE {
                    let world_y = origin.y + y;
                    if world_y >= 0 && world_y <= height {
                        chunk.set_active(VoxelCoord::new(x, y, z), true);
                    }
                }
            }
        }
    }

    fn for_each_column(
        &self,
        origin: VoxelCoord,
        width: i32,
        depth: i32,
        mut f: impl FnMut(i32, i32),
    ) {
        for dx in -width / 2..width / 2 {
            for dz in -depth / 2..depth / 2 {
                f(origin.x + dx, origin.z + dz);
            }
        }
    }
}

impl Default for TerrainGenerator {
    fn default() -> Self {
        Self::new(TerrainParams::default())
    }
}
