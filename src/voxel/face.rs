//! Face directions and the canonical face geometry table
//!
//! One table drives every consumer: the neighbor offset used for culling
//! tests, the outward normal, and the six vertex positions (two CCW
//! triangles) of each face of a unit cube centered on its voxel
//! coordinate.

use crate::core::types::{IVec3, Vec3};

/// The six axis-aligned face directions of a cube, in the fixed order
/// surface extraction tests them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum Face {
    PosX = 0,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl Face {
    /// All faces, in extraction order
    pub const ALL: [Face; 6] = [
        Face::PosX,
        Face::NegX,
        Face::PosY,
        Face::NegY,
        Face::PosZ,
        Face::NegZ,
    ];

    /// Offset to the neighboring voxel across this face
    pub fn offset(&self) -> IVec3 {
        FACES[*self as usize].offset
    }

    /// Outward unit normal
    pub fn normal(&self) -> Vec3 {
        FACES[*self as usize].normal
    }

    /// The 6 vertex positions of this face, relative to the cube center
    pub fn vertices(&self) -> &'static [Vec3; 6] {
        &FACES[*self as usize].vertices
    }
}

struct FaceGeometry {
    offset: IVec3,
    normal: Vec3,
    vertices: [Vec3; 6],
}

/// Quad corners listed counter-clockwise seen from outside the cube, split
/// into triangles (a, b, c) and (a, c, d).
const fn quad(a: Vec3, b: Vec3, c: Vec3, d: Vec3) -> [Vec3; 6] {
    [a, b, c, a, c, d]
}

const H: f32 = 0.5;

static FACES: [FaceGeometry; 6] = [
    // +X
    FaceGeometry {
        offset: IVec3::new(1, 0, 0),
        normal: Vec3::new(1.0, 0.0, 0.0),
        vertices: quad(
            Vec3::new(H, -H, -H),
            Vec3::new(H, H, -H),
            Vec3::new(H, H, H),
            Vec3::new(H, -H, H),
        ),
    },
    // -X
    FaceGeometry {
        offset: IVec3::new(-1, 0, 0),
        normal: Vec3::new(-1.0, 0.0, 0.0),
        vertices: quad(
            Vec3::new(-H, -H, H),
            Vec3::new(-H, H, H),
            Vec3::new(-H, H, -H),
            Vec3::new(-H, -H, -H),
        ),
    },
    // +Y
    FaceGeometry {
        offset: IVec3::new(0, 1, 0),
        normal: Vec3::new(0.0, 1.0, 0.0),
        vertices: quad(
            Vec3::new(-H, H, -H),
            Vec3::new(-H, H, H),
            Vec3::new(H, H, H),
            Vec3::new(H, H, -H),
        ),
    },
    // -Y
    FaceGeometry {
        offset: IVec3::new(0, -1, 0),
        normal: Vec3::new(0.0, -1.0, 0.0),
        vertices: quad(
            Vec3::new(-H, -H, H),
            Vec3::new(-H, -H, -H),
            Vec3::new(H, -H, -H),
            Vec3::new(H, -H, H),
        ),
    },
    // +Z
    FaceGeometry {
        offset: IVec3::new(0, 0, 1),
        normal: Vec3::new(0.0, 0.0, 1.0),
        vertices: quad(
            Vec3::new(-H, -H, H),
            Vec3::new(H, -H, H),
            Vec3::new(H, H, H),
            Vec3::new(-H, H, H),
        ),
    },
    // -Z
    FaceGeometry {
        offset: IVec3::new(0, 0, -1),
        normal: Vec3::new(0.0, 0.0, -1.0),
        vertices: quad(
            Vec3::new(-H, -H, -H),
            Vec3::new(-H, H, -H),
            Vec3::new(H, H, -H),
            Vec3::new(H, -H, -H),
        ),
    },
];
