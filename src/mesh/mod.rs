//! Surface mesh data and extraction

pub mod buffer;
pub mod extract;

pub use buffer::{MeshBuffer, Vertex};
pub use extract::SurfaceExtractor;
