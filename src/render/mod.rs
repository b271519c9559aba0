//! Draw-command emission toward the external renderer

pub mod sink;
pub mod visibility;

pub use sink::{Draw, DrawCommand, DrawList, MeshHandle, RenderSink};
pub use visibility::{CullingParams, VisibilityFilter};
