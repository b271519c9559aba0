//! The boundary to the external renderer
//!
//! The core produces ordered draw commands; the collaborator that owns
//! shaders, GPU buffers, and the swapchain consumes them. Mesh handles are
//! opaque here: the renderer assigns them when it uploads a
//! [`crate::mesh::MeshBuffer`] and the core only passes them back.

use crate::core::types::{Mat4, Result, Vec3};

/// Opaque identifier for a mesh the external renderer has taken ownership of
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub u32);

/// One draw: a model transform and a flat color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCommand {
    /// Model (local-to-world) transform
    pub model: Mat4,
    /// RGB color
    pub color: Vec3,
}

impl DrawCommand {
    /// Draw at a world-space translation
    pub fn at(translation: Vec3, color: Vec3) -> Self {
        Self {
            model: Mat4::from_translation(translation),
            color,
        }
    }
}

/// Renderer sink consumed by the core.
///
/// Implementations forward to the GPU; failures surface as
/// [`crate::core::Error::Render`].
pub trait RenderSink {
    /// Submit a previously uploaded mesh for drawing
    fn submit_mesh(&mut self, mesh: MeshHandle, cmd: DrawCommand) -> Result<()>;

    /// Submit a single unit cube for drawing
    fn submit_cube(&mut self, cmd: DrawCommand) -> Result<()>;
}

/// A recorded draw call
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Draw {
    Mesh { mesh: MeshHandle, cmd: DrawCommand },
    Cube { cmd: DrawCommand },
}

impl Draw {
    /// The draw's command, whichever kind it is
    pub fn command(&self) -> &DrawCommand {
        match self {
            Draw::Mesh { cmd, .. } | Draw::Cube { cmd } => cmd,
        }
    }
}

/// In-memory sink recording the frame's ordered draw sequence.
///
/// Used by tests, and by hosts that want to inspect or re-order a frame
/// before forwarding it to the GPU.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    draws: Vec<Draw>,
}

impl DrawList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded draws, in submission order
    pub fn draws(&self) -> &[Draw] {
        &self.draws
    }

    /// Number of recorded draws
    pub fn len(&self) -> usize {
        self.draws.len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
    }

    /// Forget all recorded draws
    pub fn clear(&mut self) {
        self.draws.clear();
    }
}

impl RenderSink for DrawList {
    fn submit_mesh(&mut self, mesh: MeshHandle, cmd: DrawCommand) -> Result<()> {
        self.draws.push(Draw::Mesh { mesh, cmd });
        Ok(())
    }

    fn submit_cube(&mut self, cmd: DrawCommand) -> Result<()> {
        self.draws.push(Draw::Cube { cmd });
        Ok(())
    }
}
