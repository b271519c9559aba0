//! Per-frame rendering context
//!
//! Components that run once per frame receive an explicit context value
//! instead of reading shared camera state; the context is read-only for
//! the duration of the frame.

use crate::core::camera::Camera;
use crate::core::types::{Mat4, Vec3};

/// Read-only inputs for one frame: the combined view-projection transform
/// and the world-space eye position.
#[derive(Clone, Copy, Debug)]
pub struct FrameContext {
    /// Combined view-projection matrix
    pub view_proj: Mat4,
    /// World-space eye position
    pub eye: Vec3,
}

impl FrameContext {
    /// Create a frame context from both inputs
    pub fn new(view_proj: Mat4, eye: Vec3) -> Self {
        Self { view_proj, eye }
    }

    /// Create a frame context from a view-projection transform alone.
    ///
    /// The eye position is recovered from the translation column of the
    /// inverse view-projection; use [`FrameContext::new`] when the host
    /// supplies the eye separately.
    pub fn from_view_projection(view_proj: Mat4) -> Self {
        let eye = view_proj.inverse().w_axis.truncate();
        Self { view_proj, eye }
    }

    /// Create a frame context from a camera
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_projection(),
            eye: camera.position,
        }
    }
}
