//! Per-frame uniform binding context
//!
//! Slot handles for the global shader uniforms are resolved once per render
//! call and carried through the frame in a [`FrameUniforms`] value, rather
//! than living in a process-wide named-slot table. Values written to the
//! slots are frame-scoped and overwritten each camera iteration.

use crate::render::backend::{GraphicsBackend, UniformSlot};

/// Resolved slots for the global shader uniforms one frame writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameUniforms {
    /// Slot for the world-space directional light direction
    pub light_dir: UniformSlot,

    /// Slot for the directional light color
    pub light_color: UniformSlot,

    /// Slot for the world-space camera position
    pub camera_pos: UniformSlot,
}

impl FrameUniforms {
    /// Uniform name for the directional light direction
    pub const LIGHT_DIR: &'static str = "_LightDir";

    /// Uniform name for the directional light color
    pub const LIGHT_COLOR: &'static str = "_LightColor";

    /// Uniform name for the camera world position
    pub const CAMERA_POS: &'static str = "_CameraPos";

    /// Resolve all slots through the backend's shader property registry
    pub fn resolve(backend: &mut dyn GraphicsBackend) -> Self {
        Self {
            light_dir: backend.property_to_id(Self::LIGHT_DIR),
            light_color: backend.property_to_id(Self::LIGHT_COLOR),
            camera_pos: backend.property_to_id(Self::CAMERA_POS),
        }
    }
}
