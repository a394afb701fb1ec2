//! Camera data consumed by the render pipelines
//!
//! The pipeline never moves or reprojects a camera; it binds the camera's
//! matrices through the backend, clears to its background color, and derives
//! the `_CameraPos` shader uniform from its transform. Projection math and
//! controls belong to the host engine.

use crate::foundation::math::{Color, Mat4, Vec3, Vec4};
use crate::scene::layers::LayerMask;

/// A camera as seen by the render pipeline
///
/// Plain data, read-only to the pipeline, valid for one frame. The host scene
/// owns camera lifetime and updates.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Position in the camera's local (parent) space
    pub local_position: Vec3,

    /// Local-to-world transform for the camera's scene node
    pub local_to_world: Mat4,

    /// World-to-view matrix bound during camera setup
    pub view: Mat4,

    /// Projection matrix bound during camera setup
    pub projection: Mat4,

    /// Color the render target is cleared to before the skybox draw
    pub background_color: Color,

    /// Layers this camera renders; forwarded to the backend's culling query
    pub culling_mask: LayerMask,
}

impl Camera {
    /// Create a camera at a local position with an explicit transform
    ///
    /// View and projection default to identity; background to black; culling
    /// mask to every layer. Useful for hosts that drive matrices separately
    /// and for tests.
    pub fn with_transform(local_position: Vec3, local_to_world: Mat4) -> Self {
        Self {
            local_position,
            local_to_world,
            ..Self::default()
        }
    }

    /// World-space camera position as a homogeneous point (w = 1)
    ///
    /// Computed as `local_to_world * (x, y, z, 1)`. This is the value
    /// published to the `_CameraPos` shader uniform by the lit pipeline.
    pub fn world_position(&self) -> Vec4 {
        let local = Vec4::new(
            self.local_position.x,
            self.local_position.y,
            self.local_position.z,
            1.0,
        );
        self.local_to_world * local
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            local_position: Vec3::zeros(),
            local_to_world: Mat4::identity(),
            view: Mat4::identity(),
            projection: Mat4::identity(),
            background_color: Color::BLACK,
            culling_mask: LayerMask::EVERYTHING,
        }
    }
}
