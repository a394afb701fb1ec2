//! Visible lights produced by culling
//!
//! The culling query reports every light that can affect the camera's view.
//! Only directional lights are semantically relevant to the lit pipeline
//! variant; the rest are carried through untouched.

use crate::foundation::math::{Color, Mat4, Vec4};

/// The kind of a light source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightKind {
    /// Directional light (like sunlight) with parallel rays
    Directional,
    /// Point light that radiates in all directions from a position
    Point,
    /// Spot light that creates a cone of light from a position
    Spot,
}

/// One visible light, as reported by the backend's culling query
#[derive(Debug, Clone)]
pub struct VisibleLight {
    /// The kind of light
    pub kind: LightKind,

    /// Local-to-world transform of the light's scene node
    pub local_to_world: Mat4,

    /// Final color as resolved by the host lighting system
    /// (intensity and color space already applied)
    pub final_color: Color,
}

impl VisibleLight {
    /// Create a directional light shining along the forward axis of `local_to_world`
    pub fn directional(local_to_world: Mat4, final_color: Color) -> Self {
        Self {
            kind: LightKind::Directional,
            local_to_world,
            final_color,
        }
    }

    /// World-space forward axis of the light as a direction (w = 0)
    ///
    /// This is the third basis column of the light's transform: its local
    /// forward axis expressed in world space. The w component is forced to 0
    /// because the result is a direction, not a position.
    pub fn forward(&self) -> Vec4 {
        let column = self.local_to_world.column(2);
        Vec4::new(column[0], column[1], column[2], 0.0)
    }
}
