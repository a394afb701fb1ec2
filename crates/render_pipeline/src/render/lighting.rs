//! Directional light selection
//!
//! The lit pipeline supports exactly one directional light per camera per
//! frame: the first one the culling query happens to report. There is no
//! brightness or priority comparison; ties go to list order.

use crate::foundation::math::{Color, Vec4};
use crate::scene::{LightKind, VisibleLight};

/// Shading state extracted from the selected directional light
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// World-space light direction (w = 0)
    pub direction: Vec4,

    /// Final light color as resolved by the host lighting system
    pub color: Color,
}

/// Scan the visible lights for the first directional one
///
/// Returns `None` when no directional light is visible; the caller decides
/// the fallback (the lit pipeline skips its geometry pass — see
/// [`DirectionalLitPipeline`](crate::render::DirectionalLitPipeline)).
pub fn first_directional(lights: &[VisibleLight]) -> Option<DirectionalLight> {
    lights
        .iter()
        .find(|light| light.kind == LightKind::Directional)
        .map(|light| DirectionalLight {
            direction: light.forward(),
            color: light.final_color,
        })
}
