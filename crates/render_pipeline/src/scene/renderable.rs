//! Renderable objects produced by culling
//!
//! A renderable is the pipeline's view of one visible scene object: opaque
//! handles to its geometry and material, plus the classification tags the
//! draw pass filters on. The backend resolves the handles when the draw is
//! issued; the pipeline never dereferences them.

use crate::scene::layers::LayerMask;

/// Handle to a mesh resource stored in the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshId(pub u64);

/// Handle to a material resource stored in the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialId(pub u64);

/// Well-known render queue tags
///
/// Materials carry a queue value that classifies when they draw; the draw
/// pass filters on ranges of these values. The named constants mark the
/// conventional bands; materials may sit anywhere in between.
pub mod render_queue {
    /// Skybox-adjacent background geometry
    pub const BACKGROUND: u16 = 1000;

    /// Ordinary opaque geometry
    pub const GEOMETRY: u16 = 2000;

    /// Alpha-tested geometry, still inside the opaque range
    pub const ALPHA_TEST: u16 = 2450;

    /// Alpha-blended geometry, outside the opaque range
    pub const TRANSPARENT: u16 = 3000;

    /// Last-drawn overlay effects
    pub const OVERLAY: u16 = 4000;
}

/// One visible scene object, as reported by the backend's culling query
///
/// Read-only to the pipeline and scoped to a single camera iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderable {
    /// Geometry to draw
    pub mesh: MeshId,

    /// Material supplying the shader passes
    pub material: MaterialId,

    /// Render queue tag of the material
    pub queue: u16,

    /// The single layer this object lives on
    pub layer: LayerMask,
}

impl Renderable {
    /// Create a renderable on the default layer with the plain geometry queue
    pub fn opaque(mesh: MeshId, material: MaterialId) -> Self {
        Self {
            mesh,
            material,
            queue: render_queue::GEOMETRY,
            layer: LayerMask::DEFAULT,
        }
    }

    /// Create a renderable on the default layer with the transparent queue
    pub fn transparent(mesh: MeshId, material: MaterialId) -> Self {
        Self {
            mesh,
            material,
            queue: render_queue::TRANSPARENT,
            layer: LayerMask::DEFAULT,
        }
    }
}
