//! Backend abstraction for the rendering core
//!
//! The pipeline never talks to a GPU or a scene graph directly; everything it
//! needs from the host engine goes through [`GraphicsBackend`]. A production
//! implementation wraps the engine's render context; tests substitute a
//! recording mock.

use crate::render::commands::CommandStream;
use crate::render::cull::CullResults;
use crate::render::filtering::DrawSettings;
use crate::render::RenderResult;
use crate::scene::{Camera, Renderable};

/// Stable handle to a global shader uniform slot
///
/// Resolved from a uniform name once per frame via
/// [`GraphicsBackend::property_to_id`]; stable for the backend's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UniformSlot(pub u32);

/// Boundary between the pipeline and the host engine's graphics system
///
/// The pipeline treats every operation here as opaque: it sequences the calls
/// and consumes the culling output, but reimplements none of the visibility
/// math, pass resolution, or GPU work behind them.
///
/// Infallible methods mirror host operations that report failure only by
/// aborting the frame; fallible ones return [`RenderResult`] and are treated
/// as fatal for the current frame when they fail.
pub trait GraphicsBackend {
    /// Resolve a global uniform name to its stable slot handle
    fn property_to_id(&mut self, name: &str) -> UniformSlot;

    /// Bind the camera's view/projection state to the rendering context
    ///
    /// Subsequent draws are camera-relative until the next setup call.
    fn setup_camera_properties(&mut self, camera: &Camera);

    /// Draw the skybox for the camera
    ///
    /// Must be issued after the render target clear or the clear erases it.
    fn draw_skybox(&mut self, camera: &Camera);

    /// Run visibility determination for the camera
    ///
    /// Frustum, layer, and occlusion rules are the host system's; the output
    /// lists carry no ordering guarantee.
    fn cull(&mut self, camera: &Camera) -> CullResults;

    /// Draw the given renderables with the named shader pass
    ///
    /// The list is already filtered by queue range and layer mask. Objects
    /// whose material lacks the requested pass are skipped by the backend.
    fn draw_renderers(
        &mut self,
        renderables: &[Renderable],
        settings: &DrawSettings,
    ) -> RenderResult<()>;

    /// Execute the queued operations of a command stream immediately
    fn execute_command_stream(&mut self, stream: &CommandStream) -> RenderResult<()>;

    /// Submit all work queued since the last submission to the GPU
    ///
    /// This is the point at which queued commands actually execute. Called
    /// once per camera, never batched across cameras.
    fn submit(&mut self) -> RenderResult<()>;
}
