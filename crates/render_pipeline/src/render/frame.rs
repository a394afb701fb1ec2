//! Per-camera frame context
//!
//! [`FrameContext`] is the thin adapter the pipeline variants render through:
//! it pairs the backend with the pipeline's reusable command stream for one
//! camera iteration and owns the stage discipline on that stream.
//!
//! The stream is a single buffer shared by logically distinct stages (setup,
//! lighting, drawing). [`FrameContext::stage`] makes the boundary structural:
//! it hands the empty stream to the encoding closure, executes the encoded
//! segment on the backend, and clears the stream before returning, so one
//! stage's commands can never leak into the next.

use log::debug;

use crate::render::backend::GraphicsBackend;
use crate::render::commands::CommandStream;
use crate::render::cull::CullResults;
use crate::render::filtering::DrawSettings;
use crate::render::RenderResult;
use crate::scene::{Camera, Renderable};

/// Adapter over the backend and command stream for one camera iteration
pub struct FrameContext<'a> {
    backend: &'a mut dyn GraphicsBackend,
    stream: &'a mut CommandStream,
}

impl<'a> FrameContext<'a> {
    /// Pair a backend with the pipeline's command stream
    pub fn new(backend: &'a mut dyn GraphicsBackend, stream: &'a mut CommandStream) -> Self {
        Self { backend, stream }
    }

    /// Bind the camera's view/projection state to the rendering context
    pub fn setup_camera(&mut self, camera: &Camera) {
        self.backend.setup_camera_properties(camera);
    }

    /// Run one named stage: encode, execute, clear
    ///
    /// The closure queues operations into the stream; the encoded segment is
    /// executed on the backend immediately afterwards and the stream is
    /// cleared unconditionally, even when execution fails.
    pub fn stage<F>(&mut self, label: &'static str, encode: F) -> RenderResult<()>
    where
        F: FnOnce(&mut CommandStream),
    {
        self.stream.begin(label);
        encode(self.stream);
        debug!("executing stage {:?} ({} ops)", label, self.stream.len());
        let result = self.backend.execute_command_stream(self.stream);
        self.stream.clear();
        result
    }

    /// Draw the skybox for the camera
    pub fn draw_skybox(&mut self, camera: &Camera) {
        self.backend.draw_skybox(camera);
    }

    /// Run the backend's visibility query for the camera
    pub fn cull(&mut self, camera: &Camera) -> CullResults {
        self.backend.cull(camera)
    }

    /// Draw an already-filtered renderable list with the given settings
    pub fn draw_renderers(
        &mut self,
        renderables: &[Renderable],
        settings: &DrawSettings,
    ) -> RenderResult<()> {
        self.backend.draw_renderers(renderables, settings)
    }

    /// Submit the camera's accumulated work to the GPU
    pub fn submit(&mut self) -> RenderResult<()> {
        self.backend.submit()
    }
}
