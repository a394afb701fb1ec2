//! Unlit pipeline variant
//!
//! Clears the target, draws the skybox, culls, then draws every visible
//! renderable with the `"Unlit"` shader pass. No lighting uniforms are
//! published.

use crate::render::backend::GraphicsBackend;
use crate::render::commands::RenderTarget;
use crate::render::filtering::{filter_renderables, DrawSettings, FilterSettings, ShaderPass, SortMode};
use crate::render::frame::FrameContext;
use crate::render::pipeline::{PipelineState, RenderPipeline};
use crate::render::RenderResult;
use crate::scene::Camera;

/// Forward pipeline that shades everything with the `"Unlit"` pass
#[derive(Debug, Default)]
pub struct UnlitPipeline {
    state: PipelineState,
}

impl UnlitPipeline {
    /// Shader pass this pipeline draws with
    pub const PASS: ShaderPass = ShaderPass::new("Unlit");

    /// Create an active instance; the command stream allocates on first render
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderPipeline for UnlitPipeline {
    fn render(
        &mut self,
        backend: &mut dyn GraphicsBackend,
        cameras: &[Camera],
    ) -> RenderResult<()> {
        let stream = self.state.acquire()?;

        for camera in cameras {
            let mut frame = FrameContext::new(&mut *backend, &mut *stream);
            frame.setup_camera(camera);

            frame.stage("Setup", |cb| {
                cb.set_render_target(RenderTarget::CameraTarget);
                cb.clear_render_target(true, true, camera.background_color);
            })?;

            // Skybox must follow the clear or the clear erases it.
            frame.draw_skybox(camera);

            let culled = frame.cull(camera);

            let visible = filter_renderables(&culled.renderables, &FilterSettings::all());
            // Sorting stays off: opaque overdraw is resolved by the depth
            // buffer, and there is no blending to order for.
            frame.draw_renderers(
                &visible,
                &DrawSettings {
                    pass: Self::PASS,
                    sorting: SortMode::None,
                },
            )?;

            frame.submit()?;
        }

        Ok(())
    }

    fn dispose(&mut self) {
        self.state.release();
    }
}
