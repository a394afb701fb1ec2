//! Directional-lit pipeline variant
//!
//! Clears the target, draws the skybox, culls, selects the first visible
//! directional light, publishes its direction and color as global shader
//! uniforms, then draws opaque geometry with the `"BaseLit"` shader pass.
//!
//! When no directional light is visible the geometry pass is skipped for
//! that camera: nothing is published and nothing is drawn beyond the skybox.
//! Rendering geometry with whatever stale uniform values happen to exist
//! would be silently wrong, so the pipeline opts out loudly instead.

use log::warn;

use crate::render::backend::GraphicsBackend;
use crate::render::commands::RenderTarget;
use crate::render::filtering::{filter_renderables, DrawSettings, FilterSettings, ShaderPass, SortMode};
use crate::render::frame::FrameContext;
use crate::render::lighting::first_directional;
use crate::render::pipeline::{PipelineState, RenderPipeline};
use crate::render::uniforms::FrameUniforms;
use crate::render::RenderResult;
use crate::scene::Camera;

/// Forward pipeline lighting opaque geometry with one directional light
#[derive(Debug, Default)]
pub struct DirectionalLitPipeline {
    state: PipelineState,
}

impl DirectionalLitPipeline {
    /// Shader pass this pipeline draws with
    pub const PASS: ShaderPass = ShaderPass::new("BaseLit");

    /// Create an active instance; the command stream allocates on first render
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderPipeline for DirectionalLitPipeline {
    fn render(
        &mut self,
        backend: &mut dyn GraphicsBackend,
        cameras: &[Camera],
    ) -> RenderResult<()> {
        let stream = self.state.acquire()?;
        let uniforms = FrameUniforms::resolve(backend);

        for camera in cameras {
            let mut frame = FrameContext::new(&mut *backend, &mut *stream);
            frame.setup_camera(camera);

            frame.stage("Setup", |cb| {
                cb.set_render_target(RenderTarget::CameraTarget);
                cb.clear_render_target(true, true, camera.background_color);
                cb.set_global_vector(uniforms.camera_pos, camera.world_position());
            })?;

            // Skybox must follow the clear or the clear erases it.
            frame.draw_skybox(camera);

            let culled = frame.cull(camera);

            // Lighting state must be published before any geometry draw so
            // the BaseLit pass observes it.
            if let Some(light) = first_directional(&culled.lights) {
                frame.stage("RenderLights", |cb| {
                    cb.set_global_vector(uniforms.light_dir, light.direction);
                    cb.set_global_color(uniforms.light_color, light.color);
                })?;

                let visible = filter_renderables(&culled.renderables, &FilterSettings::opaque());
                frame.draw_renderers(
                    &visible,
                    &DrawSettings {
                        pass: Self::PASS,
                        sorting: SortMode::BackendDefault,
                    },
                )?;
            } else {
                warn!("no visible directional light; skipping lit geometry for this camera");
            }

            frame.submit()?;
        }

        Ok(())
    }

    fn dispose(&mut self) {
        self.state.release();
    }
}
