//! # Render Pipeline
//!
//! A minimal forward rendering pipeline over a pluggable graphics backend.
//!
//! The crate implements two pipeline variants sharing one architecture:
//!
//! - **Unlit**: clears the target, draws the skybox, culls, then draws every
//!   visible renderable with the `"Unlit"` shader pass. No lighting state.
//! - **Directional lit**: clears the target, draws the skybox, culls, selects
//!   the first visible directional light, publishes its direction and color
//!   as global shader uniforms, then draws opaque geometry with the
//!   `"BaseLit"` shader pass.
//!
//! The pipeline never talks to a GPU directly. Everything it needs from the
//! host engine — camera setup, skybox drawing, visibility culling, filtered
//! draws, command-stream execution, and frame submission — goes through the
//! [`GraphicsBackend`](render::GraphicsBackend) trait, which makes the whole
//! frame loop testable against a recording mock.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use render_pipeline::prelude::*;
//!
//! # fn host_backend() -> Box<dyn GraphicsBackend> { unimplemented!() }
//! # fn host_cameras() -> Vec<Camera> { unimplemented!() }
//! let mut backend = host_backend();
//! let cameras = host_cameras();
//!
//! let config = PipelineConfig { kind: PipelineKind::DirectionalLit };
//! let mut pipeline = config.create_pipeline_instance();
//!
//! // Once per host frame:
//! pipeline.render(backend.as_mut(), &cameras)?;
//!
//! // On shutdown:
//! pipeline.dispose();
//! # Ok::<(), render_pipeline::render::RenderError>(())
//! ```

pub mod foundation;
pub mod render;
pub mod scene;

/// Common imports for pipeline users
pub mod prelude {
    pub use crate::{
        foundation::math::{Color, Mat4, Vec3, Vec4},
        render::{
            CommandStream, CullResults, DrawSettings, FilterSettings, GraphicsBackend,
            PipelineConfig, PipelineKind, RenderError, RenderPipeline, RenderQueueRange,
            RenderResult, SortMode,
        },
        scene::{Camera, LayerMask, LightKind, Renderable, VisibleLight},
    };
}
