//! Pipeline instances and their selection
//!
//! A pipeline instance orchestrates one full frame across N cameras,
//! sequentially and in input order. Two variants exist —
//! [`UnlitPipeline`] and [`DirectionalLitPipeline`] — sharing the same
//! per-camera skeleton: setup, clear + skybox, cull, draw, submit.
//!
//! The variant is chosen at startup through [`PipelineConfig`]; hosts hold
//! the instance behind the [`RenderPipeline`] trait and drive it once per
//! frame.
//!
//! ## Lifecycle
//!
//! An instance has two states: **active** (command stream allocated lazily on
//! first render) and **disposed** (stream released). Disposal is idempotent;
//! rendering a disposed instance fails fast with
//! [`RenderError::PipelineDisposed`] before any backend call.

mod lit;
mod unlit;

pub use lit::DirectionalLitPipeline;
pub use unlit::UnlitPipeline;

use log::{debug, info};

use crate::render::backend::GraphicsBackend;
use crate::render::commands::CommandStream;
use crate::render::{RenderError, RenderResult};
use crate::scene::Camera;

/// A forward render pipeline driven once per host frame
pub trait RenderPipeline {
    /// Render every camera in input order and submit per camera
    ///
    /// Runs to completion before returning; there is no internal parallelism
    /// or suspension point. Backend failures are fatal for the frame and
    /// propagate unchanged.
    fn render(&mut self, backend: &mut dyn GraphicsBackend, cameras: &[Camera])
        -> RenderResult<()>;

    /// Release the instance's command stream
    ///
    /// Safe to call more than once; later calls are no-ops.
    fn dispose(&mut self);
}

/// Which pipeline variant to instantiate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineKind {
    /// Draw everything with the `"Unlit"` pass, no lighting state
    Unlit,
    /// Light opaque geometry with the first visible directional light
    DirectionalLit,
}

/// Startup configuration selecting the pipeline variant
///
/// This is the whole surface the host's asset/configuration layer needs: it
/// persists a `PipelineConfig` and instantiates it once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Variant to instantiate
    pub kind: PipelineKind,
}

impl PipelineConfig {
    /// Instantiate the configured pipeline variant
    pub fn create_pipeline_instance(&self) -> Box<dyn RenderPipeline> {
        info!("creating {:?} pipeline instance", self.kind);
        match self.kind {
            PipelineKind::Unlit => Box::new(UnlitPipeline::new()),
            PipelineKind::DirectionalLit => Box::new(DirectionalLitPipeline::new()),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            kind: PipelineKind::Unlit,
        }
    }
}

/// Shared lifecycle state of a pipeline instance
///
/// Owns the lazily allocated command stream and the disposed flag that
/// guards all later calls.
#[derive(Debug, Default)]
pub(crate) struct PipelineState {
    stream: Option<CommandStream>,
    disposed: bool,
}

impl PipelineState {
    /// Borrow the command stream, allocating it on first use
    ///
    /// Fails without touching the backend when the instance was disposed.
    pub(crate) fn acquire(&mut self) -> RenderResult<&mut CommandStream> {
        if self.disposed {
            return Err(RenderError::PipelineDisposed);
        }
        if self.stream.is_none() {
            debug!("allocating command stream on first render");
        }
        Ok(self.stream.get_or_insert_with(CommandStream::new))
    }

    /// Release the command stream; later calls are no-ops
    pub(crate) fn release(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        if self.stream.take().is_some() {
            info!("released command stream");
        }
    }
}
