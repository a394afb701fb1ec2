//! # Rendering Core
//!
//! The forward-rendering pipeline and the boundary it renders through.
//!
//! ## Architecture
//!
//! The core is built from four leaf capabilities, composed top-down by the
//! pipeline variants:
//!
//! - **[`FrameContext`]**: wraps camera setup and command submission to the
//!   backend, and enforces the stage boundaries on the reusable command
//!   stream.
//! - **Culling**: the backend's visibility query, consumed as three unsorted
//!   lists per camera ([`CullResults`]).
//! - **Light selection**: a linear scan for the first visible directional
//!   light ([`lighting::first_directional`]).
//! - **Draw pass**: a filtered draw call keyed by render-queue range, layer
//!   mask, shader pass name, and sort mode ([`DrawSettings`],
//!   [`FilterSettings`]).
//!
//! Per camera, control flows: setup → clear + skybox → cull →
//! (lit only: light selection → uniform publish) → draw → submit.
//!
//! ## Error model
//!
//! The pipeline operates on trusted, already-validated engine state, so there
//! is no recoverable-error taxonomy. Backend execution and submission
//! failures are fatal for the frame and propagate to the host loop untouched;
//! the only pipeline-originated error is rendering through a disposed
//! instance.

pub mod backend;
pub mod commands;
pub mod cull;
pub mod filtering;
pub mod frame;
pub mod lighting;
pub mod pipeline;
pub mod uniforms;

pub use backend::{GraphicsBackend, UniformSlot};
pub use commands::{CommandStream, RenderOp, RenderTarget};
pub use cull::{CullResults, ProbeId, ReflectionProbe};
pub use filtering::{
    filter_renderables, DrawSettings, FilterSettings, RenderQueueRange, ShaderPass, SortMode,
};
pub use frame::FrameContext;
pub use lighting::DirectionalLight;
pub use pipeline::{
    DirectionalLitPipeline, PipelineConfig, PipelineKind, RenderPipeline, UnlitPipeline,
};
pub use uniforms::FrameUniforms;

use thiserror::Error;

/// Errors surfaced by the rendering core
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    /// A render was requested on a pipeline instance that was already disposed
    ///
    /// This is a caller precondition violation; the backend is never touched
    /// when it fires, so GPU state cannot be corrupted by the stale instance.
    #[error("render pipeline instance already disposed")]
    PipelineDisposed,

    /// The backend failed while executing queued commands or issuing a draw
    #[error("backend error: {0}")]
    BackendError(String),

    /// The backend failed to submit the accumulated frame work
    ///
    /// Per-frame submission has no retry semantics; the host frame loop
    /// decides what a lost frame means.
    #[error("frame submission failed: {0}")]
    SubmissionFailed(String),
}

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;
