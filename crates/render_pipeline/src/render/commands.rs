//! Command stream for queued graphics operations
//!
//! A [`CommandStream`] is an ordered buffer of graphics operations built up
//! by one pipeline stage and executed as a unit by the backend. The pipeline
//! owns a single stream and reuses it across stages and frames; the stage
//! API on [`FrameContext`](crate::render::FrameContext) guarantees it is
//! executed and cleared at every stage boundary, so commands from distinct
//! stages can never interleave.

use crate::foundation::math::{Color, Vec4};
use crate::render::backend::UniformSlot;

/// Render target selector for queued operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTarget {
    /// The active camera's backbuffer
    CameraTarget,
}

/// One queued graphics operation
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOp {
    /// Bind a render target for subsequent operations
    SetRenderTarget(RenderTarget),

    /// Clear the bound render target
    ClearRenderTarget {
        /// Clear the depth buffer
        clear_depth: bool,
        /// Clear the color buffer
        clear_color: bool,
        /// Color to clear to
        color: Color,
    },

    /// Write a vector-valued global shader uniform
    SetGlobalVector {
        /// Resolved uniform slot
        slot: UniformSlot,
        /// Value visible to all shader invocations until overwritten
        value: Vec4,
    },

    /// Write a color-valued global shader uniform
    SetGlobalColor {
        /// Resolved uniform slot
        slot: UniformSlot,
        /// Value visible to all shader invocations until overwritten
        value: Color,
    },
}

/// Ordered, reusable buffer of graphics operations
///
/// Not thread-safe by design: exclusively owned by one pipeline instance and
/// driven by the single-threaded camera loop.
#[derive(Debug, Default)]
pub struct CommandStream {
    label: &'static str,
    ops: Vec<RenderOp>,
}

impl CommandStream {
    /// Create an empty stream
    pub fn new() -> Self {
        Self {
            label: "",
            ops: Vec::new(),
        }
    }

    /// Label of the stage currently encoding into this stream
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Begin a new stage, naming the stream for backend debugging tools
    ///
    /// The stream must be empty: stages never inherit leftover commands.
    pub(crate) fn begin(&mut self, label: &'static str) {
        debug_assert!(
            self.ops.is_empty(),
            "stage {label:?} began with leftover commands from {:?}",
            self.label
        );
        self.label = label;
    }

    /// Queue a render target bind
    pub fn set_render_target(&mut self, target: RenderTarget) {
        self.ops.push(RenderOp::SetRenderTarget(target));
    }

    /// Queue a clear of the bound render target
    pub fn clear_render_target(&mut self, clear_depth: bool, clear_color: bool, color: Color) {
        self.ops.push(RenderOp::ClearRenderTarget {
            clear_depth,
            clear_color,
            color,
        });
    }

    /// Queue a vector-valued global uniform write
    pub fn set_global_vector(&mut self, slot: UniformSlot, value: Vec4) {
        self.ops.push(RenderOp::SetGlobalVector { slot, value });
    }

    /// Queue a color-valued global uniform write
    pub fn set_global_color(&mut self, slot: UniformSlot, value: Color) {
        self.ops.push(RenderOp::SetGlobalColor { slot, value });
    }

    /// Queued operations in issue order
    pub fn ops(&self) -> &[RenderOp] {
        &self.ops
    }

    /// Number of queued operations
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether the stream has no queued operations
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Drop all queued operations, keeping the allocation for reuse
    pub fn clear(&mut self) {
        self.ops.clear();
    }
}
