//! Culling output consumed by the pipeline
//!
//! The backend's visibility query returns three unsorted lists scoped to one
//! camera within one render call. Consumers must not assume spatial or
//! priority order on any of them.

use crate::foundation::math::Mat4;
use crate::scene::{Renderable, VisibleLight};

/// Handle to a reflection probe resource stored in the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProbeId(pub u64);

/// One visible reflection probe
///
/// Neither pipeline variant samples probes yet; they ride through the cull
/// results so hosts observing the boundary see the full visibility set.
#[derive(Debug, Clone)]
pub struct ReflectionProbe {
    /// Backend handle to the probe's cubemap
    pub probe: ProbeId,

    /// Local-to-world transform of the probe's scene node
    pub local_to_world: Mat4,
}

/// Transient per-camera visibility aggregate
///
/// Produced by [`GraphicsBackend::cull`](crate::render::GraphicsBackend::cull)
/// and discarded at the end of the camera iteration.
#[derive(Debug, Clone, Default)]
pub struct CullResults {
    /// Potentially visible renderables, unsorted
    pub renderables: Vec<Renderable>,

    /// Potentially visible lights, unsorted
    pub lights: Vec<VisibleLight>,

    /// Potentially visible reflection probes, unsorted
    pub reflection_probes: Vec<ReflectionProbe>,
}

impl CullResults {
    /// Empty result set, for cameras that see nothing
    pub fn empty() -> Self {
        Self::default()
    }
}
