//! Draw pass filtering and settings
//!
//! A draw pass considers only renderables inside its render-queue range and
//! layer mask. Filtering happens here, in the pipeline, so the backend only
//! ever sees the exact set it should draw; pass-name matching (skipping
//! materials without the pass) stays on the backend side.

use crate::scene::{LayerMask, Renderable};

/// Inclusive range of render-queue tags a draw pass accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderQueueRange {
    /// Lowest accepted queue tag
    pub min: u16,
    /// Highest accepted queue tag
    pub max: u16,
}

impl RenderQueueRange {
    /// Opaque geometry only (queue tags 0..=2500)
    pub const OPAQUE: Self = Self { min: 0, max: 2500 };

    /// Every queued renderable (queue tags 0..=5000)
    pub const ALL: Self = Self { min: 0, max: 5000 };

    /// Whether a queue tag falls inside this range
    pub fn contains(self, queue: u16) -> bool {
        queue >= self.min && queue <= self.max
    }
}

/// Name of a shader pass within a material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderPass(&'static str);

impl ShaderPass {
    /// Create a pass selector from its name
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// The pass name as a string
    pub const fn name(self) -> &'static str {
        self.0
    }
}

/// How the backend orders the draws within a pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// No sorting; correct for opaque geometry because the depth buffer
    /// resolves overdraw regardless of draw order
    None,
    /// Whatever ordering the backend applies by default
    BackendDefault,
}

/// Which renderables a draw pass considers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSettings {
    /// Accepted render-queue range
    pub queue_range: RenderQueueRange,
    /// Accepted layers
    pub layer_mask: LayerMask,
}

impl FilterSettings {
    /// Accept everything: all queues, all layers
    pub const fn all() -> Self {
        Self {
            queue_range: RenderQueueRange::ALL,
            layer_mask: LayerMask::EVERYTHING,
        }
    }

    /// Accept opaque queues on all layers
    pub const fn opaque() -> Self {
        Self {
            queue_range: RenderQueueRange::OPAQUE,
            layer_mask: LayerMask::EVERYTHING,
        }
    }
}

/// How a draw pass renders the renderables that pass its filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawSettings {
    /// Shader pass invoked per material
    pub pass: ShaderPass,
    /// Draw ordering within the pass
    pub sorting: SortMode,
}

/// Select the renderables a draw pass should consider
///
/// Keeps input order; ordering semantics beyond that belong to
/// [`SortMode`] and the backend.
pub fn filter_renderables(renderables: &[Renderable], filter: &FilterSettings) -> Vec<Renderable> {
    renderables
        .iter()
        .filter(|r| filter.queue_range.contains(r.queue) && filter.layer_mask.intersects(r.layer))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::renderable::{render_queue, MaterialId, MeshId};

    fn renderable(queue: u16, layer: LayerMask) -> Renderable {
        Renderable {
            mesh: MeshId(0),
            material: MaterialId(0),
            queue,
            layer,
        }
    }

    #[test]
    fn test_opaque_range_excludes_transparent_queues() {
        assert!(RenderQueueRange::OPAQUE.contains(render_queue::GEOMETRY));
        assert!(RenderQueueRange::OPAQUE.contains(render_queue::ALPHA_TEST));
        assert!(!RenderQueueRange::OPAQUE.contains(render_queue::TRANSPARENT));
        assert!(!RenderQueueRange::OPAQUE.contains(render_queue::OVERLAY));
    }

    #[test]
    fn test_all_range_includes_transparent_queues() {
        assert!(RenderQueueRange::ALL.contains(render_queue::GEOMETRY));
        assert!(RenderQueueRange::ALL.contains(render_queue::TRANSPARENT));
        assert!(RenderQueueRange::ALL.contains(render_queue::OVERLAY));
    }

    #[test]
    fn test_filter_splits_mixed_list_by_queue() {
        let objects = vec![
            renderable(render_queue::GEOMETRY, LayerMask::DEFAULT),
            renderable(render_queue::TRANSPARENT, LayerMask::DEFAULT),
            renderable(render_queue::ALPHA_TEST, LayerMask::DEFAULT),
        ];

        let opaque = filter_renderables(&objects, &FilterSettings::opaque());
        assert_eq!(opaque.len(), 2);
        assert!(opaque.iter().all(|r| r.queue <= 2500));

        let all = filter_renderables(&objects, &FilterSettings::all());
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_filter_respects_layer_mask() {
        let objects = vec![
            renderable(render_queue::GEOMETRY, LayerMask::layer(0)),
            renderable(render_queue::GEOMETRY, LayerMask::layer(5)),
        ];

        let filter = FilterSettings {
            queue_range: RenderQueueRange::ALL,
            layer_mask: LayerMask::layer(5),
        };
        let visible = filter_renderables(&objects, &filter);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].layer, LayerMask::layer(5));
    }

    #[test]
    fn test_filter_preserves_input_order() {
        let objects = vec![
            renderable(10, LayerMask::DEFAULT),
            renderable(20, LayerMask::DEFAULT),
            renderable(30, LayerMask::DEFAULT),
        ];
        let visible = filter_renderables(&objects, &FilterSettings::all());
        let queues: Vec<u16> = visible.iter().map(|r| r.queue).collect();
        assert_eq!(queues, vec![10, 20, 30]);
    }
}
