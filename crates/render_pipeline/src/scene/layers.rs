//! Render layer masks for draw filtering
//!
//! Every renderable lives on exactly one layer; cameras and draw passes carry
//! a mask of the layers they accept. Both current pipeline variants draw all
//! layers, but the mask travels through the filter settings so hosts can
//! partition scenes (UI layers, editor gizmos) without touching the pipeline.

use bitflags::bitflags;

bitflags! {
    /// Bitmask over the 32 render layers
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LayerMask: u32 {
        /// The default layer most scene objects live on
        const DEFAULT = 1 << 0;
    }
}

impl LayerMask {
    /// Mask accepting every layer, including ones without a named flag
    pub const EVERYTHING: Self = Self::from_bits_retain(u32::MAX);

    /// Mask for a single layer by index (0..=31)
    pub fn layer(index: u8) -> Self {
        debug_assert!(index < 32, "layer index out of range: {index}");
        Self::from_bits_retain(1 << u32::from(index))
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_everything_accepts_any_layer() {
        for index in 0..32 {
            assert!(LayerMask::EVERYTHING.intersects(LayerMask::layer(index)));
        }
    }

    #[test]
    fn test_single_layer_masks_are_disjoint() {
        assert!(!LayerMask::layer(3).intersects(LayerMask::layer(4)));
        assert!(LayerMask::layer(3).intersects(LayerMask::layer(3)));
    }

    #[test]
    fn test_default_is_layer_zero() {
        assert_eq!(LayerMask::default(), LayerMask::layer(0));
    }
}
