//! Collision layer masks
//!
//! Layers are numbered 0..32, one bit each. A mask selects the layers a
//! system cares about; the ground tracker only listens to contacts whose
//! layer bit is set in its ground mask.

use serde::{Deserialize, Serialize};

/// Number of addressable collision layers.
pub const LAYER_COUNT: u32 = 32;

/// Bitmask over collision layers.
///
/// Serializes as a plain integer so configuration files can write
/// `"ground_layer_mask": 5` for layers 0 and 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// Mask with no layers selected.
    pub const NOTHING: Self = Self(0);
    /// Mask with every layer selected.
    pub const EVERYTHING: Self = Self(u32::MAX);
    /// Mask with only layer 0 selected.
    pub const DEFAULT: Self = Self(1);

    /// Build a mask from a list of layer indices.
    ///
    /// Indices outside 0..32 are skipped.
    pub fn from_layers(layers: &[u32]) -> Self {
        layers
            .iter()
            .fold(Self::NOTHING, |mask, &layer| mask.with_layer(layer))
    }

    /// Return a copy of this mask with `layer` added.
    pub fn with_layer(self, layer: u32) -> Self {
        if layer < LAYER_COUNT {
            Self(self.0 | (1 << layer))
        } else {
            self
        }
    }

    /// Check whether `layer` is selected by this mask.
    ///
    /// Layers outside 0..32 are never contained.
    #[inline]
    pub fn contains(&self, layer: u32) -> bool {
        layer < LAYER_COUNT && self.0 & (1 << layer) != 0
    }

    /// Check if no layer is selected.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        Self::DEFAULT
    }
}
