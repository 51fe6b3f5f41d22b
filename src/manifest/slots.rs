//! Built-in binding points.
//!
//! Slot identifiers are shared by every program: the backend indexes bindings
//! by slot id, so registration order within a manifest is irrelevant.

use serde::{Deserialize, Serialize};

/// A fixed-purpose uniform binding point.
///
/// Texture slots map to the texture unit of the same index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u32)]
pub enum UniformSlot {
    Texture0 = 0,
    Texture1 = 1,
    Texture2 = 2,
    Texture3 = 3,
    Texture4 = 4,
    Texture5 = 5,
    Texture6 = 6,
    Texture7 = 7,
    Texture8 = 8,
    TextureCube0 = 13,
    ModelTransform = 14,
    TextureTransform = 15,
    ViewportSize = 16,
    IterationNumber = 17,
    ColorPerVertex = 19,
    PointSize = 20,
}

impl UniformSlot {
    /// Numeric slot identifier understood by the backend.
    #[inline]
    #[must_use]
    pub const fn id(self) -> u32 {
        self as u32
    }

    /// Returns `true` for 2D and cube texture samplers.
    #[must_use]
    pub const fn is_texture(self) -> bool {
        self.id() <= Self::Texture8.id() || matches!(self, Self::TextureCube0)
    }
}

/// A built-in uniform buffer, bound as a block rather than field by field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u32)]
pub enum UniformBufferSlot {
    MaterialPhong = 0,
    MaterialPbr = 1,
    Lights = 2,
    LightRenderable = 3,
    CameraTransforms = 4,
    Fog = 5,
}

impl UniformBufferSlot {
    /// Numeric block binding understood by the backend.
    #[inline]
    #[must_use]
    pub const fn id(self) -> u32 {
        self as u32
    }
}
