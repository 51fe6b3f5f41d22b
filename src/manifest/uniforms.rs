//! Custom uniform declarations.
//!
//! Programs may declare uniforms beyond the built-in slots. Each carries a type
//! tag and a default value that the backend copies at declaration time.

use glam::{Mat4, Vec2, Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// Type tag of a custom uniform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UniformType {
    Bool,
    Int,
    Float,
    Vec2F,
    Vec3F,
    Vec4F,
    Mat4F,
}

impl UniformType {
    /// Size in bytes of a value of this type as handed to the backend.
    #[must_use]
    pub const fn size(self) -> usize {
        match self {
            Self::Bool | Self::Int | Self::Float => 4,
            Self::Vec2F => 8,
            Self::Vec3F => 12,
            Self::Vec4F => 16,
            Self::Mat4F => 64,
        }
    }
}

/// Default value of a custom uniform. The variant determines the type tag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum UniformValue {
    Bool(bool),
    Int(i32),
    Float(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
    Mat4(Mat4),
}

impl UniformValue {
    #[must_use]
    pub const fn uniform_type(&self) -> UniformType {
        match self {
            Self::Bool(_) => UniformType::Bool,
            Self::Int(_) => UniformType::Int,
            Self::Float(_) => UniformType::Float,
            Self::Vec2(_) => UniformType::Vec2F,
            Self::Vec3(_) => UniformType::Vec3F,
            Self::Vec4(_) => UniformType::Vec4F,
            Self::Mat4(_) => UniformType::Mat4F,
        }
    }

    /// Raw bytes of the value in native layout (column-major for matrices).
    ///
    /// Booleans are widened to a 32-bit integer, as GLSL stores them.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Self::Bool(b) => bytemuck::bytes_of(&u32::from(*b)).to_vec(),
            Self::Int(v) => bytemuck::bytes_of(v).to_vec(),
            Self::Float(v) => bytemuck::bytes_of(v).to_vec(),
            Self::Vec2(v) => bytemuck::bytes_of(v).to_vec(),
            Self::Vec3(v) => bytemuck::bytes_of(v).to_vec(),
            Self::Vec4(v) => bytemuck::bytes_of(v).to_vec(),
            Self::Mat4(m) => bytemuck::bytes_of(m).to_vec(),
        }
    }
}

/// A named uniform declared in addition to the built-in slots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CustomUniform {
    pub name: &'static str,
    pub value: UniformValue,
}

impl CustomUniform {
    #[must_use]
    pub const fn new(name: &'static str, value: UniformValue) -> Self {
        Self { name, value }
    }

    #[inline]
    #[must_use]
    pub const fn uniform_type(&self) -> UniformType {
        self.value.uniform_type()
    }
}
