//! Shader Backend Interface
//!
//! The registry never compiles GLSL itself. It drives a [`ShaderBackend`]: the
//! native renderer's program API, expressed as a typed trait. Slot identifiers
//! and uniform type tags are enums rather than raw integers, and custom uniform
//! defaults travel as [`UniformValue`]s instead of untyped pointers.
//!
//! [`RecordingBackend`] is an in-memory implementation for headless tools and
//! tests.

mod recording;

use std::fmt;
use std::path::Path;

use crate::manifest::{UniformBufferSlot, UniformSlot, UniformValue};

pub use recording::{ProgramRecord, RecordedUniform, RecordingBackend};

/// Opaque program identifier issued by a [`ShaderBackend`].
///
/// The zero value is the null handle; backends return it when no program
/// object could be allocated. The registry never serves a null handle from its
/// cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ProgramHandle(u32);

impl ProgramHandle {
    pub const NULL: Self = Self(0);

    /// Wraps a raw backend identifier.
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ProgramHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "program#{}", self.0)
    }
}

/// Program-building operations of the native renderer.
///
/// All calls are synchronous and made from the rendering thread. Operations on
/// a program must follow the order the registry uses: bindings and custom
/// uniforms, then source paths, then [`setup`](Self::setup).
pub trait ShaderBackend {
    /// Allocates an empty program.
    fn create_program(&mut self) -> ProgramHandle;

    fn use_uniform(&mut self, program: ProgramHandle, slot: UniformSlot);

    fn use_uniform_buffer(&mut self, program: ProgramHandle, slot: UniformBufferSlot);

    /// Declares a non-built-in uniform; the backend copies `default`.
    fn create_custom_uniform(&mut self, program: ProgramHandle, name: &str, default: &UniformValue);

    fn set_vertex_shader_path(&mut self, program: ProgramHandle, path: &Path);

    fn set_fragment_shader_path(&mut self, program: ProgramHandle, path: &Path);

    /// Compiles both stages and links. Blocking, no retry.
    fn setup(&mut self, program: ProgramHandle);

    /// Whether the program holds a linked native program object.
    fn is_linked(&self, program: ProgramHandle) -> bool;

    fn has_vertex_shader_compilation_failed(&self, program: ProgramHandle) -> bool;

    fn has_fragment_shader_compilation_failed(&self, program: ProgramHandle) -> bool;
}

impl<B: ShaderBackend + ?Sized> ShaderBackend for &mut B {
    fn create_program(&mut self) -> ProgramHandle {
        (**self).create_program()
    }

    fn use_uniform(&mut self, program: ProgramHandle, slot: UniformSlot) {
        (**self).use_uniform(program, slot);
    }

    fn use_uniform_buffer(&mut self, program: ProgramHandle, slot: UniformBufferSlot) {
        (**self).use_uniform_buffer(program, slot);
    }

    fn create_custom_uniform(&mut self, program: ProgramHandle, name: &str, default: &UniformValue) {
        (**self).create_custom_uniform(program, name, default);
    }

    fn set_vertex_shader_path(&mut self, program: ProgramHandle, path: &Path) {
        (**self).set_vertex_shader_path(program, path);
    }

    fn set_fragment_shader_path(&mut self, program: ProgramHandle, path: &Path) {
        (**self).set_fragment_shader_path(program, path);
    }

    fn setup(&mut self, program: ProgramHandle) {
        (**self).setup(program);
    }

    fn is_linked(&self, program: ProgramHandle) -> bool {
        (**self).is_linked(program)
    }

    fn has_vertex_shader_compilation_failed(&self, program: ProgramHandle) -> bool {
        (**self).has_vertex_shader_compilation_failed(program)
    }

    fn has_fragment_shader_compilation_failed(&self, program: ProgramHandle) -> bool {
        (**self).has_fragment_shader_compilation_failed(program)
    }
}
