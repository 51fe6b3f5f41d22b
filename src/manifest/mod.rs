//! Program Manifests
//!
//! A [`ShaderManifest`] is the declarative description of one shader program:
//! which built-in uniform slots and uniform buffers it binds, which custom
//! uniforms it declares (with defaults), and which source files it compiles.
//!
//! Manifests are static data. The registry drives a single build routine off
//! the table returned by [`manifest`], so adding a program means adding a
//! [`ShaderKind`] variant and one table entry.
//!
//! ```rust,ignore
//! use wren_shaders::{ShaderKind, manifest};
//!
//! let pbr = manifest::manifest(ShaderKind::Pbr);
//! assert_eq!(pbr.uniform_buffers.len(), 4);
//! ```

mod slots;
mod table;
mod uniforms;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::errors::ShaderError;
use crate::kind::ShaderKind;

pub use slots::{UniformBufferSlot, UniformSlot};
pub use table::manifest;
pub use uniforms::{CustomUniform, UniformType, UniformValue};

/// Vertex and fragment source files of a program, relative to the shader
/// source directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ShaderSourcePaths {
    pub vertex: &'static str,
    pub fragment: &'static str,
}

impl ShaderSourcePaths {
    #[must_use]
    pub const fn new(vertex: &'static str, fragment: &'static str) -> Self {
        Self { vertex, fragment }
    }

    /// Joins both paths onto `dir`, returning `(vertex, fragment)`.
    #[must_use]
    pub fn resolve(&self, dir: &Path) -> (PathBuf, PathBuf) {
        (dir.join(self.vertex), dir.join(self.fragment))
    }
}

/// Declarative description of a shader program.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShaderManifest {
    pub uniforms: &'static [UniformSlot],
    pub uniform_buffers: &'static [UniformBufferSlot],
    pub custom_uniforms: &'static [CustomUniform],
    pub sources: ShaderSourcePaths,
}

impl ShaderManifest {
    /// Looks up a custom uniform by name.
    #[must_use]
    pub fn custom_uniform(&self, name: &str) -> Option<&CustomUniform> {
        self.custom_uniforms.iter().find(|u| u.name == name)
    }

    /// Number of texture samplers (2D and cube) bound by the program.
    #[must_use]
    pub fn texture_count(&self) -> usize {
        self.uniforms.iter().filter(|slot| slot.is_texture()).count()
    }
}

/// Verifies that every program's source files exist under `dir`.
///
/// Returns one [`ShaderError::MissingSource`] per kind and missing file, in
/// [`ShaderKind::ALL`] order: a missing source shared by several programs is
/// reported once for each of them. An empty vector means all sources were
/// found. Files are not read or parsed.
#[must_use]
pub fn check_sources(dir: &Path) -> Vec<ShaderError> {
    let mut missing = Vec::new();
    for kind in ShaderKind::ALL {
        let (vertex, fragment) = manifest(kind).sources.resolve(dir);
        for path in [vertex, fragment] {
            if !path.is_file() {
                missing.push(ShaderError::MissingSource { kind, path });
            }
        }
    }
    missing
}
