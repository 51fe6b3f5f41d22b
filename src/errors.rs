//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! [`ShaderError`] covers:
//! - Program build failures (vertex compile, fragment compile, link, null handle)
//! - Missing shader source files
//! - Settings loading (I/O and JSON)
//!
//! Build failures are **not** returned to callers of
//! [`ShaderRegistry::get`](crate::ShaderRegistry::get): the registry logs them
//! and records them in [`ProgramStatus`](crate::ProgramStatus). The error type
//! is the vocabulary for that diagnostic.
//!
//! ```rust,ignore
//! use wren_shaders::errors::{ShaderError, Result};
//!
//! fn load() -> Result<RegistrySettings> {
//!     RegistrySettings::from_json_file("shaders.json")
//! }
//! ```

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::kind::ShaderKind;

/// The main error type for the shader registry.
#[derive(Error, Debug)]
pub enum ShaderError {
    // ========================================================================
    // Build Errors
    // ========================================================================
    /// The backend failed to compile the vertex stage.
    #[error("Vertex shader compilation failed for '{kind}'")]
    VertexCompileFailed { kind: ShaderKind },

    /// The backend failed to compile the fragment stage.
    #[error("Fragment shader compilation failed for '{kind}'")]
    FragmentCompileFailed { kind: ShaderKind },

    /// Both stages compiled but the program did not link.
    #[error("Linkage failed for '{kind}'")]
    LinkFailed { kind: ShaderKind },

    /// The backend could not allocate a program object; nothing was compiled.
    #[error("Backend returned a null program handle for '{kind}'")]
    NullProgram { kind: ShaderKind },

    // ========================================================================
    // Source Errors
    // ========================================================================
    /// A source file named by a manifest does not exist.
    #[error("Shader source for '{kind}' not found: {}", .path.display())]
    MissingSource { kind: ShaderKind, path: PathBuf },

    // ========================================================================
    // Settings Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings JSON could not be parsed.
    #[error("Settings parse error: {0}")]
    Settings(#[from] serde_json::Error),
}

impl ShaderError {
    /// Builds the error describing a failure at `stage` for `kind`.
    #[must_use]
    pub fn build_failure(kind: ShaderKind, stage: FailureStage) -> Self {
        match stage {
            FailureStage::Vertex => Self::VertexCompileFailed { kind },
            FailureStage::Fragment => Self::FragmentCompileFailed { kind },
            FailureStage::Link => Self::LinkFailed { kind },
        }
    }

    /// The failing build stage, for build errors.
    #[must_use]
    pub fn stage(&self) -> Option<FailureStage> {
        match self {
            Self::VertexCompileFailed { .. } => Some(FailureStage::Vertex),
            Self::FragmentCompileFailed { .. } => Some(FailureStage::Fragment),
            Self::LinkFailed { .. } => Some(FailureStage::Link),
            _ => None,
        }
    }
}

/// Stage at which a program build failed.
///
/// Stages are mutually exclusive and detected in declaration order: vertex
/// first, then fragment, otherwise link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureStage {
    Vertex,
    Fragment,
    Link,
}

impl fmt::Display for FailureStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Vertex => "vertex",
            Self::Fragment => "fragment",
            Self::Link => "link",
        })
    }
}

/// Alias for `Result<T, ShaderError>`.
pub type Result<T> = std::result::Result<T, ShaderError>;
