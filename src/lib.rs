#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

//! Shader program registry for the wren renderer.
//!
//! Every program the renderer uses is named by a [`ShaderKind`] and described
//! by a static [`ShaderManifest`]. [`ShaderRegistry`] builds programs on
//! demand through a [`ShaderBackend`] and caches the handles.
//!
//! ```rust,ignore
//! use wren_shaders::{RecordingBackend, ShaderKind, ShaderRegistry};
//!
//! let mut registry = ShaderRegistry::new(RecordingBackend::new());
//! registry.build_all();
//! let pbr = registry.get(ShaderKind::Pbr);
//! ```

pub mod backend;
pub mod errors;
pub mod kind;
pub mod manifest;
pub mod registry;
pub mod settings;

pub use backend::{ProgramHandle, RecordingBackend, ShaderBackend};
pub use errors::{FailureStage, Result, ShaderError};
pub use kind::ShaderKind;
pub use manifest::{
    CustomUniform, ShaderManifest, ShaderSourcePaths, UniformBufferSlot, UniformSlot, UniformType,
    UniformValue,
};
pub use registry::{BuildReport, ProgramStatus, ShaderRegistry};
pub use settings::{RegistrySettings, RetryPolicy};
