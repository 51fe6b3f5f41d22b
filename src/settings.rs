//! Registry Settings
//!
//! [`RegistrySettings`] configures where shader sources live and how the
//! registry treats programs whose build failed.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use wren_shaders::{RegistrySettings, RetryPolicy, ShaderRegistry};
//!
//! // Defaults: `resources/wren/shaders`, failed programs stay failed
//! let settings = RegistrySettings::default();
//!
//! // Hot-reload friendly: rebuild failed programs on next request
//! let settings = RegistrySettings {
//!     retry_policy: RetryPolicy::RetryFailed,
//!     ..Default::default()
//! };
//!
//! let registry = ShaderRegistry::with_settings(backend, settings);
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// Default shader source directory, relative to the working directory.
pub const DEFAULT_SHADER_DIR: &str = "resources/wren/shaders";

// ---------------------------------------------------------------------------
// RetryPolicy
// ---------------------------------------------------------------------------

/// What [`ShaderRegistry::get`](crate::ShaderRegistry::get) does with a
/// program whose build failed but whose handle is non-null.
///
/// A null handle is never served from the cache, whatever the policy.
///
/// | Policy        | Failed, non-null handle on next `get` |
/// |---------------|---------------------------------------|
/// | `KeepFailed`  | returned as is (terminal)             |
/// | `RetryFailed` | abandoned, new program built          |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetryPolicy {
    /// A failed program stays failed until `reset`.
    #[default]
    KeepFailed,
    /// A failed program is rebuilt on every request until it links.
    ///
    /// Each rebuild allocates a fresh program object through `create_program`
    /// and abandons the failed one. [`ShaderBackend`](crate::ShaderBackend)
    /// has no release operation, so a kind that keeps failing accumulates
    /// native programs until the backend itself reclaims them.
    RetryFailed,
}

// ---------------------------------------------------------------------------
// RegistrySettings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrySettings {
    /// Directory the manifests' source paths are resolved against.
    pub shader_dir: PathBuf,
    pub retry_policy: RetryPolicy,
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            shader_dir: PathBuf::from(DEFAULT_SHADER_DIR),
            retry_policy: RetryPolicy::default(),
        }
    }
}

impl RegistrySettings {
    /// Parses settings from JSON. Missing fields take their default.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    #[must_use]
    pub fn with_shader_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.shader_dir = dir.into();
        self
    }

    #[must_use]
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = RegistrySettings::default();
        assert_eq!(settings.shader_dir, Path::new(DEFAULT_SHADER_DIR));
        assert_eq!(settings.retry_policy, RetryPolicy::KeepFailed);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = RegistrySettings::from_json_str(r#"{ "retry_policy": "retry_failed" }"#).unwrap();
        assert_eq!(settings.retry_policy, RetryPolicy::RetryFailed);
        assert_eq!(settings.shader_dir, Path::new(DEFAULT_SHADER_DIR));
    }

    #[test]
    fn test_invalid_json_is_settings_error() {
        let err = RegistrySettings::from_json_str("{ retry_policy: 3").unwrap_err();
        assert!(matches!(err, crate::ShaderError::Settings(_)));
    }
}
