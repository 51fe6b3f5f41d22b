//! Shader Program Registry
//!
//! [`ShaderRegistry`] maps every [`ShaderKind`] to the program handle the
//! backend produced for it, building lazily on first request.
//!
//! ## Build sequence
//!
//! One generic routine serves every kind, driven by its [`ShaderManifest`]:
//!
//! 1. `create_program`
//! 2. `use_uniform` for each built-in uniform slot
//! 3. `use_uniform_buffer` for each built-in uniform buffer
//! 4. `create_custom_uniform` for each custom uniform
//! 5. source paths (resolved against [`RegistrySettings::shader_dir`]), then `setup`
//!
//! A failed build is logged with the failing stage (vertex, then fragment,
//! otherwise link) and the handle is cached anyway. Whether that handle is
//! served again is decided by [`RetryPolicy`].
//!
//! A null handle from `create_program` skips steps 2 to 5 and is logged as
//! such rather than as a link failure. Its status reads `Failed(Link)` since no
//! program was linked, and it is always rebuilt on the next request.
//!
//! ## Per-kind lifecycle
//!
//! ```text
//! Unbuilt ──get──▶ Building ──▶ Linked
//!                           └──▶ Failed(stage)
//! ```
//!
//! Building is never observable: the registry is single-threaded and every
//! build runs to completion inside [`ShaderRegistry::get`]. Only
//! [`reset`](ShaderRegistry::reset) and [`reset_kind`](ShaderRegistry::reset_kind)
//! return a kind to `Unbuilt`.
//!
//! [`ShaderManifest`]: crate::manifest::ShaderManifest

use rustc_hash::FxHashMap;

use crate::backend::{ProgramHandle, ShaderBackend};
use crate::errors::{FailureStage, ShaderError};
use crate::kind::ShaderKind;
use crate::manifest::{self, manifest};
use crate::settings::{RegistrySettings, RetryPolicy};

/// Observable build state of one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgramStatus {
    Unbuilt,
    Linked,
    Failed(FailureStage),
}

#[derive(Debug, Clone, Copy)]
struct ProgramEntry {
    handle: ProgramHandle,
    failure: Option<FailureStage>,
}

/// Outcome of [`ShaderRegistry::build_all`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub linked: Vec<ShaderKind>,
    pub failed: Vec<(ShaderKind, FailureStage)>,
}

impl BuildReport {
    /// `true` when every kind linked.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.linked.len() + self.failed.len()
    }
}

/// Lazily-populated cache of compiled shader programs.
///
/// Owns its backend; create one per renderer instance at start-up.
pub struct ShaderRegistry<B: ShaderBackend> {
    backend: B,
    settings: RegistrySettings,
    programs: FxHashMap<ShaderKind, ProgramEntry>,
}

impl<B: ShaderBackend> ShaderRegistry<B> {
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self::with_settings(backend, RegistrySettings::default())
    }

    #[must_use]
    pub fn with_settings(backend: B, settings: RegistrySettings) -> Self {
        Self {
            backend,
            settings,
            programs: FxHashMap::default(),
        }
    }

    // ── Lookup ───────────────────────────────────────────────────────────────

    /// Returns the program for `kind`, building it on first request.
    ///
    /// Never fails: a program whose build failed is still returned (and
    /// logged). Check [`status`](Self::status) to tell the two apart.
    pub fn get(&mut self, kind: ShaderKind) -> ProgramHandle {
        if let Some(handle) = self.cached(kind) {
            return handle;
        }
        self.build(kind)
    }

    /// The handle [`get`](Self::get) would return without building, if any.
    #[must_use]
    pub fn cached(&self, kind: ShaderKind) -> Option<ProgramHandle> {
        let entry = self.programs.get(&kind)?;
        if entry.handle.is_null() {
            return None;
        }
        if entry.failure.is_some() && self.settings.retry_policy == RetryPolicy::RetryFailed {
            return None;
        }
        Some(entry.handle)
    }

    /// The error logged for `kind`'s last build, or `None` if it linked or
    /// was never built.
    ///
    /// A null handle from the backend reads as [`ShaderError::NullProgram`],
    /// not as a link failure.
    #[must_use]
    pub fn diagnostic(&self, kind: ShaderKind) -> Option<ShaderError> {
        let entry = self.programs.get(&kind)?;
        let stage = entry.failure?;
        if entry.handle.is_null() {
            Some(ShaderError::NullProgram { kind })
        } else {
            Some(ShaderError::build_failure(kind, stage))
        }
    }

    #[must_use]
    pub fn status(&self, kind: ShaderKind) -> ProgramStatus {
        match self.programs.get(&kind) {
            None => ProgramStatus::Unbuilt,
            Some(ProgramEntry { failure: None, .. }) => ProgramStatus::Linked,
            Some(ProgramEntry { failure: Some(stage), .. }) => ProgramStatus::Failed(*stage),
        }
    }

    /// Number of kinds with a cache entry, failed ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.programs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    // ── Bulk operations ──────────────────────────────────────────────────────

    /// Realizes every kind, in [`ShaderKind::ALL`] order.
    ///
    /// Each kind is requested exactly once; kinds already cached cost a lookup.
    /// Used at start-up to pay compilation before the first frame.
    pub fn build_all(&mut self) -> BuildReport {
        let mut report = BuildReport::default();
        for kind in ShaderKind::ALL {
            self.get(kind);
            match self.status(kind) {
                ProgramStatus::Failed(stage) => report.failed.push((kind, stage)),
                _ => report.linked.push(kind),
            }
        }

        if report.is_success() {
            log::info!("Built {} shader programs", report.total());
        } else {
            log::warn!(
                "Built {} shader programs, {} failed",
                report.total(),
                report.failed.len()
            );
        }
        report
    }

    /// Forgets every program; the next request recompiles.
    ///
    /// Program objects are not released: the backend owns their lifetime.
    pub fn reset(&mut self) {
        log::info!("Resetting {} cached shader programs", self.programs.len());
        self.programs.clear();
    }

    /// Forgets one program. Returns `true` if it had been built.
    pub fn reset_kind(&mut self, kind: ShaderKind) -> bool {
        let removed = self.programs.remove(&kind).is_some();
        if removed {
            log::debug!("Reset shader '{kind}'");
        }
        removed
    }

    /// Checks that every kind's source files exist under the shader directory.
    #[must_use]
    pub fn check_sources(&self) -> Vec<ShaderError> {
        manifest::check_sources(&self.settings.shader_dir)
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    #[must_use]
    pub fn settings(&self) -> &RegistrySettings {
        &self.settings
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    #[must_use]
    pub fn into_backend(self) -> B {
        self.backend
    }

    // ── Build ────────────────────────────────────────────────────────────────

    fn build(&mut self, kind: ShaderKind) -> ProgramHandle {
        let program = self.backend.create_program();
        let failure = if program.is_null() {
            Some(FailureStage::Link)
        } else {
            self.compile(kind, program)
        };

        self.programs.insert(
            kind,
            ProgramEntry {
                handle: program,
                failure,
            },
        );
        match self.diagnostic(kind) {
            Some(err) => log::error!("{err}"),
            None => log::debug!("Built shader '{kind}' as {program}"),
        }
        program
    }

    /// Declares `kind`'s bindings and sources on `program`, then sets it up.
    fn compile(&mut self, kind: ShaderKind, program: ProgramHandle) -> Option<FailureStage> {
        let manifest = manifest(kind);
        for &slot in manifest.uniforms {
            self.backend.use_uniform(program, slot);
        }
        for &slot in manifest.uniform_buffers {
            self.backend.use_uniform_buffer(program, slot);
        }
        for uniform in manifest.custom_uniforms {
            self.backend
                .create_custom_uniform(program, uniform.name, &uniform.value);
        }

        let (vertex, fragment) = manifest.sources.resolve(&self.settings.shader_dir);
        self.backend.set_vertex_shader_path(program, &vertex);
        self.backend.set_fragment_shader_path(program, &fragment);
        self.backend.setup(program);

        self.classify_failure(program)
    }

    fn classify_failure(&self, program: ProgramHandle) -> Option<FailureStage> {
        if self.backend.is_linked(program) {
            None
        } else if self.backend.has_vertex_shader_compilation_failed(program) {
            Some(FailureStage::Vertex)
        } else if self.backend.has_fragment_shader_compilation_failed(program) {
            Some(FailureStage::Fragment)
        } else {
            Some(FailureStage::Link)
        }
    }
}

impl<B: ShaderBackend + Default> Default for ShaderRegistry<B> {
    fn default() -> Self {
        Self::new(B::default())
    }
}
