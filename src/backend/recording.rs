//! In-memory backend that records every program-building call.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use super::{ProgramHandle, ShaderBackend};
use crate::errors::FailureStage;
use crate::manifest::{UniformBufferSlot, UniformSlot, UniformType, UniformValue};

/// A custom uniform as the backend received it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedUniform {
    pub name: String,
    pub uniform_type: UniformType,
    /// Copy of the default value's bytes.
    pub default_bytes: Vec<u8>,
}

/// Everything the backend was told about one program.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgramRecord {
    pub uniforms: Vec<UniformSlot>,
    pub uniform_buffers: Vec<UniformBufferSlot>,
    pub custom_uniforms: Vec<RecordedUniform>,
    pub vertex_path: Option<PathBuf>,
    pub fragment_path: Option<PathBuf>,
    pub setup_calls: u32,
    pub linked: bool,
    pub vertex_failed: bool,
    pub fragment_failed: bool,
}

impl ProgramRecord {
    #[must_use]
    pub fn custom_uniform(&self, name: &str) -> Option<&RecordedUniform> {
        self.custom_uniforms.iter().find(|u| u.name == name)
    }
}

/// Headless [`ShaderBackend`].
///
/// Issues sequential non-null handles and links every program unless a
/// failure was injected for one of its source files with
/// [`fail_source`](Self::fail_source). In [null-handle mode](Self::set_null_handles)
/// `create_program` returns [`ProgramHandle::NULL`] and calls on it are ignored.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    programs: Vec<ProgramRecord>,
    /// Source file name → stage that fails when a program uses it.
    failures: FxHashMap<String, FailureStage>,
    null_handles: bool,
    create_calls: usize,
}

impl RecordingBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every program using the file `file_name` (vertex or fragment)
    /// fail at `stage` during setup.
    pub fn fail_source(&mut self, file_name: impl Into<String>, stage: FailureStage) {
        self.failures.insert(file_name.into(), stage);
    }

    /// Removes all injected failures.
    pub fn clear_failures(&mut self) {
        self.failures.clear();
    }

    pub fn set_null_handles(&mut self, enabled: bool) {
        self.null_handles = enabled;
    }

    #[must_use]
    pub fn program(&self, handle: ProgramHandle) -> Option<&ProgramRecord> {
        let index = (handle.raw() as usize).checked_sub(1)?;
        self.programs.get(index)
    }

    /// Number of non-null programs allocated.
    #[must_use]
    pub fn program_count(&self) -> usize {
        self.programs.len()
    }

    /// Number of `create_program` calls, including ones that returned null.
    #[must_use]
    pub fn create_calls(&self) -> usize {
        self.create_calls
    }

    /// Total `setup` calls across all programs.
    #[must_use]
    pub fn setup_calls(&self) -> u32 {
        self.programs.iter().map(|p| p.setup_calls).sum()
    }

    fn record_mut(&mut self, handle: ProgramHandle) -> Option<&mut ProgramRecord> {
        let index = (handle.raw() as usize).checked_sub(1)?;
        self.programs.get_mut(index)
    }

    fn injected_failure(&self, record: &ProgramRecord) -> Option<FailureStage> {
        let file_stage = |path: Option<&Path>| {
            path.and_then(Path::file_name)
                .and_then(|name| name.to_str())
                .and_then(|name| self.failures.get(name).copied())
        };
        file_stage(record.vertex_path.as_deref())
            .or_else(|| file_stage(record.fragment_path.as_deref()))
    }
}

impl ShaderBackend for RecordingBackend {
    fn create_program(&mut self) -> ProgramHandle {
        self.create_calls += 1;
        if self.null_handles {
            return ProgramHandle::NULL;
        }
        self.programs.push(ProgramRecord::default());
        ProgramHandle::from_raw(self.programs.len() as u32)
    }

    fn use_uniform(&mut self, program: ProgramHandle, slot: UniformSlot) {
        if let Some(record) = self.record_mut(program) {
            record.uniforms.push(slot);
        }
    }

    fn use_uniform_buffer(&mut self, program: ProgramHandle, slot: UniformBufferSlot) {
        if let Some(record) = self.record_mut(program) {
            record.uniform_buffers.push(slot);
        }
    }

    fn create_custom_uniform(&mut self, program: ProgramHandle, name: &str, default: &UniformValue) {
        if let Some(record) = self.record_mut(program) {
            record.custom_uniforms.push(RecordedUniform {
                name: name.to_owned(),
                uniform_type: default.uniform_type(),
                default_bytes: default.to_bytes(),
            });
        }
    }

    fn set_vertex_shader_path(&mut self, program: ProgramHandle, path: &Path) {
        if let Some(record) = self.record_mut(program) {
            record.vertex_path = Some(path.to_path_buf());
        }
    }

    fn set_fragment_shader_path(&mut self, program: ProgramHandle, path: &Path) {
        if let Some(record) = self.record_mut(program) {
            record.fragment_path = Some(path.to_path_buf());
        }
    }

    fn setup(&mut self, program: ProgramHandle) {
        let Some(index) = (program.raw() as usize).checked_sub(1) else {
            return;
        };
        let Some(record) = self.programs.get(index) else {
            return;
        };

        let failure = if record.vertex_path.is_none() {
            Some(FailureStage::Vertex)
        } else if record.fragment_path.is_none() {
            Some(FailureStage::Fragment)
        } else {
            self.injected_failure(record)
        };

        let record = &mut self.programs[index];
        record.setup_calls += 1;
        record.vertex_failed = failure == Some(FailureStage::Vertex);
        record.fragment_failed = failure == Some(FailureStage::Fragment);
        record.linked = failure.is_none();
    }

    fn is_linked(&self, program: ProgramHandle) -> bool {
        self.program(program).is_some_and(|p| p.linked)
    }

    fn has_vertex_shader_compilation_failed(&self, program: ProgramHandle) -> bool {
        self.program(program).is_some_and(|p| p.vertex_failed)
    }

    fn has_fragment_shader_compilation_failed(&self, program: ProgramHandle) -> bool {
        self.program(program).is_some_and(|p| p.fragment_failed)
    }
}
