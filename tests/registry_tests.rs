//! Shader Registry Tests
//!
//! Tests for:
//! - Lazy build: one create/setup sequence per kind, cached handle on repeat
//! - build_all: every kind realized, report contents
//! - Manifest forwarding: the backend receives exactly the manifest bindings
//! - Failure classification: vertex / fragment / link
//! - Retry policy and null-handle rebuilds
//! - reset / reset_kind and independence between kinds

use std::path::Path;

use glam::Vec4;

use wren_shaders::manifest::manifest;
use wren_shaders::{
    FailureStage, ProgramStatus, RecordingBackend, RegistrySettings, RetryPolicy, ShaderError,
    ShaderKind, ShaderRegistry, UniformBufferSlot, UniformSlot, UniformType, UniformValue,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn registry() -> ShaderRegistry<RecordingBackend> {
    init_logger();
    ShaderRegistry::new(RecordingBackend::new())
}

fn failing_registry(file: &str, stage: FailureStage) -> ShaderRegistry<RecordingBackend> {
    init_logger();
    let mut backend = RecordingBackend::new();
    backend.fail_source(file, stage);
    ShaderRegistry::new(backend)
}

// ============================================================================
// Lazy Build & Idempotence
// ============================================================================

#[test]
fn get_twice_returns_same_handle() {
    let mut reg = registry();
    let a = reg.get(ShaderKind::Pbr);
    let b = reg.get(ShaderKind::Pbr);

    assert_eq!(a, b);
    assert!(!a.is_null());
    assert_eq!(reg.backend().create_calls(), 1);
    assert_eq!(reg.backend().setup_calls(), 1);
}

#[test]
fn distinct_kinds_get_distinct_handles() {
    let mut reg = registry();
    let phong = reg.get(ShaderKind::Phong);
    let pbr = reg.get(ShaderKind::Pbr);
    assert_ne!(phong, pbr);
    assert_eq!(reg.len(), 2);
}

#[test]
fn registry_over_borrowed_backend() {
    init_logger();
    let mut backend = RecordingBackend::new();
    {
        let mut reg = ShaderRegistry::new(&mut backend);
        reg.get(ShaderKind::Skybox);
        reg.get(ShaderKind::Skybox);
    }
    assert_eq!(backend.create_calls(), 1);
}

// ============================================================================
// build_all
// ============================================================================

#[test]
fn build_all_realizes_every_kind() {
    let mut reg = registry();
    let report = reg.build_all();

    assert!(report.is_success());
    assert_eq!(report.total(), ShaderKind::COUNT);
    assert_eq!(report.linked, ShaderKind::ALL.to_vec());
    assert_eq!(reg.len(), ShaderKind::COUNT);
    for kind in ShaderKind::ALL {
        assert!(reg.cached(kind).is_some(), "{kind} not cached");
        assert_eq!(reg.status(kind), ProgramStatus::Linked);
    }
    assert_eq!(reg.backend().create_calls(), ShaderKind::COUNT);
}

#[test]
fn build_all_twice_builds_nothing_new() {
    let mut reg = registry();
    reg.build_all();
    let second = reg.build_all();

    assert_eq!(second.total(), ShaderKind::COUNT);
    assert_eq!(reg.backend().create_calls(), ShaderKind::COUNT);
}

#[test]
fn build_all_reports_failures() {
    let mut reg = failing_registry("gtao.frag", FailureStage::Fragment);
    let report = reg.build_all();

    assert!(!report.is_success());
    assert_eq!(report.failed, vec![(ShaderKind::Gtao, FailureStage::Fragment)]);
    assert_eq!(report.linked.len(), ShaderKind::COUNT - 1);
    // A failed kind still has a cache entry.
    assert_eq!(reg.len(), ShaderKind::COUNT);
}

// ============================================================================
// Manifest Fidelity
// ============================================================================

#[test]
fn registry_forwards_manifest_bindings_to_backend() {
    let mut reg = registry();
    reg.build_all();

    for kind in ShaderKind::ALL {
        let handle = reg.cached(kind).unwrap();
        let record = reg.backend().program(handle).unwrap();
        let expected = manifest(kind);

        assert_eq!(record.uniforms, expected.uniforms, "{kind}: uniforms");
        assert_eq!(record.uniform_buffers, expected.uniform_buffers, "{kind}: buffers");

        let names: Vec<_> = record.custom_uniforms.iter().map(|u| u.name.as_str()).collect();
        let expected_names: Vec<_> = expected.custom_uniforms.iter().map(|u| u.name).collect();
        assert_eq!(names, expected_names, "{kind}: custom uniforms");
    }
}

#[test]
fn pbr_binds_ten_textures_two_transforms_four_buffers() {
    let mut reg = registry();
    let handle = reg.get(ShaderKind::Pbr);
    let record = reg.backend().program(handle).unwrap();

    let textures = record.uniforms.iter().filter(|s| s.is_texture()).count();
    assert_eq!(textures, 10);
    assert!(record.uniforms.contains(&UniformSlot::ModelTransform));
    assert!(record.uniforms.contains(&UniformSlot::TextureTransform));
    assert_eq!(record.uniforms.len(), 12);
    assert_eq!(
        record.uniform_buffers,
        vec![
            UniformBufferSlot::MaterialPbr,
            UniformBufferSlot::Lights,
            UniformBufferSlot::CameraTransforms,
            UniformBufferSlot::Fog,
        ]
    );
}

#[test]
fn pass_through_binds_one_texture_and_no_buffers() {
    let mut reg = registry();
    let handle = reg.get(ShaderKind::PassThrough);
    let record = reg.backend().program(handle).unwrap();

    assert_eq!(record.uniforms, vec![UniformSlot::Texture0]);
    assert!(record.uniform_buffers.is_empty());
    assert!(record.custom_uniforms.is_empty());
}

#[test]
fn source_paths_resolve_against_shader_dir() {
    init_logger();
    let settings = RegistrySettings::default().with_shader_dir("/opt/wren/shaders");
    let mut reg = ShaderRegistry::with_settings(RecordingBackend::new(), settings);
    let handle = reg.get(ShaderKind::HdrResolve);
    let record = reg.backend().program(handle).unwrap();

    assert_eq!(
        record.vertex_path.as_deref(),
        Some(Path::new("/opt/wren/shaders/pass_through.vert"))
    );
    assert_eq!(
        record.fragment_path.as_deref(),
        Some(Path::new("/opt/wren/shaders/hdr_resolve.frag"))
    );
}

// ============================================================================
// Custom Uniform Defaults
// ============================================================================

#[test]
fn hdr_resolve_exposure_default_round_trips() {
    let mut reg = registry();
    let handle = reg.get(ShaderKind::HdrResolve);
    let exposure = reg
        .backend()
        .program(handle)
        .unwrap()
        .custom_uniform("exposure")
        .unwrap()
        .clone();

    assert_eq!(exposure.uniform_type, UniformType::Float);
    assert_eq!(exposure.default_bytes, 1.0f32.to_ne_bytes());
}

#[test]
fn gtao_clip_info_default_round_trips() {
    let mut reg = registry();
    let handle = reg.get(ShaderKind::Gtao);
    let record = reg.backend().program(handle).unwrap();
    let clip_info = record.custom_uniform("clipInfo").unwrap();

    assert_eq!(clip_info.uniform_type, UniformType::Vec4F);
    let expected = UniformValue::Vec4(Vec4::new(0.0, 1_000_000.0, 0.0, 0.0)).to_bytes();
    assert_eq!(clip_info.default_bytes, expected);

    let radius = record.custom_uniform("radius").unwrap();
    assert_eq!(radius.default_bytes, 2.0f32.to_ne_bytes());
}

#[test]
fn ibl_specular_declares_matrices() {
    let mut reg = registry();
    let handle = reg.get(ShaderKind::IblSpecularIrradianceBake);
    let record = reg.backend().program(handle).unwrap();

    for name in ["projection", "view"] {
        let uniform = record.custom_uniform(name).unwrap();
        assert_eq!(uniform.uniform_type, UniformType::Mat4F);
        assert_eq!(uniform.default_bytes, vec![0u8; 64]);
    }
}

// ============================================================================
// Failure Classification
// ============================================================================

#[test]
fn vertex_failure_is_classified_as_vertex() {
    let mut reg = failing_registry("skybox.vert", FailureStage::Vertex);
    let handle = reg.get(ShaderKind::Skybox);

    assert!(!handle.is_null());
    assert_eq!(reg.status(ShaderKind::Skybox), ProgramStatus::Failed(FailureStage::Vertex));
}

#[test]
fn fragment_failure_is_classified_as_fragment() {
    let mut reg = failing_registry("hdr_resolve.frag", FailureStage::Fragment);
    reg.get(ShaderKind::HdrResolve);
    assert_eq!(
        reg.status(ShaderKind::HdrResolve),
        ProgramStatus::Failed(FailureStage::Fragment)
    );
}

#[test]
fn link_failure_is_classified_as_link() {
    let mut reg = failing_registry("fog.frag", FailureStage::Link);
    reg.get(ShaderKind::Fog);
    assert_eq!(reg.status(ShaderKind::Fog), ProgramStatus::Failed(FailureStage::Link));
}

#[test]
fn shared_vertex_failure_hits_every_user() {
    let mut reg = failing_registry("pass_through.vert", FailureStage::Vertex);
    let report = reg.build_all();

    let users = ShaderKind::ALL
        .into_iter()
        .filter(|&k| manifest(k).sources.vertex == "pass_through.vert")
        .count();
    assert_eq!(report.failed.len(), users);
    assert!(report.failed.iter().all(|&(_, stage)| stage == FailureStage::Vertex));
}

#[test]
fn diagnostic_names_the_failing_stage() {
    let vertex = ShaderError::build_failure(ShaderKind::Pbr, FailureStage::Vertex).to_string();
    let fragment = ShaderError::build_failure(ShaderKind::Pbr, FailureStage::Fragment).to_string();
    let link = ShaderError::build_failure(ShaderKind::Pbr, FailureStage::Link).to_string();

    assert!(vertex.starts_with("Vertex shader compilation failed"));
    assert!(fragment.starts_with("Fragment shader compilation failed"));
    assert!(link.starts_with("Linkage failed"));
    assert!(link.contains("pbr"));
}

// ============================================================================
// Retry Policy & Null Handles
// ============================================================================

#[test]
fn keep_failed_serves_failed_handle() {
    let mut reg = failing_registry("picking.frag", FailureStage::Fragment);
    let first = reg.get(ShaderKind::Picking);
    reg.backend_mut().clear_failures();
    let second = reg.get(ShaderKind::Picking);

    assert_eq!(first, second);
    assert_eq!(reg.backend().create_calls(), 1);
    assert_eq!(
        reg.status(ShaderKind::Picking),
        ProgramStatus::Failed(FailureStage::Fragment)
    );
}

#[test]
fn retry_failed_rebuilds_until_linked() {
    init_logger();
    let mut backend = RecordingBackend::new();
    backend.fail_source("picking.frag", FailureStage::Fragment);
    let settings = RegistrySettings::default().with_retry_policy(RetryPolicy::RetryFailed);
    let mut reg = ShaderRegistry::with_settings(backend, settings);

    let first = reg.get(ShaderKind::Picking);
    assert!(reg.cached(ShaderKind::Picking).is_none());

    reg.backend_mut().clear_failures();
    let second = reg.get(ShaderKind::Picking);
    let third = reg.get(ShaderKind::Picking);

    assert_ne!(first, second);
    assert_eq!(second, third);
    assert_eq!(reg.backend().create_calls(), 2);
    assert_eq!(reg.status(ShaderKind::Picking), ProgramStatus::Linked);
}

#[test]
fn retry_failed_allocates_a_program_per_attempt() {
    init_logger();
    let mut backend = RecordingBackend::new();
    backend.fail_source("gtao.frag", FailureStage::Link);
    let settings = RegistrySettings::default().with_retry_policy(RetryPolicy::RetryFailed);
    let mut reg = ShaderRegistry::with_settings(backend, settings);

    let handles: Vec<_> = (0..3).map(|_| reg.get(ShaderKind::Gtao)).collect();

    assert_ne!(handles[0], handles[1]);
    assert_ne!(handles[1], handles[2]);
    assert_eq!(reg.backend().program_count(), 3);
    assert_eq!(reg.cached(ShaderKind::Gtao), None);
}

#[test]
fn null_handle_is_rebuilt_on_next_request() {
    init_logger();
    let mut backend = RecordingBackend::new();
    backend.set_null_handles(true);
    let mut reg = ShaderRegistry::new(backend);

    let handle = reg.get(ShaderKind::LineSet);
    assert!(handle.is_null());
    assert_eq!(reg.status(ShaderKind::LineSet), ProgramStatus::Failed(FailureStage::Link));
    assert!(reg.cached(ShaderKind::LineSet).is_none());
    assert!(matches!(
        reg.diagnostic(ShaderKind::LineSet),
        Some(ShaderError::NullProgram { kind: ShaderKind::LineSet })
    ));

    reg.backend_mut().set_null_handles(false);
    let handle = reg.get(ShaderKind::LineSet);
    assert!(!handle.is_null());
    assert_eq!(reg.status(ShaderKind::LineSet), ProgramStatus::Linked);
    assert_eq!(reg.backend().create_calls(), 2);
}

#[test]
fn null_handle_is_not_reported_as_link_failure() {
    init_logger();
    let mut backend = RecordingBackend::new();
    backend.set_null_handles(true);
    let mut reg = ShaderRegistry::new(backend);
    reg.get(ShaderKind::Skybox);

    let message = reg.diagnostic(ShaderKind::Skybox).unwrap().to_string();
    assert!(message.contains("null program handle"), "{message}");
    assert!(!message.starts_with("Linkage failed"), "{message}");
    assert_eq!(reg.backend().setup_calls(), 0);
}

#[test]
fn diagnostic_follows_build_outcome() {
    let mut reg = failing_registry("fog.vert", FailureStage::Vertex);
    assert!(reg.diagnostic(ShaderKind::Fog).is_none());

    reg.get(ShaderKind::Fog);
    reg.get(ShaderKind::Skybox);

    assert!(matches!(
        reg.diagnostic(ShaderKind::Fog),
        Some(ShaderError::VertexCompileFailed { kind: ShaderKind::Fog })
    ));
    assert!(reg.diagnostic(ShaderKind::Skybox).is_none());
}

// ============================================================================
// Reset & Independence
// ============================================================================

#[test]
fn reset_triggers_recompilation() {
    let mut reg = registry();
    let before = reg.get(ShaderKind::Fog);
    reg.reset();

    assert!(reg.is_empty());
    assert_eq!(reg.status(ShaderKind::Fog), ProgramStatus::Unbuilt);

    let after = reg.get(ShaderKind::Fog);
    assert_ne!(before, after);
    assert_eq!(reg.backend().create_calls(), 2);
}

#[test]
fn building_one_kind_leaves_others_untouched() {
    let mut reg = registry();
    let phong = reg.get(ShaderKind::Phong);
    let phong_record = reg.backend().program(phong).unwrap().clone();

    reg.get(ShaderKind::Pbr);
    reg.get(ShaderKind::BloomBlend);

    assert_eq!(reg.cached(ShaderKind::Phong), Some(phong));
    assert_eq!(reg.backend().program(phong), Some(&phong_record));
    assert_eq!(reg.status(ShaderKind::Phong), ProgramStatus::Linked);
}
