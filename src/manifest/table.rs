//! The program table.

use glam::{Mat4, Vec4};

use super::{CustomUniform, ShaderManifest, ShaderSourcePaths, UniformBufferSlot, UniformSlot, UniformValue};
use crate::kind::ShaderKind;

use super::UniformBufferSlot as B;
use super::UniformSlot as U;

// ─── Shared binding sets ─────────────────────────────────────────────────────

/// Main texture, pen texture, background texture.
const PHONG_UNIFORMS: &[UniformSlot] = &[
    U::Texture0,
    U::Texture1,
    U::Texture2,
    U::ModelTransform,
    U::TextureTransform,
];

/// Base color, roughness, metalness, occlusion, normal, BRDF LUT, emissive,
/// background, pen, irradiance cubemap.
const PBR_UNIFORMS: &[UniformSlot] = &[
    U::Texture0,
    U::Texture1,
    U::Texture2,
    U::Texture3,
    U::Texture4,
    U::Texture5,
    U::Texture6,
    U::Texture7,
    U::Texture8,
    U::TextureCube0,
    U::ModelTransform,
    U::TextureTransform,
];

/// The stencil diffuse/specular pass skips the BRDF LUT, emissive map and
/// irradiance cubemap.
const PBR_DIFFUSE_SPECULAR_UNIFORMS: &[UniformSlot] = &[
    U::Texture0,
    U::Texture1,
    U::Texture2,
    U::Texture3,
    U::Texture4,
    U::Texture7,
    U::Texture8,
    U::ModelTransform,
    U::TextureTransform,
];

const MODEL: &[UniformSlot] = &[U::ModelTransform];
const TEXTURE0: &[UniformSlot] = &[U::Texture0];
const CAMERA: &[UniformBufferSlot] = &[B::CameraTransforms];
const NONE: &[UniformBufferSlot] = &[];
const NO_CUSTOM: &[CustomUniform] = &[];

const PASS_THROUGH_VERT: &str = "pass_through.vert";

// ─── Custom uniforms ─────────────────────────────────────────────────────────

const ENCODE_DEPTH_CUSTOM: &[CustomUniform] = &[
    CustomUniform::new("minRange", UniformValue::Float(0.0)),
    CustomUniform::new("maxRange", UniformValue::Float(1.0)),
];

const HDR_RESOLVE_CUSTOM: &[CustomUniform] =
    &[CustomUniform::new("exposure", UniformValue::Float(1.0))];

const IBL_SPECULAR_CUSTOM: &[CustomUniform] = &[
    CustomUniform::new("projection", UniformValue::Mat4(Mat4::ZERO)),
    CustomUniform::new("view", UniformValue::Mat4(Mat4::ZERO)),
    CustomUniform::new("roughness", UniformValue::Float(0.0)),
];

const GTAO_CUSTOM: &[CustomUniform] = &[
    CustomUniform::new("params", UniformValue::Vec4(Vec4::ZERO)),
    CustomUniform::new("clipInfo", UniformValue::Vec4(Vec4::new(0.0, 1_000_000.0, 0.0, 0.0))),
    CustomUniform::new("radius", UniformValue::Float(2.0)),
    CustomUniform::new("flipNormalY", UniformValue::Float(0.0)),
];

const GTAO_TEMPORAL_CUSTOM: &[CustomUniform] = &[CustomUniform::new(
    "previousInverseViewMatrix",
    UniformValue::Mat4(Mat4::ZERO),
)];

const BRIGHT_PASS_CUSTOM: &[CustomUniform] =
    &[CustomUniform::new("threshold", UniformValue::Float(10.0))];

// ─── Table ───────────────────────────────────────────────────────────────────

const fn entry(
    uniforms: &'static [UniformSlot],
    uniform_buffers: &'static [UniformBufferSlot],
    custom_uniforms: &'static [CustomUniform],
    vertex: &'static str,
    fragment: &'static str,
) -> ShaderManifest {
    ShaderManifest {
        uniforms,
        uniform_buffers,
        custom_uniforms,
        sources: ShaderSourcePaths::new(vertex, fragment),
    }
}

static DEFAULT: ShaderManifest = entry(
    PHONG_UNIFORMS,
    &[B::MaterialPhong, B::CameraTransforms],
    NO_CUSTOM,
    "default.vert",
    "default.frag",
);
static PHONG: ShaderManifest = entry(
    PHONG_UNIFORMS,
    &[B::MaterialPhong, B::Lights, B::CameraTransforms, B::Fog],
    NO_CUSTOM,
    "phong.vert",
    "phong.frag",
);
static PHONG_STENCIL_AMBIENT_EMISSIVE: ShaderManifest = entry(
    PHONG_UNIFORMS,
    &[B::MaterialPhong, B::Lights, B::CameraTransforms],
    NO_CUSTOM,
    "phong_stencil_ambient_emissive.vert",
    "phong_stencil_ambient_emissive.frag",
);
static PHONG_STENCIL_DIFFUSE_SPECULAR: ShaderManifest = entry(
    PHONG_UNIFORMS,
    &[B::MaterialPhong, B::Lights, B::LightRenderable, B::CameraTransforms],
    NO_CUSTOM,
    "phong_stencil_diffuse_specular.vert",
    "phong_stencil_diffuse_specular.frag",
);
static PBR: ShaderManifest = entry(
    PBR_UNIFORMS,
    &[B::MaterialPbr, B::Lights, B::CameraTransforms, B::Fog],
    NO_CUSTOM,
    "pbr.vert",
    "pbr.frag",
);
static PBR_STENCIL_AMBIENT_EMISSIVE: ShaderManifest = entry(
    PBR_UNIFORMS,
    &[B::MaterialPbr, B::CameraTransforms],
    NO_CUSTOM,
    "pbr_stencil_ambient_emissive.vert",
    "pbr_stencil_ambient_emissive.frag",
);
static PBR_STENCIL_DIFFUSE_SPECULAR: ShaderManifest = entry(
    PBR_DIFFUSE_SPECULAR_UNIFORMS,
    &[B::MaterialPbr, B::Lights, B::LightRenderable, B::CameraTransforms],
    NO_CUSTOM,
    "pbr_stencil_diffuse_specular.vert",
    "pbr_stencil_diffuse_specular.frag",
);
static ENCODE_DEPTH: ShaderManifest = entry(
    MODEL,
    CAMERA,
    ENCODE_DEPTH_CUSTOM,
    "encode_depth.vert",
    "encode_depth.frag",
);
static FOG: ShaderManifest = entry(
    MODEL,
    &[B::CameraTransforms, B::Fog],
    NO_CUSTOM,
    "fog.vert",
    "fog.frag",
);
static IBL_BRDF_BAKE: ShaderManifest =
    entry(&[], NONE, NO_CUSTOM, "bake_brdf.vert", "bake_brdf.frag");
static SHADOW_VOLUME: ShaderManifest = entry(
    MODEL,
    &[B::Lights, B::LightRenderable, B::CameraTransforms],
    NO_CUSTOM,
    "shadow_volume.vert",
    "shadow_volume.frag",
);
static HDR_RESOLVE: ShaderManifest = entry(
    TEXTURE0,
    NONE,
    HDR_RESOLVE_CUSTOM,
    PASS_THROUGH_VERT,
    "hdr_resolve.frag",
);
static HDR_CLEAR: ShaderManifest = entry(
    &[],
    &[B::MaterialPhong],
    NO_CUSTOM,
    PASS_THROUGH_VERT,
    "hdr_clear.frag",
);
static SKYBOX: ShaderManifest = entry(
    &[U::TextureCube0],
    CAMERA,
    NO_CUSTOM,
    "skybox.vert",
    "skybox.frag",
);
static PASS_THROUGH: ShaderManifest =
    entry(TEXTURE0, NONE, NO_CUSTOM, PASS_THROUGH_VERT, "pass_through.frag");
static IBL_SPECULAR_IRRADIANCE_BAKE: ShaderManifest = entry(
    &[U::TextureCube0],
    NONE,
    IBL_SPECULAR_CUSTOM,
    "bake_cubemap.vert",
    "bake_specular_cubemap.frag",
);
static GTAO: ShaderManifest = entry(
    &[U::Texture0, U::Texture1, U::Texture2, U::ViewportSize],
    CAMERA,
    GTAO_CUSTOM,
    PASS_THROUGH_VERT,
    "gtao.frag",
);
static GTAO_SPATIAL_DENOISE: ShaderManifest = entry(
    &[U::Texture0, U::Texture1],
    CAMERA,
    NO_CUSTOM,
    PASS_THROUGH_VERT,
    "gtao_spatial_denoise.frag",
);
static GTAO_TEMPORAL_DENOISE: ShaderManifest = entry(
    &[U::Texture0, U::Texture1, U::Texture2, U::Texture3],
    CAMERA,
    GTAO_TEMPORAL_CUSTOM,
    PASS_THROUGH_VERT,
    "gtao_temporal_denoise.frag",
);
static GTAO_COMBINE: ShaderManifest = entry(
    &[U::Texture0, U::Texture1, U::Texture2],
    NONE,
    NO_CUSTOM,
    PASS_THROUGH_VERT,
    "gtao_combine.frag",
);
static BRIGHT_PASS: ShaderManifest = entry(
    TEXTURE0,
    NONE,
    BRIGHT_PASS_CUSTOM,
    PASS_THROUGH_VERT,
    "bright_pass.frag",
);
static GAUSSIAN_BLUR_13_TAP: ShaderManifest = entry(
    &[U::Texture0, U::Texture1, U::IterationNumber],
    NONE,
    NO_CUSTOM,
    PASS_THROUGH_VERT,
    "gaussian_blur_13_tap.frag",
);
static BLOOM_BLEND: ShaderManifest = entry(
    &[
        U::Texture0,
        U::Texture1,
        U::Texture2,
        U::Texture3,
        U::Texture4,
        U::Texture5,
        U::Texture6,
    ],
    NONE,
    NO_CUSTOM,
    PASS_THROUGH_VERT,
    "blend_bloom.frag",
);
static LINE_SET: ShaderManifest = entry(
    &[U::ModelTransform, U::ColorPerVertex],
    &[B::MaterialPhong, B::CameraTransforms],
    NO_CUSTOM,
    "line_set.vert",
    "line_set.frag",
);
static SMAA_EDGE_DETECT: ShaderManifest = entry(
    &[U::Texture0, U::ViewportSize],
    NONE,
    NO_CUSTOM,
    "smaa_edge_detect.vert",
    "smaa_edge_detect.frag",
);
static SMAA_BLENDING_WEIGHT_CALCULATION: ShaderManifest = entry(
    &[U::Texture0, U::Texture1, U::Texture2, U::ViewportSize],
    NONE,
    NO_CUSTOM,
    "smaa_blending_weights.vert",
    "smaa_blending_weights.frag",
);
static SMAA_FINAL_BLEND: ShaderManifest = entry(
    &[U::Texture0, U::Texture1, U::ViewportSize],
    NONE,
    NO_CUSTOM,
    "smaa_final_blend.vert",
    "smaa_final_blend.frag",
);
static POINT_SET: ShaderManifest = entry(
    &[U::ModelTransform, U::ColorPerVertex, U::PointSize],
    &[B::MaterialPhong, B::CameraTransforms],
    NO_CUSTOM,
    "point_set.vert",
    "point_set.frag",
);
static PICKING: ShaderManifest = entry(
    MODEL,
    &[B::MaterialPhong, B::CameraTransforms],
    NO_CUSTOM,
    "picking.vert",
    "picking.frag",
);
static DEPTH_PIXEL: ShaderManifest =
    entry(MODEL, CAMERA, NO_CUSTOM, "web_depth.vert", "web_depth.frag");

/// Returns the manifest of `kind`.
#[must_use]
pub fn manifest(kind: ShaderKind) -> &'static ShaderManifest {
    match kind {
        ShaderKind::Default => &DEFAULT,
        ShaderKind::Phong => &PHONG,
        ShaderKind::PhongStencilAmbientEmissive => &PHONG_STENCIL_AMBIENT_EMISSIVE,
        ShaderKind::PhongStencilDiffuseSpecular => &PHONG_STENCIL_DIFFUSE_SPECULAR,
        ShaderKind::Pbr => &PBR,
        ShaderKind::PbrStencilAmbientEmissive => &PBR_STENCIL_AMBIENT_EMISSIVE,
        ShaderKind::PbrStencilDiffuseSpecular => &PBR_STENCIL_DIFFUSE_SPECULAR,
        ShaderKind::EncodeDepth => &ENCODE_DEPTH,
        ShaderKind::Fog => &FOG,
        ShaderKind::ShadowVolume => &SHADOW_VOLUME,
        ShaderKind::Skybox => &SKYBOX,
        ShaderKind::IblBrdfBake => &IBL_BRDF_BAKE,
        ShaderKind::IblSpecularIrradianceBake => &IBL_SPECULAR_IRRADIANCE_BAKE,
        ShaderKind::HdrResolve => &HDR_RESOLVE,
        ShaderKind::HdrClear => &HDR_CLEAR,
        ShaderKind::PassThrough => &PASS_THROUGH,
        ShaderKind::Gtao => &GTAO,
        ShaderKind::GtaoSpatialDenoise => &GTAO_SPATIAL_DENOISE,
        ShaderKind::GtaoTemporalDenoise => &GTAO_TEMPORAL_DENOISE,
        ShaderKind::GtaoCombine => &GTAO_COMBINE,
        ShaderKind::BrightPass => &BRIGHT_PASS,
        ShaderKind::GaussianBlur13Tap => &GAUSSIAN_BLUR_13_TAP,
        ShaderKind::BloomBlend => &BLOOM_BLEND,
        ShaderKind::SmaaEdgeDetect => &SMAA_EDGE_DETECT,
        ShaderKind::SmaaBlendingWeightCalculation => &SMAA_BLENDING_WEIGHT_CALCULATION,
        ShaderKind::SmaaFinalBlend => &SMAA_FINAL_BLEND,
        ShaderKind::LineSet => &LINE_SET,
        ShaderKind::PointSet => &POINT_SET,
        ShaderKind::Picking => &PICKING,
        ShaderKind::DepthPixel => &DEPTH_PIXEL,
    }
}
