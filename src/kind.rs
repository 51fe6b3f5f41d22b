//! Shader Kinds
//!
//! [`ShaderKind`] names every shader program the renderer compiles. The set is
//! closed: kinds are never created or destroyed at runtime, and each one maps
//! to exactly one entry of the manifest table (see [`crate::manifest`]).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Logical identifier of a renderer shader program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShaderKind {
    // ========================================================================
    // Forward shading
    // ========================================================================
    /// Unlit fallback used for display textures and simple geometry.
    Default,
    Phong,
    PhongStencilAmbientEmissive,
    PhongStencilDiffuseSpecular,
    Pbr,
    PbrStencilAmbientEmissive,
    PbrStencilDiffuseSpecular,
    /// Writes linearised depth into a color target (range finders, lidars).
    EncodeDepth,
    Fog,
    ShadowVolume,
    Skybox,

    // ========================================================================
    // Image-based lighting bake passes
    // ========================================================================
    IblBrdfBake,
    IblSpecularIrradianceBake,

    // ========================================================================
    // HDR & post-processing
    // ========================================================================
    HdrResolve,
    HdrClear,
    PassThrough,
    Gtao,
    GtaoSpatialDenoise,
    GtaoTemporalDenoise,
    GtaoCombine,
    BrightPass,
    #[serde(rename = "gaussian_blur_13_tap")]
    GaussianBlur13Tap,
    BloomBlend,
    SmaaEdgeDetect,
    SmaaBlendingWeightCalculation,
    SmaaFinalBlend,

    // ========================================================================
    // Debug & utility geometry
    // ========================================================================
    LineSet,
    PointSet,
    Picking,
    DepthPixel,
}

impl ShaderKind {
    /// Number of shader kinds.
    pub const COUNT: usize = 30;

    /// Every kind, in the order [`ShaderRegistry::build_all`] realizes them.
    ///
    /// [`ShaderRegistry::build_all`]: crate::ShaderRegistry::build_all
    pub const ALL: [ShaderKind; Self::COUNT] = [
        Self::Default,
        Self::Phong,
        Self::PhongStencilAmbientEmissive,
        Self::PhongStencilDiffuseSpecular,
        Self::Pbr,
        Self::PbrStencilAmbientEmissive,
        Self::PbrStencilDiffuseSpecular,
        Self::EncodeDepth,
        Self::Fog,
        Self::IblBrdfBake,
        Self::ShadowVolume,
        Self::HdrResolve,
        Self::HdrClear,
        Self::Skybox,
        Self::PassThrough,
        Self::IblSpecularIrradianceBake,
        Self::Gtao,
        Self::GtaoSpatialDenoise,
        Self::GtaoTemporalDenoise,
        Self::GtaoCombine,
        Self::BrightPass,
        Self::GaussianBlur13Tap,
        Self::BloomBlend,
        Self::LineSet,
        Self::SmaaEdgeDetect,
        Self::SmaaBlendingWeightCalculation,
        Self::SmaaFinalBlend,
        Self::PointSet,
        Self::Picking,
        Self::DepthPixel,
    ];

    /// Stable snake_case identifier, matching the serde representation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Phong => "phong",
            Self::PhongStencilAmbientEmissive => "phong_stencil_ambient_emissive",
            Self::PhongStencilDiffuseSpecular => "phong_stencil_diffuse_specular",
            Self::Pbr => "pbr",
            Self::PbrStencilAmbientEmissive => "pbr_stencil_ambient_emissive",
            Self::PbrStencilDiffuseSpecular => "pbr_stencil_diffuse_specular",
            Self::EncodeDepth => "encode_depth",
            Self::Fog => "fog",
            Self::ShadowVolume => "shadow_volume",
            Self::Skybox => "skybox",
            Self::IblBrdfBake => "ibl_brdf_bake",
            Self::IblSpecularIrradianceBake => "ibl_specular_irradiance_bake",
            Self::HdrResolve => "hdr_resolve",
            Self::HdrClear => "hdr_clear",
            Self::PassThrough => "pass_through",
            Self::Gtao => "gtao",
            Self::GtaoSpatialDenoise => "gtao_spatial_denoise",
            Self::GtaoTemporalDenoise => "gtao_temporal_denoise",
            Self::GtaoCombine => "gtao_combine",
            Self::BrightPass => "bright_pass",
            Self::GaussianBlur13Tap => "gaussian_blur_13_tap",
            Self::BloomBlend => "bloom_blend",
            Self::SmaaEdgeDetect => "smaa_edge_detect",
            Self::SmaaBlendingWeightCalculation => "smaa_blending_weight_calculation",
            Self::SmaaFinalBlend => "smaa_final_blend",
            Self::LineSet => "line_set",
            Self::PointSet => "point_set",
            Self::Picking => "picking",
            Self::DepthPixel => "depth_pixel",
        }
    }

    /// Dense index in `0..COUNT`, following declaration order.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Looks a kind up by its [`name`](Self::name).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for ShaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
