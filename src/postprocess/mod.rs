//! Uniform wiring for the screen-space effect passes.
//!
//! The passes themselves run in the host renderer; this module owns their
//! parameter layouts, WGSL sources, and CPU references of the math they do.

pub mod afterimage;
pub mod displacement;

pub use afterimage::AfterimageUniform;
pub use displacement::DisplacementUniform;

use crate::options::PostProcessingOptions;

/// Bloom pass params; must match the host's bloom WGSL struct
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BloomUniform {
    /// Luminance threshold.
    pub threshold: f32,
    /// Bloom strength.
    pub strength: f32,
    /// Blur radius.
    pub radius: f32,
    /// Tone-mapping exposure.
    pub exposure: f32,
}

impl BloomUniform {
    /// Uniform values from post-processing options.
    #[must_use]
    pub fn from_options(options: &PostProcessingOptions) -> Self {
        Self {
            threshold: options.bloom_threshold,
            strength: options.bloom_strength,
            radius: options.bloom_radius,
            exposure: options.exposure,
        }
    }
}

/// All effect uniforms, rebuilt whenever options change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectUniforms {
    /// Bloom pass params.
    pub bloom: BloomUniform,
    /// Afterimage pass params.
    pub afterimage: AfterimageUniform,
    /// Displacement pass params.
    pub displacement: DisplacementUniform,
}

impl EffectUniforms {
    /// Build every effect uniform from post-processing options.
    #[must_use]
    pub fn from_options(options: &PostProcessingOptions) -> Self {
        Self {
            bloom: BloomUniform::from_options(options),
            afterimage: AfterimageUniform::from_options(options),
            displacement: DisplacementUniform::from_options(options),
        }
    }
}
