use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Effects", inline)]
#[serde(default)]
/// Parameters for the bloom, afterimage, and displacement passes.
pub struct PostProcessingOptions {
    /// Tone-mapping exposure.
    #[schemars(title = "Exposure", range(min = 0.5, max = 2.0), extend("step" = 0.05))]
    pub exposure: f32,
    /// Bloom strength.
    #[schemars(title = "Bloom Strength", range(min = 0.0, max = 3.0), extend("step" = 0.05))]
    pub bloom_strength: f32,
    /// Luminance threshold for bloom.
    #[schemars(title = "Bloom Threshold", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub bloom_threshold: f32,
    /// Bloom blur radius.
    #[schemars(title = "Bloom Radius", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub bloom_radius: f32,
    /// Fraction of the previous frame retained by the afterimage pass.
    #[schemars(title = "Afterimage", range(min = 0.0, max = 0.99), extend("step" = 0.01))]
    pub afterimage_damp: f32,
    /// UV offset scale applied by the displacement pass.
    #[schemars(title = "Displacement", range(min = 0.0, max = 0.2), extend("step" = 0.005))]
    pub displacement_scale: f32,
    /// Repetitions of the displacement texture across the screen.
    #[schemars(title = "Displacement Tiling", range(min = 1.0, max = 8.0), extend("step" = 0.5))]
    pub displacement_tile_factor: f32,
    /// Screen-space x (0..1) below which displacement applies.
    #[schemars(skip)]
    pub displacement_region_max_x: f32,
}

impl Default for PostProcessingOptions {
    fn default() -> Self {
        Self {
            exposure: 1.0,
            bloom_strength: 1.75,
            bloom_threshold: 0.1,
            bloom_radius: 1.0,
            afterimage_damp: 0.9,
            displacement_scale: 0.05,
            displacement_tile_factor: 2.0,
            displacement_region_max_x: 0.5,
        }
    }
}
