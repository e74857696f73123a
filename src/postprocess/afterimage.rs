//! Afterimage (motion trail) pass parameters.

use crate::options::PostProcessingOptions;

/// WGSL source of the afterimage pass.
pub const AFTERIMAGE_WGSL: &str =
    include_str!("../../assets/shaders/screen/afterimage.wgsl");

/// Afterimage pass params; must match WGSL struct
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct AfterimageUniform {
    /// Fraction of the previous frame retained.
    pub damp: f32,
    pub(crate) _pad: [f32; 3],
}

impl AfterimageUniform {
    /// Uniform values from post-processing options. `damp` is kept below 1
    /// so trails always decay.
    #[must_use]
    pub fn from_options(options: &PostProcessingOptions) -> Self {
        Self {
            damp: options.afterimage_damp.clamp(0.0, 0.99),
            _pad: [0.0; 3],
        }
    }
}
