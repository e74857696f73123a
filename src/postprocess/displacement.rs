//! Screen-space displacement pass parameters and UV math.

use glam::Vec2;

use crate::options::PostProcessingOptions;

/// WGSL source of the displacement pass.
pub const DISPLACEMENT_WGSL: &str =
    include_str!("../../assets/shaders/screen/displacement.wgsl");

/// Displacement pass params; must match WGSL struct
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DisplacementUniform {
    /// UV offset scale.
    pub scale: f32,
    /// Repetitions of the displacement texture across the screen.
    pub tile_factor: f32,
    /// Screen-space x below which displacement applies.
    pub region_max_x: f32,
    pub(crate) _pad: f32,
}

impl DisplacementUniform {
    /// Uniform values from post-processing options.
    #[must_use]
    pub fn from_options(options: &PostProcessingOptions) -> Self {
        Self {
            scale: options.displacement_scale,
            tile_factor: options.displacement_tile_factor,
            region_max_x: options.displacement_region_max_x,
            _pad: 0.0,
        }
    }

    /// Texture coordinate the displacement map is sampled at for `uv`.
    #[must_use]
    pub fn tiled_uv(&self, uv: Vec2) -> Vec2 {
        (uv * self.tile_factor).fract_gl()
    }

    /// Scene texture coordinate for `uv`, given the displacement map's red
    /// and green channels at [`tiled_uv`](Self::tiled_uv).
    ///
    /// Mirrors the fragment shader: outside the open region
    /// `(0, region_max_x) × (0, 1)` the coordinate passes through unchanged.
    #[must_use]
    pub fn displace_uv(&self, uv: Vec2, sample_rg: Vec2) -> Vec2 {
        let inside = uv.x > 0.0 && uv.x < self.region_max_x && uv.y > 0.0 && uv.y < 1.0;
        if inside {
            uv + sample_rg * self.scale
        } else {
            uv
        }
    }
}
