use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scene", inline)]
#[serde(default)]
/// Background, fog, and model material settings handed to the host renderer.
pub struct SceneOptions {
    /// Clear color as `0xRRGGBB`.
    #[schemars(skip)]
    pub clear_color: u32,
    /// Exponential fog density.
    #[schemars(title = "Fog Density", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub fog_density: f32,
    /// Base material color as `0xRRGGBB`.
    #[schemars(skip)]
    pub material_color: u32,
    /// Material roughness.
    #[schemars(title = "Roughness", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub roughness: f32,
    /// Material metalness.
    #[schemars(title = "Metalness", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub metalness: f32,
    /// Environment map contribution.
    #[schemars(title = "Environment", range(min = 0.0, max = 3.0), extend("step" = 0.05))]
    pub env_map_intensity: f32,
    /// Uniform scale applied to the loaded model.
    #[schemars(skip)]
    pub model_scale: f32,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            clear_color: 0x0011_151c,
            fog_density: 0.4,
            material_color: 0x0060_6060,
            roughness: 0.2,
            metalness: 1.0,
            env_map_intensity: 1.5,
            model_scale: 0.05,
        }
    }
}

impl SceneOptions {
    /// Clear color as sRGB `[r, g, b]` in 0..1.
    #[must_use]
    pub fn clear_rgb(&self) -> [f32; 3] {
        hex_to_rgb(self.clear_color)
    }

    /// Material color as `[r, g, b]` in 0..1.
    #[must_use]
    pub fn material_rgb(&self) -> [f32; 3] {
        hex_to_rgb(self.material_color)
    }
}

fn hex_to_rgb(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
    [channel(16), channel(8), channel(0)]
}
