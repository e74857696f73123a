//! Centralized scene, camera, and effect options with TOML preset support.
//!
//! Every tweakable setting (transition timing, orbit limits, projection,
//! post-processing, scene material) is consolidated here. Options
//! serialize to/from TOML so presets can live next to the binary.

mod camera;
mod orbit;
mod post_processing;
mod scene;
mod transition;

use std::path::Path;

pub use camera::CameraOptions;
pub use orbit::OrbitOptions;
pub use post_processing::PostProcessingOptions;
use schemars::JsonSchema;
pub use scene::SceneOptions;
use serde::{Deserialize, Serialize};
pub use transition::TransitionOptions;

use crate::error::GlideError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[transition]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Scripted orbit and hand-off timing.
    pub transition: TransitionOptions,
    /// Mouse orbit interaction limits.
    pub orbit: OrbitOptions,
    /// Camera projection parameters.
    pub camera: CameraOptions,
    /// Post-processing effect parameters.
    pub post_processing: PostProcessingOptions,
    /// Background and material settings.
    #[schemars(skip)]
    pub scene: SceneOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, GlideError> {
        let content = std::fs::read_to_string(path).map_err(GlideError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, GlideError> {
        toml::from_str(content)
            .map_err(|e| GlideError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), GlideError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GlideError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GlideError::Io)?;
        }
        std::fs::write(path, content).map_err(GlideError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::transition::TickMode;
    use crate::util::easing::EasingFunction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[transition]
duration_secs = 4.0
tick_mode = "elapsed"
easing = "linear"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.transition.duration_secs, 4.0);
        assert_eq!(opts.transition.tick_mode, TickMode::Elapsed);
        assert_eq!(opts.transition.easing, EasingFunction::Linear);
        // Everything else should be default
        assert_eq!(opts.transition.theta_step, 0.005);
        assert_eq!(opts.orbit, OrbitOptions::default());
        assert_eq!(opts.post_processing.bloom_strength, 1.75);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml("[transition\nduration_secs = ").unwrap_err();
        assert!(matches!(err, GlideError::OptionsParse(_)));
    }

    #[test]
    fn progress_step_matches_frame_budget() {
        let transition = TransitionOptions::default();
        assert_eq!(transition.progress_step(), 1.0 / 120.0);

        let instant = TransitionOptions {
            duration_secs: 0.0,
            ..TransitionOptions::default()
        };
        assert_eq!(instant.progress_step(), 1.0);
    }

    #[test]
    fn polar_range_straddles_horizon() {
        let (min, max) = OrbitOptions::default().polar_range();
        let half_pi = std::f32::consts::FRAC_PI_2;
        assert!((half_pi - min - std::f32::consts::PI / 7.0).abs() < 1e-6);
        assert!((max - half_pi - std::f32::consts::PI / 7.0).abs() < 1e-6);

        let wide = OrbitOptions {
            polar_limit: 10.0,
            ..OrbitOptions::default()
        };
        let (min, max) = wide.polar_range();
        assert!(min > 0.0 && max < std::f32::consts::PI);
    }

    #[test]
    fn scene_colors_unpack() {
        let scene = SceneOptions::default();
        let [r, g, b] = scene.clear_rgb();
        assert!((r - 0x11 as f32 / 255.0).abs() < 1e-6);
        assert!((g - 0x15 as f32 / 255.0).abs() < 1e-6);
        assert!((b - 0x1c as f32 / 255.0).abs() < 1e-6);
        assert_eq!(scene.material_rgb()[0], scene.material_rgb()[2]);
    }

    #[test]
    fn save_then_load_and_list() {
        let dir = std::env::temp_dir()
            .join(format!("orbit-glide-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.transition.duration_secs = 3.5;
        opts.save(&dir.join("slow.toml")).unwrap();
        Options::default().save(&dir.join("default.toml")).unwrap();

        let loaded = Options::load(&dir.join("slow.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["default", "slow"]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("transition"));
        assert!(props.contains_key("orbit"));
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("post_processing"));
        assert!(!props.contains_key("scene"));

        let transition = &props["transition"]["properties"];
        assert!(transition.get("duration_secs").is_some());
        assert!(transition.get("tick_mode").is_none());
    }
}
