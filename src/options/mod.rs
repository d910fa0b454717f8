//! Centralized navigation options with TOML preset support.
//!
//! All tweakable settings (camera bounds, navigation rates, input
//! tuning) are consolidated here. Options serialize to/from TOML for
//! presets; a JSON Schema of the UI-exposed fields is available for
//! settings panels.

mod camera;
mod input;
mod navigation;

use std::path::Path;

pub use camera::CameraOptions;
pub use input::InputOptions;
pub use navigation::NavigationOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OrbviewError;

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// so partial TOML files (e.g. only overriding `[input]`) work
/// correctly.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera placement bounds and canonical positions.
    pub camera: CameraOptions,
    /// Motion rates and per-mode navigation behavior.
    pub navigation: NavigationOptions,
    /// Directional-input tuning.
    pub input: InputOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, OrbviewError> {
        let content = std::fs::read_to_string(path).map_err(OrbviewError::Io)?;
        toml::from_str(&content)
            .map_err(|e| OrbviewError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), OrbviewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OrbviewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(OrbviewError::Io)?;
        }
        std::fs::write(path, content).map_err(OrbviewError::Io)
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
    use super::Options;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[input]
base_speed = 0.5
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.input.base_speed, 0.5);
        // Everything else should be default
        assert_eq!(opts.input.max_speed, 1.4);
        assert_eq!(opts.camera.max_distance, 40.0);
        assert!(opts.navigation.suppress_horizontal_while_zooming);
    }

    #[test]
    fn default_bounds_are_coherent() {
        let opts = Options::default();
        assert!(opts.camera.min_distance < opts.camera.max_distance);
        assert!(opts.camera.min_polar > 0.0);
        assert!(opts.camera.max_polar < std::f32::consts::PI);
        assert!(opts.camera.min_polar < opts.camera.max_polar);
        assert!(opts.input.base_speed <= opts.input.max_speed);
        // The canonical manual position must respect the camera bounds.
        assert!(opts.camera.default_distance >= opts.camera.min_distance);
        assert!(opts.camera.default_distance <= opts.camera.max_distance);
        assert!(opts.camera.default_polar > opts.camera.min_polar);
        assert!(opts.camera.default_polar < opts.camera.max_polar);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("navigation"));
        assert!(props.contains_key("input"));

        // UI-exposed fields are present, internal clamps are skipped.
        let camera = &props["camera"]["properties"];
        assert!(camera.get("follow_distance_multiplier").is_some());
        assert!(camera.get("min_polar").is_none());

        let navigation = &props["navigation"]["properties"];
        assert!(navigation.get("zoom_rate").is_some());
        assert!(navigation.get("max_frame_delta").is_none());
    }
}
