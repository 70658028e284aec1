//! Framing, rotation, picking, and debug options with TOML preset support.
//!
//! Options serialize to/from TOML so hosts can ship presets, and expose a
//! JSON Schema for building settings UIs.

mod camera;
mod debug;
mod picking;
mod rotation;

use std::path::Path;

pub use camera::CameraOptions;
pub use debug::DebugOptions;
pub use picking::PickingOptions;
pub use rotation::RotationOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::MolframeError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[rotation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection, framing, and control parameters.
    pub camera: CameraOptions,
    /// Auto-rotation parameters.
    pub rotation: RotationOptions,
    /// Atom-level picking.
    pub picking: PickingOptions,
    /// Debug visualization options.
    pub debug: DebugOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// I/O failure reading `path`, or TOML that does not match the schema.
    pub fn load(path: &Path) -> Result<Self, MolframeError> {
        let content = std::fs::read_to_string(path).map_err(MolframeError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// TOML that does not match the schema.
    pub fn from_toml(content: &str) -> Result<Self, MolframeError> {
        toml::from_str(content)
            .map_err(|e| MolframeError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Serialization failure or I/O failure writing `path`.
    pub fn save(&self, path: &Path) -> Result<(), MolframeError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MolframeError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(MolframeError::Io)?;
        }
        std::fs::write(path, content).map_err(MolframeError::Io)
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

    /// Copy of these options with one field replaced, addressed the way a
    /// settings panel built from [`Self::json_schema`] addresses it:
    /// `section` is the top-level key (`"rotation"`), `field` the key inside
    /// it (`"speed"`).
    ///
    /// # Errors
    ///
    /// Unknown section, or a value of the wrong type for the field.
    pub fn with_field(
        &self,
        section: &str,
        field: &str,
        value: serde_json::Value,
    ) -> Result<Self, MolframeError> {
        let mut root = serde_json::to_value(self)
            .map_err(|e| MolframeError::OptionsParse(e.to_string()))?;
        let Some(table) =
            root.get_mut(section).and_then(serde_json::Value::as_object_mut)
        else {
            return Err(MolframeError::OptionsParse(format!(
                "unknown options section {section:?}"
            )));
        };
        let _ = table.insert(field.to_owned(), value);
        serde_json::from_value(root)
            .map_err(|e| MolframeError::OptionsParse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn defaults_match_documented_values() {
        let opts = Options::default();
        assert_eq!(opts.camera.margin, 1.15);
        assert_eq!(opts.rotation.speed, 0.1);
        assert_eq!(opts.rotation.smoothing, 0.15);
        assert!(opts.rotation.hover_pause);
        assert!(!opts.debug.show_bounding_sphere);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[rotation]
speed = 0.25
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.rotation.speed, 0.25);
        // Everything else should be default
        assert_eq!(opts.rotation.smoothing, 0.15);
        assert_eq!(opts.camera.fovy, 45.0);
    }

    #[test]
    fn bad_toml_is_an_options_error() {
        let err = Options::from_toml("[camera]\nmargin = \"wide\"").unwrap_err();
        assert!(matches!(err, MolframeError::OptionsParse(_)));
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("molframe-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.debug.show_bounding_sphere = true;
        opts.save(&dir.join("debug.toml")).unwrap();
        Options::default().save(&dir.join("plain.toml")).unwrap();

        assert_eq!(Options::list_presets(&dir), vec!["debug", "plain"]);
        assert_eq!(Options::load(&dir.join("debug.toml")).unwrap(), opts);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn with_field_updates_one_value() {
        let opts = Options::default()
            .with_field("rotation", "speed", serde_json::json!(0.5))
            .unwrap();
        assert_eq!(opts.rotation.speed, 0.5);
        assert_eq!(opts.camera, CameraOptions::default());
    }

    #[test]
    fn with_field_rejects_bad_input() {
        let opts = Options::default();
        assert!(opts
            .with_field("lighting", "ambient", serde_json::json!(1.0))
            .is_err());
        assert!(opts
            .with_field("rotation", "paused", serde_json::json!("yes"))
            .is_err());
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("rotation"));
        assert!(props.contains_key("picking"));
        assert!(props.contains_key("debug"));

        // Exposed fields present, skipped ones absent
        let camera = &props["camera"]["properties"];
        assert!(camera.get("margin").is_some());
        assert!(camera.get("min_fit_radius").is_none());
        let debug = &props["debug"]["properties"];
        assert!(debug.get("show_bounding_sphere").is_some());
        assert!(debug.get("wireframe_segments").is_none());
    }
}
