//! Render Presets - Named Option Sets
//!
//! Built-in presets plus any `*.json` preset files found in a directory.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::render::RenderOptions;

pub type PresetId = String;

pub const DEFAULT_PRESET: &str = "default";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderPreset {
    pub id: PresetId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub options: RenderOptions,
}

impl RenderPreset {
    fn builtin(id: &str, name: &str, description: &str, options: RenderOptions) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            options,
        }
    }
}

fn builtin_presets() -> Vec<RenderPreset> {
    vec![
        RenderPreset::builtin(
            DEFAULT_PRESET,
            "Default",
            "200x80 with the code printed under the bars",
            RenderOptions::default(),
        ),
        RenderPreset::builtin(
            "shelf-label",
            "Shelf Label",
            "Wide label stock, larger text",
            RenderOptions {
                width: 400.0,
                height: 160.0,
                margin: 20.0,
                font_size: 20.0,
                ..RenderOptions::default()
            },
        ),
        RenderPreset::builtin(
            "thumbnail",
            "Thumbnail",
            "Bars only, for product listings",
            RenderOptions {
                width: 120.0,
                height: 40.0,
                margin: 4.0,
                display_value: false,
                ..RenderOptions::default()
            },
        ),
    ]
}

/// Preset registry - built-ins, optionally extended from disk
#[derive(Debug, Clone)]
pub struct PresetRegistry {
    presets: BTreeMap<PresetId, RenderPreset>,
}

impl PresetRegistry {
    /// Registry holding only the built-in presets
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for preset in builtin_presets() {
            registry.register(preset);
        }
        registry
    }

    pub fn empty() -> Self {
        Self { presets: BTreeMap::new() }
    }

    /// Built-ins plus every parsable `*.json` file in `dir`; files override built-ins by id
    pub fn load_from_dir(dir: &Path) -> Result<Self, std::io::Error> {
        let mut registry = Self::new();
        if !dir.exists() {
            return Ok(registry);
        }

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().map_or(false, |e| e == "json") {
                let content = fs::read_to_string(&path)?;
                match serde_json::from_str::<RenderPreset>(&content) {
                    Ok(preset) => registry.register(preset),
                    Err(e) => warn!(path = %path.display(), error = %e, "skipping unparsable preset"),
                }
            }
        }
        Ok(registry)
    }

    pub fn get(&self, id: &str) -> Option<&RenderPreset> {
        self.presets.get(id)
    }

    pub fn list(&self) -> Vec<&RenderPreset> {
        self.presets.values().collect()
    }

    pub fn register(&mut self, preset: RenderPreset) {
        self.presets.insert(preset.id.clone(), preset);
    }
}

impl Default for PresetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::OptionsValidator;

    #[test]
    fn test_builtins_are_renderable() {
        let registry = PresetRegistry::new();
        assert_eq!(registry.list().len(), 3);
        for preset in registry.list() {
            assert!(
                OptionsValidator::new().validate(&preset.options, 95).is_ok(),
                "{}",
                preset.id
            );
        }
        assert_eq!(registry.get(DEFAULT_PRESET).unwrap().options, RenderOptions::default());
    }

    #[test]
    fn test_load_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("pos.json"),
            r#"{"id": "pos", "name": "POS Receipt", "options": {"width": 300, "displayValue": false}}"#,
        )
        .unwrap();
        fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let registry = PresetRegistry::load_from_dir(dir.path()).unwrap();
        assert_eq!(registry.list().len(), 4);

        let pos = registry.get("pos").unwrap();
        assert_eq!(pos.options.width, 300.0);
        assert!(!pos.options.display_value);
        assert_eq!(pos.options.height, 80.0);
    }

    #[test]
    fn test_file_overrides_builtin() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("thumb.json"),
            r#"{"id": "thumbnail", "name": "Bigger Thumbnail", "options": {"width": 160}}"#,
        )
        .unwrap();

        let registry = PresetRegistry::load_from_dir(dir.path()).unwrap();
        assert_eq!(registry.get("thumbnail").unwrap().options.width, 160.0);
    }

    #[test]
    fn test_missing_dir_gives_builtins() {
        let registry = PresetRegistry::load_from_dir(Path::new("/nonexistent/presets")).unwrap();
        assert_eq!(registry.list().len(), 3);
    }
}
