use bevy::prelude::Resource;
use crate::error::AppError;
use crate::locator::DEFAULT_SEARCH_DISTANCE;
use crate::world_snapshot_plugin::config::{ObjectConfig, PlayerConfig};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Resource, Clone)]
#[serde(rename_all = "snake_case")]
pub struct LocatorConfig {
    /// Selects the verbose query log at startup.
    #[serde(default)]
    pub debug: bool,
    #[serde(default = "default_search_distance")]
    pub default_search_distance: f32,
    #[serde(default)]
    pub player: Option<PlayerConfig>,
    #[serde(default)]
    pub objects: Vec<ObjectConfig>,
}

fn default_search_distance() -> f32 {
    DEFAULT_SEARCH_DISTANCE
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            debug: false,
            default_search_distance: DEFAULT_SEARCH_DISTANCE,
            player: None,
            objects: Vec::new(),
        }
    }
}

impl LocatorConfig {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config = LocatorConfig::from_json("{}").unwrap();
        assert!(!config.debug);
        assert_eq!(config.default_search_distance, 50.0);
        assert!(config.player.is_none());
        assert!(config.objects.is_empty());
    }

    #[test]
    fn parses_tagged_objects() {
        let config = LocatorConfig::from_json(r#"{
            "debug": true,
            "player": { "name": "Rowan", "position": [1.0, 0.0, 2.0] },
            "objects": [
                { "kind": "mobile", "object_id": 7, "name": "Orc", "position": [5.0, 0.0, 0.0] },
                { "kind": "panel", "panel_id": "Backpack" }
            ]
        }"#).unwrap();

        assert!(config.debug);
        assert_eq!(config.objects.len(), 2);
        assert!(matches!(config.objects[0], ObjectConfig::Mobile { object_id: 7, .. }));
        assert!(matches!(config.objects[1], ObjectConfig::Panel { visible: true, .. }));
    }

    #[test]
    fn rejects_unknown_kinds() {
        let result = LocatorConfig::from_json(r#"{ "objects": [ { "kind": "dragon" } ] }"#);
        assert!(matches!(result, Err(AppError::SerializationError(_))));
    }

    #[test]
    fn reports_unreadable_files() {
        let result = LocatorConfig::load("does/not/exist.json");
        assert!(matches!(result, Err(AppError::ConfigRead { .. })));
    }
}
