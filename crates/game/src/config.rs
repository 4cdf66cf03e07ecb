use blockyard_inventory::InventoryLedger;
use blockyard_terrain::{TerrainConfig, TerrainError};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors from loading a game configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
    #[error("invalid terrain: {0}")]
    Terrain(#[from] TerrainError),
}

/// Session configuration. Every field has a default, so an empty file is valid.
///
/// ```yaml
/// terrain:
///   size: 25
///   tree_chance: 30
///   seed: 42
/// inventory:
///   grass: 100
///   gold: 5
/// spawn: [12.0, 3.0, 12.0]
/// quick_build_reach: 3.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub terrain: TerrainConfig,
    /// Starting inventory. Kinds left out start at zero.
    pub inventory: InventoryLedger,
    /// Where the actor starts.
    pub spawn: [f32; 3],
    /// How far ahead of the actor a quick-build platform is centred.
    pub quick_build_reach: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            terrain: TerrainConfig::default(),
            inventory: InventoryLedger::default(),
            spawn: [12.0, 3.0, 12.0],
            quick_build_reach: 3.0,
        }
    }
}

impl GameConfig {
    /// Read and validate a YAML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_yaml_str(&text)?;
        tracing::debug!(path = %path.as_ref().display(), "config loaded");
        Ok(config)
    }

    /// Parse and validate YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        // serde_yaml rejects an empty document; treat it as all defaults.
        let config: Self = if text.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(text)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn spawn_position(&self) -> Vec3 {
        Vec3::from_array(self.spawn)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.terrain.validate()?;
        if !self.quick_build_reach.is_finite() || self.quick_build_reach < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "quick_build_reach must be a non-negative number, got {}",
                self.quick_build_reach
            )));
        }
        if !self.spawn_position().is_finite() {
            return Err(ConfigError::Invalid("spawn must be finite".into()));
        }
        Ok(())
    }
}
