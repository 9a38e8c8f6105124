//! Per-character configuration.
//!
//! ```json
//! {
//!   "characters": {
//!     "sorc": {
//!       "socket_recipes": { "enabled": ["TirTir", "Lore"] },
//!       "settle_delay_ms": 300
//!     }
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use sockforge_engine::{EnabledRecipes, SocketingOptions};

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "SOCKFORGE_CONFIG";

/// Used when `SOCKFORGE_CONFIG` is not set.
pub const DEFAULT_CONFIG_PATH: &str = "sockforge.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("character '{0}' not found in config")]
    UnknownCharacter(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub characters: BTreeMap<String, CharacterConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterConfig {
    #[serde(default)]
    pub socket_recipes: SocketRecipesConfig,
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
    #[serde(default = "default_max_applications")]
    pub max_applications_per_recipe: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocketRecipesConfig {
    /// Recipe names to process; anything not listed is never attempted.
    #[serde(default)]
    pub enabled: EnabledRecipes,
}

fn default_settle_delay_ms() -> u64 {
    SocketingOptions::default().settle_delay.as_millis() as u64
}

fn default_max_applications() -> usize {
    SocketingOptions::default().max_applications_per_recipe
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            socket_recipes: SocketRecipesConfig::default(),
            settle_delay_ms: default_settle_delay_ms(),
            max_applications_per_recipe: default_max_applications(),
        }
    }
}

impl CharacterConfig {
    pub fn enabled_recipes(&self) -> &EnabledRecipes {
        &self.socket_recipes.enabled
    }

    pub fn socketing_options(&self) -> SocketingOptions {
        SocketingOptions {
            settle_delay: Duration::from_millis(self.settle_delay_ms),
            max_applications_per_recipe: self.max_applications_per_recipe,
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&content)?;
        tracing::debug!(
            "loaded config from {} ({} character(s))",
            path.display(),
            config.characters.len()
        );
        Ok(config)
    }

    /// Path from `SOCKFORGE_CONFIG`, or the default file name.
    pub fn default_path() -> PathBuf {
        std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load(Self::default_path())
    }

    pub fn character(&self, name: &str) -> Result<&CharacterConfig, ConfigError> {
        self.characters
            .get(name)
            .ok_or_else(|| ConfigError::UnknownCharacter(name.to_string()))
    }
}
