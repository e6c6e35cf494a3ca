use std::path::Path;

use log::warn;

use crate::board::Stone;
use crate::error::ConfigError;

/// Deepest search the configuration accepts
pub const MAX_DEPTH: u8 = 12;

/// Match configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Search depth for X (player 1)
    pub x_depth: u8,
    /// Search depth for O (player 2)
    pub o_depth: u8,
    /// Worker threads for root-parallel search (1 = sequential)
    pub threads: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            x_depth: 2,
            o_depth: 4,
            threads: 1,
        }
    }
}

impl MatchConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: MatchConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, depth) in [("x_depth", self.x_depth), ("o_depth", self.o_depth)] {
            if depth == 0 || depth > MAX_DEPTH {
                return Err(ConfigError::Validation(format!(
                    "{} must be between 1 and {}",
                    name, MAX_DEPTH
                )));
            }
        }
        if self.threads == 0 {
            return Err(ConfigError::Validation("threads must be > 0".into()));
        }
        Ok(())
    }

    /// Search depth for the given player
    pub fn depth_for(&self, stone: Stone) -> u8 {
        match stone {
            Stone::O => self.o_depth,
            _ => self.x_depth,
        }
    }
}
