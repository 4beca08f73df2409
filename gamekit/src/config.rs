//! Construction parameters loadable from JSON
//!
//! # Example
//!
//! ```
//! use gamekit_core::{GamekitConfig, Grid, RandomEngine};
//!
//! let config = GamekitConfig::from_json(r#"{
//!     "random": { "seed": 42 },
//!     "grid": { "width": 8, "height": 4 }
//! }"#).unwrap();
//!
//! let rng = RandomEngine::from_config(&config.random);
//! assert_eq!(rng.seed(), 42);
//!
//! let grid: Grid<u8> = Grid::from_config(&config.grid).unwrap();
//! assert_eq!(grid.len(), 32);
//! assert!(grid.is_strict());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Grid dimensions {width}x{height} overflow the addressable cell count")]
    InvalidDimensions { width: usize, height: usize },
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GamekitConfig {
    pub random: RandomConfig,
    pub grid: GridConfig,
}

impl GamekitConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.grid.validate()?;
        Ok(config)
    }
}

/// Random engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomConfig {
    /// Explicit seed; `None` seeds from the wall clock
    pub seed: Option<u64>,
}

/// Grid configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,

    /// Bounds-checked access (see `Grid::set_strict`)
    pub strict: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            strict: true,
        }
    }
}

impl GridConfig {
    /// Reject dimensions whose cell count does not fit in `usize`
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.width.checked_mul(self.height) {
            Some(_) => Ok(()),
            None => Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = GamekitConfig::from_json("{}").unwrap();
        assert_eq!(config, GamekitConfig::default());
        assert!(config.grid.strict);
        assert_eq!(config.random.seed, None);
    }

    #[test]
    fn test_overflowing_dimensions_rejected() {
        let config = GridConfig {
            width: usize::MAX,
            height: 2,
            strict: true,
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDimensions { .. })
        ));
    }
}
