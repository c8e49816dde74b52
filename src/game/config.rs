use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::food::DEFAULT_MAX_ATTEMPTS;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: i32,
    /// Height of the game grid
    pub grid_height: i32,
    /// Edge length of a cell in continuous coordinates
    pub cell_size: f32,
    /// Moves per second
    pub speed: f32,
    /// Retry budget when placing food
    pub food_max_attempts: u32,
    /// Seed for food placement; random when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 32,
            grid_height: 18,
            cell_size: 1.0,
            speed: 5.0,
            food_max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Load a configuration from a JSON file. Missing fields take their
    /// default values.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: GameConfig =
            serde_json::from_str(&json).context("Failed to parse config file")?;
        config.validate().context("Invalid configuration")?;
        Ok(config)
    }

    /// Check every field before a session can be built from it
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.grid_width <= 0 || self.grid_height <= 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.grid_width,
                height: self.grid_height,
            });
        }

        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(ConfigError::InvalidCellSize(self.cell_size));
        }

        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(ConfigError::InvalidSpeed(self.speed));
        }
        self.tick_interval()?;

        if self.food_max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }

        Ok(())
    }

    /// Time between two ticks.
    ///
    /// Speeds whose interval does not fit a non-zero `Duration` are rejected,
    /// at either end of the range.
    pub fn tick_interval(&self) -> std::result::Result<Duration, ConfigError> {
        Duration::try_from_secs_f64(1.0 / f64::from(self.speed))
            .ok()
            .filter(|interval| !interval.is_zero())
            .ok_or(ConfigError::InvalidSpeed(self.speed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 32);
        assert_eq!(config.grid_height, 18);
        assert_eq!(config.food_max_attempts, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 12);
        assert_eq!(config.grid_width, 15);
        assert_eq!(config.grid_height, 12);
        assert_eq!(config.speed, 5.0);
    }

    #[test]
    fn test_tick_interval() {
        let mut config = GameConfig::default();
        assert_eq!(config.tick_interval(), Ok(Duration::from_millis(200)));

        config.speed = 8.0;
        assert_eq!(config.tick_interval(), Ok(Duration::from_millis(125)));
    }

    #[test]
    fn test_extreme_speeds_rejected() {
        // Interval too long for a Duration
        let mut config = GameConfig::default();
        config.speed = 1e-30;
        assert_eq!(config.tick_interval(), Err(ConfigError::InvalidSpeed(1e-30)));
        assert_eq!(config.validate(), Err(ConfigError::InvalidSpeed(1e-30)));

        // Interval rounds down to zero
        config.speed = 1e12;
        assert_eq!(config.tick_interval(), Err(ConfigError::InvalidSpeed(1e12)));
        assert_eq!(config.validate(), Err(ConfigError::InvalidSpeed(1e12)));

        config.speed = f32::NAN;
        assert!(config.tick_interval().is_err());
        assert!(config.validate().is_err());

        // Slow but representable speeds still work
        config.speed = 0.5;
        assert_eq!(config.tick_interval(), Ok(Duration::from_secs(2)));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_failures() {
        let mut config = GameConfig::new(0, 10);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidDimensions { width: 0, height: 10 })
        );

        config = GameConfig::default();
        config.cell_size = -1.0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidCellSize(-1.0)));

        config = GameConfig::default();
        config.speed = 0.0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidSpeed(0.0)));

        config = GameConfig::default();
        config.food_max_attempts = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroAttempts));
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "grid_width": 20, "speed": 10.0, "seed": 9 }}"#).unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.grid_width, 20);
        assert_eq!(config.grid_height, 18);
        assert_eq!(config.speed, 10.0);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "grid_height": -4 }}"#).unwrap();

        let err = GameConfig::load(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("grid dimensions must be positive"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(GameConfig::load(&dir.path().join("absent.json")).is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = GameConfig::new(40, 25);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
