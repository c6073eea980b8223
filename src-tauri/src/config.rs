//! App Configuration
//!
//! Optional `shopping_trolley.toml` in the app config directory. A missing
//! file means defaults: the "Shopping Trolley" title and the three seed items.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::{ShoppingList, DEFAULT_SEED_ITEMS};

pub const CONFIG_FILE_NAME: &str = "shopping_trolley.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// How often the log file rolls over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Minutely,
    Hourly,
    #[default]
    Daily,
    Never,
}

impl From<LogRotation> for rolling_logger::Rotation {
    fn from(rotation: LogRotation) -> Self {
        match rotation {
            LogRotation::Minutely => rolling_logger::Rotation::MINUTELY,
            LogRotation::Hourly => rolling_logger::Rotation::HOURLY,
            LogRotation::Daily => rolling_logger::Rotation::DAILY,
            LogRotation::Never => rolling_logger::Rotation::NEVER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub max_files: usize,
    pub rotation: LogRotation,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            max_files: rolling_logger::LoggerConfig::default().max_files,
            rotation: LogRotation::default(),
        }
    }
}

impl From<&LoggingConfig> for rolling_logger::LoggerConfig {
    fn from(config: &LoggingConfig) -> Self {
        Self {
            max_files: config.max_files,
            rotation: config.rotation.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Title shown in the screen header
    pub title: String,
    /// Item names the list starts with, in display order
    pub seed_items: Vec<String>,
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Shopping Trolley".to_string(),
            seed_items: DEFAULT_SEED_ITEMS.iter().map(|s| s.to_string()).collect(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load `shopping_trolley.toml` from `dir`, or defaults if it does not exist
    pub fn load(dir: &Path) -> ConfigResult<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(&path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> ConfigResult<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.seed_items.is_empty() {
            return Err(ConfigError::Invalid("seed_items must not be empty".to_string()));
        }
        if let Some(pos) = self.seed_items.iter().position(|name| name.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!("seed_items[{}] is blank", pos)));
        }
        if self.logging.max_files == 0 {
            return Err(ConfigError::Invalid("logging.max_files must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Fresh list built from the configured seed items
    pub fn seed_list(&self) -> ShoppingList {
        ShoppingList::from_names(self.seed_items.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::load(dir.path()).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.title, "Shopping Trolley");
        assert_eq!(config.seed_list(), ShoppingList::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"
title = "Weekly Shop"
seed_items = ["Milk", "Eggs"]

[logging]
max_files = 2
rotation = "hourly"
"#,
        )
        .unwrap();

        let config = AppConfig::load(dir.path()).unwrap();
        assert_eq!(config.title, "Weekly Shop");
        assert_eq!(config.seed_items, vec!["Milk", "Eggs"]);
        assert_eq!(config.logging.max_files, 2);
        assert_eq!(config.logging.rotation, LogRotation::Hourly);
        assert_eq!(config.seed_list().items()[1].name(), "Eggs");
    }

    #[test]
    fn test_partial_file_keeps_default_items() {
        let config = AppConfig::parse(r#"title = "Trolley""#).unwrap();
        assert_eq!(config.seed_items, vec!["Apples", "Bananas", "Oranges"]);
    }

    #[test]
    fn test_rejects_empty_seed_list() {
        let err = AppConfig::parse("seed_items = []").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_blank_item_name() {
        let err = AppConfig::parse(r#"seed_items = ["Milk", "  "]"#).unwrap_err();
        assert_eq!(err.to_string(), "invalid config: seed_items[1] is blank");
    }

    #[test]
    fn test_default_logging_matches_logger() {
        let logger: rolling_logger::LoggerConfig = (&LoggingConfig::default()).into();
        assert_eq!(logger, rolling_logger::LoggerConfig::default());
    }

    #[test]
    fn test_rejects_unknown_rotation() {
        let err = AppConfig::parse("[logging]\nrotation = \"weekly\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_bad_toml() {
        let err = AppConfig::parse("title = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
