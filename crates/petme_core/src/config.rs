//! Runtime configuration loaded from TOML with environment overrides.
//!
//! ```toml
//! [database]
//! path = "petme.sqlite3"
//!
//! [logging]
//! level = "info"
//! dir = "/var/log/petme"
//! ```
//!
//! Every field is optional. A missing `database.path` falls back to
//! `petme.sqlite3` in the system temp directory, so separate runs share one
//! store; a missing `logging.dir` selects stderr logging.

use crate::logging::{default_log_level, normalize_level, normalize_log_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const ENV_DB_PATH: &str = "PETME_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "PETME_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "PETME_LOG_DIR";
pub const DEFAULT_DB_FILE_NAME: &str = "petme.sqlite3";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PetmeConfig {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: Option<PathBuf>,
}

impl DatabaseConfig {
    /// Configured path, or `DEFAULT_DB_FILE_NAME` under the temp directory.
    pub fn resolved_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level().to_string(),
            dir: None,
        }
    }
}

impl PetmeConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Applies `PETME_*` variables from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from an arbitrary lookup; empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(path) = non_empty(ENV_DB_PATH) {
            self.database.path = Some(PathBuf::from(path));
        }
        if let Some(level) = non_empty(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }
        if let Some(dir) = non_empty(ENV_LOG_DIR) {
            self.logging.dir = Some(PathBuf::from(dir));
        }
    }

    /// Rejects unknown log levels and relative log directories.
    pub fn validate(&self) -> Result<(), ConfigError> {
        normalize_level(&self.logging.level)
            .map_err(|err| ConfigError::Invalid(format!("logging.level: {err}")))?;

        if let Some(dir) = &self.logging.dir {
            normalize_log_dir(&dir.to_string_lossy())
                .map_err(|err| ConfigError::Invalid(format!("logging.dir: {err}")))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn empty_document_yields_defaults() {
        let config = PetmeConfig::from_toml_str("").unwrap();

        assert_eq!(config, PetmeConfig::default());
        assert_eq!(config.database.path, None);
        assert_eq!(config.logging.level, default_log_level());
    }

    #[test]
    fn missing_database_path_resolves_to_temp_file() {
        let config = PetmeConfig::default();

        assert_eq!(
            config.database.resolved_path(),
            std::env::temp_dir().join(DEFAULT_DB_FILE_NAME)
        );
    }

    #[test]
    fn parses_all_sections() {
        let config = PetmeConfig::from_toml_str(
            r#"
            [database]
            path = "pets.sqlite3"

            [logging]
            level = "warn"
            dir = "/var/log/petme"
            "#,
        )
        .unwrap();

        assert_eq!(config.database.path, Some(PathBuf::from("pets.sqlite3")));
        assert_eq!(
            config.database.resolved_path(),
            PathBuf::from("pets.sqlite3")
        );
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.dir, Some(PathBuf::from("/var/log/petme")));
        config.validate().unwrap();
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = PetmeConfig::from_toml_str("[database\npath = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn overrides_replace_non_empty_values_only() {
        let env = HashMap::from([
            (ENV_DB_PATH, "/tmp/override.sqlite3"),
            (ENV_LOG_LEVEL, "  "),
        ]);
        let mut config = PetmeConfig::default();

        config.apply_overrides(|key| env.get(key).map(|value| value.to_string()));

        assert_eq!(
            config.database.path,
            Some(PathBuf::from("/tmp/override.sqlite3"))
        );
        assert_eq!(config.logging.level, default_log_level());
    }

    #[test]
    fn validate_rejects_bad_level_and_relative_dir() {
        let mut config = PetmeConfig::default();
        config.logging.level = "chatty".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.logging.level = "info".to_string();
        config.logging.dir = Some(PathBuf::from("relative/logs"));
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("logging.dir"));
    }

    #[test]
    fn from_file_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = PetmeConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
