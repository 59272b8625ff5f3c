use std::path::Path;

use serde::Deserialize;

use crate::domain::{DomainError, User, UserId};

const ENV_PREFIX: &str = "USER_DIRECTORY";

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub directory: DirectoryConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Users loaded into the directory at startup, in order
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    pub users: Vec<User>,
}

/// Behaviour of the in-memory store
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// When false every delete fails with a storage error
    pub available: bool,
    /// Ids the store reports as deleted; all others report false
    pub deletable: Vec<UserId>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            available: true,
            deletable: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Load layered configuration, with `extra` applied after the default
    /// files and before the environment.
    pub fn load_with(extra: Option<&Path>) -> Result<Self, DomainError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false));

        if let Some(path) = extra {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| DomainError::configuration(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| DomainError::configuration(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_toml(source: &str) -> AppConfig {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    fn write_config(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("extra.toml");
        std::fs::write(&path, contents).expect("Failed to write config file");
        path
    }

    #[test]
    fn test_load_with_malformed_file_is_configuration_error() {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let path = write_config(&dir, "[logging\nlevel = ");

        let result = AppConfig::load_with(Some(&path));

        let error = result.unwrap_err();
        assert!(matches!(error, DomainError::Configuration { .. }));
        assert!(error.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_load_with_missing_file_is_configuration_error() {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("absent.toml");

        let result = AppConfig::load_with(Some(&path));

        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }

    #[test]
    fn test_load_with_extra_file_overrides() {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let path = write_config(
            &dir,
            r#"
            [logging]
            format = "json"

            [store]
            available = false
            "#,
        );

        let config = AppConfig::load_with(Some(&path)).unwrap();

        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(!config.store.available);
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.directory.users.is_empty());
        assert!(config.store.available);
        assert!(config.store.deletable.is_empty());
    }

    #[test]
    fn test_empty_source_uses_defaults() {
        let config = parse_toml("");

        assert_eq!(config.logging.level, "warn");
        assert!(config.store.available);
    }

    #[test]
    fn test_parse_full_config() {
        let config = parse_toml(
            r#"
            [logging]
            level = "debug"
            format = "json"

            [[directory.users]]
            id = 1
            username = "Ivan"
            password = "123"

            [[directory.users]]
            id = 2
            username = "Petr"
            password = "111"

            [store]
            available = false
            deletable = [1]
            "#,
        );

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(
            config.directory.users,
            vec![User::new(1, "Ivan", "123"), User::new(2, "Petr", "111")]
        );
        assert!(!config.store.available);
        assert_eq!(config.store.deletable, vec![UserId::new(1)]);
    }
}
