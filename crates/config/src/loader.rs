use super::defaults::DEFAULT_CONFIG_TEMPLATE;
use super::errors::ConfigError;
use super::migration::migrate_config_if_needed;
use super::models::Config;
use std::path::Path;
use std::sync::Arc;

impl Config {
    /// Loads configuration from a file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::from_file_with_events(path, None).await
    }

    /// Loads configuration from a file with optional event bus for notifications
    pub async fn from_file_with_events<P: AsRef<Path>>(
        path: P,
        events: Option<&Arc<sweeper_events::EventBus>>,
    ) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        // Create default config if it doesn't exist
        if !path.exists() {
            create_default_config(path).await?;
        }

        // Migrate config if needed
        migrate_config_if_needed(path, events).await?;

        // Read and parse config
        let content = tokio::fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;

        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

/// Creates a default configuration file
async fn create_default_config<P: AsRef<Path>>(path: P) -> Result<(), ConfigError> {
    tokio::fs::write(path, DEFAULT_CONFIG_TEMPLATE).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StorageBackend;

    #[tokio::test]
    async fn test_missing_file_creates_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweeper.toml");

        let config = Config::from_file(&path).await.unwrap();

        assert!(path.exists());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            DEFAULT_CONFIG_TEMPLATE
        );
        assert_eq!(config.sweep.directory, "/backup/");
        assert_eq!(config.sweep.date_format, "%Y-%m-%d");
        assert_eq!(config.storage.backend, StorageBackend::S3);
        assert_eq!(config.storage.bucket, "backups");
        assert_eq!(config.storage.key_prefix, "backups/");
    }

    #[tokio::test]
    async fn test_reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweeper.toml");
        std::fs::write(
            &path,
            r#"
[sweep]
directory = "/srv/dumps"
date_format = "%Y%m%d"

[storage]
backend = "local"
bucket = "nightly"
key_prefix = "db/"

[storage.local]
root = "/mnt/mirror"
"#,
        )
        .unwrap();

        let config = Config::from_file(&path).await.unwrap();

        assert_eq!(config.sweep.directory, "/srv/dumps");
        assert_eq!(config.sweep.date_format, "%Y%m%d");
        assert_eq!(config.storage.backend, StorageBackend::Local);
        assert_eq!(config.storage.bucket, "nightly");
        assert_eq!(config.storage.key_prefix, "db/");
        assert_eq!(config.storage.local.root, "/mnt/mirror");
        assert!(!config.storage.s3.has_static_credentials());
    }

    #[tokio::test]
    async fn test_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweeper.toml");
        std::fs::write(&path, "[storage]\nbucket = \"\"\n").unwrap();

        let err = Config::from_file(&path).await.unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfig(_)));
    }

    #[tokio::test]
    async fn test_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweeper.toml");
        std::fs::write(&path, "[sweep\ndirectory = ").unwrap();

        assert!(Config::from_file(&path).await.is_err());
    }
}
