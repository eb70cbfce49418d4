use sweeper_config::{Config, ConfigError};
use sweeper_events::{AppEvent, EventBus};
use sweeper_filesystem::FileSystem;
use anyhow::Result;
use std::sync::Arc;

pub async fn load(config_path: &str, events: &Arc<EventBus>) -> Result<Config> {
    let abs_config_path = FileSystem::get_absolute_path_string(config_path)?;

    events.emit(AppEvent::ConfigLoading {
        path: abs_config_path.clone(),
    });

    let config_exists = std::path::Path::new(config_path).exists();
    let config = Config::from_file_with_events(config_path, Some(events)).await?;

    // A fresh template points at placeholder values; never sweep with it
    if !config_exists {
        events.emit(AppEvent::ConfigCreated {
            path: abs_config_path.clone(),
        });
        return Err(ConfigError::ReviewRequired(abs_config_path).into());
    }

    events.emit(AppEvent::ConfigLoaded {
        directory: config.sweep.directory.clone(),
        bucket: config.storage.bucket.clone(),
    });

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fresh_install_stops_before_sweeping() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweeper.toml");
        let path_str = path.to_string_lossy().to_string();
        let events = EventBus::new(true);

        let err = load(&path_str, &events).await.unwrap_err();

        assert!(path.exists());
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::ReviewRequired(_))
        ));

        // Once the template exists, the next run proceeds
        let config = load(&path_str, &events).await.unwrap();
        assert_eq!(config.sweep.directory, "/backup/");
    }
}
