use sweeper_config::{Config, StorageBackend as StorageBackendType};
use sweeper_events::{AppEvent, EventBus};
use sweeper_storage::{LocalBackend, StorageBackend};
#[cfg(feature = "s3")]
use sweeper_storage::S3Backend;
#[cfg(not(feature = "s3"))]
use sweeper_storage::StorageError;
use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;

pub async fn initialize(config: &Config, events: &Arc<EventBus>) -> Result<Arc<dyn StorageBackend>> {
    let storage = &config.storage;
    tracing::debug!("Selected storage backend: {}", storage.backend);

    let backend: Arc<dyn StorageBackend> = match storage.backend {
        StorageBackendType::Local => Arc::new(LocalBackend::new(
            PathBuf::from(&storage.local.root),
            &storage.bucket,
        )),
        #[cfg(feature = "s3")]
        StorageBackendType::S3 => {
            let backend = S3Backend::new(storage.bucket.clone(), &storage.s3).await?;

            tracing::info!(
                "Initialized S3 storage backend: bucket={}, endpoint={}",
                storage.bucket,
                if storage.s3.endpoint_url.is_empty() { "default" } else { storage.s3.endpoint_url.as_str() }
            );

            Arc::new(backend)
        }
        #[cfg(not(feature = "s3"))]
        StorageBackendType::S3 => {
            return Err(StorageError::ConfigError(
                "S3 backend selected but not compiled. Rebuild with --features s3 to enable S3 support."
                    .to_string(),
            )
            .into());
        }
    };

    events.emit(AppEvent::StorageReady {
        backend: backend.name().to_string(),
        location: backend.location(&storage.key_prefix),
        remote: backend.is_remote(),
    });

    Ok(backend)
}
