mod bootstrap;

use crate::bootstrap::{config, logging, storage};
use anyhow::Result;
use std::process::ExitCode;
use std::sync::Arc;
use sweeper_config::ConfigError;
use sweeper_core::{SweepError, Sweeper};
use sweeper_events::{AppEvent, EventBus};
use sweeper_models::ErrorKind;
use sweeper_storage::StorageError;

#[tokio::main]
async fn main() -> ExitCode {
    logging::initialize();

    let events = EventBus::new(false);
    events.emit(AppEvent::Starting);

    match run(&events).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let kind = error_kind(&e);
            events.emit(AppEvent::Error {
                context: format!("Sweep aborted ({} error)", kind),
                error: format!("{:#}", e),
            });
            ExitCode::FAILURE
        }
    }
}

async fn run(events: &Arc<EventBus>) -> Result<()> {
    let config_path = std::env::var("SWEEPER_CONFIG").unwrap_or_else(|_| "sweeper.toml".to_string());
    let config = config::load(&config_path, events).await?;

    let storage = storage::initialize(&config, events).await?;

    let sweeper = Sweeper::new(&config, storage, Arc::clone(events));
    let report = sweeper.run().await?;

    tracing::info!(
        "Sweep for {} finished: {} uploaded, {} deleted, {} skipped in {:.2?}",
        report.date_stamp,
        report.uploaded.len(),
        report.deleted.len(),
        report.skipped.len(),
        report.duration
    );

    Ok(())
}

/// Maps the first typed error in the chain to the category shown to the operator
fn error_kind(error: &anyhow::Error) -> ErrorKind {
    for cause in error.chain() {
        if let Some(e) = cause.downcast_ref::<SweepError>() {
            return e.kind();
        }
        if let Some(e) = cause.downcast_ref::<StorageError>() {
            return e.kind();
        }
        if let Some(e) = cause.downcast_ref::<ConfigError>() {
            return match e {
                ConfigError::IoError(_) => ErrorKind::Io,
                _ => ErrorKind::Config,
            };
        }
        if cause.downcast_ref::<std::io::Error>().is_some() {
            return ErrorKind::Io;
        }
    }

    ErrorKind::Io
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_from_sweep_error() {
        let err = anyhow::Error::from(SweepError::Storage(StorageError::AuthenticationError(
            "backups/a.tar".to_string(),
            "InvalidAccessKeyId".to_string(),
        )));
        assert_eq!(error_kind(&err), ErrorKind::Authentication);
    }

    #[test]
    fn test_error_kind_from_config_error() {
        let err = anyhow::Error::from(ConfigError::ReviewRequired("/etc/sweeper.toml".to_string()));
        assert_eq!(error_kind(&err), ErrorKind::Config);
    }

    #[test]
    fn test_error_kind_from_config_io_error() {
        let err = anyhow::Error::from(ConfigError::IoError(std::io::Error::from(
            std::io::ErrorKind::PermissionDenied,
        )));
        assert_eq!(error_kind(&err), ErrorKind::Io);
    }

    #[test]
    fn test_error_kind_through_context() {
        let err = anyhow::Error::from(StorageError::NetworkError(
            "k".to_string(),
            "timeout".to_string(),
        ))
        .context("uploading");
        assert_eq!(error_kind(&err), ErrorKind::Network);
    }

    #[test]
    fn test_error_kind_plain_io() {
        let err = anyhow::Error::from(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
        assert_eq!(error_kind(&err), ErrorKind::Io);
    }
}
