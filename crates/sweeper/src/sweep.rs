use super::errors::SweepError;
use super::models::Sweeper;
use chrono::{Local, NaiveDate};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use sweeper_config::Config;
use sweeper_events::{AppEvent, EventBus};
use sweeper_filesystem::FileSystem;
use sweeper_models::{DateStamp, SweepPlan, SweepReport};
use sweeper_storage::StorageBackend;

type Result<T> = std::result::Result<T, SweepError>;

/// Object key for a backup file: the prefix followed by the file name, verbatim
pub fn object_key(key_prefix: &str, file_name: &str) -> String {
    format!("{}{}", key_prefix, file_name)
}

impl Sweeper {
    pub fn new(config: &Config, storage: Arc<dyn StorageBackend>, events: Arc<EventBus>) -> Self {
        Self {
            directory: PathBuf::from(&config.sweep.directory),
            date_format: config.sweep.date_format.clone(),
            key_prefix: config.storage.key_prefix.clone(),
            storage,
            events,
        }
    }

    /// Lists the directory and partitions it for `date`. No side effects.
    pub fn plan(&self, date: NaiveDate) -> Result<SweepPlan> {
        let date_stamp = DateStamp::from_date(date, &self.date_format)
            .ok_or_else(|| SweepError::InvalidDateFormat(self.date_format.clone()))?;

        let listed = FileSystem::list_files(&self.directory).map_err(|source| {
            SweepError::ListDirectory {
                path: self.directory.clone(),
                source,
            }
        })?;

        let mut plan = SweepPlan::partition(date_stamp, listed.files);
        plan.skipped = listed.skipped;
        Ok(plan)
    }

    /// Sweeps using the current local date
    pub async fn run(&self) -> Result<SweepReport> {
        self.run_on(Local::now().date_naive()).await
    }

    /// Uploads every file matching the stamp for `date`, then deletes every
    /// other regular file.
    ///
    /// The partition is fixed before the first upload. The first failing
    /// upload aborts the run, so nothing is deleted after a failed upload.
    pub async fn run_on(&self, date: NaiveDate) -> Result<SweepReport> {
        let started = Instant::now();
        let plan = self.plan(date)?;

        self.events.emit(AppEvent::SweepStarted {
            directory: self.directory.display().to_string(),
            date_stamp: plan.date_stamp.to_string(),
        });
        tracing::info!(
            "Found {} file(s) for {}, {} to prune, {} skipped",
            plan.to_upload.len(),
            plan.date_stamp,
            plan.to_delete.len(),
            plan.skipped.len()
        );

        if plan.is_empty() {
            tracing::info!("Nothing to upload or prune in {}", self.directory.display());
        }

        for name in &plan.skipped {
            self.events.emit(AppEvent::EntrySkipped { name: name.clone() });
        }

        let mut uploaded = Vec::with_capacity(plan.to_upload.len());
        for file in &plan.to_upload {
            let key = object_key(&self.key_prefix, &file.name);
            let location = self.storage.upload_file(&file.path, &key).await?;

            self.events.emit(AppEvent::FileUploaded {
                file: file.name.clone(),
                location,
            });
            uploaded.push(key);
        }

        let mut deleted = Vec::with_capacity(plan.to_delete.len());
        for file in &plan.to_delete {
            FileSystem::remove_file(&file.path)
                .await
                .map_err(|source| SweepError::RemoveFile {
                    path: file.path.clone(),
                    source,
                })?;

            self.events.emit(AppEvent::FileDeleted {
                file: file.name.clone(),
            });
            deleted.push(file.name.clone());
        }

        let duration = started.elapsed();
        self.events.emit(AppEvent::SweepCompleted {
            uploaded: uploaded.len(),
            deleted: deleted.len(),
            duration,
        });

        Ok(SweepReport {
            date_stamp: plan.date_stamp,
            uploaded,
            deleted,
            skipped: plan.skipped,
            duration,
        })
    }
}
