use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AppEvent {
    // Application lifecycle
    Starting,

    // Configuration
    ConfigLoading { path: String },
    ConfigCreated { path: String },
    ConfigMigrated { added_fields: Vec<String> },
    ConfigLoaded { directory: String, bucket: String },

    // Storage
    StorageReady { backend: String, location: String, remote: bool },

    // Sweep
    SweepStarted { directory: String, date_stamp: String },
    FileUploaded { file: String, location: String },
    FileDeleted { file: String },
    EntrySkipped { name: String },
    SweepCompleted { uploaded: usize, deleted: usize, duration: Duration },

    // Errors
    Error { context: String, error: String },
}

pub struct EventBus {
    pub(super) silent_mode: bool,
}
