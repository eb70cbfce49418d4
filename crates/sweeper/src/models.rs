use std::path::PathBuf;
use std::sync::Arc;
use sweeper_events::EventBus;
use sweeper_storage::StorageBackend;

/// Uploads today's backups and prunes everything else in one directory.
pub struct Sweeper {
    pub(super) directory: PathBuf,
    pub(super) date_format: String,
    pub(super) key_prefix: String,
    pub(super) storage: Arc<dyn StorageBackend>,
    pub(super) events: Arc<EventBus>,
}
