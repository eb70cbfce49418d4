use crate::StorageError;
use std::path::Path;

/// Storage backend trait for backup uploads
#[async_trait::async_trait]
pub trait StorageBackend: Send + Sync {
    /// Upload file under the exact object key, returns its location
    async fn upload_file(&self, local_path: &Path, key: &str) -> Result<String, StorageError>;

    /// Location of an object (without uploading)
    fn location(&self, key: &str) -> String;

    /// Short backend name for logs
    fn name(&self) -> &'static str;

    /// Check if backend is local or remote
    fn is_remote(&self) -> bool;
}
