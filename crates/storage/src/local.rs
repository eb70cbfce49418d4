use crate::backend::StorageBackend;
use crate::StorageError;
use std::path::{Component, Path, PathBuf};

/// Local filesystem storage backend
/// Mirrors objects to `<root>/<bucket>/<key>`
pub struct LocalBackend {
    bucket_path: PathBuf,
}

impl LocalBackend {
    pub fn new(root: PathBuf, bucket_name: &str) -> Self {
        Self {
            bucket_path: root.join(bucket_name),
        }
    }

    /// Maps an object key to a path below the bucket directory.
    /// Keys may contain `/` separators but never escape the bucket.
    fn object_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let relative = Path::new(key.trim_start_matches('/'));

        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes || relative.as_os_str().is_empty() {
            return Err(StorageError::ConfigError(format!(
                "object key '{}' cannot be mapped below {}",
                key,
                self.bucket_path.display()
            )));
        }

        Ok(self.bucket_path.join(relative))
    }
}

#[async_trait::async_trait]
impl StorageBackend for LocalBackend {
    async fn upload_file(&self, local_path: &Path, key: &str) -> Result<String, StorageError> {
        let destination = self.object_path(key)?;

        tracing::info!("Copying {} to {}", local_path.display(), destination.display());

        if let Some(parent) = destination.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        // Same-day reruns overwrite the previous copy
        tokio::fs::copy(local_path, &destination).await?;

        Ok(self.location(key))
    }

    fn location(&self, key: &str) -> String {
        self.bucket_path
            .join(key.trim_start_matches('/'))
            .to_string_lossy()
            .to_string()
    }

    fn name(&self) -> &'static str {
        "local"
    }

    fn is_remote(&self) -> bool {
        false
    }
}
