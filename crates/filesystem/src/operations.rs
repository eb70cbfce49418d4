use super::models::{FileSystem, ListedEntries};
use anyhow::Result;
use std::io;
use std::path::{Path, PathBuf};
use sweeper_models::BackupFile;
use tokio::fs;
use walkdir::WalkDir;

impl FileSystem {
    /// Lists the direct children of `dir` without descending into sub-directories.
    ///
    /// A symlink counts as a file when its target is a regular file; the
    /// listed path is the link itself, so removal unlinks without touching
    /// the target. Directories, dangling links and special files are skipped.
    pub fn list_files(dir: &Path) -> io::Result<ListedEntries> {
        let metadata = std::fs::metadata(dir)?;
        if !metadata.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("not a directory: {}", dir.display()),
            ));
        }

        let mut listed = ListedEntries::default();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name()
        {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().to_string();

            // Follows the link for the type check only
            if entry.file_type().is_file() || entry.path().is_file() {
                listed.files.push(BackupFile::new(name, entry.path()));
            } else {
                tracing::debug!("    Skipped: {} (not a regular file)", entry.path().display());
                listed.skipped.push(name);
            }
        }

        Ok(listed)
    }

    pub async fn remove_file(path: &Path) -> io::Result<()> {
        fs::remove_file(path).await?;
        tracing::debug!("    Removed: {}", path.display());
        Ok(())
    }

    fn get_absolute_path(path: &Path) -> Result<PathBuf> {
        let abs_path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()?.join(path)
        };
        Ok(abs_path)
    }

    pub fn get_absolute_path_string(path: &str) -> Result<String> {
        let path_buf = PathBuf::from(path);
        let abs = Self::get_absolute_path(&path_buf)?;
        Ok(abs.to_string_lossy().to_string())
    }
}
