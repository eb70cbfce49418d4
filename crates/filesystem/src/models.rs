use sweeper_models::BackupFile;

pub struct FileSystem;

/// Result of a non-recursive directory listing
#[derive(Debug, Default)]
pub struct ListedEntries {
    /// Regular files, sorted by name
    pub files: Vec<BackupFile>,
    /// Names of entries that are not regular files
    pub skipped: Vec<String>,
}
