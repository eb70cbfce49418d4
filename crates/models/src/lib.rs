use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::path::PathBuf;
use std::time::Duration;

/// Date marker identifying the backups produced for one day.
///
/// A file belongs to the current run when its name contains the stamp
/// anywhere, not only as a suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateStamp(String);

impl DateStamp {
    /// Formats `date` with a strftime pattern.
    /// Returns `None` when the pattern is invalid or renders an empty string,
    /// since an empty stamp would match every file name.
    pub fn from_date(date: NaiveDate, format: &str) -> Option<Self> {
        let mut stamp = String::new();
        write!(stamp, "{}", date.format(format)).ok()?;

        if stamp.is_empty() {
            None
        } else {
            Some(Self(stamp))
        }
    }

    /// Stamp for the current local date
    pub fn today(format: &str) -> Option<Self> {
        Self::from_date(Local::now().date_naive(), format)
    }

    pub fn matches(&self, file_name: &str) -> bool {
        file_name.contains(self.0.as_str())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DateStamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A regular file found directly inside the swept directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupFile {
    pub name: String,
    pub path: PathBuf,
}

impl BackupFile {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Partition of one directory listing, computed once before any side effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepPlan {
    pub date_stamp: DateStamp,
    pub to_upload: Vec<BackupFile>,
    pub to_delete: Vec<BackupFile>,
    /// Entries that are not regular files; never uploaded or deleted
    #[serde(default)]
    pub skipped: Vec<String>,
}

impl SweepPlan {
    pub fn partition(date_stamp: DateStamp, files: Vec<BackupFile>) -> Self {
        let (to_upload, to_delete) = files
            .into_iter()
            .partition(|file| date_stamp.matches(&file.name));

        Self {
            date_stamp,
            to_upload,
            to_delete,
            skipped: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.to_upload.is_empty() && self.to_delete.is_empty()
    }
}

/// Outcome of a completed sweep
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepReport {
    pub date_stamp: DateStamp,
    /// Object keys written, in upload order
    pub uploaded: Vec<String>,
    /// Local file names removed, in deletion order
    pub deleted: Vec<String>,
    /// Entries that were neither uploaded nor deleted
    pub skipped: Vec<String>,
    pub duration: Duration,
}

/// Coarse failure category reported when a run aborts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    Io,
    Authentication,
    Network,
    Storage,
    Config,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ErrorKind::Io => "I/O",
            ErrorKind::Authentication => "authentication",
            ErrorKind::Network => "network",
            ErrorKind::Storage => "storage",
            ErrorKind::Config => "configuration",
        };
        f.write_str(label)
    }
}
