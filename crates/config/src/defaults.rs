/// Default values for configuration fields

pub fn sweep_directory() -> String {
    "/backup/".to_string()
}

pub fn date_format() -> String {
    "%Y-%m-%d".to_string()
}

pub fn sweep_settings() -> super::models::SweepSettings {
    super::models::SweepSettings {
        directory: sweep_directory(),
        date_format: date_format(),
    }
}

// Storage defaults
pub fn storage_backend() -> super::models::StorageBackend {
    super::models::StorageBackend::S3
}

pub fn bucket() -> String {
    "backups".to_string()
}

pub fn key_prefix() -> String {
    "backups/".to_string()
}

pub fn local_root() -> String {
    "mirror".to_string()
}

pub fn local_settings() -> super::models::LocalSettings {
    super::models::LocalSettings {
        root: local_root(),
    }
}

pub fn storage_settings() -> super::models::StorageSettings {
    super::models::StorageSettings {
        backend: storage_backend(),
        bucket: bucket(),
        key_prefix: key_prefix(),
        s3: super::models::S3Settings::default(),
        local: local_settings(),
    }
}

pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# ===============================================================================
# Backup Sweeper Configuration
# ===============================================================================
# Each run uploads the files whose name contains today's date stamp, then
# deletes every other file in the swept directory.

[sweep]
directory = "/backup/"               # Directory holding backup files (not scanned recursively)
date_format = "%Y-%m-%d"             # Date stamp pattern (strftime), matched anywhere in file names

# ===============================================================================
# STORAGE BACKEND
# ===============================================================================
[storage]
backend = "s3"                       # Storage backend: "s3" or "local"
bucket = "backups"                   # Destination bucket
key_prefix = "backups/"              # Prepended as-is to each file name to form the object key

# S3 Configuration (only used if backend = "s3")
# Empty values fall back to the AWS SDK defaults (environment, profile, instance role)
[storage.s3]
region = ""                          # e.g. us-east-1
endpoint_url = ""                    # e.g. https://s3.amazonaws.com, or a MinIO / R2 endpoint
access_key_id = ""                   # Static credentials (optional)
secret_access_key = ""
force_path_style = false             # Required by most self-hosted S3 implementations

# Local mirror (only used if backend = "local")
[storage.local]
root = "mirror"                      # Objects are written to <root>/<bucket>/<key>
"#;
