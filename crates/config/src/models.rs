use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "super::defaults::sweep_settings")]
    pub sweep: SweepSettings,
    #[serde(default = "super::defaults::storage_settings")]
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SweepSettings {
    /// Directory scanned for backups (non-recursive)
    #[serde(default = "super::defaults::sweep_directory")]
    pub directory: String,
    /// strftime pattern rendering the date stamp
    #[serde(default = "super::defaults::date_format")]
    pub date_format: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "super::defaults::storage_backend")]
    pub backend: StorageBackend,
    #[serde(default = "super::defaults::bucket")]
    pub bucket: String,
    /// Prepended verbatim to each file name to form the object key
    #[serde(default = "super::defaults::key_prefix")]
    pub key_prefix: String,
    #[serde(default)]
    pub s3: S3Settings,
    #[serde(default = "super::defaults::local_settings")]
    pub local: LocalSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    S3,
    Local,
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackend::S3 => f.write_str("s3"),
            StorageBackend::Local => f.write_str("local"),
        }
    }
}

/// Empty strings defer to the AWS SDK default chains
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct S3Settings {
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub endpoint_url: String,
    #[serde(default)]
    pub access_key_id: String,
    #[serde(default)]
    pub secret_access_key: String,
    #[serde(default)]
    pub force_path_style: bool,
}

impl S3Settings {
    pub fn has_static_credentials(&self) -> bool {
        !self.access_key_id.is_empty() && !self.secret_access_key.is_empty()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocalSettings {
    /// Objects land in `<root>/<bucket>/<key>`
    #[serde(default = "super::defaults::local_root")]
    pub root: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sweep: super::defaults::sweep_settings(),
            storage: super::defaults::storage_settings(),
        }
    }
}
