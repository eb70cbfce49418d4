use super::errors::ConfigError;
use super::models::{Config, StorageBackend};
use chrono::NaiveDate;
use sweeper_models::DateStamp;

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sweep.directory.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "sweep.directory must not be empty".to_string(),
            ));
        }

        // Two dates differing in every field: a usable pattern renders both
        // and tells them apart, so literal-only patterns are rejected
        let first = NaiveDate::from_ymd_opt(2000, 1, 1);
        let second = NaiveDate::from_ymd_opt(2001, 2, 2);
        let stamps = first
            .zip(second)
            .and_then(|(first, second)| {
                DateStamp::from_date(first, &self.sweep.date_format)
                    .zip(DateStamp::from_date(second, &self.sweep.date_format))
            });

        match stamps {
            Some((first, second)) if first != second => {}
            Some(_) => {
                return Err(ConfigError::InvalidConfig(format!(
                    "sweep.date_format '{}' renders the same stamp for every date",
                    self.sweep.date_format
                )));
            }
            None => {
                return Err(ConfigError::InvalidConfig(format!(
                    "sweep.date_format '{}' is not a date pattern producing a non-empty stamp",
                    self.sweep.date_format
                )));
            }
        }

        if self.storage.bucket.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "storage.bucket must not be empty".to_string(),
            ));
        }

        match self.storage.backend {
            StorageBackend::S3 => {
                let s3 = &self.storage.s3;
                if s3.access_key_id.is_empty() != s3.secret_access_key.is_empty() {
                    return Err(ConfigError::InvalidConfig(
                        "storage.s3.access_key_id and storage.s3.secret_access_key must be set together"
                            .to_string(),
                    ));
                }
            }
            StorageBackend::Local => {
                if self.storage.local.root.trim().is_empty() {
                    return Err(ConfigError::InvalidConfig(
                        "storage.local.root must not be empty".to_string(),
                    ));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_date_formats() {
        for format in ["", "%H%M", "%Q"] {
            let mut config = Config::default();
            config.sweep.date_format = format.to_string();
            assert!(config.validate().is_err(), "format {:?} accepted", format);
        }
    }

    #[test]
    fn test_rejects_literal_only_formats() {
        for format in ["backup", "daily-%%"] {
            let mut config = Config::default();
            config.sweep.date_format = format.to_string();
            assert!(config.validate().is_err(), "format {:?} accepted", format);
        }
    }

    #[test]
    fn test_accepts_date_patterns() {
        for format in ["%Y-%m-%d", "%Y%m%d", "backup_%d.%m.%Y", "%F"] {
            let mut config = Config::default();
            config.sweep.date_format = format.to_string();
            assert!(config.validate().is_ok(), "format {:?} rejected", format);
        }
    }

    #[test]
    fn test_rejects_empty_bucket_and_directory() {
        let mut config = Config::default();
        config.storage.bucket = " ".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.sweep.directory = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_half_credentials() {
        let mut config = Config::default();
        config.storage.s3.access_key_id = "AKIA".to_string();
        assert!(config.validate().is_err());

        config.storage.s3.secret_access_key = "secret".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_local_backend_requires_root() {
        let mut config = Config::default();
        config.storage.backend = StorageBackend::Local;
        config.storage.local.root = String::new();
        assert!(config.validate().is_err());
    }
}
