use super::errors::ConfigError;
use std::path::Path;
use std::sync::Arc;
use toml_edit::{DocumentMut, Item, Table, Value};

/// Migrates config file to latest format if needed
pub async fn migrate_config_if_needed<P: AsRef<Path>>(
    path: P,
    events: Option<&Arc<sweeper_events::EventBus>>,
) -> Result<(), ConfigError> {
    let content = tokio::fs::read_to_string(path.as_ref()).await?;
    let mut doc = content.parse::<DocumentMut>()?;
    let mut added_fields = Vec::new();

    migrate_sweep_section(&mut doc, &mut added_fields)?;
    migrate_storage_section(&mut doc, &mut added_fields)?;

    // Only write if we added fields
    if !added_fields.is_empty() {
        tokio::fs::write(path.as_ref(), doc.to_string()).await?;

        if let Some(event_bus) = events {
            event_bus.emit(sweeper_events::AppEvent::ConfigMigrated {
                added_fields: added_fields.clone(),
            });
        }
    }

    Ok(())
}

fn migrate_sweep_section(
    doc: &mut DocumentMut,
    added_fields: &mut Vec<String>,
) -> Result<(), ConfigError> {
    let sweep = ensure_table(doc.as_table_mut(), "sweep", "sweep", added_fields)?;
    ensure_field(sweep, "sweep.directory", Value::from("/backup/"), added_fields);
    ensure_field(sweep, "sweep.date_format", Value::from("%Y-%m-%d"), added_fields);

    Ok(())
}

fn migrate_storage_section(
    doc: &mut DocumentMut,
    added_fields: &mut Vec<String>,
) -> Result<(), ConfigError> {
    let storage = ensure_table(doc.as_table_mut(), "storage", "storage", added_fields)?;
    ensure_field(storage, "storage.backend", Value::from("s3"), added_fields);
    ensure_field(storage, "storage.bucket", Value::from("backups"), added_fields);
    ensure_field(storage, "storage.key_prefix", Value::from("backups/"), added_fields);

    let s3 = ensure_table(storage, "s3", "storage.s3", added_fields)?;
    ensure_field(s3, "storage.s3.region", Value::from(""), added_fields);
    ensure_field(s3, "storage.s3.endpoint_url", Value::from(""), added_fields);
    ensure_field(s3, "storage.s3.access_key_id", Value::from(""), added_fields);
    ensure_field(s3, "storage.s3.secret_access_key", Value::from(""), added_fields);
    ensure_field(s3, "storage.s3.force_path_style", Value::from(false), added_fields);

    let local = ensure_table(storage, "local", "storage.local", added_fields)?;
    ensure_field(local, "storage.local.root", Value::from("mirror"), added_fields);

    Ok(())
}

/// Returns the sub-table `key`, creating an implicit one when absent
fn ensure_table<'a>(
    parent: &'a mut Table,
    key: &str,
    display: &str,
    added_fields: &mut Vec<String>,
) -> Result<&'a mut Table, ConfigError> {
    if !parent.contains_key(key) {
        let mut table = Table::new();
        table.set_implicit(true);
        parent.insert(key, Item::Table(table));
        added_fields.push(display.to_string());
    }

    parent[key]
        .as_table_mut()
        .ok_or_else(|| ConfigError::MigrationError(format!("Invalid [{}] section in config", display)))
}

fn ensure_field(
    table: &mut Table,
    display: &str,
    default_value: Value,
    added_fields: &mut Vec<String>,
) {
    let key = display.rsplit('.').next().unwrap_or(display);
    if !table.contains_key(key) {
        table[key] = Item::Value(default_value);
        added_fields.push(display.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, DEFAULT_CONFIG_TEMPLATE};

    #[tokio::test]
    async fn test_template_needs_no_migration() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweeper.toml");
        std::fs::write(&path, DEFAULT_CONFIG_TEMPLATE).unwrap();

        migrate_config_if_needed(&path, None).await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG_TEMPLATE);
    }

    #[tokio::test]
    async fn test_adds_missing_fields_and_keeps_comments() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweeper.toml");
        std::fs::write(
            &path,
            "# nightly dumps\n[sweep]\ndirectory = \"/srv/dumps\"\n\n[storage]\nbucket = \"nightly\"\n",
        )
        .unwrap();

        migrate_config_if_needed(&path, None).await.unwrap();

        let migrated = std::fs::read_to_string(&path).unwrap();
        assert!(migrated.contains("# nightly dumps"));
        assert!(migrated.contains("date_format"));
        assert!(migrated.contains("key_prefix"));
        assert!(migrated.contains("force_path_style"));

        let config: Config = toml::from_str(&migrated).unwrap();
        assert_eq!(config.sweep.directory, "/srv/dumps");
        assert_eq!(config.sweep.date_format, "%Y-%m-%d");
        assert_eq!(config.storage.bucket, "nightly");
        assert_eq!(config.storage.key_prefix, "backups/");
        assert_eq!(config.storage.local.root, "mirror");
    }

    #[test]
    fn test_reports_added_fields() {
        let mut doc = "[sweep]\ndirectory = \"/x\"\n".parse::<DocumentMut>().unwrap();
        let mut added = Vec::new();

        migrate_sweep_section(&mut doc, &mut added).unwrap();
        migrate_storage_section(&mut doc, &mut added).unwrap();

        assert_eq!(added[0], "sweep.date_format");
        assert!(added.contains(&"storage".to_string()));
        assert!(added.contains(&"storage.s3.region".to_string()));
        assert!(added.contains(&"storage.local.root".to_string()));
        assert!(!added.contains(&"sweep.directory".to_string()));
    }

    #[test]
    fn test_rejects_non_table_section() {
        let mut doc = "storage = 3\n".parse::<DocumentMut>().unwrap();
        let mut added = Vec::new();

        let err = migrate_storage_section(&mut doc, &mut added).unwrap_err();
        assert!(matches!(err, ConfigError::MigrationError(_)));
    }
}
