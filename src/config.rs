//! Configuration file support for load-status.
//!
//! Provides YAML-based configuration through `load-status.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use load_status::application::dto::{SinkKind, MAX_CHUNK_SIZE};
use load_status::loading::policies::OverflowPolicy;
use load_status::shared::error::LoadStatusError;
use load_status::shared::Result;

pub const CONFIG_FILENAME: &str = "load-status.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub label: Option<String>,
    pub chunk_size: Option<usize>,
    pub overflow: Option<String>,
    pub sink: Option<String>,
    pub color: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    pub fn overflow_policy(&self) -> Result<Option<OverflowPolicy>> {
        parse_field(self.overflow.as_deref(), "overflow")
    }

    pub fn sink_kind(&self) -> Result<Option<SinkKind>> {
        parse_field(self.sink.as_deref(), "sink")
    }
}

fn parse_field<T>(value: Option<&str>, field: &str) -> Result<Option<T>>
where
    T: std::str::FromStr<Err = String>,
{
    value
        .map(|raw| {
            raw.parse::<T>().map_err(|message| {
                anyhow::Error::from(LoadStatusError::InvalidConfig {
                    message,
                    hint: format!("Fix or remove the '{}' field", field),
                })
            })
        })
        .transpose()
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.chunk_size == Some(0) {
        return Err(LoadStatusError::InvalidConfig {
            message: "chunk_size must be greater than 0".to_string(),
            hint: "Remove the field to use the default of 65536 bytes".to_string(),
        }
        .into());
    }

    if let Some(size) = config.chunk_size.filter(|&size| size > MAX_CHUNK_SIZE) {
        return Err(LoadStatusError::InvalidConfig {
            message: format!(
                "chunk_size {} exceeds the maximum of {} bytes",
                size, MAX_CHUNK_SIZE
            ),
            hint: "Use a smaller chunk_size".to_string(),
        }
        .into());
    }

    if let Some(label) = &config.label {
        if label.trim().is_empty() {
            return Err(LoadStatusError::InvalidConfig {
                message: "label must not be empty".to_string(),
                hint: "Use a short name such as \"initializer\"".to_string(),
            }
            .into());
        }
    }

    config.overflow_policy()?;
    config.sink_kind()?;
    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
label: assets
chunk_size: 4096
overflow: clamp
sink: tracing
color: false
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.label.as_deref(), Some("assets"));
        assert_eq!(config.chunk_size, Some(4096));
        assert_eq!(config.overflow_policy().unwrap(), Some(OverflowPolicy::Clamp));
        assert_eq!(config.sink_kind().unwrap(), Some(SinkKind::Tracing));
        assert_eq!(config.color, Some(false));
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "chunk_size: 16\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.chunk_size, Some(16));
        assert!(config.label.is_none());
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config_from_path(Path::new("/nonexistent/config.yml")).unwrap_err();
        assert!(format!("{}", err).contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(format!("{}", err).contains("Failed to parse config file"));
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "chunk_size: 0\n").unwrap();

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(format!("{}", err).contains("chunk_size must be greater than 0"));
    }

    #[test]
    fn test_oversized_chunk_size_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "chunk_size: 18446744073709551615\n").unwrap();

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(format!("{}", err).contains("exceeds the maximum"));
    }

    #[test]
    fn test_blank_label_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "label: \"   \"\n").unwrap();

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(format!("{}", err).contains("label must not be empty"));
    }

    #[test]
    fn test_invalid_overflow_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "overflow: wrap\n").unwrap();

        let err = load_config_from_path(&config_path).unwrap_err();
        let message = format!("{}", err);
        assert!(message.contains("Invalid overflow policy"));
        assert!(message.contains("'overflow'"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
label: initializer
retries: 3
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 1);
        assert!(config.unknown_fields.contains_key("retries"));
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.label.is_none());
        assert!(config.chunk_size.is_none());
        assert_eq!(config.overflow_policy().unwrap(), None);
        assert_eq!(config.sink_kind().unwrap(), None);
        assert!(config.unknown_fields.is_empty());
    }
}
