//! Configuration for cursor pagination
//!
//! A small YAML (or JSON) document describing page size limits and the
//! default ordering for an endpoint:
//!
//! ```yaml
//! limits:
//!   default: 20
//!   max: 100
//! default_sort:
//!   createdAt: -1
//!   _id: -1
//! log_level: info
//! ```

use crate::cursor::SortSpec;
use crate::error::{Error, Result};
use crate::limit::LimitPolicy;
use crate::types::LogLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Pagination settings loaded from YAML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CursorConfig {
    /// Page size limits
    #[serde(default)]
    pub limits: LimitPolicy,

    /// Ordering used when a request does not specify one
    #[serde(default)]
    pub default_sort: Option<SortSpec>,

    /// Log level for the CLI
    #[serde(default)]
    pub log_level: LogLevel,
}

impl CursorConfig {
    /// Check the configuration is usable
    pub fn validate(&self) -> Result<()> {
        self.limits.validate()?;

        if let Some(sort) = &self.default_sort {
            if sort.is_empty() {
                return Err(Error::invalid_value(
                    "default_sort",
                    "must name at least one field",
                ));
            }
        }

        Ok(())
    }

    /// The configured default sort, or `_id` ascending
    pub fn sort_or_default(&self) -> SortSpec {
        self.default_sort
            .clone()
            .unwrap_or_else(|| SortSpec::new().asc("_id"))
    }
}

/// Load and validate a configuration file
pub fn load_config(path: impl AsRef<Path>) -> Result<CursorConfig> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;

    load_config_from_str(&content)
}

/// Parse and validate a configuration from a YAML or JSON string
pub fn load_config_from_str(yaml: &str) -> Result<CursorConfig> {
    let config: CursorConfig = serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("Failed to parse config YAML: {e}")))?;

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::SortDirection;
    use std::io::Write;

    #[test]
    fn test_load_full_config() {
        let yaml = r"
limits:
  default: 25
  max: 100
default_sort:
  createdAt: -1
  _id: 1
log_level: debug
";
        let config = load_config_from_str(yaml).unwrap();
        assert_eq!(config.limits, LimitPolicy::new(25).with_max(100));
        assert_eq!(config.log_level, LogLevel::Debug);

        let sort = config.default_sort.unwrap();
        assert_eq!(sort.keys().collect::<Vec<_>>(), vec!["createdAt", "_id"]);
        assert_eq!(sort.direction("createdAt"), Some(SortDirection::Descending));
        assert_eq!(sort.direction("_id"), Some(SortDirection::Ascending));
    }

    #[test]
    fn test_load_empty_config_uses_defaults() {
        let config = load_config_from_str("{}").unwrap();
        assert_eq!(config, CursorConfig::default());
        assert_eq!(config.limits.apply(None), 20);
        assert_eq!(config.sort_or_default().to_string(), "_id:1");
    }

    #[test]
    fn test_load_json_config() {
        let config =
            load_config_from_str(r#"{"default_sort": {"name": "asc", "age": "desc"}}"#).unwrap();
        assert_eq!(config.sort_or_default().to_string(), "name:1,age:-1");
    }

    #[test]
    fn test_invalid_direction_rejected() {
        let err = load_config_from_str("default_sort:\n  createdAt: 2\n").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config YAML"));
    }

    #[test]
    fn test_invalid_limits_rejected() {
        let err = load_config_from_str("limits:\n  default: 50\n  max: 10\n").unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { .. }));
    }

    #[test]
    fn test_empty_default_sort_rejected() {
        let err = load_config_from_str("default_sort: {}\n").unwrap_err();
        assert!(err.to_string().contains("default_sort"));
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cursor.yaml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "limits:\n  max: 50").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.limits.max, Some(50));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
