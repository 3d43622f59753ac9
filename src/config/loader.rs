// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::GroupByConfig;
use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main configuration structure for a group_by deployment.
///
/// # Fields
/// * `logging` - Log level used when `RUST_LOG` is not set (optional)
/// * `group_by` - The ordered list of groups
///
/// # Example
/// ```yaml
/// logging:
///   level: debug
/// group_by:
///   groups:
///     - condition:
///         type: text
///         operator: contains
///         arg: foo
///       processors:
///         - type: metadata
///           operator: set
///           key: grouping
///           value: foo
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub group_by: GroupByConfig,
}

/// Logging options.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Serialization format of a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

impl ConfigFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match extension.as_str() {
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            "json" => Ok(ConfigFormat::Json),
            "toml" => Ok(ConfigFormat::Toml),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Parse config text in the given format.
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<Config, ConfigError> {
    let cfg = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(content)?,
        ConfigFormat::Json => serde_json::from_str(content)?,
        ConfigFormat::Toml => toml::from_str(content)?,
    };
    Ok(cfg)
}

/// Load a config file, choosing the parser from its extension.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConditionConfig, ProcessorConfig};
    use std::io::Write;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parse_basic_config() {
        let yaml = r#"
group_by:
  groups:
    - condition:
        type: text
        operator: contains
        arg: foo
      processors:
        - type: metadata
          operator: set
          key: grouping
          value: foo
    - condition:
        type: static
"#;

        let cfg = parse_config(yaml, ConfigFormat::Yaml).unwrap();
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.group_by.groups.len(), 2);

        let first = &cfg.group_by.groups[0];
        assert_eq!(first.condition.type_name(), "text");
        assert_eq!(first.processors.len(), 1);
        match &first.processors[0] {
            ProcessorConfig::Metadata(m) => {
                assert_eq!(m.operator, "set");
                assert_eq!(m.key, "grouping");
                assert_eq!(m.value, "foo");
                assert!(m.parts.is_empty());
            }
            other => panic!("Expected metadata processor, got {:?}", other),
        }

        let second = &cfg.group_by.groups[1];
        assert_eq!(second.condition, ConditionConfig::Static { value: true });
        assert!(second.processors.is_empty());
    }

    #[test]
    fn test_metadata_defaults() {
        let yaml = r#"
group_by:
  groups:
    - condition:
        type: static
        value: false
      processors:
        - type: metadata
"#;

        let cfg = parse_config(yaml, ConfigFormat::Yaml).unwrap();
        match &cfg.group_by.groups[0].processors[0] {
            ProcessorConfig::Metadata(m) => {
                assert_eq!(m.operator, "set");
                assert_eq!(m.key, "example");
                assert_eq!(m.value, "${!hostname}");
            }
            other => panic!("Expected metadata processor, got {:?}", other),
        }
    }

    #[test]
    fn test_nested_group_by_and_logic_conditions() {
        let yaml = r##"
group_by:
  groups:
    - condition:
        type: and
        children:
          - type: metadata
            operator: exists
            key: topic
          - type: not
            child:
              type: text
              operator: prefix
              arg: "#"
      processors:
        - type: split
          size: 2
        - type: group_by
          groups:
            - condition:
                type: any
                child:
                  type: static
              processors:
                - type: noop
"##;

        let cfg = parse_config(yaml, ConfigFormat::Yaml).unwrap();
        let group = &cfg.group_by.groups[0];
        assert_eq!(group.condition.type_name(), "and");
        assert_eq!(group.processors[0].type_name(), "split");
        match &group.processors[1] {
            ProcessorConfig::GroupBy(inner) => {
                assert_eq!(inner.groups.len(), 1);
                assert_eq!(inner.groups[0].processors, vec![ProcessorConfig::Noop]);
            }
            other => panic!("Expected nested group_by, got {:?}", other),
        }
    }

    #[test]
    fn test_load_yaml_file() {
        let file = write_temp(
            ".yaml",
            r#"
logging:
  level: debug
group_by:
  groups: []
"#,
        );

        let cfg = load_config(file.path()).unwrap();
        assert_eq!(cfg.logging.level, "debug");
        assert!(cfg.group_by.groups.is_empty());
    }

    #[test]
    fn test_load_json_file() {
        let file = write_temp(
            ".json",
            r#"{
  "group_by": {
    "groups": [
      {
        "condition": { "type": "metadata", "operator": "equals", "key": "k", "arg": "v" },
        "processors": [ { "type": "split" } ]
      }
    ]
  }
}"#,
        );

        let cfg = load_config(file.path()).unwrap();
        assert_eq!(cfg.group_by.groups.len(), 1);
        assert_eq!(
            cfg.group_by.groups[0].processors[0],
            ProcessorConfig::Split(crate::config::SplitConfig { size: 1 })
        );
    }

    #[test]
    fn test_load_toml_file() {
        let file = write_temp(
            ".toml",
            r#"
[logging]
level = "warn"

[[group_by.groups]]
condition = { type = "text", operator = "equals", arg = "ping" }

[[group_by.groups.processors]]
type = "text"
operator = "to_upper"
"#,
        );

        let cfg = load_config(file.path()).unwrap();
        assert_eq!(cfg.logging.level, "warn");
        assert_eq!(cfg.group_by.groups[0].processors[0].type_name(), "text");
    }

    #[test]
    fn test_unsupported_extension() {
        let file = write_temp(".ini", "group_by = nothing");
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(ext) if ext == "ini"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_config("/definitely/not/here.yaml").unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn test_unknown_processor_type_is_a_parse_error() {
        let yaml = r#"
group_by:
  groups:
    - condition:
        type: static
      processors:
        - type: teleport
"#;
        let err = parse_config(yaml, ConfigFormat::Yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }
}
