// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::ConditionConfig;
use serde::{Deserialize, Serialize};

/// Configuration for one transform stage.
///
/// Tagged by `type`; the remaining fields are specific to the variant.
///
/// # Example
/// ```yaml
/// type: metadata
/// operator: set
/// key: grouping
/// value: foo
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProcessorConfig {
    Noop,
    Metadata(MetadataConfig),
    Text(TextConfig),
    Split(SplitConfig),
    FilterParts(FilterPartsConfig),
    GroupBy(GroupByConfig),
}

impl ProcessorConfig {
    /// The `type` tag of this configuration.
    pub fn type_name(&self) -> &'static str {
        match self {
            ProcessorConfig::Noop => "noop",
            ProcessorConfig::Metadata(_) => "metadata",
            ProcessorConfig::Text(_) => "text",
            ProcessorConfig::Split(_) => "split",
            ProcessorConfig::FilterParts(_) => "filter_parts",
            ProcessorConfig::GroupBy(_) => "group_by",
        }
    }
}

/// Metadata editor configuration.
///
/// * `operator` - one of `set`, `delete_all`, `delete_prefix`
/// * `key` - the key written by `set`
/// * `value` - the value for `set`, or the prefix for `delete_prefix`; may contain
///   function variables
/// * `parts` - indices of the parts to edit (negative counts from the end); empty
///   means every part
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MetadataConfig {
    #[serde(default)]
    pub parts: Vec<i64>,
    #[serde(default = "default_metadata_operator")]
    pub operator: String,
    #[serde(default = "default_metadata_key")]
    pub key: String,
    #[serde(default = "default_metadata_value")]
    pub value: String,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            parts: Vec::new(),
            operator: default_metadata_operator(),
            key: default_metadata_key(),
            value: default_metadata_value(),
        }
    }
}

fn default_metadata_operator() -> String {
    "set".to_string()
}

fn default_metadata_key() -> String {
    "example".to_string()
}

fn default_metadata_value() -> String {
    "${!hostname}".to_string()
}

/// Payload text editor configuration.
///
/// * `operator` - one of `to_upper`, `to_lower`, `trim`, `prepend`, `append`
/// * `value` - text for `prepend`/`append`; may contain function variables
/// * `parts` - indices of the parts to edit; empty means every part
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TextConfig {
    pub operator: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub parts: Vec<i64>,
}

/// Splits a batch into batches of at most `size` parts.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SplitConfig {
    #[serde(default = "default_split_size")]
    pub size: usize,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            size: default_split_size(),
        }
    }
}

fn default_split_size() -> usize {
    1
}

/// Keeps only the parts for which `condition` holds.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FilterPartsConfig {
    pub condition: ConditionConfig,
}

/// Configuration for the group_by engine: an ordered list of groups.
///
/// Identity is positional; a part joins the first group whose condition passes.
///
/// # Example
/// ```yaml
/// groups:
///   - condition:
///       type: text
///       operator: contains
///       arg: foo
///     processors:
///       - type: metadata
///         operator: set
///         key: grouping
///         value: foo
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct GroupByConfig {
    #[serde(default)]
    pub groups: Vec<GroupByElement>,
}

/// A group determined by a condition and a list of group specific processors.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GroupByElement {
    pub condition: ConditionConfig,
    #[serde(default)]
    pub processors: Vec<ProcessorConfig>,
}
