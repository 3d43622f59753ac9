// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

/// Configuration for a boolean condition, tagged by `type`.
///
/// `all` and `any` evaluate their child against every part of the batch, which
/// lets a group select parts based on their siblings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConditionConfig {
    Static {
        #[serde(default = "default_static_value")]
        value: bool,
    },
    Text(TextConditionConfig),
    Metadata(MetadataConditionConfig),
    And {
        children: Vec<ConditionConfig>,
    },
    Or {
        children: Vec<ConditionConfig>,
    },
    Not {
        child: Box<ConditionConfig>,
    },
    All {
        child: Box<ConditionConfig>,
    },
    Any {
        child: Box<ConditionConfig>,
    },
}

impl ConditionConfig {
    /// The `type` tag of this configuration.
    pub fn type_name(&self) -> &'static str {
        match self {
            ConditionConfig::Static { .. } => "static",
            ConditionConfig::Text(_) => "text",
            ConditionConfig::Metadata(_) => "metadata",
            ConditionConfig::And { .. } => "and",
            ConditionConfig::Or { .. } => "or",
            ConditionConfig::Not { .. } => "not",
            ConditionConfig::All { .. } => "all",
            ConditionConfig::Any { .. } => "any",
        }
    }
}

fn default_static_value() -> bool {
    true
}

/// Payload text test.
///
/// Operators: `equals_cs`, `equals`, `contains_cs`, `contains`, `prefix_cs`,
/// `prefix`, `suffix_cs`, `suffix`. Forms without `_cs` ignore case.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TextConditionConfig {
    pub operator: String,
    #[serde(default)]
    pub arg: String,
}

/// Metadata test on a single key.
///
/// Operators: `equals_cs`, `equals`, `exists`, `has_prefix`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MetadataConditionConfig {
    pub operator: String,
    pub key: String,
    #[serde(default)]
    pub arg: String,
}
