// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while loading configuration and building conditions and processors.
//!
//! Every variant is fatal: a component that fails to build is never returned in a
//! partially constructed state.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The condition of a group could not be built.
    ///
    /// The cause is part of the message; it is not chained as a `source`.
    #[error("failed to create condition for group '{group}': {cause}")]
    GroupCondition { group: usize, cause: Box<ConfigError> },

    /// One of the processors of a group could not be built.
    #[error("failed to create processor '{processor}' for group '{group}': {cause}")]
    GroupProcessor {
        group: usize,
        processor: usize,
        cause: Box<ConfigError>,
    },

    /// An operator name that the component does not support.
    #[error("operator not recognised: {0}")]
    UnknownOperator(String),

    /// A field carries a value outside of its accepted range.
    #[error("invalid value for field '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("failed to read config file '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported config format '{0}', expected one of yaml, yml, json, toml")]
    UnsupportedFormat(String),

    #[error("invalid YAML config")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON config")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML config")]
    Toml(#[from] toml::de::Error),
}

impl ConfigError {
    pub fn group_condition(group: usize, source: ConfigError) -> Self {
        Self::GroupCondition {
            group,
            cause: Box::new(source),
        }
    }

    pub fn group_processor(group: usize, processor: usize, source: ConfigError) -> Self {
        Self::GroupProcessor {
            group,
            processor,
            cause: Box::new(source),
        }
    }

    /// The innermost error, skipping any group/processor position wrappers.
    pub fn root_cause(&self) -> &ConfigError {
        match self {
            Self::GroupCondition { cause, .. } | Self::GroupProcessor { cause, .. } => {
                cause.root_cause()
            }
            other => other,
        }
    }
}
