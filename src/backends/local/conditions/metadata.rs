// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::ConditionCounters;
use crate::backends::local::BuildContext;
use crate::config::MetadataConditionConfig;
use crate::errors::ConfigError;
use crate::message::Batch;
use crate::traits::Condition;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MetadataMatch {
    EqualsCs,
    Equals,
    Exists,
    HasPrefix,
}

/// Tests a metadata key of the classified part.
pub struct MetadataCondition {
    matcher: MetadataMatch,
    key: String,
    arg: String,
    counters: ConditionCounters,
}

impl MetadataCondition {
    pub fn new(config: &MetadataConditionConfig, ctx: &BuildContext) -> Result<Self, ConfigError> {
        let matcher = match config.operator.as_str() {
            "equals_cs" => MetadataMatch::EqualsCs,
            "equals" => MetadataMatch::Equals,
            "exists" => MetadataMatch::Exists,
            "has_prefix" => MetadataMatch::HasPrefix,
            other => return Err(ConfigError::UnknownOperator(other.to_string())),
        };

        Ok(Self {
            matcher,
            key: config.key.clone(),
            arg: config.arg.clone(),
            counters: ConditionCounters::new(ctx.stats(), "metadata"),
        })
    }

    fn matches(&self, value: Option<&str>) -> bool {
        match (self.matcher, value) {
            (MetadataMatch::Exists, value) => value.is_some(),
            (_, None) => false,
            (MetadataMatch::EqualsCs, Some(v)) => v == self.arg,
            (MetadataMatch::Equals, Some(v)) => v.eq_ignore_ascii_case(&self.arg),
            (MetadataMatch::HasPrefix, Some(v)) => v.starts_with(&self.arg),
        }
    }
}

impl Condition for MetadataCondition {
    fn check(&self, batch: &Batch, index: usize) -> bool {
        let value = batch.get(index).and_then(|part| part.get_metadata(&self.key));
        self.counters.record(self.matches(value))
    }

    fn name(&self) -> &'static str {
        "metadata"
    }
}
