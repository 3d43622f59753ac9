// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Metadata editor processor.
//!
//! Applies one operation to the metadata of a subset of parts:
//!
//! * `set` - sets `key` to `value`
//! * `delete_all` - removes every metadata entry
//! * `delete_prefix` - removes every entry whose key starts with `value`
//!
//! `value` may contain function variables, resolved once per invocation against
//! the batch being processed. The output is always exactly one batch of the
//! same length as the input.

use super::{target_indices, ProcessorCounters};
use crate::backends::local::BuildContext;
use crate::config::MetadataConfig;
use crate::errors::ConfigError;
use crate::interpolation::InterpolatedString;
use crate::message::{Batch, Metadata};
use crate::traits::{Processor, ProcessorOutput};

#[derive(Debug, Clone, PartialEq, Eq)]
enum MetadataOperator {
    Set { key: String },
    DeleteAll,
    DeletePrefix,
}

impl MetadataOperator {
    fn parse(operator: &str, key: &str) -> Result<Self, ConfigError> {
        match operator {
            "set" => Ok(MetadataOperator::Set {
                key: key.to_string(),
            }),
            "delete_all" => Ok(MetadataOperator::DeleteAll),
            "delete_prefix" => Ok(MetadataOperator::DeletePrefix),
            other => Err(ConfigError::UnknownOperator(other.to_string())),
        }
    }

    fn apply(&self, metadata: &mut Metadata, value: &str) {
        match self {
            MetadataOperator::Set { key } => {
                metadata.insert(key.clone(), value.to_string());
            }
            MetadataOperator::DeleteAll => metadata.clear(),
            MetadataOperator::DeletePrefix => metadata.retain(|k, _| !k.starts_with(value)),
        }
    }
}

pub struct MetadataProcessor {
    operator: MetadataOperator,
    value: InterpolatedString,
    parts: Vec<i64>,
    counters: ProcessorCounters,
}

impl MetadataProcessor {
    pub fn new(config: &MetadataConfig, ctx: &BuildContext) -> Result<Self, ConfigError> {
        Ok(Self {
            operator: MetadataOperator::parse(&config.operator, &config.key)?,
            value: InterpolatedString::new(config.value.as_str()),
            parts: config.parts.clone(),
            counters: ProcessorCounters::new(ctx.stats(), "metadata"),
        })
    }

    /// Shorthand for a `set` editor applied to every part.
    pub fn set(key: &str, value: &str, ctx: &BuildContext) -> Self {
        Self {
            operator: MetadataOperator::Set {
                key: key.to_string(),
            },
            value: InterpolatedString::new(value),
            parts: Vec::new(),
            counters: ProcessorCounters::new(ctx.stats(), "metadata"),
        }
    }
}

impl Processor for MetadataProcessor {
    fn process(&self, batch: &Batch) -> ProcessorOutput {
        let started = self.counters.start();

        let value = self.value.resolve(batch);
        let mut output = batch.clone();
        for index in target_indices(&self.parts, batch) {
            if let Some(part) = output.get_mut(index) {
                self.operator.apply(&mut part.metadata, &value);
            }
        }

        self.counters
            .finish(batch, started, ProcessorOutput::single(output))
    }

    fn name(&self) -> &'static str {
        "metadata"
    }
}
