// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::{target_indices, ProcessorCounters};
use crate::backends::local::BuildContext;
use crate::config::TextConfig;
use crate::errors::{ConfigError, ProcessingError};
use crate::interpolation::InterpolatedString;
use crate::message::Batch;
use crate::observability::messages::{processor::ProcessorPartFailed, StructuredLog};
use crate::traits::{Processor, ProcessorOutput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextOperator {
    ToUpper,
    ToLower,
    Trim,
    Prepend,
    Append,
}

/// Text processor - edits the payload of selected parts as UTF-8 text.
///
/// Parts whose payload is not valid UTF-8 are forwarded unchanged and the first
/// such failure is reported alongside the output batch.
pub struct TextProcessor {
    operator: TextOperator,
    value: InterpolatedString,
    parts: Vec<i64>,
    counters: ProcessorCounters,
}

impl TextProcessor {
    pub fn new(config: &TextConfig, ctx: &BuildContext) -> Result<Self, ConfigError> {
        let operator = match config.operator.as_str() {
            "to_upper" => TextOperator::ToUpper,
            "to_lower" => TextOperator::ToLower,
            "trim" => TextOperator::Trim,
            "prepend" => TextOperator::Prepend,
            "append" => TextOperator::Append,
            other => return Err(ConfigError::UnknownOperator(other.to_string())),
        };

        Ok(Self {
            operator,
            value: InterpolatedString::new(config.value.as_str()),
            parts: config.parts.clone(),
            counters: ProcessorCounters::new(ctx.stats(), "text"),
        })
    }

    fn apply(&self, input: &str, value: &str) -> String {
        match self.operator {
            TextOperator::ToUpper => input.to_uppercase(),
            TextOperator::ToLower => input.to_lowercase(),
            TextOperator::Trim => input.trim().to_string(),
            TextOperator::Prepend => format!("{}{}", value, input),
            TextOperator::Append => format!("{}{}", input, value),
        }
    }
}

impl Processor for TextProcessor {
    fn process(&self, batch: &Batch) -> ProcessorOutput {
        let started = self.counters.start();

        let value = self.value.resolve(batch);
        let mut output = batch.clone();
        let mut first_error = None;

        for index in target_indices(&self.parts, batch) {
            let Some(part) = output.get_mut(index) else {
                continue;
            };
            match std::str::from_utf8(&part.payload) {
                Ok(text) => part.payload = self.apply(text, &value).into_bytes(),
                Err(_) => {
                    let error = ProcessingError::InvalidUtf8 { index };
                    ProcessorPartFailed {
                        processor_id: self.name(),
                        index,
                        error: &error,
                    }
                    .log();
                    self.counters.error();
                    first_error.get_or_insert(error);
                }
            }
        }

        let result = match first_error {
            Some(error) => ProcessorOutput::with_error(vec![output], error),
            None => ProcessorOutput::single(output),
        };
        self.counters.finish(batch, started, result)
    }

    fn name(&self) -> &'static str {
        "text"
    }
}
