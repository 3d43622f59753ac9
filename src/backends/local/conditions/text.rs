// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::ConditionCounters;
use crate::backends::local::BuildContext;
use crate::config::TextConditionConfig;
use crate::errors::ConfigError;
use crate::message::Batch;
use crate::traits::Condition;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextMatch {
    Equals,
    Contains,
    Prefix,
    Suffix,
}

/// Tests the payload of the classified part against a string argument.
pub struct TextCondition {
    matcher: TextMatch,
    case_sensitive: bool,
    arg: Vec<u8>,
    counters: ConditionCounters,
}

impl TextCondition {
    pub fn new(config: &TextConditionConfig, ctx: &BuildContext) -> Result<Self, ConfigError> {
        let (matcher, case_sensitive) = match config.operator.as_str() {
            "equals_cs" => (TextMatch::Equals, true),
            "equals" => (TextMatch::Equals, false),
            "contains_cs" => (TextMatch::Contains, true),
            "contains" => (TextMatch::Contains, false),
            "prefix_cs" => (TextMatch::Prefix, true),
            "prefix" => (TextMatch::Prefix, false),
            "suffix_cs" => (TextMatch::Suffix, true),
            "suffix" => (TextMatch::Suffix, false),
            other => return Err(ConfigError::UnknownOperator(other.to_string())),
        };

        let arg = if case_sensitive {
            config.arg.as_bytes().to_vec()
        } else {
            config.arg.to_lowercase().into_bytes()
        };

        Ok(Self {
            matcher,
            case_sensitive,
            arg,
            counters: ConditionCounters::new(ctx.stats(), "text"),
        })
    }

    fn matches(&self, payload: &[u8]) -> bool {
        let lowered;
        let payload = if self.case_sensitive {
            payload
        } else {
            lowered = String::from_utf8_lossy(payload).to_lowercase();
            lowered.as_bytes()
        };

        let arg = self.arg.as_slice();
        match self.matcher {
            TextMatch::Equals => payload == arg,
            TextMatch::Contains => arg.is_empty() || payload.windows(arg.len()).any(|w| w == arg),
            TextMatch::Prefix => payload.starts_with(arg),
            TextMatch::Suffix => payload.ends_with(arg),
        }
    }
}

impl Condition for TextCondition {
    fn check(&self, batch: &Batch, index: usize) -> bool {
        let result = batch
            .get(index)
            .map(|part| self.matches(&part.payload))
            .unwrap_or(false);
        self.counters.record(result)
    }

    fn name(&self) -> &'static str {
        "text"
    }
}
