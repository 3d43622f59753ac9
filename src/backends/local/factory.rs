// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use super::conditions::*;
use super::processors::*;
use super::BuildContext;
use crate::config::{ConditionConfig, ProcessorConfig};
use crate::engine::GroupBy;
use crate::errors::ConfigError;
use crate::observability::messages::{processor::ComponentConstructed, StructuredLog};
use crate::traits::{Condition, Processor};

/// Factory for creating local (in-process) processor instances
pub struct LocalProcessorFactory;

impl LocalProcessorFactory {
    /// Create a processor instance from configuration
    ///
    /// The `type` tag of the config determines which processor to create:
    /// - "noop" -> NoopProcessor
    /// - "metadata" -> MetadataProcessor
    /// - "text" -> TextProcessor
    /// - "split" -> SplitProcessor
    /// - "filter_parts" -> FilterPartsProcessor (builds its condition in the same context)
    /// - "group_by" -> GroupBy (nested engine)
    pub fn create_processor(
        config: &ProcessorConfig,
        ctx: &BuildContext,
    ) -> Result<Arc<dyn Processor>, ConfigError> {
        let processor: Arc<dyn Processor> = match config {
            ProcessorConfig::Noop => Arc::new(NoopProcessor::new(ctx)),
            ProcessorConfig::Metadata(cfg) => Arc::new(MetadataProcessor::new(cfg, ctx)?),
            ProcessorConfig::Text(cfg) => Arc::new(TextProcessor::new(cfg, ctx)?),
            ProcessorConfig::Split(cfg) => Arc::new(SplitProcessor::new(cfg, ctx)?),
            ProcessorConfig::FilterParts(cfg) => {
                let condition = LocalConditionFactory::create_condition(&cfg.condition, ctx)?;
                Arc::new(FilterPartsProcessor::new(condition, ctx))
            }
            ProcessorConfig::GroupBy(cfg) => Arc::new(GroupBy::new(cfg, ctx)?),
        };

        ComponentConstructed {
            kind: "processor",
            name: processor.name(),
            namespace: ctx.namespace(),
        }
        .log();

        Ok(processor)
    }

    /// List all available local processor implementations
    pub fn list_available_implementations() -> Vec<&'static str> {
        vec!["noop", "metadata", "text", "split", "filter_parts", "group_by"]
    }
}

/// Factory for creating local condition instances
pub struct LocalConditionFactory;

impl LocalConditionFactory {
    /// Create a condition instance from configuration, recursing into the
    /// children of logical conditions.
    pub fn create_condition(
        config: &ConditionConfig,
        ctx: &BuildContext,
    ) -> Result<Arc<dyn Condition>, ConfigError> {
        let condition: Arc<dyn Condition> = match config {
            ConditionConfig::Static { value } => Arc::new(StaticCondition::new(*value)),
            ConditionConfig::Text(cfg) => Arc::new(TextCondition::new(cfg, ctx)?),
            ConditionConfig::Metadata(cfg) => Arc::new(MetadataCondition::new(cfg, ctx)?),
            ConditionConfig::And { children } => {
                Arc::new(AndCondition::new(Self::create_all(children, ctx)?))
            }
            ConditionConfig::Or { children } => {
                Arc::new(OrCondition::new(Self::create_all(children, ctx)?))
            }
            ConditionConfig::Not { child } => {
                Arc::new(NotCondition::new(Self::create_condition(child, ctx)?))
            }
            ConditionConfig::All { child } => {
                Arc::new(AllCondition::new(Self::create_condition(child, ctx)?))
            }
            ConditionConfig::Any { child } => {
                Arc::new(AnyCondition::new(Self::create_condition(child, ctx)?))
            }
        };

        ComponentConstructed {
            kind: "condition",
            name: condition.name(),
            namespace: ctx.namespace(),
        }
        .log();

        Ok(condition)
    }

    fn create_all(
        configs: &[ConditionConfig],
        ctx: &BuildContext,
    ) -> Result<Vec<Arc<dyn Condition>>, ConfigError> {
        configs
            .iter()
            .map(|c| Self::create_condition(c, ctx))
            .collect()
    }

    /// List all available local condition implementations
    pub fn list_available_implementations() -> Vec<&'static str> {
        vec!["static", "text", "metadata", "and", "or", "not", "all", "any"]
    }
}
