// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The group_by partition engine.
//!
//! Splits a batch into N batches according to per-part conditions, runs each
//! group's own processor chain over its batch, then forwards every resulting
//! batch followed by a final batch of the parts that matched no group.
//!
//! A part joins the first group whose condition passes and belongs to exactly
//! one destination. Conditions are always evaluated against the original input
//! batch; each group receives copies of its parts, so nothing a chain does can
//! leak into the input or into another group.
//!
//! # Example
//!
//! ```rust
//! use batch_groupby::backends::local::{BuildContext, MetadataProcessor, TextCondition};
//! use batch_groupby::config::TextConditionConfig;
//! use batch_groupby::engine::{GroupBy, GroupSpec};
//! use batch_groupby::message::Batch;
//! use std::sync::Arc;
//!
//! let ctx = BuildContext::default();
//! let condition = TextCondition::new(
//!     &TextConditionConfig { operator: "contains".into(), arg: "foo".into() },
//!     &ctx,
//! )?;
//! let engine = GroupBy::from_specs(
//!     vec![GroupSpec {
//!         condition: Arc::new(condition),
//!         processors: vec![Arc::new(MetadataProcessor::set("grouping", "foo", &ctx))],
//!     }],
//!     &ctx,
//! );
//!
//! let output = engine.partition(&Batch::from_payloads(["foo1", "bar1", "foo2"]));
//! assert_eq!(output.batches.len(), 2);
//! assert_eq!(output.batches[0].len(), 2);
//! assert_eq!(output.batches[1].len(), 1);
//! # Ok::<(), batch_groupby::errors::ConfigError>(())
//! ```

use std::sync::Arc;

use crate::backends::local::{BuildContext, LocalConditionFactory, LocalProcessorFactory};
use crate::config::GroupByConfig;
use crate::errors::ConfigError;
use crate::message::Batch;
use crate::metrics::Counter;
use crate::observability::messages::group_by::*;
use crate::observability::messages::StructuredLog;
use crate::traits::{Condition, Processor, ProcessorOutput};

const GROUPS_PREFIX: &str = "processor.group_by.groups";

/// A group: the condition deciding membership and the chain run over its batch.
///
/// Position in the engine's list is the group's priority and identity.
#[derive(Clone)]
pub struct GroupSpec {
    pub condition: Arc<dyn Condition>,
    pub processors: Vec<Arc<dyn Processor>>,
}

struct Group {
    spec: GroupSpec,
    m_passed: Counter,
}

/// Partitions batches into condition-defined groups.
///
/// Immutable after construction and safe to share across threads; the only
/// state touched per invocation is atomic counters.
pub struct GroupBy {
    namespace: String,
    groups: Vec<Group>,

    m_group_default: Counter,
    m_count: Counter,
    m_dropped: Counter,
    m_sent: Counter,
    m_sent_parts: Counter,
}

impl GroupBy {
    /// Build the engine from configuration.
    ///
    /// Each group's condition and processors are built in a context namespaced
    /// by `processor.group_by.groups.<i>`. The first failure aborts the build and
    /// is reported with the group (and processor) index.
    pub fn new(config: &GroupByConfig, ctx: &BuildContext) -> Result<Self, ConfigError> {
        let specs = config
            .groups
            .iter()
            .enumerate()
            .map(|(i, element)| {
                let group_ctx = ctx.namespaced(&format!("{}.{}", GROUPS_PREFIX, i));

                let condition =
                    LocalConditionFactory::create_condition(&element.condition, &group_ctx)
                        .map_err(|e| ConfigError::group_condition(i, e))?;

                let processors = element
                    .processors
                    .iter()
                    .enumerate()
                    .map(|(j, p)| {
                        LocalProcessorFactory::create_processor(p, &group_ctx)
                            .map_err(|e| ConfigError::group_processor(i, j, e))
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                Ok(GroupSpec {
                    condition,
                    processors,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(Self::from_specs(specs, ctx))
    }

    /// Build the engine from already constructed conditions and processors.
    pub fn from_specs(specs: Vec<GroupSpec>, ctx: &BuildContext) -> Self {
        let stats = ctx.stats();
        let groups: Vec<Group> = specs
            .into_iter()
            .enumerate()
            .map(|(i, spec)| Group {
                spec,
                m_passed: stats.counter(&format!("{}.{}.passed", GROUPS_PREFIX, i)),
            })
            .collect();

        let engine = Self {
            namespace: ctx.namespace().to_string(),
            groups,

            m_group_default: stats.counter(&format!("{}.default.passed", GROUPS_PREFIX)),
            m_count: stats.counter("processor.group_by.count"),
            m_dropped: stats.counter("processor.group_by.dropped"),
            m_sent: stats.counter("processor.group_by.sent"),
            m_sent_parts: stats.counter("processor.group_by.parts.sent"),
        };

        GroupByConstructed {
            namespace: &engine.namespace,
            group_count: engine.groups.len(),
            processor_count: engine.groups.iter().map(|g| g.spec.processors.len()).sum(),
        }
        .log();

        engine
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Partition `batch`, run every non-empty group through its chain and collect
    /// the results.
    ///
    /// Returns the surviving group batches in group order followed by the
    /// residual batch, or an `Ack` when there is nothing to forward. Processor
    /// errors are logged and never fail the invocation.
    pub fn partition(&self, batch: &Batch) -> ProcessorOutput {
        self.m_count.incr(1);

        if batch.is_empty() {
            return self.drop_batch(DropReason::EmptyInput);
        }

        let (grouped, residual) = self.assign(batch);

        let partitioned = BatchPartitioned {
            namespace: &self.namespace,
            input_parts: batch.len(),
            grouped_parts: batch.len() - residual.len(),
            residual_parts: residual.len(),
        };
        partitioned.log();

        let mut outputs = Vec::new();
        {
            let _span = partitioned.span("group_chains").entered();
            for (index, (group, group_batch)) in self.groups.iter().zip(grouped).enumerate() {
                if group_batch.is_empty() {
                    continue;
                }
                outputs.extend(run_chain(index, &group.spec.processors, group_batch));
            }
        }

        if !residual.is_empty() {
            outputs.push(residual);
        }

        if outputs.is_empty() {
            return self.drop_batch(DropReason::NoOutput);
        }

        let part_count: usize = outputs.iter().map(Batch::len).sum();
        self.m_sent.incr(outputs.len() as u64);
        self.m_sent_parts.incr(part_count as u64);

        BatchesSent {
            namespace: &self.namespace,
            batch_count: outputs.len(),
            part_count,
        }
        .log();

        ProcessorOutput::forward(outputs)
    }

    /// Route a copy of every part to the first group whose condition passes, or
    /// to the residual batch. Conditions always see the untouched input.
    fn assign(&self, batch: &Batch) -> (Vec<Batch>, Batch) {
        let mut grouped = vec![Batch::new(); self.groups.len()];
        let mut residual = Batch::new();

        for (index, part) in batch.iter().enumerate() {
            let target = self
                .groups
                .iter()
                .position(|g| g.spec.condition.check(batch, index));

            match target {
                Some(g) => {
                    grouped[g].push(part.clone());
                    self.groups[g].m_passed.incr(1);
                }
                None => {
                    residual.push(part.clone());
                    self.m_group_default.incr(1);
                }
            }
        }

        (grouped, residual)
    }

    fn drop_batch(&self, reason: DropReason) -> ProcessorOutput {
        self.m_dropped.incr(1);
        BatchDropped {
            namespace: &self.namespace,
            reason,
        }
        .log();
        ProcessorOutput::ack()
    }
}

/// Fold a group batch through its processors.
///
/// Each processor is applied to every batch of the current working set and the
/// outputs are concatenated in order. An empty working set ends the chain early.
/// Errors are logged; the batches produced alongside them are kept.
fn run_chain(group: usize, processors: &[Arc<dyn Processor>], batch: Batch) -> Vec<Batch> {
    let mut batches = vec![batch];

    for (position, processor) in processors.iter().enumerate() {
        if batches.is_empty() {
            break;
        }

        batches = batches
            .iter()
            .flat_map(|b| {
                let output = processor.process(b);
                if let Some(error) = output.error() {
                    GroupProcessorFailed {
                        group,
                        processor: position,
                        processor_name: processor.name(),
                        error,
                    }
                    .log();
                }
                output.batches
            })
            .collect();
    }

    batches.retain(|b| !b.is_empty());
    batches
}

impl Processor for GroupBy {
    fn process(&self, batch: &Batch) -> ProcessorOutput {
        self.partition(batch)
    }

    fn name(&self) -> &'static str {
        "group_by"
    }
}
