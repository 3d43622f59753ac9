// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::ProcessorCounters;
use crate::backends::local::BuildContext;
use crate::message::Batch;
use crate::traits::{Condition, Processor, ProcessorOutput};
use std::sync::Arc;

/// Keeps only the parts for which a condition holds.
///
/// The condition sees the whole input batch. When no part survives the batch is
/// dropped and the result is an `Ack`.
pub struct FilterPartsProcessor {
    condition: Arc<dyn Condition>,
    counters: ProcessorCounters,
}

impl FilterPartsProcessor {
    pub fn new(condition: Arc<dyn Condition>, ctx: &BuildContext) -> Self {
        Self {
            condition,
            counters: ProcessorCounters::new(ctx.stats(), "filter_parts"),
        }
    }
}

impl Processor for FilterPartsProcessor {
    fn process(&self, batch: &Batch) -> ProcessorOutput {
        let started = self.counters.start();

        let kept: Batch = batch
            .iter()
            .enumerate()
            .filter(|(index, _)| self.condition.check(batch, *index))
            .map(|(_, part)| part.clone())
            .collect();

        let output = if kept.is_empty() {
            ProcessorOutput::ack()
        } else {
            ProcessorOutput::single(kept)
        };
        self.counters.finish(batch, started, output)
    }

    fn name(&self) -> &'static str {
        "filter_parts"
    }
}
