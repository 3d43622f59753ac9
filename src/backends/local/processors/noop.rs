// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::ProcessorCounters;
use crate::backends::local::BuildContext;
use crate::message::Batch;
use crate::traits::{Processor, ProcessorOutput};

/// Forwards a copy of the batch unchanged.
pub struct NoopProcessor {
    counters: ProcessorCounters,
}

impl NoopProcessor {
    pub fn new(ctx: &BuildContext) -> Self {
        Self {
            counters: ProcessorCounters::new(ctx.stats(), "noop"),
        }
    }
}

impl Processor for NoopProcessor {
    fn process(&self, batch: &Batch) -> ProcessorOutput {
        let started = self.counters.start();
        self.counters
            .finish(batch, started, ProcessorOutput::single(batch.clone()))
    }

    fn name(&self) -> &'static str {
        "noop"
    }
}
