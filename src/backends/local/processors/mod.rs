// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod filter_parts;
mod metadata;
mod noop;
mod split;
mod text;

pub use filter_parts::*;
pub use metadata::*;
pub use noop::*;
pub use split::*;
pub use text::*;

use crate::message::Batch;
use crate::metrics::{Counter, Stats};
use crate::observability::messages::{processor::ProcessorExecutionCompleted, StructuredLog};
use crate::traits::ProcessorOutput;
use std::time::Instant;

/// Counters every local processor registers under `processor.<name>.*`.
#[derive(Debug, Clone)]
pub(crate) struct ProcessorCounters {
    name: &'static str,
    count: Counter,
    error: Counter,
    sent: Counter,
    sent_parts: Counter,
}

impl ProcessorCounters {
    pub(crate) fn new(stats: &Stats, name: &'static str) -> Self {
        Self {
            name,
            count: stats.counter(&format!("processor.{}.count", name)),
            error: stats.counter(&format!("processor.{}.error", name)),
            sent: stats.counter(&format!("processor.{}.sent", name)),
            sent_parts: stats.counter(&format!("processor.{}.parts.sent", name)),
        }
    }

    /// Mark the start of one invocation.
    pub(crate) fn start(&self) -> Instant {
        self.count.incr(1);
        Instant::now()
    }

    pub(crate) fn error(&self) {
        self.error.incr(1);
    }

    /// Record what an invocation produced and log its completion.
    pub(crate) fn finish(&self, input: &Batch, started: Instant, output: ProcessorOutput) -> ProcessorOutput {
        self.sent.incr(output.batches.len() as u64);
        self.sent_parts.incr(output.part_count() as u64);

        ProcessorExecutionCompleted {
            processor_id: self.name,
            input_parts: input.len(),
            output_batches: output.batches.len(),
            duration: started.elapsed(),
        }
        .log();

        output
    }
}

/// Resolve configured part indices against `batch`, or every index when empty.
///
/// Out of range indices are skipped.
pub(crate) fn target_indices(parts: &[i64], batch: &Batch) -> Vec<usize> {
    if parts.is_empty() {
        (0..batch.len()).collect()
    } else {
        parts.iter().filter_map(|&i| batch.resolve_index(i)).collect()
    }
}
