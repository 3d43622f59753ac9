// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::ProcessingError;
use crate::message::Batch;
use crate::traits::{Condition, Processor, ProcessorOutput};
use std::sync::atomic::{AtomicUsize, Ordering};

/// A condition backed by a closure
pub struct FnCondition<F> {
    check: F,
}

impl<F> FnCondition<F>
where
    F: Fn(&Batch, usize) -> bool + Send + Sync,
{
    pub fn new(check: F) -> Self {
        Self { check }
    }
}

impl<F> Condition for FnCondition<F>
where
    F: Fn(&Batch, usize) -> bool + Send + Sync,
{
    fn check(&self, batch: &Batch, index: usize) -> bool {
        (self.check)(batch, index)
    }

    fn name(&self) -> &'static str {
        "fn"
    }
}

/// A processor that forwards its input but always reports an error
pub struct FailingProcessor;

impl Processor for FailingProcessor {
    fn process(&self, batch: &Batch) -> ProcessorOutput {
        ProcessorOutput::with_error(
            vec![batch.clone()],
            ProcessingError::failed("failing", "Simulated processor failure"),
        )
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

/// A processor that drops every batch it receives
pub struct DropProcessor;

impl Processor for DropProcessor {
    fn process(&self, _batch: &Batch) -> ProcessorOutput {
        ProcessorOutput::ack()
    }

    fn name(&self) -> &'static str {
        "drop"
    }
}

/// A processor that forwards a single empty batch instead of an ack
pub struct EmptyBatchProcessor;

impl Processor for EmptyBatchProcessor {
    fn process(&self, _batch: &Batch) -> ProcessorOutput {
        ProcessorOutput::single(Batch::new())
    }

    fn name(&self) -> &'static str {
        "empty_batch"
    }
}

/// A processor that turns one batch into two copies of it
pub struct DuplicateProcessor;

impl Processor for DuplicateProcessor {
    fn process(&self, batch: &Batch) -> ProcessorOutput {
        ProcessorOutput::forward(vec![batch.clone(), batch.clone()])
    }

    fn name(&self) -> &'static str {
        "duplicate"
    }
}

/// A processor that counts its invocations and forwards its input
#[derive(Default)]
pub struct CountingProcessor {
    calls: AtomicUsize,
}

impl CountingProcessor {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Processor for CountingProcessor {
    fn process(&self, batch: &Batch) -> ProcessorOutput {
        self.calls.fetch_add(1, Ordering::SeqCst);
        ProcessorOutput::single(batch.clone())
    }

    fn name(&self) -> &'static str {
        "counting"
    }
}
