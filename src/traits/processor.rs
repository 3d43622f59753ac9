// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::ProcessingError;
use crate::message::Batch;

/// Outcome attached to a processor result besides its batches.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// Nothing to forward; the input is acknowledged as a successful no-op.
    Ack,
    /// A recoverable failure reported alongside whatever batches were produced.
    Error(ProcessingError),
}

/// Result of applying a processor to one batch.
///
/// A processor may return any number of batches, including none. `response` is
/// `None` when the batches are simply to be forwarded.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessorOutput {
    pub batches: Vec<Batch>,
    pub response: Option<Response>,
}

impl ProcessorOutput {
    pub fn forward(batches: Vec<Batch>) -> Self {
        Self {
            batches,
            response: None,
        }
    }

    pub fn single(batch: Batch) -> Self {
        Self::forward(vec![batch])
    }

    pub fn ack() -> Self {
        Self {
            batches: Vec::new(),
            response: Some(Response::Ack),
        }
    }

    pub fn with_error(batches: Vec<Batch>, error: ProcessingError) -> Self {
        Self {
            batches,
            response: Some(Response::Error(error)),
        }
    }

    pub fn is_ack(&self) -> bool {
        matches!(self.response, Some(Response::Ack))
    }

    pub fn error(&self) -> Option<&ProcessingError> {
        match &self.response {
            Some(Response::Error(err)) => Some(err),
            _ => None,
        }
    }

    /// Total number of parts across all returned batches.
    pub fn part_count(&self) -> usize {
        self.batches.iter().map(Batch::len).sum()
    }
}

/// A transform stage: maps one batch to zero or more batches.
///
/// Processors never mutate their input; they return freshly owned batches.
/// They must be safe to invoke concurrently from several threads.
pub trait Processor: Send + Sync {
    fn process(&self, batch: &Batch) -> ProcessorOutput;

    fn name(&self) -> &'static str;
}
