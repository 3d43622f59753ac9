// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for processor and condition events.
//!
//! This module contains message types for logging events related to:
//! * Processor and condition construction
//! * Processor execution (completion, per-part failures)

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A processor or condition was built from configuration.
///
/// # Log Level
/// `debug!` - Construction detail
///
/// # Example
/// ```
/// use batch_groupby::observability::messages::processor::ComponentConstructed;
///
/// let msg = ComponentConstructed {
///     kind: "processor",
///     name: "metadata",
///     namespace: "processor.group_by.groups.0",
/// };
///
/// assert_eq!(msg.to_string(), "Constructed processor 'metadata' in 'processor.group_by.groups.0'");
/// ```
pub struct ComponentConstructed<'a> {
    pub kind: &'a str,
    pub name: &'a str,
    pub namespace: &'a str,
}

impl Display for ComponentConstructed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Constructed {} '{}' in '{}'",
            self.kind, self.name, self.namespace
        )
    }
}

impl StructuredLog for ComponentConstructed<'_> {
    fn log(&self) {
        tracing::debug!(
            kind = self.kind,
            name = self.name,
            namespace = self.namespace,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "component",
            span_name = name,
            kind = self.kind,
            name = self.name,
        )
    }
}

/// Processor finished a batch.
///
/// # Log Level
/// `trace!` - Per-batch detail
pub struct ProcessorExecutionCompleted<'a> {
    pub processor_id: &'a str,
    pub input_parts: usize,
    pub output_batches: usize,
    pub duration: std::time::Duration,
}

impl Display for ProcessorExecutionCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' completed: input={} parts, output={} batches, duration={:?}",
            self.processor_id, self.input_parts, self.output_batches, self.duration
        )
    }
}

impl StructuredLog for ProcessorExecutionCompleted<'_> {
    fn log(&self) {
        tracing::trace!(
            processor_id = self.processor_id,
            input_parts = self.input_parts,
            output_batches = self.output_batches,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "processor_execution",
            span_name = name,
            processor_id = self.processor_id,
            input_parts = self.input_parts,
        )
    }
}

/// Processor could not apply its operation to one part.
///
/// # Log Level
/// `debug!` - The part is forwarded unchanged and the error reported upstream
pub struct ProcessorPartFailed<'a> {
    pub processor_id: &'a str,
    pub index: usize,
    pub error: &'a dyn std::error::Error,
}

impl Display for ProcessorPartFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' failed on part {}: {}",
            self.processor_id, self.index, self.error
        )
    }
}

impl StructuredLog for ProcessorPartFailed<'_> {
    fn log(&self) {
        tracing::debug!(
            processor_id = self.processor_id,
            index = self.index,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "processor_part_failed",
            span_name = name,
            processor_id = self.processor_id,
            index = self.index,
        )
    }
}
