// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the group_by partition engine.
//!
//! This module contains message types for logging events related to:
//! * Engine construction
//! * Per-invocation partitioning and drops
//! * Non-fatal processor errors inside a group chain

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Engine built from configuration.
///
/// # Log Level
/// `debug!` - Construction detail
pub struct GroupByConstructed<'a> {
    pub namespace: &'a str,
    pub group_count: usize,
    pub processor_count: usize,
}

impl Display for GroupByConstructed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "group_by constructed: {} groups, {} group processors",
            self.group_count, self.processor_count
        )
    }
}

impl StructuredLog for GroupByConstructed<'_> {
    fn log(&self) {
        tracing::debug!(
            namespace = self.namespace,
            group_count = self.group_count,
            processor_count = self.processor_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "group_by",
            span_name = name,
            namespace = self.namespace,
            group_count = self.group_count,
        )
    }
}

/// A batch was partitioned across groups.
///
/// # Log Level
/// `trace!` - Per-invocation detail
pub struct BatchPartitioned<'a> {
    pub namespace: &'a str,
    pub input_parts: usize,
    pub grouped_parts: usize,
    pub residual_parts: usize,
}

impl Display for BatchPartitioned<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Partitioned {} parts: {} grouped, {} residual",
            self.input_parts, self.grouped_parts, self.residual_parts
        )
    }
}

impl StructuredLog for BatchPartitioned<'_> {
    fn log(&self) {
        tracing::trace!(
            namespace = self.namespace,
            input_parts = self.input_parts,
            grouped_parts = self.grouped_parts,
            residual_parts = self.residual_parts,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "partition",
            span_name = name,
            namespace = self.namespace,
            input_parts = self.input_parts,
        )
    }
}

/// Why an invocation produced nothing to forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    EmptyInput,
    NoOutput,
}

impl Display for DropReason {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            DropReason::EmptyInput => write!(f, "input batch is empty"),
            DropReason::NoOutput => write!(f, "no group produced output"),
        }
    }
}

/// An invocation ended with nothing to forward.
///
/// # Log Level
/// `debug!` - Expected, accepted no-op
pub struct BatchDropped<'a> {
    pub namespace: &'a str,
    pub reason: DropReason,
}

impl Display for BatchDropped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Nothing to forward: {}", self.reason)
    }
}

impl StructuredLog for BatchDropped<'_> {
    fn log(&self) {
        tracing::debug!(
            namespace = self.namespace,
            reason = %self.reason,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "batch_dropped",
            span_name = name,
            namespace = self.namespace,
            reason = %self.reason,
        )
    }
}

/// A processor inside a group chain reported an error.
///
/// The chain keeps running; this is purely a log side channel.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct GroupProcessorFailed<'a> {
    pub group: usize,
    pub processor: usize,
    pub processor_name: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for GroupProcessorFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor error in group '{}' (processor '{}', {}): {}",
            self.group, self.processor, self.processor_name, self.error
        )
    }
}

impl StructuredLog for GroupProcessorFailed<'_> {
    fn log(&self) {
        tracing::error!(
            group = self.group,
            processor = self.processor,
            processor_name = self.processor_name,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "group_processor_failed",
            span_name = name,
            group = self.group,
            processor = self.processor,
            processor_name = self.processor_name,
        )
    }
}

/// A batch was forwarded from the engine.
///
/// # Log Level
/// `trace!` - Per-invocation detail
pub struct BatchesSent<'a> {
    pub namespace: &'a str,
    pub batch_count: usize,
    pub part_count: usize,
}

impl Display for BatchesSent<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Forwarding {} batches ({} parts)",
            self.batch_count, self.part_count
        )
    }
}

impl StructuredLog for BatchesSent<'_> {
    fn log(&self) {
        tracing::trace!(
            namespace = self.namespace,
            batch_count = self.batch_count,
            part_count = self.part_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "batches_sent",
            span_name = name,
            namespace = self.namespace,
            batch_count = self.batch_count,
        )
    }
}
