// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! * `group_by` - partition engine lifecycle and per-invocation events
//! * `processor` - processor and condition construction and execution events

use tracing::Span;

pub mod group_by;
pub mod processor;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog {
    /// Emit the message at its documented level with structured fields.
    fn log(&self);

    /// A span carrying the same fields, for scoping nested events.
    fn span(&self, name: &str) -> Span;
}
