// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging.
//!
//! This module provides centralized message types for diagnostic and operational
//! logging. Message types follow a struct-based pattern with a `Display`
//! implementation so log text lives in one place instead of being scattered
//! through the engine and processors as format strings.
//!
//! # Usage
//!
//! ```rust
//! use batch_groupby::errors::ProcessingError;
//! use batch_groupby::observability::messages::{group_by::GroupProcessorFailed, StructuredLog};
//!
//! let error = ProcessingError::InvalidUtf8 { index: 0 };
//! GroupProcessorFailed {
//!     group: 0,
//!     processor: 1,
//!     processor_name: "text",
//!     error: &error,
//! }
//! .log();
//! ```

pub mod messages;
