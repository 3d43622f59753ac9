// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Condition and processor implementations.
//!
//! # Available Backends
//!
//! ## Local Backend
//! In-process conditions and processors resolved from configuration:
//! - **Conditions**: `static`, `text`, `metadata`, `and`, `or`, `not`, `all`, `any`
//! - **Processors**: `noop`, `metadata`, `text`, `split`, `filter_parts`, `group_by`
//!
//! ## Stub Backend (Test-Only)
//! Testing utilities for engine development (only available in test builds):
//! - **FnCondition**: closure-backed condition
//! - **FailingProcessor**: forwards its input while reporting an error
//! - **DropProcessor**: consumes every batch
//! - **DuplicateProcessor**: turns one batch into two
//! - **EmptyBatchProcessor**: forwards an empty batch
//!
//! # Architecture
//!
//! ```text
//! Configuration → Factory → Arc<dyn Condition> / Arc<dyn Processor> → GroupBy
//! ```
//!
//! Variants are resolved once at construction. Anything implementing the
//! `Condition` or `Processor` traits can be plugged into a `GroupSpec` directly.
//!
//! # Examples
//!
//! ```rust
//! use batch_groupby::backends::local::{BuildContext, LocalProcessorFactory};
//! use batch_groupby::config::{MetadataConfig, ProcessorConfig};
//! use batch_groupby::message::Batch;
//!
//! let config = ProcessorConfig::Metadata(MetadataConfig {
//!     key: "grouping".to_string(),
//!     value: "foo".to_string(),
//!     ..MetadataConfig::default()
//! });
//!
//! let processor = LocalProcessorFactory::create_processor(&config, &BuildContext::default())?;
//! let output = processor.process(&Batch::from_payloads(["foo1"]));
//! assert_eq!(output.batches[0].get(0).unwrap().get_metadata("grouping"), Some("foo"));
//! # Ok::<(), batch_groupby::errors::ConfigError>(())
//! ```

pub mod local;
#[cfg(test)]
pub mod stub;
