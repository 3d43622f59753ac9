// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::backends::local::BuildContext;
use crate::config::Config;
use crate::engine::GroupBy;
use crate::errors::ConfigError;
use crate::metrics::Stats;

/// Runtime builder - turns a loaded [`Config`] into a ready-to-use engine.
///
/// All conditions and processors are resolved here, once. Any failure aborts the
/// whole build; there is no partially constructed engine.
///
/// # Examples
///
/// ```
/// use batch_groupby::config::{parse_config, ConfigFormat, RuntimeBuilder};
/// use batch_groupby::message::Batch;
/// use batch_groupby::metrics::Stats;
///
/// let config = parse_config(
///     r#"
/// group_by:
///   groups:
///     - condition: { type: text, operator: prefix, arg: "a" }
/// "#,
///     ConfigFormat::Yaml,
/// )
/// .unwrap();
///
/// let stats = Stats::new();
/// let engine = RuntimeBuilder::from_config(&config, &stats).unwrap();
///
/// let output = engine.partition(&Batch::from_payloads(["apple", "pear", "avocado"]));
/// assert_eq!(output.batches.len(), 2);
/// assert_eq!(output.batches[0].len(), 2);
/// assert_eq!(stats.get("processor.group_by.count"), Some(1));
/// ```
pub struct RuntimeBuilder;

impl RuntimeBuilder {
    /// Build the group_by engine described by `cfg`, registering counters in `stats`.
    pub fn from_config(cfg: &Config, stats: &Stats) -> Result<GroupBy, ConfigError> {
        let ctx = BuildContext::new(stats.clone());
        GroupBy::new(&cfg.group_by, &ctx)
    }
}
