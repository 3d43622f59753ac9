// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod condition;
mod loader;
mod processor;
mod runtime;

pub use condition::{ConditionConfig, MetadataConditionConfig, TextConditionConfig};
pub use loader::{load_config, parse_config, Config, ConfigFormat, LoggingConfig};
pub use processor::{
    FilterPartsConfig, GroupByConfig, GroupByElement, MetadataConfig, ProcessorConfig,
    SplitConfig, TextConfig,
};
pub use runtime::RuntimeBuilder;
