// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod processing;

pub use config::ConfigError;
pub use processing::ProcessingError;
