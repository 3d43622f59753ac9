// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;      // conditions, processors and their factories
pub mod config;        // config model, loader, runtime builder
pub mod engine;        // group_by partition engine
pub mod errors;        // error handling
pub mod interpolation; // ${!function} values
pub mod message;       // parts and batches
pub mod metrics;
pub mod observability;
pub mod traits;        // processor and condition abstractions
