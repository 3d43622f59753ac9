// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod condition;
pub mod processor;

pub use condition::Condition;
pub use processor::{Processor, ProcessorOutput, Response};
