// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Recoverable errors reported by a processor alongside its output.
///
/// These never abort an invocation; callers log them and keep whatever
/// batches the processor produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessingError {
    #[error("part {index} has a payload that is not valid UTF-8")]
    InvalidUtf8 { index: usize },

    #[error("processor '{processor}' failed: {message}")]
    Failed { processor: String, message: String },
}

impl ProcessingError {
    pub fn failed(processor: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failed {
            processor: processor.into(),
            message: message.into(),
        }
    }
}
