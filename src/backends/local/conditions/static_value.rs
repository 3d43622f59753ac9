// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::message::Batch;
use crate::traits::Condition;

/// Condition that always returns the configured value.
pub struct StaticCondition {
    value: bool,
}

impl StaticCondition {
    pub fn new(value: bool) -> Self {
        Self { value }
    }
}

impl Condition for StaticCondition {
    fn check(&self, _batch: &Batch, _index: usize) -> bool {
        self.value
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
