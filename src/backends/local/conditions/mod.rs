// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod logic;
mod metadata;
mod static_value;
mod text;

pub use logic::*;
pub use metadata::*;
pub use static_value::*;
pub use text::*;

use crate::metrics::{Counter, Stats};

/// Counters shared by the conditions that report their outcomes.
#[derive(Debug, Clone)]
pub(crate) struct ConditionCounters {
    count: Counter,
    passed: Counter,
    failed: Counter,
}

impl ConditionCounters {
    pub(crate) fn new(stats: &Stats, name: &str) -> Self {
        Self {
            count: stats.counter(&format!("condition.{}.count", name)),
            passed: stats.counter(&format!("condition.{}.true", name)),
            failed: stats.counter(&format!("condition.{}.false", name)),
        }
    }

    pub(crate) fn record(&self, result: bool) -> bool {
        self.count.incr(1);
        if result {
            self.passed.incr(1);
        } else {
            self.failed.incr(1);
        }
        result
    }
}
