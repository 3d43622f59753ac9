// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::metrics::Stats;

/// Context handed to factories while building conditions and processors.
///
/// Carries the counter registry scoped to the component's position, so nested
/// components (for example the processors of group 2) register counters under
/// `processor.group_by.groups.2.*`.
#[derive(Debug, Clone, Default)]
pub struct BuildContext {
    stats: Stats,
}

impl BuildContext {
    pub fn new(stats: Stats) -> Self {
        Self { stats }
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Dotted namespace of this context, empty at the root.
    pub fn namespace(&self) -> &str {
        self.stats.prefix()
    }

    /// A child context whose counters live under `prefix`.
    pub fn namespaced(&self, prefix: &str) -> Self {
        Self {
            stats: self.stats.namespaced(prefix),
        }
    }
}
