// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Namespaced counter registry.
//!
//! Counters are append-only and use atomic increments so they can be bumped from
//! concurrent invocations without locking. The registry lock is only taken when a
//! counter is first registered (at construction time) or when taking a snapshot.

use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// A monotonically increasing counter handle.
#[derive(Debug, Clone, Default)]
pub struct Counter(Arc<AtomicU64>);

impl Counter {
    pub fn incr(&self, n: u64) {
        self.0.fetch_add(n, Ordering::Relaxed);
    }

    pub fn value(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

/// Cloneable handle onto a shared counter registry, scoped by a dotted prefix.
#[derive(Debug, Clone, Default)]
pub struct Stats {
    prefix: String,
    registry: Arc<RwLock<HashMap<String, Counter>>>,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle onto the same registry whose counter names are prefixed by `prefix`.
    pub fn namespaced(&self, prefix: &str) -> Self {
        Self {
            prefix: self.qualify(prefix),
            registry: Arc::clone(&self.registry),
        }
    }

    /// The full prefix applied to counters registered through this handle.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Get or register the counter `name` under this handle's prefix.
    pub fn counter(&self, name: &str) -> Counter {
        let full_name = self.qualify(name);

        if let Some(counter) = self.registry.read().get(&full_name) {
            return counter.clone();
        }

        self.registry
            .write()
            .entry(full_name)
            .or_default()
            .clone()
    }

    /// Current value of a counter by its fully qualified name.
    pub fn get(&self, full_name: &str) -> Option<u64> {
        self.registry.read().get(full_name).map(Counter::value)
    }

    /// Sorted copy of every registered counter and its value.
    pub fn snapshot(&self) -> BTreeMap<String, u64> {
        self.registry
            .read()
            .iter()
            .map(|(name, counter)| (name.clone(), counter.value()))
            .collect()
    }

    fn qualify(&self, name: &str) -> String {
        if self.prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", self.prefix, name)
        }
    }
}
