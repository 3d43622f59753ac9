// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::message::Batch;

/// A side-effect-free boolean test over one part in the context of its batch.
///
/// Implementations may read any part of `batch` (for example to test that all
/// parts share a field), but only `index` is the part being classified.
pub trait Condition: Send + Sync {
    fn check(&self, batch: &Batch, index: usize) -> bool;

    fn name(&self) -> &'static str;
}
