// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod group_by;
#[cfg(test)]
mod property_tests;

pub use group_by::{GroupBy, GroupSpec};
