// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod conditions;
pub mod context;
pub mod factory;
pub mod processors;

pub use conditions::*;
pub use context::BuildContext;
pub use factory::{LocalConditionFactory, LocalProcessorFactory};
pub use processors::*;
