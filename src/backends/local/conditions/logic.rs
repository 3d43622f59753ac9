// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Conditions composed from other conditions.
//!
//! `All` and `Any` ignore the classified index and test every part of the batch,
//! so a group can select parts according to their siblings.

use crate::message::Batch;
use crate::traits::Condition;
use std::sync::Arc;

/// Passes when every child passes. An empty list passes.
pub struct AndCondition {
    children: Vec<Arc<dyn Condition>>,
}

impl AndCondition {
    pub fn new(children: Vec<Arc<dyn Condition>>) -> Self {
        Self { children }
    }
}

impl Condition for AndCondition {
    fn check(&self, batch: &Batch, index: usize) -> bool {
        self.children.iter().all(|c| c.check(batch, index))
    }

    fn name(&self) -> &'static str {
        "and"
    }
}

/// Passes when any child passes. An empty list fails.
pub struct OrCondition {
    children: Vec<Arc<dyn Condition>>,
}

impl OrCondition {
    pub fn new(children: Vec<Arc<dyn Condition>>) -> Self {
        Self { children }
    }
}

impl Condition for OrCondition {
    fn check(&self, batch: &Batch, index: usize) -> bool {
        self.children.iter().any(|c| c.check(batch, index))
    }

    fn name(&self) -> &'static str {
        "or"
    }
}

pub struct NotCondition {
    child: Arc<dyn Condition>,
}

impl NotCondition {
    pub fn new(child: Arc<dyn Condition>) -> Self {
        Self { child }
    }
}

impl Condition for NotCondition {
    fn check(&self, batch: &Batch, index: usize) -> bool {
        !self.child.check(batch, index)
    }

    fn name(&self) -> &'static str {
        "not"
    }
}

/// Passes when the child passes for every part of the batch.
pub struct AllCondition {
    child: Arc<dyn Condition>,
}

impl AllCondition {
    pub fn new(child: Arc<dyn Condition>) -> Self {
        Self { child }
    }
}

impl Condition for AllCondition {
    fn check(&self, batch: &Batch, _index: usize) -> bool {
        !batch.is_empty() && (0..batch.len()).all(|i| self.child.check(batch, i))
    }

    fn name(&self) -> &'static str {
        "all"
    }
}

/// Passes when the child passes for at least one part of the batch.
pub struct AnyCondition {
    child: Arc<dyn Condition>,
}

impl AnyCondition {
    pub fn new(child: Arc<dyn Condition>) -> Self {
        Self { child }
    }
}

impl Condition for AnyCondition {
    fn check(&self, batch: &Batch, _index: usize) -> bool {
        (0..batch.len()).any(|i| self.child.check(batch, i))
    }

    fn name(&self) -> &'static str {
        "any"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::local::StaticCondition;
    use crate::backends::stub::FnCondition;

    fn yes() -> Arc<dyn Condition> {
        Arc::new(StaticCondition::new(true))
    }

    fn no() -> Arc<dyn Condition> {
        Arc::new(StaticCondition::new(false))
    }

    fn payload_is(expected: &'static str) -> Arc<dyn Condition> {
        Arc::new(FnCondition::new(move |batch: &Batch, i| {
            batch.get(i).map(|p| p.payload == expected.as_bytes()).unwrap_or(false)
        }))
    }

    #[test]
    fn test_and_or_not() {
        let batch = Batch::from_payloads(["x"]);

        assert!(AndCondition::new(vec![yes(), yes()]).check(&batch, 0));
        assert!(!AndCondition::new(vec![yes(), no()]).check(&batch, 0));
        assert!(AndCondition::new(vec![]).check(&batch, 0));

        assert!(OrCondition::new(vec![no(), yes()]).check(&batch, 0));
        assert!(!OrCondition::new(vec![no(), no()]).check(&batch, 0));
        assert!(!OrCondition::new(vec![]).check(&batch, 0));

        assert!(NotCondition::new(no()).check(&batch, 0));
        assert!(!NotCondition::new(yes()).check(&batch, 0));
    }

    #[test]
    fn test_all_and_any_inspect_siblings() {
        let mixed = Batch::from_payloads(["a", "b", "a"]);
        let uniform = Batch::from_payloads(["a", "a"]);

        let all_a = AllCondition::new(payload_is("a"));
        let any_b = AnyCondition::new(payload_is("b"));

        assert!(!all_a.check(&mixed, 0));
        assert!(all_a.check(&uniform, 1));
        assert!(any_b.check(&mixed, 0));
        assert!(!any_b.check(&uniform, 0));
    }
}
