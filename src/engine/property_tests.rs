// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use proptest::prelude::*;

use crate::backends::local::{BuildContext, MetadataProcessor, TextCondition};
use crate::config::TextConditionConfig;
use crate::engine::{GroupBy, GroupSpec};
use crate::message::{Batch, Part};

/// One group per needle, each tagging its parts with `group=<index>`.
fn engine_for(needles: &[String]) -> GroupBy {
    let ctx = BuildContext::default();
    let specs = needles
        .iter()
        .enumerate()
        .map(|(i, needle)| {
            let condition = TextCondition::new(
                &TextConditionConfig {
                    operator: "contains_cs".to_string(),
                    arg: needle.clone(),
                },
                &ctx,
            )
            .unwrap();
            GroupSpec {
                condition: Arc::new(condition),
                processors: vec![Arc::new(MetadataProcessor::set(
                    "group",
                    &i.to_string(),
                    &ctx,
                ))],
            }
        })
        .collect();
    GroupBy::from_specs(specs, &ctx)
}

/// Parts carry their input position in `idx` metadata.
fn batch_strategy() -> impl Strategy<Value = Batch> {
    prop::collection::vec("[abcd]{0,5}", 0..12).prop_map(|payloads| {
        payloads
            .into_iter()
            .enumerate()
            .map(|(i, p)| Part::new(p).with_metadata("idx", i.to_string()))
            .collect::<Batch>()
    })
}

fn needles_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[abc]", 0..4)
}

fn idx(part: &Part) -> usize {
    part.get_metadata("idx").unwrap().parse().unwrap()
}

proptest! {
    /// Every input part appears exactly once across the output batches.
    #[test]
    fn parts_are_conserved(batch in batch_strategy(), needles in needles_strategy()) {
        let output = engine_for(&needles).partition(&batch);

        let mut seen: Vec<usize> = output.batches.iter().flat_map(|b| b.iter().map(idx)).collect();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..batch.len()).collect::<Vec<_>>());
    }

    /// A part lands in the first group whose needle it contains, else in the residual batch.
    #[test]
    fn first_matching_group_wins(batch in batch_strategy(), needles in needles_strategy()) {
        let output = engine_for(&needles).partition(&batch);

        for part in output.batches.iter().flat_map(|b| b.iter()) {
            let payload = part.payload_lossy();
            let expected = needles.iter().position(|n| payload.contains(n.as_str()));
            let actual = part.get_metadata("group").map(|g| g.parse::<usize>().unwrap());
            prop_assert_eq!(actual, expected);
        }
    }

    /// Group batches come in group order, the residual batch last, and parts keep
    /// their relative input order within each batch.
    #[test]
    fn order_is_preserved(batch in batch_strategy(), needles in needles_strategy()) {
        let output = engine_for(&needles).partition(&batch);

        let groups: Vec<Option<usize>> = output
            .batches
            .iter()
            .map(|b| b.get(0).and_then(|p| p.get_metadata("group")).map(|g| g.parse().unwrap()))
            .collect();
        let mut ordered = groups.clone();
        // Residual last
        ordered.sort_by_key(|g| g.map_or(usize::MAX, |i| i));
        prop_assert_eq!(&groups, &ordered);
        prop_assert!(groups.iter().filter(|g| g.is_none()).count() <= 1);

        for b in &output.batches {
            let positions: Vec<usize> = b.iter().map(idx).collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    /// Partitioning never changes the caller's batch.
    #[test]
    fn input_is_never_mutated(batch in batch_strategy(), needles in needles_strategy()) {
        let snapshot = batch.clone();
        let _ = engine_for(&needles).partition(&batch);
        prop_assert_eq!(batch, snapshot);
    }

    /// No batch in the output is empty, and an empty output is an ack.
    #[test]
    fn output_batches_are_non_empty(batch in batch_strategy(), needles in needles_strategy()) {
        let output = engine_for(&needles).partition(&batch);

        prop_assert!(output.batches.iter().all(|b| !b.is_empty()));
        prop_assert_eq!(output.batches.is_empty(), output.is_ack());
        prop_assert_eq!(batch.is_empty(), output.is_ack());
    }
}
