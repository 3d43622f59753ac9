// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::ProcessorCounters;
use crate::backends::local::BuildContext;
use crate::config::SplitConfig;
use crate::errors::ConfigError;
use crate::message::Batch;
use crate::traits::{Processor, ProcessorOutput};

/// Breaks a batch into consecutive batches of at most `size` parts.
///
/// An empty input produces nothing to forward.
pub struct SplitProcessor {
    size: usize,
    counters: ProcessorCounters,
}

impl SplitProcessor {
    pub fn new(config: &SplitConfig, ctx: &BuildContext) -> Result<Self, ConfigError> {
        if config.size == 0 {
            return Err(ConfigError::InvalidField {
                field: "size",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(Self {
            size: config.size,
            counters: ProcessorCounters::new(ctx.stats(), "split"),
        })
    }
}

impl Processor for SplitProcessor {
    fn process(&self, batch: &Batch) -> ProcessorOutput {
        let started = self.counters.start();

        if batch.is_empty() {
            return self.counters.finish(batch, started, ProcessorOutput::ack());
        }

        let batches = batch
            .parts()
            .chunks(self.size)
            .map(|chunk| Batch::from_parts(chunk.to_vec()))
            .collect();

        self.counters
            .finish(batch, started, ProcessorOutput::forward(batches))
    }

    fn name(&self) -> &'static str {
        "split"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(size: usize) -> SplitProcessor {
        SplitProcessor::new(&SplitConfig { size }, &BuildContext::default()).unwrap()
    }

    #[test]
    fn test_split_sizes() {
        let input = Batch::from_payloads(["a", "b", "c", "d", "e"]);

        let output = split(1).process(&input);
        assert_eq!(output.batches.len(), 5);

        let output = split(2).process(&input);
        let lens: Vec<_> = output.batches.iter().map(Batch::len).collect();
        assert_eq!(lens, vec![2, 2, 1]);
        assert_eq!(output.batches[2].get(0).unwrap().payload, b"e".to_vec());

        let output = split(10).process(&input);
        assert_eq!(output.batches, vec![input.clone()]);
    }

    #[test]
    fn test_empty_input_is_acked() {
        let output = split(1).process(&Batch::new());
        assert!(output.is_ack());
        assert!(output.batches.is_empty());
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let err = SplitProcessor::new(&SplitConfig { size: 0 }, &BuildContext::default())
            .err()
            .unwrap();
        assert!(matches!(err, ConfigError::InvalidField { field: "size", .. }));
    }
}
