// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message data model: parts and the ordered batches that carry them.
//!
//! A [`Part`] is an opaque payload paired with string metadata. A [`Batch`] is an
//! ordered sequence of parts processed as one unit. Cloning a part is a deep copy,
//! which is what gives routed parts exclusive ownership of their metadata.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metadata attached to a single part.
pub type Metadata = HashMap<String, String>;

/// A single message unit: payload bytes plus key/value metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub payload: Vec<u8>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl Part {
    pub fn new(payload: impl Into<Vec<u8>>) -> Self {
        Self {
            payload: payload.into(),
            metadata: Metadata::new(),
        }
    }

    /// Builder-style helper for attaching a metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn get_metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    /// Payload as text, replacing invalid UTF-8 sequences.
    pub fn payload_lossy(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.payload)
    }
}

/// An ordered sequence of parts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Batch {
    parts: Vec<Part>,
}

impl Batch {
    pub fn new() -> Self {
        Self { parts: Vec::new() }
    }

    pub fn from_parts(parts: Vec<Part>) -> Self {
        Self { parts }
    }

    /// Convenience constructor for a batch of metadata-free parts.
    pub fn from_payloads<I, P>(payloads: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Vec<u8>>,
    {
        payloads.into_iter().map(Part::new).collect()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn push(&mut self, part: Part) {
        self.parts.push(part);
    }

    pub fn get(&self, index: usize) -> Option<&Part> {
        self.parts.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Part> {
        self.parts.get_mut(index)
    }

    /// Resolve a signed index against this batch.
    ///
    /// Negative indices count back from the end, so `-1` is the last part.
    /// Returns `None` when the index falls outside the batch.
    pub fn resolve_index(&self, index: i64) -> Option<usize> {
        let len = self.parts.len() as i64;
        let resolved = if index < 0 { len + index } else { index };
        (0..len).contains(&resolved).then_some(resolved as usize)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Part> {
        self.parts.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Part> {
        self.parts.iter_mut()
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<Part> {
        self.parts
    }
}

impl FromIterator<Part> for Batch {
    fn from_iter<T: IntoIterator<Item = Part>>(iter: T) -> Self {
        Self {
            parts: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Batch {
    type Item = Part;
    type IntoIter = std::vec::IntoIter<Part>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.into_iter()
    }
}

impl<'a> IntoIterator for &'a Batch {
    type Item = &'a Part;
    type IntoIter = std::slice::Iter<'a, Part>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.iter()
    }
}

impl From<Vec<Part>> for Batch {
    fn from(parts: Vec<Part>) -> Self {
        Self::from_parts(parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_index_positive_and_negative() {
        let batch = Batch::from_payloads(["a", "b", "c"]);

        assert_eq!(batch.resolve_index(0), Some(0));
        assert_eq!(batch.resolve_index(2), Some(2));
        assert_eq!(batch.resolve_index(-1), Some(2));
        assert_eq!(batch.resolve_index(-3), Some(0));
        assert_eq!(batch.resolve_index(3), None);
        assert_eq!(batch.resolve_index(-4), None);
    }

    #[test]
    fn test_resolve_index_on_empty_batch() {
        let batch = Batch::new();
        assert_eq!(batch.resolve_index(0), None);
        assert_eq!(batch.resolve_index(-1), None);
    }

    #[test]
    fn test_part_clone_is_independent() {
        let original = Part::new("payload").with_metadata("key", "value");
        let mut copy = original.clone();
        copy.metadata.insert("key".to_string(), "changed".to_string());
        copy.payload.push(b'!');

        assert_eq!(original.get_metadata("key"), Some("value"));
        assert_eq!(original.payload, b"payload".to_vec());
    }

    #[test]
    fn test_batch_serializes_as_part_list() {
        let batch = Batch::from_parts(vec![Part::new("x").with_metadata("k", "v")]);
        let json = serde_json::to_value(&batch).unwrap();

        assert!(json.is_array());
        assert_eq!(json[0]["metadata"]["k"], "v");
    }
}
