use std::slice;
use std::vec;

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

/// A single raw sentence record produced by a reader.
///
/// The only field is the reconstructed sentence: whitespace-joined tokens,
/// in input order. Records carry no identity beyond their position in the
/// [`DataSet`] that holds them.
#[cfg_attr(feature = "with-serde", derive(Deserialize, Serialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Instance {
    pub raw_sentence: String,
}

impl Instance {
    pub fn new(raw_sentence: impl Into<String>) -> Self {
        Self {
            raw_sentence: raw_sentence.into(),
        }
    }
}

/// Ordered collection of sentence records, handed to downstream dataset
/// consumers once a reader completes.
#[cfg_attr(feature = "with-serde", derive(Deserialize, Serialize))]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DataSet {
    instances: Vec<Instance>,
}

impl DataSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, instance: Instance) {
        self.instances.push(instance);
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Instance> {
        self.instances.get(idx)
    }

    pub fn iter(&self) -> slice::Iter<'_, Instance> {
        self.instances.iter()
    }
}

impl IntoIterator for DataSet {
    type Item = Instance;
    type IntoIter = vec::IntoIter<Instance>;

    fn into_iter(self) -> Self::IntoIter {
        self.instances.into_iter()
    }
}

impl<'a> IntoIterator for &'a DataSet {
    type Item = &'a Instance;
    type IntoIter = slice::Iter<'a, Instance>;

    fn into_iter(self) -> Self::IntoIter {
        self.instances.iter()
    }
}

/// The append contract the readers need from a record container.
///
/// Readers only ever push one reconstructed sentence at a time, so they
/// are generic over this single-method trait instead of a concrete
/// container. [`DataSet`] is the usual implementation; `Vec<String>`
/// works for callers that only want the text.
pub trait SentenceSink {
    fn append_sentence(&mut self, raw_sentence: String);
}

impl SentenceSink for DataSet {
    fn append_sentence(&mut self, raw_sentence: String) {
        self.push(Instance { raw_sentence });
    }
}

impl SentenceSink for Vec<String> {
    fn append_sentence(&mut self, raw_sentence: String) {
        self.push(raw_sentence);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_get() {
        let mut ds = DataSet::new();
        assert!(ds.is_empty());
        ds.push(Instance::new("这是 一个 包 ."));
        ds.push(Instance::new("也 在 團員 之中 ，"));
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.get(0).unwrap().raw_sentence, "这是 一个 包 .");
        assert!(ds.get(2).is_none());
    }

    #[test]
    fn iteration_preserves_order() {
        let mut ds = DataSet::new();
        for s in ["a b", "c d", "e f"].iter() {
            ds.append_sentence(s.to_string());
        }
        let raw: Vec<_> = ds.iter().map(|i| i.raw_sentence.as_str()).collect();
        assert_eq!(raw, vec!["a b", "c d", "e f"]);
        let owned: Vec<_> = ds.into_iter().map(|i| i.raw_sentence).collect();
        assert_eq!(owned, vec!["a b", "c d", "e f"]);
    }

    #[test]
    fn vec_sink() {
        let mut out: Vec<String> = Vec::new();
        out.append_sentence("迈 向".to_string());
        assert_eq!(out, vec!["迈 向"]);
    }
}
