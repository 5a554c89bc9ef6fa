//! Per-document term counts.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Raw term counts for a single document.
///
/// Terms are kept in first-appearance order so every derived structure (and
/// therefore every serialized artifact) is deterministic for a fixed input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TermFrequency {
    #[serde(with = "indexmap::map::serde_seq")]
    counts: IndexMap<String, u32>,
    total: u64,
}

impl TermFrequency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a whole token sequence.
    pub fn from_tokens<T>(tokens: &[T]) -> Self
    where
        T: AsRef<str>,
    {
        let mut freq = Self::new();
        freq.add_terms(tokens);
        freq
    }

    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        *self.counts.entry(term.to_string()).or_insert(0) += 1;
        self.total += 1;
        self
    }

    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }

    /// Occurrences of `term` in this document.
    #[inline]
    pub fn count(&self, term: &str) -> u32 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Distinct terms, in first-appearance order.
    #[inline]
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(|t| t.as_str())
    }

    /// (term, count) pairs, in first-appearance order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(t, &c)| (t.as_str(), c))
    }

    /// Number of distinct terms.
    #[inline]
    pub fn term_num(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts.
    #[inline]
    pub fn total_count(&self) -> u64 {
        self.total
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
