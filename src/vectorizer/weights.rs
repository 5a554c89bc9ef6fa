//! Per-document TF-IDF weighting and L2 normalization.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::frequency::TermFrequency;
use super::vocabulary::Vocabulary;

/// Sparse, L2-normalized TF-IDF vector for one document, tagged with the
/// drug's name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentVector {
    pub name: String,
    #[serde(with = "indexmap::map::serde_seq")]
    pub weights: IndexMap<String, f64>,
}

impl DocumentVector {
    /// Weigh a tokenized document against the vocabulary.
    ///
    /// Raw weight per term is `(1 + ln(1 + f)) * idf`: sublinear term
    /// frequency scaling times the global IDF weight. Terms absent from the
    /// vocabulary are skipped, not an error (they can only occur when the
    /// vocabulary was built from a different corpus).
    ///
    /// The result is L2-normalized unless no term was recognized, in which
    /// case the vector stays empty.
    pub fn weigh(name: String, freq: &TermFrequency, vocabulary: &Vocabulary) -> Self {
        let mut weights: IndexMap<String, f64> = IndexMap::with_capacity(freq.term_num());
        for (term, count) in freq.iter() {
            let Some(idf) = vocabulary.idf(term) else {
                continue;
            };
            let weight = (1.0 + (1.0 + count as f64).ln()) * idf;
            weights.insert(term.to_string(), weight);
        }

        let norm = weights.values().map(|w| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for weight in weights.values_mut() {
                *weight /= norm;
            }
        }

        Self { name, weights }
    }

    /// Euclidean norm of the vector. 1.0 for any non-empty weighted vector,
    /// 0.0 for an empty one.
    pub fn norm(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum::<f64>().sqrt()
    }

    /// Dot product with another vector.
    ///
    /// Both vectors are unit-length, so this is their cosine similarity.
    pub fn dot(&self, other: &DocumentVector) -> f64 {
        // iterate the smaller side
        let (small, large) = if self.weights.len() <= other.weights.len() {
            (&self.weights, &other.weights)
        } else {
            (&other.weights, &self.weights)
        };
        small
            .iter()
            .filter_map(|(term, w)| large.get(term).map(|v| w * v))
            .sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
