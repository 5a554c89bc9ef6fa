//! Document frequencies and the smoothed IDF table.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::frequency::TermFrequency;

/// IDF weight for a term with document frequency `doc_freq` out of `doc_num`
/// documents.
///
/// Add-one smoothed, with a `+1` offset so the weight stays strictly positive
/// even for a term present in every document (where it bottoms out at 1.0).
#[inline]
pub fn idf_calc(doc_num: usize, doc_freq: u64) -> f64 {
    1.0 + ((doc_num as f64 + 1.0) / (doc_freq as f64 + 1.0)).ln()
}

/// The corpus vocabulary: every term that appeared in at least one document,
/// mapped to its IDF weight.
///
/// Terms are kept in corpus first-appearance order, which makes the
/// serialized table byte-stable across runs over the same snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vocabulary {
    #[serde(with = "indexmap::map::serde_seq")]
    idf: IndexMap<String, f64>,
    doc_num: usize,
}

impl Vocabulary {
    /// Build the vocabulary from the tokenized corpus.
    ///
    /// Document frequency counts each document once per term, regardless of
    /// in-document repetition.
    pub fn from_documents(documents: &[TermFrequency]) -> Self {
        let mut doc_freq: IndexMap<String, u64> = IndexMap::new();
        for doc in documents {
            for term in doc.terms() {
                *doc_freq.entry(term.to_string()).or_insert(0) += 1;
            }
        }

        let doc_num = documents.len();
        let idf = doc_freq
            .into_iter()
            .map(|(term, freq)| {
                let weight = idf_calc(doc_num, freq);
                (term, weight)
            })
            .collect();

        Self { idf, doc_num }
    }

    /// IDF weight for `term`, or `None` if the term never appeared in the
    /// corpus this table was built from.
    #[inline]
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.idf.get(term).copied()
    }

    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.idf.contains_key(term)
    }

    /// (term, idf) pairs in first-appearance order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.idf.iter().map(|(t, &w)| (t.as_str(), w))
    }

    /// Number of distinct terms.
    #[inline]
    pub fn term_num(&self) -> usize {
        self.idf.len()
    }

    /// Number of documents the table was computed from.
    #[inline]
    pub fn doc_num(&self) -> usize {
        self.doc_num
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.idf.is_empty()
    }
}
