//! Corpus composition: record cleaning and deduplication.

use std::collections::HashSet;

use tracing::debug;

use crate::error::{TrainError, TrainResult};
use crate::record::DrugRecord;

/// One surviving corpus document: the drug's trimmed name and its lowercased
/// profile text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusEntry {
    pub name: String,
    pub text: String,
}

/// Ordered corpus of cleaned documents, built once per training run.
#[derive(Debug, Clone)]
pub struct Corpus {
    entries: Vec<CorpusEntry>,
    dropped_duplicates: usize,
}

impl Corpus {
    /// Build the corpus from a record snapshot.
    ///
    /// Records are kept in input order. A record is skipped when its name is
    /// empty, when its lowercase-trimmed name was already seen (first
    /// occurrence wins), or when its composed text is empty after trimming.
    ///
    /// Fails with [`TrainError::EmptyCorpus`] when no record survives.
    pub fn compose(records: &[DrugRecord]) -> TrainResult<Self> {
        let mut entries = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut dropped_duplicates = 0usize;

        for record in records {
            let name = record.display_name();
            if name.is_empty() {
                continue;
            }
            let key = record.dedup_key();
            if !seen.insert(key) {
                dropped_duplicates += 1;
                debug!(name, "dropping duplicate drug name");
                continue;
            }
            let text = record.profile_text();
            if text.trim().is_empty() {
                continue;
            }
            entries.push(CorpusEntry {
                name: name.to_string(),
                text,
            });
        }

        if entries.is_empty() {
            return Err(TrainError::EmptyCorpus {
                reason: format!(
                    "all {} drug records were empty after cleaning",
                    records.len()
                ),
            });
        }

        Ok(Self {
            entries,
            dropped_duplicates,
        })
    }

    #[inline]
    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    /// Number of documents in the corpus.
    #[inline]
    pub fn doc_num(&self) -> usize {
        self.entries.len()
    }

    /// How many later records were dropped because an earlier record already
    /// claimed the same name key.
    #[inline]
    pub fn dropped_duplicates(&self) -> usize {
        self.dropped_duplicates
    }
}
