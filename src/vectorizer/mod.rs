//! The training pipeline.
//!
//! A run is a single-threaded, single pass over one snapshot of drug
//! records: load, compose the corpus, tokenize, compute IDF, weigh each
//! document, write artifacts. Every stage error is fatal for the run; the
//! next invocation starts over from scratch. No state survives between runs.

pub mod artifacts;
pub mod corpus;
pub mod frequency;
pub mod tokenizer;
pub mod vocabulary;
pub mod weights;

use std::path::Path;

use tracing::{info, warn};

use crate::error::TrainResult;
use crate::store::RecordStore;

use artifacts::{ArtifactPaths, ArtifactWriter, ModelMeta};
use corpus::Corpus;
use frequency::TermFrequency;
use tokenizer::tokenize;
use vocabulary::Vocabulary;
use weights::DocumentVector;

/// Summary of a successful training run.
#[derive(Debug, Clone)]
pub struct TrainReport {
    pub num_docs: usize,
    pub num_terms: usize,
    pub dropped_duplicates: usize,
    pub artifacts: ArtifactPaths,
}

/// Run the full pipeline: snapshot → corpus → vocabulary → vectors →
/// artifacts.
///
/// `source` is a free-form provenance note recorded in the metadata artifact.
pub fn train(
    store: &dyn RecordStore,
    artifact_dir: &Path,
    source: &str,
) -> TrainResult<TrainReport> {
    let records = store.load()?;
    info!(records = records.len(), "loaded drug records");

    let corpus = Corpus::compose(&records)?;
    if corpus.dropped_duplicates() > 0 {
        warn!(
            dropped = corpus.dropped_duplicates(),
            "duplicate drug names dropped, first occurrence kept"
        );
    }
    info!(docs = corpus.doc_num(), "corpus composed");

    let documents: Vec<TermFrequency> = corpus
        .entries()
        .iter()
        .map(|entry| TermFrequency::from_tokens(&tokenize(&entry.text)))
        .collect();

    let vocabulary = Vocabulary::from_documents(&documents);
    info!(terms = vocabulary.term_num(), "vocabulary built");

    let vectors: Vec<DocumentVector> = corpus
        .entries()
        .iter()
        .zip(&documents)
        .map(|(entry, freq)| DocumentVector::weigh(entry.name.clone(), freq, &vocabulary))
        .collect();

    let meta = ModelMeta::new(corpus.doc_num(), vocabulary.term_num(), source);
    let artifacts = ArtifactWriter::new(artifact_dir).write(&vocabulary, &vectors, &meta)?;

    Ok(TrainReport {
        num_docs: corpus.doc_num(),
        num_terms: vocabulary.term_num(),
        dropped_duplicates: corpus.dropped_duplicates(),
        artifacts,
    })
}
