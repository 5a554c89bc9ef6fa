//! Read side of the model: artifact loading and nearest-neighbor lookup.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{TrainError, TrainResult};
use crate::vectorizer::artifacts::{ArtifactPaths, ModelMeta};
use crate::vectorizer::vocabulary::Vocabulary;
use crate::vectorizer::weights::DocumentVector;

/// One scored neighbor from a similarity lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub name: String,
    pub score: f64,
}

/// A trained TF-IDF model loaded back from its artifacts.
#[derive(Debug, Clone)]
pub struct TfidfModel {
    vocabulary: Vocabulary,
    vectors: Vec<DocumentVector>,
    meta: ModelMeta,
}

impl TfidfModel {
    /// Load the artifact set written by a training run.
    pub fn load<P: AsRef<Path>>(dir: P) -> TrainResult<Self> {
        let paths = ArtifactPaths::in_dir(dir.as_ref());

        let vocab_bytes = read_file(&paths.vocabulary)?;
        let vocabulary =
            serde_cbor::from_slice(&vocab_bytes).map_err(|e| TrainError::ArtifactRead {
                path: paths.vocabulary.clone(),
                reason: e.to_string(),
            })?;

        let vector_bytes = read_file(&paths.vectors)?;
        let vectors =
            serde_cbor::from_slice(&vector_bytes).map_err(|e| TrainError::ArtifactRead {
                path: paths.vectors.clone(),
                reason: e.to_string(),
            })?;

        let meta_bytes = read_file(&paths.meta)?;
        let meta = serde_json::from_slice(&meta_bytes).map_err(|e| TrainError::ArtifactRead {
            path: paths.meta.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            vocabulary,
            vectors,
            meta,
        })
    }

    pub fn meta(&self) -> &ModelMeta {
        &self.meta
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn vectors(&self) -> &[DocumentVector] {
        &self.vectors
    }

    /// Top-`k` neighbors of the named drug by cosine similarity, best first.
    ///
    /// The name lookup is case-insensitive with surrounding whitespace
    /// ignored, the same key policy the corpus builder deduplicates by.
    /// Returns `None` when the name is not in the model.
    pub fn recommend(&self, name: &str, k: usize) -> Option<Vec<Recommendation>> {
        let key = name.trim().to_lowercase();
        let target = self
            .vectors
            .iter()
            .find(|v| v.name.trim().to_lowercase() == key)?;

        let mut hits: Vec<Recommendation> = self
            .vectors
            .iter()
            .filter(|v| !std::ptr::eq(*v, target))
            .map(|v| Recommendation {
                name: v.name.clone(),
                score: target.dot(v),
            })
            .collect();
        hits.sort_by(|a, b| b.score.total_cmp(&a.score));
        hits.truncate(k);
        Some(hits)
    }
}

fn read_file(path: &Path) -> TrainResult<Vec<u8>> {
    fs::read(path).map_err(|e| TrainError::ArtifactRead {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
