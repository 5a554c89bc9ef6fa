//! Artifact persistence.
//!
//! A training run produces three files in the artifact directory:
//! the vocabulary/IDF table and the document vectors as CBOR, and a small
//! JSON metadata record. A re-run fully overwrites all three; there is no
//! versioning or rollback. If concurrent runs ever share a directory, the
//! last writer wins — an accepted operational caveat, not a guarded
//! invariant.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::vocabulary::Vocabulary;
use super::weights::DocumentVector;
use crate::error::{TrainError, TrainResult};

pub const VOCAB_FILE: &str = "vocab_idf.cbor";
pub const VECTORS_FILE: &str = "drug_vectors.cbor";
pub const META_FILE: &str = "model_meta.json";

/// Build provenance written next to the model artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMeta {
    /// UTC build timestamp, RFC 3339 with a `Z` suffix.
    pub built_at: String,
    pub num_docs: usize,
    pub num_terms: usize,
    pub notes: String,
    /// Free-form description of the record snapshot the model was built from.
    pub source: String,
    /// The trainer that produced the artifacts.
    pub trainer: String,
}

impl ModelMeta {
    pub fn new(num_docs: usize, num_terms: usize, source: &str) -> Self {
        Self {
            built_at: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            num_docs,
            num_terms,
            notes: "Lightweight TF-IDF recommender artifacts".to_string(),
            source: source.to_string(),
            trainer: format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Locations of the three artifact files of one run.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub vocabulary: PathBuf,
    pub vectors: PathBuf,
    pub meta: PathBuf,
}

impl ArtifactPaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            vocabulary: dir.join(VOCAB_FILE),
            vectors: dir.join(VECTORS_FILE),
            meta: dir.join(META_FILE),
        }
    }
}

/// Writes a complete artifact set into one directory.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    dir: PathBuf,
}

impl ArtifactWriter {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Persist vocabulary, document vectors and metadata.
    ///
    /// Creates the artifact directory if absent. On failure the files already
    /// written by this call are left behind; the whole run is simply repeated
    /// on the next invocation.
    pub fn write(
        &self,
        vocabulary: &Vocabulary,
        vectors: &[DocumentVector],
        meta: &ModelMeta,
    ) -> TrainResult<ArtifactPaths> {
        fs::create_dir_all(&self.dir).map_err(|e| TrainError::ArtifactWrite {
            path: self.dir.clone(),
            reason: e.to_string(),
        })?;

        let paths = ArtifactPaths::in_dir(&self.dir);

        let vocab_bytes =
            serde_cbor::to_vec(vocabulary).map_err(|e| TrainError::ArtifactWrite {
                path: paths.vocabulary.clone(),
                reason: e.to_string(),
            })?;
        write_file(&paths.vocabulary, &vocab_bytes)?;

        let vector_bytes = serde_cbor::to_vec(&vectors).map_err(|e| TrainError::ArtifactWrite {
            path: paths.vectors.clone(),
            reason: e.to_string(),
        })?;
        write_file(&paths.vectors, &vector_bytes)?;

        let meta_bytes =
            serde_json::to_vec_pretty(meta).map_err(|e| TrainError::ArtifactWrite {
                path: paths.meta.clone(),
                reason: e.to_string(),
            })?;
        write_file(&paths.meta, &meta_bytes)?;

        info!(dir = %self.dir.display(), "artifacts written");
        Ok(paths)
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> TrainResult<()> {
    fs::write(path, bytes).map_err(|e| TrainError::ArtifactWrite {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
