//! Error types for the training pipeline and artifact I/O.
//!
//! Every fallible operation in this crate returns `TrainResult<T>`. The
//! variants map one-to-one onto the failure stages of a training run, so an
//! operator can tell from the error alone which stage aborted.

use std::path::PathBuf;

use thiserror::Error;

/// The unified error type for the trainer.
#[derive(Debug, Error)]
pub enum TrainError {
    /// The record snapshot could not be read or parsed.
    ///
    /// Fatal; nothing is written when the load fails.
    #[error("failed to load drug records from {}: {reason}", path.display())]
    RecordLoad { path: PathBuf, reason: String },

    /// Every record was filtered out during corpus composition.
    ///
    /// Fatal; the run aborts before any artifact is touched.
    #[error("corpus is empty after cleaning: {reason}")]
    EmptyCorpus { reason: String },

    /// An artifact file could not be written.
    ///
    /// Artifacts already written by the same run are left as-is; there is no
    /// transactional multi-file write.
    #[error("failed to write artifact {}: {reason}", path.display())]
    ArtifactWrite { path: PathBuf, reason: String },

    /// An artifact file could not be read back into a model.
    #[error("failed to read artifact {}: {reason}", path.display())]
    ArtifactRead { path: PathBuf, reason: String },
}

/// Convenience alias used throughout the crate.
pub type TrainResult<T> = Result<T, TrainError>;
