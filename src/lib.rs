/// This crate builds TF-IDF model artifacts over a drug catalog and answers
/// nearest-neighbor lookups against them.
pub mod error;
pub mod record;
pub mod similarity;
pub mod store;
pub mod vectorizer;

/// Training pipeline entry point.
/// Takes one snapshot of drug records, composes the corpus, computes the
/// smoothed IDF table and the L2-normalized document vectors, and writes the
/// artifact set. Stateless: each run is a pure function from the snapshot to
/// the artifacts.
pub use vectorizer::{train, TrainReport};

/// A single drug row from the upstream store. All text fields are optional;
/// the profile text is composed from them in a fixed field order.
pub use record::DrugRecord;

/// Record store seam. `JsonSnapshotStore` reads a JSON-array snapshot file;
/// `MemoryStore` feeds records straight from memory.
pub use store::{JsonSnapshotStore, MemoryStore, RecordStore};

/// The corpus vocabulary: term → smoothed IDF weight, in first-appearance
/// order, byte-stable across runs over the same snapshot.
pub use vectorizer::vocabulary::Vocabulary;

/// Sparse, unit-norm TF-IDF vector for one document.
pub use vectorizer::weights::DocumentVector;

/// A trained model loaded back from its artifacts, plus cosine top-k
/// recommendation over it.
pub use similarity::{Recommendation, TfidfModel};

/// Error taxonomy for the pipeline. One variant per failing stage:
/// record load, corpus composition, artifact write, artifact read.
pub use error::{TrainError, TrainResult};
