use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use rx_vectorizer::{train, JsonSnapshotStore};

/// Build TF-IDF recommender artifacts from a drug record snapshot.
#[derive(Debug, Parser)]
#[command(name = "rx-vectorizer", version, about)]
struct Cli {
    /// Path to the drug record snapshot (JSON array)
    #[arg(long, value_name = "FILE")]
    records: PathBuf,

    /// Directory the artifacts are written into
    #[arg(long, value_name = "DIR", default_value = "artifacts")]
    artifacts: PathBuf,

    /// Provenance note recorded in the metadata artifact
    #[arg(long, default_value = "drug record snapshot")]
    source: String,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let store = JsonSnapshotStore::new(&cli.records);

    match train(&store, &cli.artifacts, &cli.source) {
        Ok(report) => {
            info!(
                docs = report.num_docs,
                terms = report.num_terms,
                dropped_duplicates = report.dropped_duplicates,
                dir = %cli.artifacts.display(),
                "built TF-IDF artifacts"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "training run failed");
            ExitCode::FAILURE
        }
    }
}
