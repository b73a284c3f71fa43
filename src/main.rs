use anyhow::Context;
use cve_ranker::DatasetProcessor;
use cve_ranker::constants::DATASET_FILENAME;
use std::io;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics go to stderr so stdout stays machine-readable CSV.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(error) = run() {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let dataset = DatasetProcessor::new(DATASET_FILENAME)
        .process()
        .with_context(|| format!("Failed to rank dataset '{}'", DATASET_FILENAME))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    dataset
        .write_to(&mut out)
        .context("Failed to write ranked dataset to stdout")?;

    Ok(())
}
