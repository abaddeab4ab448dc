use anyhow::Result;
use caserun::Runner;
use clap::Parser;
use tracing::debug;

fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    debug!(
        "os: {}, arch: {}, pid: {}",
        std::env::consts::OS,
        std::env::consts::ARCH,
        std::process::id()
    );

    Runner::parse().execute()
}
