//! Authentication bootstrap
//!
//! Logs in once as the default user and persists the resulting session
//! artifact, so suite configuration can schedule this binary before any
//! test that opts into a pre-authenticated session. A failed login aborts
//! with a non-zero exit code; dependent tests must never start against an
//! unauthenticated artifact.
//!
//! Run with: cargo run --bin bootstrap

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use swaglabs_e2e::fixtures::{self, bootstrap_auth};
use swaglabs_e2e::{Config, SuiteError, SuiteResult};

#[derive(Parser, Debug)]
#[command(name = "bootstrap")]
#[command(about = "Log in as the default user and persist the session artifact")]
struct Args {
    /// Output path for the session artifact
    #[arg(short, long, default_value = fixtures::DEFAULT_ARTIFACT_PATH)]
    output: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    match rt.block_on(run(args)) {
        Ok(()) => std::process::exit(0),
        Err(e @ SuiteError::Config(_)) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

async fn run(args: Args) -> SuiteResult<()> {
    let config = Config::from_env()?;
    bootstrap_auth(config, &args.output).await
}
