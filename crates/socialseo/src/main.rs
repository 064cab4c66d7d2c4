//! SocialSEO CLI binary.
//!
//! This binary provides command-line access to SocialSEO:
//! - Generate a strategy for content files
//! - Hunt trend ideas for a niche and turn one into a strategy
//! - List supported platforms and modes

use clap::Parser;
use socialseo::observability::{ObservabilityConfig, init_observability_with_config};
use std::process::ExitCode;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    // Credentials may live in .env
    dotenvy::dotenv().ok();

    let mut observability =
        ObservabilityConfig::new(env!("CARGO_PKG_NAME")).with_json_logs(cli.json_logs);
    if cli.verbose {
        observability = observability.with_log_level("debug");
    }
    if let Err(e) = init_observability_with_config(observability) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match cli::dispatch(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
