//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the socialseo binary.

mod commands;
mod generate;
mod hunt;
mod report;

pub use commands::{Cli, Commands, GenerateArgs, HuntArgs, OutputFormat, TargetingArgs};
pub use generate::run_generate;
pub use hunt::run_hunt;

use socialseo::{SocialSeoConfig, SocialSeoResult, catalog};
use std::process::ExitCode;

/// Run the parsed command.
pub async fn dispatch(cli: Cli) -> SocialSeoResult<ExitCode> {
    match cli.command {
        Commands::Catalog => {
            println!("{}", catalog());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Generate(args) => {
            let config = SocialSeoConfig::load_with(cli.config.as_deref())?;
            run_generate(args, &config).await
        }
        Commands::Hunt(args) => {
            let config = SocialSeoConfig::load_with(cli.config.as_deref())?;
            run_hunt(args, &config).await
        }
    }
}
