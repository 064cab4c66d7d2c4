//! CLI command definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use socialseo::{Mode, Platform};
use std::path::PathBuf;

/// SocialSEO - content strategies and trend ideas from Gemini
#[derive(Parser, Debug)]
#[command(name = "socialseo")]
#[command(about = "Generate social media strategies and hunt trends with Gemini", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Extra configuration file, layered above the user config files
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a strategy for uploaded content
    Generate(GenerateArgs),

    /// Hunt trending content ideas for a niche
    Hunt(HuntArgs),

    /// List supported platforms and modes
    Catalog,
}

/// Arguments for `socialseo generate`
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Content file to analyze (repeatable)
    #[arg(short, long = "file")]
    pub files: Vec<PathBuf>,

    /// Analysis mode
    #[arg(short, long, default_value = "creator")]
    pub mode: Mode,

    /// Target platform
    #[arg(short, long, default_value = "instagram")]
    pub platform: Platform,

    /// Brand guideline document to check against
    #[arg(long)]
    pub brand_guidelines: Option<PathBuf>,

    #[command(flatten)]
    pub targeting: TargetingArgs,

    /// Ground the strategy in live web search
    #[arg(long)]
    pub live_trends: bool,

    /// Output format
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,

    /// Also write the result as JSON to this path
    #[arg(long, num_args = 0..=1, default_missing_value = socialseo::DEFAULT_EXPORT_FILE)]
    pub export: Option<PathBuf>,

    /// Print the request that would be sent and exit
    #[arg(long)]
    pub dry_run: bool,
}

/// Targeting filters shared by `generate` and `hunt`
#[derive(Args, Debug, Clone, Default)]
pub struct TargetingArgs {
    /// Niche, e.g. "vegan cooking"
    #[arg(long)]
    pub niche: Option<String>,

    /// Geography, e.g. "Brazil"
    #[arg(long)]
    pub geo: Option<String>,

    /// Target audience
    #[arg(long)]
    pub audience: Option<String>,

    /// Target language
    #[arg(long)]
    pub language: Option<String>,

    /// Target demographics
    #[arg(long)]
    pub demographics: Option<String>,
}

/// Arguments for `socialseo hunt`
#[derive(Args, Debug, Clone)]
pub struct HuntArgs {
    /// Niche to hunt trends for
    #[arg(long)]
    pub niche: String,

    /// Output format
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,

    /// Generate a creator-mode strategy from the n-th idea (1-based).
    /// With JSON output, ideas and strategy are printed as one object.
    #[arg(long = "use", value_name = "N")]
    pub use_idea: Option<usize>,

    /// Target platform for the follow-up strategy
    #[arg(short, long, default_value = "instagram")]
    pub platform: Platform,
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable cards
    Human,
    /// Pretty-printed JSON
    Json,
}
