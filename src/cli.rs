use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Resolve open-source license metadata for npm packages and generate a license page
#[derive(Parser, Debug)]
#[command(name = "license-page-generator")]
#[command(version)]
#[command(
    about = "Resolve open-source license metadata for npm packages and generate a license page",
    long_about = None
)]
pub struct Args {
    /// Path to a YAML config file (defaults to ./license-page-generator.config.yml if present)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v: info, -vv: debug). RUST_LOG takes precedence
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve licenses for every package in an exported package list
    Resolve(ResolveArgs),
    /// Render a resolution report as a Markdown license page
    Markdown(MarkdownArgs),
}

#[derive(ClapArgs, Debug, Default)]
pub struct ResolveArgs {
    /// Package list CSV (name, version, directory, repository, summary, 3 license columns)
    #[arg(value_name = "INPUT_FILE")]
    pub input: PathBuf,

    /// Report CSV to append outcomes to (default: output.csv)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Text encoding of the package list (default: utf-16)
    #[arg(long, value_name = "LABEL")]
    pub input_encoding: Option<String>,

    /// Do not read or write the HTTP response cache
    #[arg(long)]
    pub no_cache: bool,

    /// Location of the HTTP response cache file
    #[arg(long, value_name = "PATH")]
    pub cache_path: Option<PathBuf>,

    /// Seconds to wait after every registry page lookup (default: 1)
    #[arg(long, value_name = "SECS")]
    pub registry_delay: Option<u64>,

    /// Seconds to wait after the registry blocks a request (default: 60)
    #[arg(long, value_name = "SECS")]
    pub blocked_cooldown: Option<u64>,

    /// Attempts per lookup before giving up (default: 3)
    #[arg(long, value_name = "N")]
    pub max_attempts: Option<u32>,

    /// Skip packages that cannot be resolved instead of aborting the run
    #[arg(long)]
    pub ignore_failures: bool,
}

#[derive(ClapArgs, Debug, Default)]
pub struct MarkdownArgs {
    /// Report CSV produced by `resolve`
    #[arg(value_name = "INPUT_FILE")]
    pub input: PathBuf,

    /// Do not append the attribution line
    #[arg(short = 'a', long)]
    pub no_attribution: bool,

    /// License URL for packages without one; {pkg_name} is replaced with the package name
    #[arg(short = 'u', long, value_name = "TEMPLATE")]
    pub default_license_url: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
