mod cli;
mod config;

use cli::{Args, Command};
use config::{MarkdownSettings, ResolveSettings};
use license_page_generator::adapters::outbound::console::StderrProgressReporter;
use license_page_generator::adapters::outbound::filesystem::{
    CsvOutcomeStore, CsvPackageListReader, FileSystemWriter, StdoutPresenter,
};
use license_page_generator::adapters::outbound::formatters::MarkdownFormatter;
use license_page_generator::adapters::outbound::network::{
    GitHubCredentials, GitHubLicenseClient, HttpFetcher, NpmRepoFinder, ResponseCache,
};
use license_page_generator::adapters::outbound::system::SystemClock;
use license_page_generator::application::dto::ResolveRequest;
use license_page_generator::application::use_cases::{
    GenerateLicensePageUseCase, ResolveLicensesUseCase,
};
use license_page_generator::ports::outbound::OutputPresenter;
use license_page_generator::shared::error::{ExitCode, ResolveError};
use license_page_generator::shared::security::validate_regular_file;
use license_page_generator::shared::Result;
use owo_colors::OwoColorize;
use std::process;
use std::sync::Arc;
use tracing_subscriber::prelude::*;

fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "license_page_generator=warn",
        1 => "license_page_generator=info",
        _ => "license_page_generator=debug",
    };
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
    );

    // stdout carries the license page
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    init_tracing(args.verbose);

    let exit_code = match run(args).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\n{} {}", "Caused by:".yellow(), cause);
            }

            eprintln!();
            exit_code_for(&e)
        }
    };

    process::exit(exit_code.as_i32());
}

/// Resolution failures get their own exit code so CI can tell them apart from I/O errors
fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    if error.downcast_ref::<ResolveError>().is_some() {
        ExitCode::ResolutionFailed
    } else {
        ExitCode::ApplicationError
    }
}

async fn run(args: Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref())?;

    match args.command {
        Command::Resolve(resolve_args) => {
            run_resolve(ResolveSettings::merge(resolve_args, &config)?).await
        }
        Command::Markdown(markdown_args) => {
            run_markdown(MarkdownSettings::merge(markdown_args, &config))
        }
    }
}

async fn run_resolve(settings: ResolveSettings) -> Result<()> {
    let cache = settings
        .cache_path
        .clone()
        .map(|path| Arc::new(ResponseCache::open(path)));

    // Create adapters (Dependency Injection)
    let fetcher = || -> Result<HttpFetcher> {
        let fetcher = HttpFetcher::new()?;
        Ok(match &cache {
            Some(cache) => fetcher.with_cache(Arc::clone(cache)),
            None => fetcher,
        })
    };
    let license_resolver = GitHubLicenseClient::new(fetcher()?, GitHubCredentials::from_env());
    let repo_finder = NpmRepoFinder::new(fetcher()?);
    let outcome_store = CsvOutcomeStore::new(settings.output.clone());

    let mut use_case = ResolveLicensesUseCase::new(
        CsvPackageListReader::new(),
        license_resolver,
        repo_finder,
        outcome_store,
        SystemClock::new(),
        StderrProgressReporter::new(),
    );

    let request = ResolveRequest::new(settings.input, settings.input_encoding, settings.options);
    let result = use_case.execute(request).await;

    // Keep what was fetched even when the run failed part-way
    if let Some(cache) = &cache {
        if let Err(e) = cache.persist() {
            tracing::warn!(error = %e, "failed to persist response cache");
        }
    }

    let response = result?;
    tracing::info!(
        total = response.total,
        recorded = response.recorded(),
        failed = response.failed,
        output = %settings.output.display(),
        "resolution finished"
    );
    Ok(())
}

fn run_markdown(settings: MarkdownSettings) -> Result<()> {
    // A missing report would otherwise render as an empty page
    validate_regular_file(&settings.input)?;

    let formatter = MarkdownFormatter::new()
        .with_default_license_url(settings.default_license_url)
        .with_attribution(settings.attribution);

    // Present output
    let presenter: Box<dyn OutputPresenter> = match settings.output {
        Some(output_path) => Box::new(FileSystemWriter::new(output_path)),
        None => Box::new(StdoutPresenter::new()),
    };

    let use_case = GenerateLicensePageUseCase::new(
        CsvOutcomeStore::new(settings.input),
        formatter,
        presenter,
    );
    let count = use_case.execute()?;
    tracing::info!(packages = count, "license page generated");
    Ok(())
}
