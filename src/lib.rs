//! license-page-generator - License page generation for npm dependencies
//!
//! This library resolves the license of every package in an exported npm
//! package list by locating its GitHub repository and querying the GitHub
//! license API, then renders the results as a Markdown license page.
//! It follows hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`resolution`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Errors, retry utility and security checks
//!
//! # Example
//!
//! ```no_run
//! use license_page_generator::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<()> {
//! // Create adapters
//! let fetcher = || HttpFetcher::new();
//! let mut use_case = ResolveLicensesUseCase::new(
//!     CsvPackageListReader::new(),
//!     GitHubLicenseClient::new(fetcher()?, GitHubCredentials::from_env()),
//!     NpmRepoFinder::new(fetcher()?),
//!     CsvOutcomeStore::new(PathBuf::from("output.csv")),
//!     SystemClock::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let request = ResolveRequest::new(
//!     PathBuf::from("packages.csv"),
//!     "utf-16".to_string(),
//!     ResolveOptions::default(),
//! );
//! let response = use_case.execute(request).await?;
//! println!("recorded {} package(s)", response.recorded());
//!
//! // Render the page
//! let page = GenerateLicensePageUseCase::new(
//!     CsvOutcomeStore::new(PathBuf::from("output.csv")),
//!     MarkdownFormatter::new(),
//!     StdoutPresenter::new(),
//! );
//! page.execute()?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod resolution;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        CsvOutcomeStore, CsvPackageListReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::MarkdownFormatter;
    pub use crate::adapters::outbound::network::{
        GitHubCredentials, GitHubLicenseClient, HttpFetcher, NpmRepoFinder, ResponseCache,
    };
    pub use crate::adapters::outbound::system::SystemClock;
    pub use crate::application::dto::{ResolveOptions, ResolveRequest, ResolveResponse};
    pub use crate::application::use_cases::{GenerateLicensePageUseCase, ResolveLicensesUseCase};
    pub use crate::ports::outbound::{
        Clock, LicensePageFormatter, LicenseResolver, OutcomeStore, OutputPresenter,
        PackageListReader, ProgressReporter, RepoFinder,
    };
    pub use crate::resolution::domain::{
        LicenseInfo, PackageName, PackageRecord, RepoIdentifier, ResolutionOutcome,
    };
    pub use crate::resolution::policies::LicenseFallback;
    pub use crate::resolution::services::RepoNormalizer;
    pub use crate::shared::error::{AppError, FetchError, ResolveError};
    pub use crate::shared::Result;
}
