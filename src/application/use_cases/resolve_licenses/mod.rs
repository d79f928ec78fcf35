use crate::application::dto::{ResolveOptions, ResolveRequest, ResolveResponse};
use crate::ports::outbound::{
    Clock, LicenseResolver, OutcomeStore, PackageListReader, ProgressReporter, RepoFinder,
};
use crate::resolution::domain::{PackageRecord, RepoIdentifier, ResolutionOutcome};
use crate::resolution::policies::LicenseFallback;
use crate::resolution::services::RepoNormalizer;
use crate::shared::error::{FetchError, ResolveError};
use crate::shared::retry::{retry_with_backoff, until, RetryError};
use crate::shared::Result;
use std::time::Duration;

/// Slack added on top of the API's reset time before retrying
const RATE_LIMIT_MARGIN: Duration = Duration::from_secs(1);

/// How a single package ended up in the report
#[derive(Debug, Clone, PartialEq, Eq)]
enum PackageResolution {
    /// The license API was queried for the package's repository
    Resolved(ResolutionOutcome),
    /// No usable repository; the package's own license hint was recorded
    Fallback(ResolutionOutcome),
}

/// ResolveLicensesUseCase - Resolution orchestrator
///
/// For every package, in name order:
/// 1. skip it if the report already has a row for it
/// 2. normalize the declared repository, or look it up on the registry
/// 3. query the license API, waiting out rate limits
/// 4. append the outcome to the report before moving on
///
/// # Type Parameters
/// * `PLR` - PackageListReader implementation
/// * `LRES` - LicenseResolver implementation
/// * `RF` - RepoFinder implementation
/// * `OS` - OutcomeStore implementation
/// * `CLK` - Clock implementation
/// * `PR` - ProgressReporter implementation
pub struct ResolveLicensesUseCase<PLR, LRES, RF, OS, CLK, PR> {
    package_list_reader: PLR,
    license_resolver: LRES,
    repo_finder: RF,
    outcome_store: OS,
    clock: CLK,
    progress_reporter: PR,
}

impl<PLR, LRES, RF, OS, CLK, PR> ResolveLicensesUseCase<PLR, LRES, RF, OS, CLK, PR>
where
    PLR: PackageListReader,
    LRES: LicenseResolver,
    RF: RepoFinder,
    OS: OutcomeStore,
    CLK: Clock,
    PR: ProgressReporter,
{
    /// Creates a new ResolveLicensesUseCase with injected dependencies
    pub fn new(
        package_list_reader: PLR,
        license_resolver: LRES,
        repo_finder: RF,
        outcome_store: OS,
        clock: CLK,
        progress_reporter: PR,
    ) -> Self {
        Self {
            package_list_reader,
            license_resolver,
            repo_finder,
            outcome_store,
            clock,
            progress_reporter,
        }
    }

    /// Executes the resolution run
    ///
    /// # Returns
    /// Counts of what happened to every input package
    ///
    /// # Errors
    /// Returns a [`ResolveError`] (wrapped in `anyhow`) for the first package
    /// that cannot be resolved when failures are not ignored, or an I/O error
    /// from reading the list or writing the report. Outcomes recorded before
    /// the failure stay in the report.
    pub async fn execute(&mut self, request: ResolveRequest) -> Result<ResolveResponse> {
        let packages = self.load_packages(&request)?;
        let mut recorded = self.outcome_store.recorded_names()?;
        let mut response = ResolveResponse {
            total: packages.len(),
            ..ResolveResponse::default()
        };

        let pending = packages
            .iter()
            .filter(|p| !recorded.contains(p.name().as_str()))
            .count();
        response.already_recorded = packages.len() - pending;
        if response.already_recorded > 0 {
            self.progress_reporter.report(&format!(
                "⏭️  {} package(s) already recorded, {} to resolve",
                response.already_recorded, pending
            ));
        }

        self.progress_reporter
            .report("🔍 Resolving license information...");

        for (index, record) in packages.iter().enumerate() {
            let name = record.name().as_str();
            self.progress_reporter
                .report_progress(index + 1, packages.len(), Some(name));

            if recorded.contains(name) {
                tracing::debug!(package = name, "already recorded, skipping");
                continue;
            }

            match self.resolve_package(record, &request.options).await {
                Ok(resolution) => {
                    let outcome = match resolution {
                        PackageResolution::Resolved(outcome) => {
                            response.resolved += 1;
                            outcome
                        }
                        PackageResolution::Fallback(outcome) => {
                            response.fallback += 1;
                            outcome
                        }
                    };
                    self.outcome_store.record(&outcome)?;
                    tracing::info!(
                        package = outcome.name(),
                        license = outcome.license(),
                        license_url = outcome.license_url(),
                        "recorded"
                    );
                    recorded.insert(outcome.name().to_string());
                }
                Err(e) if request.options.ignore_failures => {
                    tracing::warn!(package = name, error = %e, "skipping package");
                    self.progress_reporter
                        .report_warning(&format!("⚠️  Warning: {}: {}", e, source_of(&e)));
                    response.failed += 1;
                }
                Err(e) => {
                    self.progress_reporter
                        .report_warning(&format!("❌ Failed on package '{}'", e.package()));
                    return Err(e.into());
                }
            }
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Recorded {} package(s) ({} from the license API, {} from package metadata), {} already present, {} failed",
            response.recorded(),
            response.resolved,
            response.fallback,
            response.already_recorded,
            response.failed
        ));

        Ok(response)
    }

    /// Reads the package list and sorts it by name
    fn load_packages(&self, request: &ResolveRequest) -> Result<Vec<PackageRecord>> {
        self.progress_reporter.report(&format!(
            "📖 Loading package list from: {}",
            request.input_path.display()
        ));

        let mut packages = self
            .package_list_reader
            .read_packages(&request.input_path, &request.input_encoding)?;
        packages.sort_by(|a, b| a.name().cmp(b.name()));

        self.progress_reporter
            .report(&format!("✅ Found {} package(s)", packages.len()));

        Ok(packages)
    }

    /// Runs the per-package state machine
    ///
    /// Declared repo → (registry fallback) → license lookup → outcome.
    async fn resolve_package(
        &self,
        record: &PackageRecord,
        options: &ResolveOptions,
    ) -> std::result::Result<PackageResolution, ResolveError> {
        let repo = match RepoNormalizer::normalize(record.declared_repo()) {
            Some(repo) => Some(repo),
            None => {
                tracing::debug!(
                    package = %record.name(),
                    declared = record.declared_repo(),
                    "no usable declared repository, asking the registry"
                );
                self.find_repo_on_registry(record, options).await?
            }
        };

        let Some(repo) = repo else {
            return Ok(PackageResolution::Fallback(
                LicenseFallback::without_repository(record),
            ));
        };

        let license = retry_with_backoff(
            options.max_attempts,
            &self.clock,
            || self.license_resolver.resolve_license(&repo),
            FetchError::is_rate_limited,
            |error: &FetchError, now| match error {
                FetchError::RateLimited { reset_at } => until(*reset_at, now) + RATE_LIMIT_MARGIN,
                _ => Duration::ZERO,
            },
        )
        .await
        .map_err(|e| into_resolve_error(record, e))?;

        if license.is_not_found() {
            tracing::debug!(repo = %repo, "repository has no detected license");
        }

        Ok(PackageResolution::Resolved(LicenseFallback::from_license(
            record, &license,
        )))
    }

    /// Asks the registry for the package's repository
    ///
    /// Returns None when the registry has no link, the link points off the
    /// hosting service, or the registry kept blocking us and failures are
    /// ignored.
    async fn find_repo_on_registry(
        &self,
        record: &PackageRecord,
        options: &ResolveOptions,
    ) -> std::result::Result<Option<RepoIdentifier>, ResolveError> {
        let result = retry_with_backoff(
            options.max_attempts,
            &self.clock,
            || self.repo_finder.find_repo(record.name()),
            FetchError::is_blocked,
            |_, _| options.blocked_cooldown,
        )
        .await;

        let link = match result {
            Ok(link) => {
                if !options.registry_delay.is_zero() {
                    self.clock.sleep(options.registry_delay).await;
                }
                link
            }
            Err(RetryError::Exhausted { attempts, last }) if options.ignore_failures => {
                tracing::warn!(
                    package = %record.name(),
                    attempts,
                    error = %last,
                    "registry kept blocking, falling back to license hint"
                );
                self.progress_reporter.report_warning(&format!(
                    "⚠️  Warning: registry blocked lookups for '{}', using its license hint",
                    record.name()
                ));
                return Ok(None);
            }
            Err(e) => return Err(into_resolve_error(record, e)),
        };

        let repo = link.as_deref().and_then(RepoNormalizer::normalize);
        match (&link, &repo) {
            (None, _) => {
                tracing::debug!(package = %record.name(), "registry page has no repository link")
            }
            (Some(link), None) => tracing::debug!(
                package = %record.name(),
                link = link.as_str(),
                "registry repository is not on the hosting service"
            ),
            (Some(_), Some(repo)) => {
                tracing::debug!(package = %record.name(), repo = %repo, "found repository on registry")
            }
        }
        Ok(repo)
    }
}

fn into_resolve_error(record: &PackageRecord, error: RetryError<FetchError>) -> ResolveError {
    let package = record.name().to_string();
    match error {
        RetryError::Exhausted { attempts, last } => ResolveError::RetryExhausted {
            package,
            attempts,
            source: last,
        },
        RetryError::Fatal(source) => ResolveError::FetchFailed { package, source },
    }
}

fn source_of(error: &ResolveError) -> String {
    std::error::Error::source(error)
        .map(|source| source.to_string())
        .unwrap_or_default()
}
