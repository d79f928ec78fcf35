/// Mock implementations for testing
mod mock_clock;
mod mock_license_resolver;
mod mock_progress_reporter;
mod mock_repo_finder;

pub use mock_clock::VirtualClock;
pub use mock_license_resolver::MockLicenseResolver;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_repo_finder::MockRepoFinder;
