/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, clock, console).
pub mod clock;
pub mod formatter;
pub mod license_resolver;
pub mod outcome_store;
pub mod output_presenter;
pub mod package_list_reader;
pub mod progress_reporter;
pub mod repo_finder;

pub use clock::Clock;
pub use formatter::LicensePageFormatter;
pub use license_resolver::LicenseResolver;
pub use outcome_store::OutcomeStore;
pub use output_presenter::OutputPresenter;
pub use package_list_reader::PackageListReader;
pub use progress_reporter::ProgressReporter;
pub use repo_finder::RepoFinder;
