pub mod license_info;
pub mod package_record;
pub mod repo_identifier;
pub mod resolution_outcome;

pub use license_info::LicenseInfo;
pub use package_record::{PackageName, PackageRecord, NO_REPOSITORY_SENTINEL};
pub use repo_identifier::RepoIdentifier;
pub use resolution_outcome::{ResolutionOutcome, UNKNOWN_LICENSE};
