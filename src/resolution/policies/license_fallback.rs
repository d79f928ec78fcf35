use crate::resolution::domain::{LicenseInfo, PackageRecord, ResolutionOutcome};

/// LicenseFallback policy for turning lookup results into report rows
///
/// Priority order for the license column:
/// 1. Display name reported by the license API
/// 2. First license hint from the package metadata
/// 3. `Unknown`
///
/// The URL column is the API's license document URL, or empty.
pub struct LicenseFallback;

impl LicenseFallback {
    /// Builds the outcome for a package whose repository was queried
    pub fn from_license(record: &PackageRecord, license: &LicenseInfo) -> ResolutionOutcome {
        let display = license
            .display_name()
            .filter(|name| !name.trim().is_empty())
            .or_else(|| record.first_license_hint())
            .unwrap_or_default();

        ResolutionOutcome::new(
            record.name().as_str(),
            display,
            license.license_url().unwrap_or_default(),
        )
    }

    /// Builds the outcome for a package without a usable repository
    pub fn without_repository(record: &PackageRecord) -> ResolutionOutcome {
        ResolutionOutcome::new(
            record.name().as_str(),
            record.first_license_hint().unwrap_or_default(),
            "",
        )
    }
}
