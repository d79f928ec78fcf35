/// License shown when neither the API nor the package metadata names one
pub const UNKNOWN_LICENSE: &str = "Unknown";

/// The resolved license of one package, as written to the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionOutcome {
    name: String,
    license: String,
    license_url: String,
}

impl ResolutionOutcome {
    /// Creates an outcome; a blank license becomes [`UNKNOWN_LICENSE`]
    pub fn new(
        name: impl Into<String>,
        license: impl Into<String>,
        license_url: impl Into<String>,
    ) -> Self {
        let license = license.into();
        let license = if license.trim().is_empty() {
            UNKNOWN_LICENSE.to_string()
        } else {
            license
        };
        Self {
            name: name.into(),
            license,
            license_url: license_url.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn license(&self) -> &str {
        &self.license
    }

    /// License document URL; empty when none is known
    pub fn license_url(&self) -> &str {
        &self.license_url
    }
}
