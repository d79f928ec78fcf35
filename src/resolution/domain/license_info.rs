/// LicenseInfo value object as reported by the license API
///
/// All three fields absent means the repository has no detected license.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LicenseInfo {
    key: Option<String>,
    display_name: Option<String>,
    license_url: Option<String>,
}

impl LicenseInfo {
    pub fn new(
        key: Option<String>,
        display_name: Option<String>,
        license_url: Option<String>,
    ) -> Self {
        Self {
            key,
            display_name,
            license_url,
        }
    }

    /// A repository without a detected license
    pub fn not_found() -> Self {
        Self::default()
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn license_url(&self) -> Option<&str> {
        self.license_url.as_deref()
    }

    pub fn is_not_found(&self) -> bool {
        self.key.is_none() && self.display_name.is_none() && self.license_url.is_none()
    }
}
