use crate::shared::Result;

/// Maximum length for package names (npm registry limit)
const MAX_PACKAGE_NAME_LENGTH: usize = 214;

/// Literal the input format uses for "no repository declared".
///
/// This is a magic value inherited from the package list export; it is kept
/// verbatim so existing exports keep working.
pub const NO_REPOSITORY_SENTINEL: &str = "(none)";

/// NewType wrapper for an npm package name with validation
///
/// Scoped names (`@scope/name`) are allowed. Anything that could escape the
/// registry URL path is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            anyhow::bail!("Package name cannot be empty");
        }

        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            anyhow::bail!(
                "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_PACKAGE_NAME_LENGTH
            );
        }

        if name
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || matches!(c, '\\' | '#' | '?'))
        {
            anyhow::bail!("Package name '{}' contains URL-unsafe characters", name);
        }

        if name.split('/').any(|segment| segment == ".." || segment == ".") {
            anyhow::bail!("Package name '{}' contains relative path segments", name);
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A package as listed in the input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    name: PackageName,
    declared_repo: String,
    fallback_license_hints: Vec<String>,
}

impl PackageRecord {
    /// Creates a record; empty hints are dropped, order is preserved
    pub fn new(name: PackageName, declared_repo: String, hints: Vec<String>) -> Self {
        let mut record = Self {
            name,
            declared_repo: declared_repo.trim().to_string(),
            fallback_license_hints: Vec::new(),
        };
        record.push_hints(hints);
        record
    }

    pub fn name(&self) -> &PackageName {
        &self.name
    }

    pub fn declared_repo(&self) -> &str {
        &self.declared_repo
    }

    pub fn fallback_license_hints(&self) -> &[String] {
        &self.fallback_license_hints
    }

    /// First non-empty license hint, if any
    pub fn first_license_hint(&self) -> Option<&str> {
        self.fallback_license_hints.first().map(String::as_str)
    }

    /// Whether the declared repository is missing or the sentinel
    pub fn has_declared_repo(&self) -> bool {
        !self.declared_repo.is_empty() && self.declared_repo != NO_REPOSITORY_SENTINEL
    }

    /// Folds a duplicate row of the same package into this record
    ///
    /// The first real declared repository wins; hints are appended in order
    /// without duplicates.
    pub fn merge(&mut self, other: PackageRecord) {
        if !self.has_declared_repo() && other.has_declared_repo() {
            self.declared_repo = other.declared_repo;
        }
        self.push_hints(other.fallback_license_hints);
    }

    fn push_hints(&mut self, hints: Vec<String>) {
        for hint in hints {
            let hint = hint.trim();
            if hint.is_empty() || self.fallback_license_hints.iter().any(|h| h == hint) {
                continue;
            }
            self.fallback_license_hints.push(hint.to_string());
        }
    }
}
