/// Canonical `owner/name` address of a repository on the hosting service
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoIdentifier {
    owner: String,
    name: String,
}

impl RepoIdentifier {
    /// Builds an identifier from two path segments
    ///
    /// Returns None when either segment is empty. A trailing `.git` on the
    /// name is dropped, since clone URLs carry it.
    pub fn from_segments(owner: &str, name: &str) -> Option<Self> {
        let owner = owner.trim();
        let name = name.trim();
        let name = name.strip_suffix(".git").unwrap_or(name);
        if owner.is_empty() || name.is_empty() {
            return None;
        }
        Some(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    /// Builds an identifier from the first two segments of a `/`-separated path
    pub fn from_path(path: &str) -> Option<Self> {
        let mut segments = path.trim_start_matches('/').split('/');
        let owner = segments.next()?;
        let name = segments.next()?;
        Self::from_segments(owner, name)
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for RepoIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
