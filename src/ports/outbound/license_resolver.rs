use crate::resolution::domain::{LicenseInfo, RepoIdentifier};
use crate::shared::error::FetchError;
use async_trait::async_trait;

/// LicenseResolver port for querying a repository's license
///
/// This port abstracts the hosting service's license API.
/// Implementations must be `Send + Sync` so they can be wrapped by the
/// caching decorators.
#[async_trait]
pub trait LicenseResolver: Send + Sync {
    /// Fetches license metadata for a repository
    ///
    /// # Arguments
    /// * `repo` - Canonical `owner/name` identifier
    ///
    /// # Returns
    /// The detected license; all fields are absent when the repository has
    /// no detected license
    ///
    /// # Errors
    /// - `FetchError::RateLimited` when the API throttles us (recoverable)
    /// - `FetchError::Http` for any other non-success status
    /// - `FetchError::Transport` / `FetchError::Parse` for network or body failures
    async fn resolve_license(&self, repo: &RepoIdentifier) -> Result<LicenseInfo, FetchError>;
}
