use crate::resolution::domain::PackageName;
use crate::shared::error::FetchError;
use async_trait::async_trait;

/// RepoFinder port for discovering a package's repository from its registry
#[async_trait]
pub trait RepoFinder: Send + Sync {
    /// Looks up the repository link the registry shows for a package
    ///
    /// # Returns
    /// The raw link target (URL or shorthand, not yet normalized), or None
    /// when the registry page has no repository link
    ///
    /// # Errors
    /// - `FetchError::Blocked` when the registry answers with its anti-bot status
    /// - `FetchError::Http` for any other non-success status
    async fn find_repo(&self, package: &PackageName) -> Result<Option<String>, FetchError>;
}
