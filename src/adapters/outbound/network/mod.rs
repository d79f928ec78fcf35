/// Network adapters for external API calls
mod github_client;
mod http_cache;
mod http_fetcher;
mod npm_client;

pub use github_client::{GitHubCredentials, GitHubLicenseClient};
pub use http_cache::{CachedResponse, ResponseCache, DEFAULT_CACHE_PATH};
pub use http_fetcher::{FetchedResponse, HttpFetcher, RateLimitHeaders};
pub use npm_client::NpmRepoFinder;
