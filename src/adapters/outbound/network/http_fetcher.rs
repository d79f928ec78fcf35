use super::http_cache::{CachedResponse, ResponseCache};
use crate::shared::error::FetchError;
use crate::shared::Result;
use chrono::Utc;
use reqwest::header::HeaderMap;
use reqwest::RequestBuilder;
use std::sync::Arc;
use std::time::Duration;

/// Rate-limit related headers of a response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateLimitHeaders {
    /// `x-ratelimit-remaining`
    pub remaining: Option<u64>,
    /// `x-ratelimit-reset`, Unix seconds
    pub reset: Option<i64>,
    /// `retry-after`, seconds
    pub retry_after: Option<u64>,
}

impl RateLimitHeaders {
    fn from_headers(headers: &HeaderMap) -> Self {
        fn parse<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.trim().parse().ok())
        }

        Self {
            remaining: parse(headers, "x-ratelimit-remaining"),
            reset: parse(headers, "x-ratelimit-reset"),
            retry_after: parse(headers, "retry-after"),
        }
    }
}

/// A fetched response with its body already read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedResponse {
    pub status: u16,
    pub rate_limit: RateLimitHeaders,
    pub body: String,
}

impl FetchedResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HttpFetcher issues GET requests, consulting the response cache first
///
/// Shared by the registry and license adapters so both use the same client
/// settings and the same cache.
pub struct HttpFetcher {
    client: reqwest::Client,
    cache: Option<Arc<ResponseCache>>,
}

impl HttpFetcher {
    /// Creates a fetcher without a cache
    pub fn new() -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("license-page-generator/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            cache: None,
        })
    }

    /// Routes requests through `cache`
    pub fn with_cache(mut self, cache: Arc<ResponseCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Fetches `url`
    ///
    /// # Arguments
    /// * `url` - Request URL, also the cache key
    /// * `customize` - Adds headers or credentials to the request
    ///
    /// # Errors
    /// Only transport failures are errors here; every HTTP status is
    /// returned to the caller to interpret.
    pub async fn get<F>(
        &self,
        url: &str,
        customize: F,
    ) -> std::result::Result<FetchedResponse, FetchError>
    where
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        if let Some(cached) = self.cache.as_ref().and_then(|cache| cache.get(url)) {
            tracing::debug!(url, status = cached.status, "cache hit");
            return Ok(FetchedResponse {
                status: cached.status,
                rate_limit: RateLimitHeaders::default(),
                body: cached.body,
            });
        }

        tracing::debug!(url, "GET");
        let response = customize(self.client.get(url)).send().await?;
        let status = response.status().as_u16();
        let rate_limit = RateLimitHeaders::from_headers(response.headers());
        let body = response.text().await?;
        tracing::debug!(url, status, "response received");

        if let Some(cache) = &self.cache {
            cache.store(
                url,
                CachedResponse {
                    status,
                    fetched_at: Utc::now(),
                    body: body.clone(),
                },
            );
        }

        Ok(FetchedResponse {
            status,
            rate_limit,
            body,
        })
    }
}
