use super::http_fetcher::{FetchedResponse, HttpFetcher};
use crate::ports::outbound::LicenseResolver;
use crate::resolution::domain::{LicenseInfo, RepoIdentifier};
use crate::shared::error::FetchError;
use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use reqwest::header::ACCEPT;
use serde::Deserialize;

const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github.v3+json";
const RATE_LIMIT_MESSAGE_PREFIX: &str = "API rate limit exceeded";

/// Wait applied when a throttled response carries no reset information
const DEFAULT_RATE_LIMIT_WAIT_SECS: i64 = 60;

#[derive(Debug, Deserialize)]
struct LicenseResponse {
    #[serde(default)]
    html_url: Option<String>,
    #[serde(default)]
    license: Option<LicenseDetails>,
}

#[derive(Debug, Deserialize)]
struct LicenseDetails {
    #[serde(default)]
    key: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: String,
}

/// Basic-auth credentials for the license API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubCredentials {
    user: String,
    token: String,
}

impl GitHubCredentials {
    pub fn new(user: String, token: String) -> Self {
        Self { user, token }
    }

    /// Reads `GITHUB_USER` and `GITHUB_TOKEN`; both must be set
    pub fn from_env() -> Option<Self> {
        let user = std::env::var("GITHUB_USER").ok()?;
        let token = std::env::var("GITHUB_TOKEN").ok()?;
        Some(Self::new(user, token))
    }
}

/// GitHubLicenseClient adapter for the GitHub repository license API
///
/// This adapter implements the LicenseResolver port. Anonymous requests are
/// allowed but heavily rate limited; with credentials the limit is much
/// higher.
pub struct GitHubLicenseClient {
    fetcher: HttpFetcher,
    credentials: Option<GitHubCredentials>,
}

impl GitHubLicenseClient {
    pub fn new(fetcher: HttpFetcher, credentials: Option<GitHubCredentials>) -> Self {
        if credentials.is_none() {
            tracing::debug!("no GitHub credentials, using anonymous rate limit");
        }
        Self {
            fetcher,
            credentials,
        }
    }

    fn license_url(repo: &RepoIdentifier) -> String {
        format!(
            "{}/repos/{}/{}/license",
            GITHUB_API_BASE,
            urlencoding::encode(repo.owner()),
            urlencoding::encode(repo.name())
        )
    }
}

/// Interprets a license API response
fn interpret_response(
    url: &str,
    response: &FetchedResponse,
    now: DateTime<Utc>,
) -> Result<LicenseInfo, FetchError> {
    if let Some(reset_at) = rate_limit_reset(response, now) {
        return Err(FetchError::RateLimited { reset_at });
    }

    if response.status == 404 {
        return Ok(LicenseInfo::not_found());
    }

    if !response.is_success() {
        return Err(FetchError::Http {
            url: url.to_string(),
            status: response.status,
        });
    }

    let body: LicenseResponse =
        serde_json::from_str(&response.body).map_err(|e| FetchError::Parse {
            url: url.to_string(),
            details: e.to_string(),
        })?;

    let (key, name) = match body.license {
        Some(details) => (details.key, details.name),
        None => (None, None),
    };
    Ok(LicenseInfo::new(key, name, body.html_url))
}

/// Returns when a throttled response allows the next request, or None if
/// the response is not a rate-limit response
///
/// Throttling is reported as 429, or as 403 with an exhausted
/// `x-ratelimit-remaining`, a `retry-after` header (secondary rate limit) or
/// the API's rate-limit message. `retry-after` wins over `x-ratelimit-reset`
/// because the reset header always describes the primary limit.
fn rate_limit_reset(response: &FetchedResponse, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let throttled = match response.status {
        429 => true,
        403 => {
            response.rate_limit.remaining == Some(0)
                || response.rate_limit.retry_after.is_some()
                || serde_json::from_str::<ErrorResponse>(&response.body)
                    .map(|error| error.message.starts_with(RATE_LIMIT_MESSAGE_PREFIX))
                    .unwrap_or(false)
        }
        _ => false,
    };
    if !throttled {
        return None;
    }

    let reset_at = response
        .rate_limit
        .retry_after
        .and_then(|secs| i64::try_from(secs).ok())
        .map(|secs| now + Duration::seconds(secs))
        .or_else(|| {
            response
                .rate_limit
                .reset
                .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
        })
        .unwrap_or_else(|| now + Duration::seconds(DEFAULT_RATE_LIMIT_WAIT_SECS));
    Some(reset_at)
}

#[async_trait]
impl LicenseResolver for GitHubLicenseClient {
    async fn resolve_license(&self, repo: &RepoIdentifier) -> Result<LicenseInfo, FetchError> {
        let url = Self::license_url(repo);
        let response = self
            .fetcher
            .get(&url, |request| {
                let request = request.header(ACCEPT, GITHUB_MEDIA_TYPE);
                match &self.credentials {
                    Some(credentials) => {
                        request.basic_auth(&credentials.user, Some(&credentials.token))
                    }
                    None => request,
                }
            })
            .await?;

        let result = interpret_response(&url, &response, Utc::now());
        if let Err(FetchError::RateLimited { reset_at }) = &result {
            tracing::warn!(repo = %repo, %reset_at, "license API rate limit exceeded");
        }
        result
    }
}
