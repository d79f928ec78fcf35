use async_trait::async_trait;
use chrono::{DateTime, Utc};
use license_page_generator::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Mock LicenseResolver keyed by `owner/name`
///
/// Unknown repositories resolve to "no detected license". A repository can be
/// made to answer with a rate limit a number of times before succeeding.
#[derive(Clone, Default)]
pub struct MockLicenseResolver {
    licenses: HashMap<String, LicenseInfo>,
    rate_limits: Arc<Mutex<HashMap<String, (usize, DateTime<Utc>)>>>,
    call_count: Arc<AtomicUsize>,
}

impl MockLicenseResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_license(mut self, repo: &str, display_name: &str, url: &str) -> Self {
        self.licenses.insert(
            repo.to_string(),
            LicenseInfo::new(
                Some(display_name.to_lowercase()),
                Some(display_name.to_string()),
                Some(url.to_string()),
            ),
        );
        self
    }

    /// The next `times` lookups of `repo` are throttled until `reset_at`
    pub fn with_rate_limit(self, repo: &str, times: usize, reset_at: DateTime<Utc>) -> Self {
        self.rate_limits
            .lock()
            .unwrap()
            .insert(repo.to_string(), (times, reset_at));
        self
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LicenseResolver for MockLicenseResolver {
    async fn resolve_license(
        &self,
        repo: &RepoIdentifier,
    ) -> std::result::Result<LicenseInfo, FetchError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        let key = repo.to_string();

        if let Some((remaining, reset_at)) = self.rate_limits.lock().unwrap().get_mut(&key) {
            if *remaining > 0 {
                *remaining -= 1;
                return Err(FetchError::RateLimited {
                    reset_at: *reset_at,
                });
            }
        }

        Ok(self
            .licenses
            .get(&key)
            .cloned()
            .unwrap_or_else(LicenseInfo::not_found))
    }
}
