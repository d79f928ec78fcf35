use crate::shared::error::AppError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the on-disk response cache
pub const DEFAULT_CACHE_PATH: &str = ".license-page-generator-cache.json";

/// A stored HTTP response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedResponse {
    pub status: u16,
    pub fetched_at: DateTime<Utc>,
    pub body: String,
}

/// ResponseCache keeps HTTP responses keyed by request URL
///
/// Only successful and not-found responses are kept. Throttled or failed
/// responses must be fetched again, otherwise a rerun would replay the
/// failure instead of retrying it.
///
/// The cache lives in memory for the duration of a run and is written back
/// to disk with [`ResponseCache::persist`].
pub struct ResponseCache {
    path: Option<PathBuf>,
    entries: DashMap<String, CachedResponse>,
}

impl ResponseCache {
    /// Creates an empty cache that is never written to disk
    pub fn in_memory() -> Self {
        Self {
            path: None,
            entries: DashMap::new(),
        }
    }

    /// Opens the cache stored at `path`
    ///
    /// A missing file starts an empty cache. An unreadable or corrupt file is
    /// logged and ignored; it will be overwritten on the next persist.
    pub fn open(path: PathBuf) -> Self {
        let entries = DashMap::new();
        match Self::load_entries(&path) {
            Ok(Some(loaded)) => {
                tracing::debug!(path = %path.display(), entries = loaded.len(), "loaded response cache");
                for (url, response) in loaded {
                    entries.insert(url, response);
                }
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable response cache");
            }
        }

        Self {
            path: Some(path),
            entries,
        }
    }

    fn load_entries(path: &Path) -> Result<Option<BTreeMap<String, CachedResponse>>> {
        if !path.exists() {
            return Ok(None);
        }
        validate_not_symlink(path)?;
        let content = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    /// Whether a response with this status may be stored
    pub fn is_cacheable(status: u16) -> bool {
        (200..300).contains(&status) || status == 404
    }

    pub fn get(&self, url: &str) -> Option<CachedResponse> {
        self.entries.get(url).map(|entry| entry.clone())
    }

    /// Stores a response; statuses that are not cacheable are dropped
    pub fn store(&self, url: &str, response: CachedResponse) {
        if Self::is_cacheable(response.status) {
            self.entries.insert(url.to_string(), response);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes the cache back to the file it was opened from
    ///
    /// In-memory caches have nowhere to go and are left alone.
    pub fn persist(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let snapshot: BTreeMap<String, CachedResponse> = self
            .entries
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();

        let write_error = |details: String| AppError::FileWriteError {
            path: path.clone(),
            details,
        };

        validate_not_symlink(path)?;
        let content = serde_json::to_string_pretty(&snapshot).map_err(|e| write_error(e.to_string()))?;
        fs::write(path, content).map_err(|e| write_error(e.to_string()))?;

        tracing::debug!(path = %path.display(), entries = snapshot.len(), "persisted response cache");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn response(status: u16, body: &str) -> CachedResponse {
        CachedResponse {
            status,
            fetched_at: Utc::now(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_only_success_and_not_found_are_cacheable() {
        assert!(ResponseCache::is_cacheable(200));
        assert!(ResponseCache::is_cacheable(204));
        assert!(ResponseCache::is_cacheable(404));
        assert!(!ResponseCache::is_cacheable(403));
        assert!(!ResponseCache::is_cacheable(429));
        assert!(!ResponseCache::is_cacheable(500));
    }

    #[test]
    fn test_store_skips_throttled_responses() {
        let cache = ResponseCache::in_memory();
        cache.store("https://a", response(200, "ok"));
        cache.store("https://b", response(429, "slow down"));
        cache.store("https://c", response(404, ""));

        assert_eq!(cache.len(), 2);
        assert!(cache.get("https://b").is_none());
        assert_eq!(cache.get("https://a").unwrap().body, "ok");
    }

    #[test]
    fn test_persist_and_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cache.json");

        let cache = ResponseCache::open(path.clone());
        assert!(cache.is_empty());
        cache.store("https://api.github.com/repos/o/n/license", response(200, "{}"));
        cache.persist().unwrap();

        let reopened = ResponseCache::open(path);
        assert_eq!(reopened.len(), 1);
        assert_eq!(
            reopened
                .get("https://api.github.com/repos/o/n/license")
                .unwrap()
                .status,
            200
        );
    }

    #[test]
    fn test_corrupt_file_is_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cache.json");
        fs::write(&path, "not json {").unwrap();

        let cache = ResponseCache::open(path.clone());
        assert!(cache.is_empty());

        cache.store("https://a", response(200, "ok"));
        cache.persist().unwrap();
        assert_eq!(ResponseCache::open(path).len(), 1);
    }

    #[test]
    fn test_in_memory_persist_is_noop() {
        let cache = ResponseCache::in_memory();
        cache.store("https://a", response(200, "ok"));
        assert!(cache.persist().is_ok());
    }
}
