use async_trait::async_trait;
use license_page_generator::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock RepoFinder returning fixed links per package name
#[derive(Clone, Default)]
pub struct MockRepoFinder {
    links: HashMap<String, String>,
    blocked: HashSet<String>,
    call_count: Arc<AtomicUsize>,
}

impl MockRepoFinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_link(mut self, package: &str, link: &str) -> Self {
        self.links.insert(package.to_string(), link.to_string());
        self
    }

    /// Every lookup of `package` is blocked
    pub fn with_blocked(mut self, package: &str) -> Self {
        self.blocked.insert(package.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RepoFinder for MockRepoFinder {
    async fn find_repo(
        &self,
        package: &PackageName,
    ) -> std::result::Result<Option<String>, FetchError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if self.blocked.contains(package.as_str()) {
            return Err(FetchError::Blocked {
                url: format!("https://www.npmjs.com/package/{}", package),
            });
        }
        Ok(self.links.get(package.as_str()).cloned())
    }
}
