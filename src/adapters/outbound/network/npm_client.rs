use super::http_fetcher::HttpFetcher;
use crate::ports::outbound::RepoFinder;
use crate::resolution::domain::PackageName;
use crate::shared::error::FetchError;
use async_trait::async_trait;
use scraper::{Html, Selector};
use std::sync::LazyLock;

const NPM_PACKAGE_BASE: &str = "https://www.npmjs.com/package";

/// Status the registry answers with when it decides we are a bot
const BLOCKED_STATUS: u16 = 429;

static REPOSITORY_LINK: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(
        r#"a[aria-labelledby="repository"], a[aria-labelledby="repository-link"]"#,
    )
    .expect("Failed to parse repository link selector")
});

/// NpmRepoFinder adapter for reading repository links from npm package pages
///
/// This adapter implements the RepoFinder port by fetching the public
/// package page and picking the link the page labels as the repository.
pub struct NpmRepoFinder {
    fetcher: HttpFetcher,
}

impl NpmRepoFinder {
    pub fn new(fetcher: HttpFetcher) -> Self {
        Self { fetcher }
    }

    /// Package page URL; a scope's `@` and its `/` stay literal
    fn package_url(package: &PackageName) -> String {
        let path = package
            .as_str()
            .split('/')
            .map(|segment| match segment.strip_prefix('@') {
                Some(scope) => format!("@{}", urlencoding::encode(scope)),
                None => urlencoding::encode(segment).into_owned(),
            })
            .collect::<Vec<_>>()
            .join("/");
        format!("{}/{}", NPM_PACKAGE_BASE, path)
    }
}

/// Returns the trimmed target of the page's repository link, if any
fn extract_repository_link(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    document
        .select(&REPOSITORY_LINK)
        .filter_map(|link| link.value().attr("href"))
        .map(str::trim)
        .find(|href| !href.is_empty())
        .map(str::to_string)
}

#[async_trait]
impl RepoFinder for NpmRepoFinder {
    async fn find_repo(&self, package: &PackageName) -> Result<Option<String>, FetchError> {
        let url = Self::package_url(package);
        let response = self.fetcher.get(&url, |request| request).await?;

        if response.status == BLOCKED_STATUS {
            tracing::warn!(package = %package, "registry blocked the request");
            return Err(FetchError::Blocked { url });
        }
        if !response.is_success() {
            return Err(FetchError::Http {
                url,
                status: response.status,
            });
        }

        Ok(extract_repository_link(&response.body))
    }
}
