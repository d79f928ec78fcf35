use crate::resolution::domain::{RepoIdentifier, NO_REPOSITORY_SENTINEL};
use url::Url;

/// Domain of the hosting service whose license API we query
pub const HOSTING_DOMAIN: &str = "github.com";

/// SSH shorthand used by clone URLs, e.g. `git@github.com:owner/name.git`
const SSH_PREFIX: &str = "git@github.com:";

/// Scheme of the npm `github:owner/name` shorthand
const SHORTHAND_SCHEME: &str = "github";

/// RepoNormalizer turns free-form repository references into `owner/name`
///
/// Accepted forms:
/// - `owner/name` (returned as-is, extra segments trimmed)
/// - `git@github.com:owner/name.git`
/// - `https://github.com/owner/name/tree/main`, `git+https://...`, `git://...`
/// - `github:owner/name`
///
/// Anything else, including references to other hosts and the `(none)`
/// sentinel, yields None. Malformed input never errors.
pub struct RepoNormalizer;

impl RepoNormalizer {
    pub fn normalize(reference: &str) -> Option<RepoIdentifier> {
        let reference = reference.trim();
        if reference.is_empty() || reference == NO_REPOSITORY_SENTINEL {
            return None;
        }

        if let Some(path) = reference.strip_prefix(SSH_PREFIX) {
            return RepoIdentifier::from_path(path);
        }

        match Url::parse(reference) {
            Ok(url) => Self::from_url(&url),
            Err(url::ParseError::RelativeUrlWithoutBase) => Self::from_bare_path(reference),
            Err(_) => None,
        }
    }

    fn from_url(url: &Url) -> Option<RepoIdentifier> {
        match url.host_str() {
            Some(host) if Self::is_hosting_domain(host) => RepoIdentifier::from_path(url.path()),
            Some(_) => None,
            None if url.scheme() == SHORTHAND_SCHEME => RepoIdentifier::from_path(url.path()),
            None => None,
        }
    }

    /// A reference without a scheme is already `owner/name`, possibly with
    /// the host name glued in front (`github.com/owner/name`).
    fn from_bare_path(reference: &str) -> Option<RepoIdentifier> {
        let path = reference.trim_start_matches('/');
        let path = match path.split_once('/') {
            Some((host, rest)) if Self::is_hosting_domain(host) => rest,
            _ => path,
        };
        RepoIdentifier::from_path(path)
    }

    fn is_hosting_domain(host: &str) -> bool {
        host.eq_ignore_ascii_case(HOSTING_DOMAIN)
            || host.eq_ignore_ascii_case(&format!("www.{}", HOSTING_DOMAIN))
    }
}
