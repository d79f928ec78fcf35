mod repo_normalizer;

pub use repo_normalizer::{RepoNormalizer, HOSTING_DOMAIN};
