use crate::shared::retry::DEFAULT_MAX_ATTEMPTS;
use std::path::PathBuf;
use std::time::Duration;

/// Default text encoding of the exported package list
pub const DEFAULT_INPUT_ENCODING: &str = "utf-16";

/// Default wait after a registry page lookup
pub const DEFAULT_REGISTRY_DELAY: Duration = Duration::from_secs(1);

/// Default cooldown after the registry's anti-bot response
pub const DEFAULT_BLOCKED_COOLDOWN: Duration = Duration::from_secs(60);

/// Retry and failure policy for a resolution run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Attempt budget for both registry and license lookups
    pub max_attempts: u32,
    /// Fixed wait after the registry blocks a request
    pub blocked_cooldown: Duration,
    /// Wait after every registry page lookup
    pub registry_delay: Duration,
    /// Skip (or fall back on) packages that cannot be resolved instead of aborting
    pub ignore_failures: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            blocked_cooldown: DEFAULT_BLOCKED_COOLDOWN,
            registry_delay: DEFAULT_REGISTRY_DELAY,
            ignore_failures: false,
        }
    }
}

/// ResolveRequest - Internal request DTO for the license resolution use case
#[derive(Debug, Clone)]
pub struct ResolveRequest {
    /// Path to the exported package list
    pub input_path: PathBuf,
    /// Text encoding label of the package list
    pub input_encoding: String,
    /// Retry and failure policy
    pub options: ResolveOptions,
}

impl ResolveRequest {
    pub fn new(input_path: PathBuf, input_encoding: String, options: ResolveOptions) -> Self {
        Self {
            input_path,
            input_encoding,
            options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ResolveOptions::default();
        assert_eq!(options.max_attempts, 3);
        assert_eq!(options.blocked_cooldown, Duration::from_secs(60));
        assert_eq!(options.registry_delay, Duration::from_secs(1));
        assert!(!options.ignore_failures);
    }
}
