//! Configuration file support for license-page-generator.
//!
//! Provides YAML-based configuration through `license-page-generator.config.yml`
//! files, and merges it with command-line flags. Flags always win over the file;
//! the file wins over built-in defaults.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::{MarkdownArgs, ResolveArgs};
use license_page_generator::adapters::outbound::filesystem::DEFAULT_OUTPUT_PATH;
use license_page_generator::adapters::outbound::formatters::DEFAULT_LICENSE_URL_TEMPLATE;
use license_page_generator::adapters::outbound::network::DEFAULT_CACHE_PATH;
use license_page_generator::application::dto::{
    ResolveOptions, DEFAULT_BLOCKED_COOLDOWN, DEFAULT_INPUT_ENCODING, DEFAULT_REGISTRY_DELAY,
};
use license_page_generator::shared::error::AppError;
use license_page_generator::shared::retry::DEFAULT_MAX_ATTEMPTS;
use license_page_generator::shared::Result;

pub const CONFIG_FILENAME: &str = "license-page-generator.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub input_encoding: Option<String>,
    pub output: Option<PathBuf>,
    pub cache: Option<bool>,
    pub cache_path: Option<PathBuf>,
    pub registry_delay_secs: Option<u64>,
    pub blocked_cooldown_secs: Option<u64>,
    pub max_attempts: Option<u32>,
    pub ignore_failures: Option<bool>,
    pub default_license_url: Option<String>,
    pub attribution: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);
    tracing::debug!(path = %path.display(), "loaded config file");

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Loads the explicit config if given, otherwise the discovered one, otherwise defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<ConfigFile> {
    match explicit {
        Some(path) => load_config_from_path(path),
        None => Ok(discover_config(Path::new("."))?.unwrap_or_default()),
    }
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(encoding) = &config.input_encoding {
        validate_encoding(encoding)?;
    }
    if let Some(attempts) = config.max_attempts {
        validate_max_attempts(attempts)?;
    }
    Ok(())
}

fn validate_encoding(encoding: &str) -> Result<()> {
    if encoding.trim().is_empty() {
        return Err(AppError::Validation {
            message: "input_encoding must not be empty.\n\n💡 Hint: Use a label such as utf-16 or utf-8.".to_string(),
        }
        .into());
    }
    Ok(())
}

fn validate_max_attempts(attempts: u32) -> Result<()> {
    if attempts == 0 {
        return Err(AppError::Validation {
            message: "max_attempts must be at least 1.".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

/// Effective settings of a `resolve` run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveSettings {
    pub input: PathBuf,
    pub input_encoding: String,
    pub output: PathBuf,
    /// None when the cache is disabled
    pub cache_path: Option<PathBuf>,
    pub options: ResolveOptions,
}

impl ResolveSettings {
    pub fn merge(args: ResolveArgs, config: &ConfigFile) -> Result<Self> {
        let input_encoding = args
            .input_encoding
            .or_else(|| config.input_encoding.clone())
            .unwrap_or_else(|| DEFAULT_INPUT_ENCODING.to_string());
        validate_encoding(&input_encoding)?;

        let max_attempts = args
            .max_attempts
            .or(config.max_attempts)
            .unwrap_or(DEFAULT_MAX_ATTEMPTS);
        validate_max_attempts(max_attempts)?;

        let cache_enabled = !args.no_cache && config.cache.unwrap_or(true);
        let cache_path = cache_enabled.then(|| {
            args.cache_path
                .or_else(|| config.cache_path.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_PATH))
        });

        let options = ResolveOptions {
            max_attempts,
            blocked_cooldown: args
                .blocked_cooldown
                .or(config.blocked_cooldown_secs)
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_BLOCKED_COOLDOWN),
            registry_delay: args
                .registry_delay
                .or(config.registry_delay_secs)
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_REGISTRY_DELAY),
            ignore_failures: args.ignore_failures || config.ignore_failures.unwrap_or(false),
        };

        Ok(Self {
            input: args.input,
            input_encoding,
            output: args
                .output
                .or_else(|| config.output.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH)),
            cache_path,
            options,
        })
    }
}

/// Effective settings of a `markdown` run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownSettings {
    pub input: PathBuf,
    pub default_license_url: String,
    pub attribution: bool,
    pub output: Option<PathBuf>,
}

impl MarkdownSettings {
    pub fn merge(args: MarkdownArgs, config: &ConfigFile) -> Self {
        Self {
            input: args.input,
            default_license_url: args
                .default_license_url
                .or_else(|| config.default_license_url.clone())
                .unwrap_or_else(|| DEFAULT_LICENSE_URL_TEMPLATE.to_string()),
            attribution: !args.no_attribution && config.attribution.unwrap_or(true),
            output: args.output,
        }
    }
}
