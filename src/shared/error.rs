use chrono::{DateTime, Utc};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to tell a failed lookup apart from
/// bad arguments or a broken input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every package was resolved or recorded
    Success = 0,
    /// A package could not be resolved and failures were not suppressed
    ResolutionFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O, malformed input, configuration, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ResolutionFailed => write!(f, "Resolution Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for reading and writing the package files.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Input file not found: {path}\n\n💡 Hint: Export the package list first (e.g. with license-checker --csv) and pass its path")]
    InputNotFound { path: PathBuf },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to parse package list: {path}\nLine {line}: {details}\n\n💡 Hint: Each record needs at least 8 fields: name, version, directory, repo, summary and three license fields")]
    InputParseError {
        path: PathBuf,
        line: u64,
        details: String,
    },

    #[error("Failed to parse resolution report: {path}\nLine {line}: {details}\n\n💡 Hint: The report has the columns name,license,license_url. Fix or remove the broken row, or delete the report to resolve from scratch")]
    ReportParseError {
        path: PathBuf,
        line: u64,
        details: String,
    },

    #[error("Unknown text encoding: {label}\n\n💡 Hint: Use a label such as utf-16, utf-16le, utf-8 or windows-1252")]
    UnknownEncoding { label: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

/// Errors raised by the network adapters.
///
/// "Not found" is not an error: a missing repository link or a repository
/// without a detected license is reported as an empty value instead.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The license API throttled us; retrying is allowed after `reset_at`.
    #[error("API rate limit exceeded, resets at {reset_at}")]
    RateLimited { reset_at: DateTime<Utc> },

    /// The registry answered with its anti-bot status.
    #[error("Registry blocked the request to {url}")]
    Blocked { url: String },

    #[error("{url} returned status code {status}")]
    Http { url: String, status: u16 },

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to parse response from {url}: {details}")]
    Parse { url: String, details: String },
}

impl FetchError {
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, FetchError::RateLimited { .. })
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, FetchError::Blocked { .. })
    }
}

/// Terminal failures of a single package resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Giving up on package '{package}' after {attempts} attempt(s)")]
    RetryExhausted {
        package: String,
        attempts: u32,
        #[source]
        source: FetchError,
    },

    #[error("Failed to resolve license for package '{package}'")]
    FetchFailed {
        package: String,
        #[source]
        source: FetchError,
    },
}

impl ResolveError {
    pub fn package(&self) -> &str {
        match self {
            ResolveError::RetryExhausted { package, .. } => package,
            ResolveError::FetchFailed { package, .. } => package,
        }
    }
}
