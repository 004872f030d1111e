//! Domain-specific error types.
//!
//! This module defines [`GitSiftError`], the single error type returned by every
//! git-sift operation. It uses `thiserror` for the error definitions and offers
//! small constructors for the variants that carry paths.
//!
//! # Public API
//! - [`GitSiftError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, GitSiftError>`
//!
//! # Error Categories
//! - **Not found**: no repository above the start path, or a path that does not
//!   end with the metadata directory. See [`GitSiftError::is_not_found`].
//! - **Status source**: git2 failures, process spawn failures, non-zero exits and
//!   undecodable output. These keep the original error as their source.
//! - **Configuration**: unreadable or malformed config files

use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitSiftError {
    // Repository discovery errors
    #[error("No git repository found from {start}")]
    RepoNotFound { start: PathBuf },

    #[error("Not a git metadata path: {path}")]
    MissingMetadataSuffix { path: PathBuf },

    // Status source errors
    #[error("Git repository error: {0}")]
    Git(#[from] git2::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Repository has no working directory: {path}")]
    BareRepository { path: PathBuf },

    #[error("git status failed: {message}")]
    StatusCommandFailed { message: String },

    #[error("Invalid UTF-8 in status output: {0}")]
    InvalidUtf8Output(#[from] FromUtf8Error),

    // Configuration errors
    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using GitSiftError
pub type Result<T> = std::result::Result<T, GitSiftError>;

impl GitSiftError {
    /// Create a repository-not-found error for the given start path
    pub fn repo_not_found(start: impl Into<PathBuf>) -> Self {
        Self::RepoNotFound {
            start: start.into(),
        }
    }

    /// Create an error for a path lacking the metadata directory suffix
    pub fn missing_metadata_suffix(path: impl Into<PathBuf>) -> Self {
        Self::MissingMetadataSuffix { path: path.into() }
    }

    /// Create a bare repository error
    pub fn bare_repository(path: impl Into<PathBuf>) -> Self {
        Self::BareRepository { path: path.into() }
    }

    /// Create a status command failure from captured stderr
    pub fn status_command_failed(message: impl Into<String>) -> Self {
        Self::StatusCommandFailed {
            message: message.into(),
        }
    }

    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Whether this error means no repository could be found.
    ///
    /// Callers use this to end a command with a plain message instead of
    /// the full error chain.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::RepoNotFound { .. } | Self::MissingMetadataSuffix { .. }
        )
    }
}
