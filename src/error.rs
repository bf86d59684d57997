//! Error types for binup operations.
//!
//! This module defines [`BinupError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `BinupError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `BinupError::Other`) for unexpected errors
//! - Nothing in the update subsystem exits the process; errors are returned
//!   and the CLI layer decides the exit code

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for binup operations.
#[derive(Debug, Error)]
pub enum BinupError {
    /// A version string could not be parsed.
    #[error("failed to parse version {raw}: {reason}")]
    InvalidVersionFormat { raw: String, reason: String },

    /// The running binary does not carry a usable version.
    #[error("getting semver version: {source}; is this a dev build?")]
    VersionUnavailable {
        #[source]
        source: Box<BinupError>,
    },

    /// Resolving the latest release failed.
    #[error("getting latest version: {source}")]
    LatestVersion {
        #[source]
        source: Box<BinupError>,
    },

    /// Transport-level failure talking to a remote server.
    #[error("Request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The organization, repository, or its latest release does not exist.
    #[error("No published release found for {org}/{repo}")]
    NotFound { org: String, repo: String },

    /// The release API answered with an unexpected status.
    #[error("Looking up the latest release of {org}/{repo} failed with status {status}")]
    ReleaseLookup { org: String, repo: String, status: u16 },

    /// The release API answered with a body that could not be decoded.
    #[error("Unexpected response from {url}: {message}")]
    InvalidResponse { url: String, message: String },

    /// A binary download returned a non-200 status.
    #[error("download of {url} failed with return code {status}")]
    Download { url: String, status: u16 },

    /// A filesystem step of an install failed.
    #[error("{message}: {path}")]
    Filesystem {
        path: PathBuf,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Looking up a binary on the search path or install directory failed.
    #[error("Could not look up '{name}': {message}")]
    Lookup { name: String, message: String },

    /// The confirmation prompt could not read an answer.
    #[error("Prompt failed: {message}")]
    Prompt { message: String },

    /// The user configuration file is invalid.
    #[error("Failed to parse config at {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BinupError {
    /// Build a [`BinupError::Filesystem`] for an IO failure on `path`.
    pub fn filesystem(
        path: impl Into<PathBuf>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Self::Filesystem {
            path: path.into(),
            message: message.into(),
            source,
        }
    }

    /// Build a [`BinupError::Network`] for a failed request to `url`.
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }
}

/// Result type alias for binup operations.
pub type Result<T> = std::result::Result<T, BinupError>;
