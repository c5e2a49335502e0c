//! Error types for glob enumeration.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while resolving a glob pattern.
#[derive(Debug, Error)]
pub enum GlobError {
    /// The pattern could not be compiled.
    #[error("Invalid glob pattern {pattern:?}: {source}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// The underlying globset error.
        #[source]
        source: globset::Error,
    },

    /// Directory traversal failed.
    #[error("Failed to walk directory {}: {message}", path.display())]
    Walk {
        /// The directory being walked.
        path: PathBuf,
        /// Error message from the walker.
        message: String,
        /// The underlying IO error, when the walker reported one.
        #[source]
        io_error: Option<std::io::Error>,
    },
}

impl GlobError {
    /// The underlying IO error, if this failure came from the filesystem.
    #[must_use]
    pub const fn io_error(&self) -> Option<&std::io::Error> {
        match self {
            Self::InvalidPattern { .. } => None,
            Self::Walk { io_error, .. } => io_error.as_ref(),
        }
    }
}
