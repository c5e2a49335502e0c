//! Error types for async filesystem operations.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use asfs_copy::CopyError;
use asfs_glob::GlobError;
use thiserror::Error;

/// The primitive that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Recursive directory creation.
    Mkdirp,
    /// Reading a file.
    ReadFile,
    /// Writing a file.
    WriteFile,
    /// Removing a file.
    Unlink,
    /// Reading metadata.
    Stat,
    /// Listing a directory.
    ReadDir,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mkdirp => write!(f, "create directory"),
            Self::ReadFile => write!(f, "read"),
            Self::WriteFile => write!(f, "write"),
            Self::Unlink => write!(f, "remove"),
            Self::Stat => write!(f, "stat"),
            Self::ReadDir => write!(f, "list directory"),
        }
    }
}

/// Coarse classification of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The path does not exist.
    NotFound,
    /// The OS refused access.
    PermissionDenied,
    /// A directory was expected but something else was found.
    NotADirectory,
    /// A file was expected but a directory was found.
    IsADirectory,
    /// Anything else.
    Other,
}

impl From<std::io::ErrorKind> for ErrorKind {
    fn from(kind: std::io::ErrorKind) -> Self {
        match kind {
            std::io::ErrorKind::NotFound => Self::NotFound,
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            std::io::ErrorKind::NotADirectory => Self::NotADirectory,
            std::io::ErrorKind::IsADirectory => Self::IsADirectory,
            _ => Self::Other,
        }
    }
}

/// Errors that can occur during async filesystem operations.
#[derive(Debug, Error)]
pub enum AsfsError {
    /// A filesystem primitive failed.
    #[error("Failed to {op} {}: {source}", path.display())]
    Io {
        /// The primitive that failed.
        op: Operation,
        /// Path the primitive was called with.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Rename failed.
    #[error("Failed to rename {} to {}: {source}", from.display(), to.display())]
    Rename {
        /// Original path.
        from: PathBuf,
        /// Requested new path.
        to: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// File copy failed.
    #[error(transparent)]
    Copy(#[from] CopyError),

    /// Glob enumeration failed.
    #[error(transparent)]
    Glob(#[from] GlobError),

    /// Encoding name not recognized.
    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),

    /// A blocking job panicked or was cancelled.
    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl AsfsError {
    pub(crate) fn io(op: Operation, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            op,
            path: path.into(),
            source,
        }
    }

    /// The OS error behind this failure, if there is one.
    #[must_use]
    pub fn io_error(&self) -> Option<&std::io::Error> {
        match self {
            Self::Io { source, .. } | Self::Rename { source, .. } => Some(source),
            Self::Copy(e) => Some(e.io_error()),
            Self::Glob(e) => e.io_error(),
            Self::UnknownEncoding(_) | Self::Task(_) => None,
        }
    }

    /// Classify the failure.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.io_error()
            .map_or(ErrorKind::Other, |e| ErrorKind::from(e.kind()))
    }
}
