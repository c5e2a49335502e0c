//! Metadata records returned by stat and typed directory listings.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::ffi::OsString;
use std::fs::{FileType, Metadata};
use std::time::SystemTime;

/// File metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct FileStat {
    /// Size in bytes.
    pub size: u64,
    /// Whether this is a directory.
    pub is_dir: bool,
    /// Whether this is a regular file.
    pub is_file: bool,
    /// Whether this is a symlink. Only ever true for `lstat`.
    pub is_symlink: bool,
    /// Whether the read-only permission flag is set.
    pub readonly: bool,
    /// Last modification time, if the platform reports it.
    pub modified: Option<SystemTime>,
    /// Last access time, if the platform reports it.
    pub accessed: Option<SystemTime>,
    /// Creation time, if the platform reports it.
    pub created: Option<SystemTime>,
    /// Unix permission bits including the file type.
    pub mode: Option<u32>,
}

impl From<&Metadata> for FileStat {
    fn from(metadata: &Metadata) -> Self {
        #[cfg(unix)]
        let mode = {
            use std::os::unix::fs::PermissionsExt;
            Some(metadata.permissions().mode())
        };
        #[cfg(not(unix))]
        let mode = None;

        Self {
            size: metadata.len(),
            is_dir: metadata.is_dir(),
            is_file: metadata.is_file(),
            is_symlink: metadata.file_type().is_symlink(),
            readonly: metadata.permissions().readonly(),
            modified: metadata.modified().ok(),
            accessed: metadata.accessed().ok(),
            created: metadata.created().ok(),
            mode,
        }
    }
}

/// Kind of a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file.
    File,
    /// Directory.
    Dir,
    /// Symbolic link (not followed).
    Symlink,
    /// Socket, FIFO, device and so on.
    Other,
}

impl From<FileType> for EntryKind {
    fn from(file_type: FileType) -> Self {
        if file_type.is_symlink() {
            Self::Symlink
        } else if file_type.is_dir() {
            Self::Dir
        } else if file_type.is_file() {
            Self::File
        } else {
            Self::Other
        }
    }
}

/// A directory entry with its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    /// Entry name, lossily decoded.
    pub name: String,
    /// Entry name exactly as the OS returned it.
    pub file_name: OsString,
    /// Entry kind.
    pub kind: EntryKind,
}
