//! Option types for writes and directory copies.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use serde::{Deserialize, Serialize};

/// Pattern that selects every file and directory at any depth.
pub const MATCH_ALL: &str = "**/*";

/// Options for [`copy_dir_async`](crate::copy_dir_async).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CopyDirOptions {
    /// Glob selecting what to copy, relative to the source root. Dotfiles
    /// are always eligible.
    pub pattern: String,

    /// Globs excluding relative paths from the copy.
    pub ignore: Vec<String>,
}

impl Default for CopyDirOptions {
    fn default() -> Self {
        Self {
            pattern: MATCH_ALL.to_string(),
            ignore: Vec::new(),
        }
    }
}

/// Options for [`write_file_with_async`](crate::write_file_with_async).
///
/// The default truncates an existing file or creates a new one with the OS
/// default permissions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// Append to the end of the file instead of truncating it.
    pub append: bool,
    /// Fail with `AlreadyExists` if the file is already there.
    pub create_new: bool,
    /// Permission bits for a newly created file. Ignored off Unix.
    pub mode: Option<u32>,
}
