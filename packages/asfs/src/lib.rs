//! Async filesystem helpers.
//!
//! This crate exposes filesystem primitives as async functions on the tokio
//! runtime and builds two copy operations on top of them:
//!
//! * Primitives: existence and permission checks, recursive directory
//!   creation, read/write/unlink/stat/rename, directory listing
//! * [`copy_async`]: copy one file, creating missing destination directories
//! * [`copy_dir_async`]: replicate a glob-selected subtree under a new root
//!
//! Boolean checks never fail. Everything else returns [`AsfsError`], which
//! keeps the OS error untouched and classifies it with [`AsfsError::kind`].
//!
//! # Example
//!
//! ```rust,ignore
//! use asfs::{CopyDirOptions, copy_dir_async, read_file_encoded_async, Encoding};
//!
//! let encoded = read_file_encoded_async("tmp/foo/bar.txt", Encoding::Base64).await?;
//!
//! let options = CopyDirOptions {
//!     ignore: vec!["**/*.log".to_string()],
//!     ..CopyDirOptions::default()
//! };
//! copy_dir_async("assets", "dist/assets", &options).await?;
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod access;
mod copy;
mod encoding;
mod error;
mod options;
mod primitives;
mod stat;

pub use access::{can_read_async, can_write_async};
pub use copy::{copy_async, copy_dir_async};
pub use encoding::Encoding;
pub use error::{AsfsError, ErrorKind, Operation};
pub use options::{CopyDirOptions, MATCH_ALL, WriteOptions};
pub use primitives::{
    exists_async, lstat_async, mkdirp_async, read_dir_async, read_dir_entries_async,
    read_dir_os_async, read_file_async, read_file_encoded_async, read_to_string_async,
    rename_async, stat_async, unlink_async, write_file_async, write_file_with_async,
};
pub use stat::{DirEntryInfo, EntryKind, FileStat};
