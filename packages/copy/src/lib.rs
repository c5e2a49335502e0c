//! Single file copying with destination directory creation.
//!
//! This crate provides the blocking copy primitive used by `asfs`:
//!
//! * Optional creation of the destination's missing parent directories
//! * Copy-on-write support via `reflink-copy` (APFS, Btrfs, `ReFS`)
//! * Fallback to a plain byte copy, overwriting any existing target
//!
//! # Example
//!
//! ```rust,ignore
//! use asfs_copy::{CopyFileOptions, copy_file};
//!
//! copy_file(source, target, &CopyFileOptions { mkdirp: true })?;
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod copy;
mod error;

pub use copy::{CopyFileOptions, copy_file};
pub use error::CopyError;
