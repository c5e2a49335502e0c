//! Glob pattern enumeration for asfs.
//!
//! This crate resolves a shell-style glob pattern against a directory tree and
//! returns the matching paths relative to the tree root:
//!
//! * Sorted traversal using `jwalk`, directories before their contents
//! * Pattern matching using `globset` (`*` stays inside one path component,
//!   `**` crosses directories)
//! * Ignore patterns and opt-in dotfile matching
//!
//! # Example
//!
//! ```rust,ignore
//! use asfs_glob::{GlobOptions, glob};
//!
//! let options = GlobOptions {
//!     ignore: vec!["target/**".to_string()],
//!     dot: true,
//!     ..GlobOptions::new("/path/to/project")
//! };
//!
//! for relative in glob("**/*.rs", &options)? {
//!     println!("{}", relative.display());
//! }
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod pattern;
mod walk;

pub use error::GlobError;
pub use pattern::{IgnoreSet, Pattern};
pub use walk::{GlobOptions, glob};
