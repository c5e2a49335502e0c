//! Compiled glob patterns.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use globset::{GlobBuilder, GlobMatcher, GlobSet, GlobSetBuilder};

use crate::error::GlobError;

/// A compiled include pattern.
///
/// A trailing `/**` also matches the directory it names, so `assets/**`
/// selects `assets` itself as well as everything below it.
#[derive(Debug, Clone)]
pub struct Pattern {
    original: String,
    matcher: GlobMatcher,
    subtree_root: Option<GlobMatcher>,
    dot_segments: Vec<GlobMatcher>,
}

impl Pattern {
    /// Compile a glob pattern.
    ///
    /// # Errors
    ///
    /// * If the pattern is not a valid glob
    pub fn new(pattern: &str) -> Result<Self, GlobError> {
        let matcher = build_glob(pattern)?.compile_matcher();
        let subtree_root = match subtree_root(pattern) {
            Some(root) => Some(build_glob(root)?.compile_matcher()),
            None => None,
        };

        // Segments like `.env` or `.cache` ask for dotted names explicitly.
        // Segments that only compile as part of the whole pattern are skipped.
        let dot_segments = pattern
            .split('/')
            .filter(|segment| segment.starts_with('.') && *segment != "." && *segment != "..")
            .filter_map(|segment| build_glob(segment).ok())
            .map(|glob| glob.compile_matcher())
            .collect();

        Ok(Self {
            original: pattern.to_string(),
            matcher,
            subtree_root,
            dot_segments,
        })
    }

    /// The pattern as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// Whether every dotted component of a `/`-separated relative path is
    /// named by a dotted segment of the pattern.
    ///
    /// Used when dotfiles are hidden: `**/.env` admits `.env` and `dir/.env`
    /// but not `.hidden/.env`.
    #[must_use]
    pub fn names_dotted_components(&self, relative: &str) -> bool {
        relative
            .split('/')
            .filter(|component| component.starts_with('.'))
            .all(|component| self.dot_segments.iter().any(|m| m.is_match(component)))
    }

    /// Check a `/`-separated relative path against the pattern.
    #[must_use]
    pub fn is_match(&self, relative: &str) -> bool {
        self.matcher.is_match(relative)
            || self
                .subtree_root
                .as_ref()
                .is_some_and(|root| root.is_match(relative))
    }
}

/// A compiled set of ignore patterns.
///
/// A trailing `/**` ignores the directory it names together with its
/// contents.
#[derive(Debug, Clone)]
pub struct IgnoreSet {
    set: GlobSet,
}

impl IgnoreSet {
    /// Compile ignore patterns into a single matcher.
    ///
    /// # Errors
    ///
    /// * If any pattern is not a valid glob
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, GlobError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            builder.add(build_glob(pattern)?);
            if let Some(root) = subtree_root(pattern) {
                builder.add(build_glob(root)?);
            }
        }

        let set = builder.build().map_err(|e| GlobError::InvalidPattern {
            pattern: patterns
                .iter()
                .map(|p| p.as_ref())
                .collect::<Vec<&str>>()
                .join(", "),
            source: e,
        })?;

        Ok(Self { set })
    }

    /// Whether no ignore patterns were given.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Check a `/`-separated relative path against every ignore pattern.
    #[must_use]
    pub fn is_ignored(&self, relative: &str) -> bool {
        self.set.is_match(relative)
    }
}

/// The directory part of a pattern ending in `/**`, if any.
fn subtree_root(pattern: &str) -> Option<&str> {
    pattern
        .strip_suffix("/**")
        .filter(|root| !root.is_empty())
}

fn build_glob(pattern: &str) -> Result<globset::Glob, GlobError> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|e| GlobError::InvalidPattern {
            pattern: pattern.to_string(),
            source: e,
        })
}
