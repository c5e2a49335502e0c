//! Directory traversal and glob resolution.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Component, Path, PathBuf};

use crate::error::GlobError;
use crate::pattern::{IgnoreSet, Pattern};

/// Options controlling glob resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobOptions {
    /// Directory the pattern is resolved against. Results are relative to it.
    pub cwd: PathBuf,
    /// Patterns whose matches are dropped from the result.
    pub ignore: Vec<String>,
    /// Whether `*` and `**` also match names starting with `.`.
    pub dot: bool,
    /// Whether to descend into symlinked directories.
    pub follow_links: bool,
}

impl GlobOptions {
    /// Options rooted at `cwd`, with no ignores and dotfiles hidden.
    #[must_use]
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            ..Self::default()
        }
    }
}

impl Default for GlobOptions {
    fn default() -> Self {
        Self {
            cwd: PathBuf::from("."),
            ignore: Vec::new(),
            dot: false,
            follow_links: false,
        }
    }
}

/// Resolve `pattern` under `options.cwd`.
///
/// Returns paths relative to `cwd` in pre-order: a directory always comes
/// before anything inside it. Siblings are sorted by name. The root itself is
/// never returned. A missing `cwd` resolves to an empty list.
///
/// # Arguments
///
/// * `pattern` - Glob pattern matched against `/`-separated relative paths
/// * `options` - Root directory, ignore patterns and dotfile handling
///
/// # Errors
///
/// * If `pattern` or any ignore pattern is invalid
/// * If a directory under `cwd` cannot be read
pub fn glob(pattern: &str, options: &GlobOptions) -> Result<Vec<PathBuf>, GlobError> {
    log::debug!(
        "Resolving glob {:?} in {} (ignore: {:?}, dot: {})",
        pattern,
        options.cwd.display(),
        options.ignore,
        options.dot
    );

    let pattern = Pattern::new(pattern)?;
    let ignore = IgnoreSet::new(&options.ignore)?;
    let root = options.cwd.as_path();

    if !root.exists() {
        log::debug!("Glob root does not exist: {}", root.display());
        return Ok(Vec::new());
    }

    let mut matches = Vec::new();

    for entry in jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .sort(true)
        .follow_links(options.follow_links)
    {
        let entry = entry.map_err(|e| walk_error(root, e))?;

        // The root is the base, not a match
        if entry.depth == 0 {
            continue;
        }

        let path = entry.path();
        let Ok(relative) = path.strip_prefix(root) else {
            log::trace!("Skipping {} outside of glob root", path.display());
            continue;
        };

        let candidate = to_slash(relative);

        if !options.dot
            && has_dot_component(relative)
            && !pattern.names_dotted_components(&candidate)
        {
            continue;
        }

        if !pattern.is_match(&candidate) {
            continue;
        }

        if !ignore.is_empty() && ignore.is_ignored(&candidate) {
            log::trace!("Ignoring {candidate}");
            continue;
        }

        matches.push(relative.to_path_buf());
    }

    log::debug!("Glob matched {} paths", matches.len());

    Ok(matches)
}

fn walk_error(root: &Path, error: jwalk::Error) -> GlobError {
    let message = error.to_string();
    let path = error.path().map_or_else(|| root.to_path_buf(), Path::to_path_buf);
    let io_error = error
        .io_error()
        .map(|e| std::io::Error::new(e.kind(), e.to_string()));

    GlobError::Walk {
        path,
        message,
        io_error,
    }
}

fn has_dot_component(relative: &Path) -> bool {
    relative.components().any(|component| match component {
        Component::Normal(name) => name.to_string_lossy().starts_with('.'),
        _ => false,
    })
}

fn to_slash(relative: &Path) -> String {
    relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
