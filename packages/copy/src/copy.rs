//! Single file copy implementation.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::path::Path;

use crate::error::CopyError;

/// Options for [`copy_file`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyFileOptions {
    /// Create the target's missing parent directories before copying.
    pub mkdirp: bool,
}

/// Copy a single file, overwriting the target if it exists.
///
/// # Arguments
///
/// * `source` - Source file path
/// * `target` - Target file path
/// * `options` - Whether to create missing parent directories
///
/// # Errors
///
/// * If the source cannot be inspected
/// * If a parent directory cannot be created
/// * If the copy operation fails
pub fn copy_file(
    source: &Path,
    target: &Path,
    options: &CopyFileOptions,
) -> Result<(), CopyError> {
    log::debug!("Copying file: {} -> {}", source.display(), target.display());

    fs::metadata(source).map_err(|e| CopyError::SourceError {
        path: source.to_path_buf(),
        io_error: e,
    })?;

    // Ensure parent directory exists
    if options.mkdirp {
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| CopyError::CreateDirError {
                path: parent.to_path_buf(),
                io_error: e,
            })?;
        }
    }

    copy_file_with_reflink(source, target)
}

/// Copy a single file, trying reflink first then falling back to regular copy.
fn copy_file_with_reflink(source: &Path, target: &Path) -> Result<(), CopyError> {
    // reflink refuses to replace an existing target
    if fs::symlink_metadata(target).is_err() {
        match reflink_copy::reflink(source, target) {
            Ok(()) => {
                log::trace!("Reflinked {} -> {}", source.display(), target.display());
                return Ok(());
            }
            Err(e) => {
                log::trace!("Reflink unavailable ({e}), falling back to copy");
            }
        }
    }

    fs::copy(source, target).map_err(|e| CopyError::FileCopyError {
        source_path: source.to_path_buf(),
        target_path: target.to_path_buf(),
        io_error: e,
    })?;
    log::trace!("Copied {} -> {}", source.display(), target.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;
    use tempfile::TempDir;

    const MKDIRP: CopyFileOptions = CopyFileOptions { mkdirp: true };

    #[test]
    fn test_copy_file_creates_new() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("source.txt");
        let target = dir.path().join("target.txt");

        fs::write(&source, "hello world").unwrap();

        copy_file(&source, &target, &CopyFileOptions::default()).unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "hello world");
    }

    #[test]
    fn test_copy_file_overwrites() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("source.txt");
        let target = dir.path().join("target.txt");

        fs::write(&source, "new content").unwrap();
        fs::write(&target, "old content that is longer").unwrap();

        copy_file(&source, &target, &MKDIRP).unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "new content");
    }

    #[test]
    fn test_copy_file_creates_parents() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("source.bin");
        let target = dir.path().join("a/b/c/target.bin");

        let content: Vec<u8> = (0..=255).collect();
        fs::write(&source, &content).unwrap();

        copy_file(&source, &target, &MKDIRP).unwrap();

        assert!(dir.path().join("a/b/c").is_dir());
        assert_eq!(fs::read(&target).unwrap(), content);
    }

    #[test]
    fn test_copy_file_without_mkdirp_needs_parent() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("source.txt");
        let target = dir.path().join("missing/target.txt");

        fs::write(&source, "content").unwrap();

        let err = copy_file(&source, &target, &CopyFileOptions::default()).unwrap_err();

        assert!(matches!(err, CopyError::FileCopyError { .. }));
        assert_eq!(err.io_error().kind(), ErrorKind::NotFound);
        assert!(!dir.path().join("missing").exists());
    }

    #[test]
    fn test_copy_file_source_not_found() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("nonexistent.txt");
        let target = dir.path().join("out/target.txt");

        let err = copy_file(&source, &target, &MKDIRP).unwrap_err();

        assert!(matches!(err, CopyError::SourceError { .. }));
        assert_eq!(err.io_error().kind(), ErrorKind::NotFound);
        assert!(!target.exists());
    }
}
