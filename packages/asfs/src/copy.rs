//! Single file and directory tree copying.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

use asfs_copy::CopyFileOptions;
use asfs_glob::GlobOptions;

use crate::error::AsfsError;
use crate::options::CopyDirOptions;
use crate::primitives::{mkdirp_async, stat_async};

/// Copy a file, creating the destination's missing parent directories.
///
/// An existing destination is overwritten.
///
/// # Arguments
///
/// * `src` - Source file path
/// * `dest` - Destination file path
///
/// # Errors
///
/// * If `src` does not exist
/// * If a destination directory cannot be created
/// * If the copy operation fails
pub async fn copy_async(src: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<(), AsfsError> {
    let src = src.as_ref().to_path_buf();
    let dest = dest.as_ref().to_path_buf();

    tokio::task::spawn_blocking(move || {
        asfs_copy::copy_file(&src, &dest, &CopyFileOptions { mkdirp: true })
    })
    .await??;

    Ok(())
}

/// Copy the entries of `src` selected by `options` into `dest`.
///
/// Matches are enumerated relative to `src` (dotfiles included) and replayed
/// one at a time in enumeration order: directories are created, everything
/// else is copied with [`copy_async`]. The enumerator lists a directory
/// before its contents, so each directory exists before anything is written
/// into it. Existing destination files are overwritten.
///
/// A missing `src` or an empty match set copies nothing and succeeds.
///
/// # Arguments
///
/// * `src` - Source directory
/// * `dest` - Destination root
/// * `options` - Include pattern and ignore patterns
///
/// # Errors
///
/// * If a pattern is invalid or the source tree cannot be walked
/// * If any stat, directory creation or file copy fails (fail-fast; entries
///   already copied stay in place)
pub async fn copy_dir_async(
    src: impl AsRef<Path>,
    dest: impl AsRef<Path>,
    options: &CopyDirOptions,
) -> Result<(), AsfsError> {
    let src = src.as_ref();
    let dest = dest.as_ref();
    log::debug!(
        "Copying directory: {} -> {} (pattern: {:?}, ignore: {:?})",
        src.display(),
        dest.display(),
        options.pattern,
        options.ignore
    );

    let pattern = options.pattern.clone();
    let glob_options = GlobOptions {
        ignore: options.ignore.clone(),
        dot: true,
        ..GlobOptions::new(src)
    };
    let entries =
        tokio::task::spawn_blocking(move || asfs_glob::glob(&pattern, &glob_options)).await??;

    log::debug!("Found {} entries to copy", entries.len());

    for relative in &entries {
        let src_path = src.join(relative);
        let dest_path = dest.join(relative);

        if stat_async(&src_path).await?.is_dir {
            mkdirp_async(&dest_path).await?;
        } else {
            copy_async(&src_path, &dest_path).await?;
        }
        log::trace!("Copied entry {}", relative.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn source_tree(root: &Path) {
        fs::create_dir_all(root.join("config.d")).unwrap();
        fs::create_dir_all(root.join("nested/deeper")).unwrap();
        fs::create_dir_all(root.join("empty")).unwrap();
        fs::write(root.join("bar.txt"), "This is bar").unwrap();
        fs::write(root.join("config.d/.config.txt"), "This is config file").unwrap();
        fs::write(root.join("nested/app.log"), "log line").unwrap();
        fs::write(root.join("nested/deeper/data.bin"), [0_u8, 1, 2, 255]).unwrap();
    }

    /// Relative files and directories under `root`, each sorted.
    fn collect(root: &Path) -> (Vec<PathBuf>, Vec<PathBuf>) {
        let mut files = Vec::new();
        let mut dirs = Vec::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir).unwrap() {
                let path = entry.unwrap().path();
                let relative = path.strip_prefix(root).unwrap().to_path_buf();
                if path.is_dir() {
                    dirs.push(relative);
                    pending.push(path);
                } else {
                    files.push(relative);
                }
            }
        }

        files.sort();
        dirs.sort();
        (files, dirs)
    }

    #[tokio::test]
    async fn test_copy_creates_ancestors() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("source.txt");
        let dest = dir.path().join("dir-copy-file/a/b/hoge.text");
        fs::write(&src, "copied content").unwrap();

        copy_async(&src, &dest).await.unwrap();

        assert_eq!(fs::read(&dest).unwrap(), fs::read(&src).unwrap());
    }

    #[tokio::test]
    async fn test_copy_overwrites() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("source.txt");
        let dest = dir.path().join("dest.txt");
        fs::write(&src, "new").unwrap();
        fs::write(&dest, "old and longer").unwrap();

        copy_async(&src, &dest).await.unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
    }

    #[tokio::test]
    async fn test_copy_missing_source() {
        let dir = TempDir::new().unwrap();

        let err = copy_async(dir.path().join("missing"), dir.path().join("dest"))
            .await
            .unwrap_err();

        assert!(matches!(err, AsfsError::Copy(_)));
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_copy_dir_mirrors_tree() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("foo");
        let dest = dir.path().join("dir-copy-dir");
        source_tree(&src);

        copy_dir_async(&src, &dest, &CopyDirOptions::default())
            .await
            .unwrap();

        let (src_files, src_dirs) = collect(&src);
        let (dest_files, dest_dirs) = collect(&dest);
        assert_eq!(dest_files, src_files);
        assert_eq!(dest_dirs, src_dirs);
        for file in &src_files {
            assert_eq!(fs::read(dest.join(file)).unwrap(), fs::read(src.join(file)).unwrap());
        }
        assert_eq!(
            fs::read_to_string(dest.join("config.d/.config.txt")).unwrap(),
            "This is config file"
        );
        assert!(dest.join("empty").is_dir());
    }

    #[tokio::test]
    async fn test_copy_dir_twice_overwrites() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        let dest = dir.path().join("dest");
        source_tree(&src);

        copy_dir_async(&src, &dest, &CopyDirOptions::default())
            .await
            .unwrap();
        fs::write(src.join("bar.txt"), "changed").unwrap();
        copy_dir_async(&src, &dest, &CopyDirOptions::default())
            .await
            .unwrap();

        assert_eq!(fs::read_to_string(dest.join("bar.txt")).unwrap(), "changed");
        assert_eq!(collect(&dest), collect(&src));
    }

    #[tokio::test]
    async fn test_copy_dir_ignore() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        let dest = dir.path().join("dest");
        source_tree(&src);
        let options = CopyDirOptions {
            ignore: vec!["**/*.log".to_string()],
            ..CopyDirOptions::default()
        };

        copy_dir_async(&src, &dest, &options).await.unwrap();

        assert!(!dest.join("nested/app.log").exists());
        assert!(dest.join("nested/deeper/data.bin").exists());
        assert!(dest.join("bar.txt").exists());
        assert!(dest.join("config.d/.config.txt").exists());
    }

    #[tokio::test]
    async fn test_copy_dir_ignored_subtree_root_not_created() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        let dest = dir.path().join("dest");
        fs::create_dir_all(src.join("build/obj")).unwrap();
        fs::write(src.join("keep.txt"), "keep").unwrap();
        fs::write(src.join("build/obj/a.o"), "object").unwrap();
        let options = CopyDirOptions {
            ignore: vec!["build/**".to_string()],
            ..CopyDirOptions::default()
        };

        copy_dir_async(&src, &dest, &options).await.unwrap();

        assert!(dest.join("keep.txt").exists());
        assert!(!dest.join("build").exists());
    }

    #[tokio::test]
    async fn test_copy_dir_subtree_pattern_creates_empty_root() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        let dest = dir.path().join("dest");
        fs::create_dir_all(src.join("assets")).unwrap();
        fs::write(src.join("other.txt"), "other").unwrap();
        let options = CopyDirOptions {
            pattern: "assets/**".to_string(),
            ..CopyDirOptions::default()
        };

        copy_dir_async(&src, &dest, &options).await.unwrap();

        assert!(dest.join("assets").is_dir());
        assert!(!dest.join("other.txt").exists());
    }

    #[tokio::test]
    async fn test_copy_dir_pattern() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        let dest = dir.path().join("dest");
        source_tree(&src);
        let options = CopyDirOptions {
            pattern: "**/*.txt".to_string(),
            ..CopyDirOptions::default()
        };

        copy_dir_async(&src, &dest, &options).await.unwrap();

        let (files, _) = collect(&dest);
        assert_eq!(
            files,
            vec![PathBuf::from("bar.txt"), PathBuf::from("config.d/.config.txt")]
        );
        assert!(!dest.join("empty").exists());
    }

    #[tokio::test]
    async fn test_copy_dir_empty_match() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        let dest = dir.path().join("dest");
        source_tree(&src);
        let options = CopyDirOptions {
            pattern: "**/*.nothing".to_string(),
            ..CopyDirOptions::default()
        };

        copy_dir_async(&src, &dest, &options).await.unwrap();

        assert!(!dest.exists());
    }

    #[tokio::test]
    async fn test_copy_dir_missing_source() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("dest");

        copy_dir_async(dir.path().join("missing"), &dest, &CopyDirOptions::default())
            .await
            .unwrap();

        assert!(!dest.exists());
    }

    #[tokio::test]
    async fn test_copy_dir_invalid_pattern() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        source_tree(&src);
        let options = CopyDirOptions {
            pattern: "[".to_string(),
            ..CopyDirOptions::default()
        };

        let err = copy_dir_async(&src, dir.path().join("dest"), &options)
            .await
            .unwrap_err();

        assert!(matches!(err, AsfsError::Glob(_)));
    }

    #[tokio::test]
    async fn test_copy_dir_fails_when_dest_blocked() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        let dest = dir.path().join("dest");
        source_tree(&src);
        // A file where the `nested` directory should go
        fs::create_dir_all(&dest).unwrap();
        fs::write(dest.join("nested"), "blocker").unwrap();

        let err = copy_dir_async(&src, &dest, &CopyDirOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AsfsError::Io { .. }));
        // Entries sorted before `nested` were already applied
        assert!(dest.join("bar.txt").exists());
        assert!(dest.join("config.d/.config.txt").exists());
    }
}
