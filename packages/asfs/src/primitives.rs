//! Async wrappers around filesystem primitives.
//!
//! Each function maps one-to-one onto an OS call. Failures carry the
//! unchanged [`std::io::Error`] inside [`AsfsError::Io`].

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::ffi::OsString;
use std::path::Path;

use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::encoding::Encoding;
use crate::error::{AsfsError, Operation};
use crate::options::WriteOptions;
use crate::stat::{DirEntryInfo, EntryKind, FileStat};

/// Check whether a path exists, following symlinks.
///
/// Never fails: a missing path, a dangling symlink or a path that cannot be
/// inspected all yield `false`.
pub async fn exists_async(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    let exists = fs::try_exists(path).await.unwrap_or(false);
    log::trace!("exists {}: {exists}", path.display());
    exists
}

/// Create a directory and all missing ancestors.
///
/// Succeeds when the directory already exists.
///
/// # Errors
///
/// * If a component of the path exists and is not a directory
/// * If a directory cannot be created
pub async fn mkdirp_async(path: impl AsRef<Path>) -> Result<(), AsfsError> {
    let path = path.as_ref();
    log::debug!("Creating directory: {}", path.display());

    fs::create_dir_all(path)
        .await
        .map_err(|e| AsfsError::io(Operation::Mkdirp, path, e))
}

/// Read a whole file as bytes.
///
/// # Errors
///
/// * If the file does not exist or cannot be read
pub async fn read_file_async(path: impl AsRef<Path>) -> Result<Vec<u8>, AsfsError> {
    let path = path.as_ref();
    log::trace!("Reading file: {}", path.display());

    fs::read(path)
        .await
        .map_err(|e| AsfsError::io(Operation::ReadFile, path, e))
}

/// Read a whole file and render it as text in `encoding`.
///
/// # Errors
///
/// * If the file does not exist or cannot be read
pub async fn read_file_encoded_async(
    path: impl AsRef<Path>,
    encoding: Encoding,
) -> Result<String, AsfsError> {
    let bytes = read_file_async(path).await?;
    Ok(encoding.decode(&bytes))
}

/// Read a whole file as UTF-8 text, replacing invalid sequences.
///
/// # Errors
///
/// * If the file does not exist or cannot be read
pub async fn read_to_string_async(path: impl AsRef<Path>) -> Result<String, AsfsError> {
    read_file_encoded_async(path, Encoding::Utf8).await
}

/// Write `content` to a file, creating or truncating it.
///
/// Parent directories are not created.
///
/// # Errors
///
/// * If the parent directory is missing
/// * If the file cannot be written
pub async fn write_file_async(
    path: impl AsRef<Path>,
    content: impl AsRef<[u8]>,
) -> Result<(), AsfsError> {
    let path = path.as_ref();
    log::trace!("Writing file: {}", path.display());

    fs::write(path, content)
        .await
        .map_err(|e| AsfsError::io(Operation::WriteFile, path, e))
}

/// Write `content` to a file with explicit open options.
///
/// Parent directories are not created.
///
/// # Errors
///
/// * If the parent directory is missing
/// * If `create_new` is set and the file exists
/// * If the file cannot be written
pub async fn write_file_with_async(
    path: impl AsRef<Path>,
    content: impl AsRef<[u8]>,
    options: &WriteOptions,
) -> Result<(), AsfsError> {
    let path = path.as_ref();
    log::trace!("Writing file: {} ({options:?})", path.display());

    let mut open = fs::OpenOptions::new();
    open.write(true);
    if options.create_new {
        open.create_new(true);
    } else {
        open.create(true);
    }
    if options.append {
        open.append(true);
    } else {
        open.truncate(true);
    }
    #[cfg(unix)]
    {
        if let Some(mode) = options.mode {
            open.mode(mode);
        }
    }

    let write_error = |e: std::io::Error| AsfsError::io(Operation::WriteFile, path, e);

    let mut file = open.open(path).await.map_err(write_error)?;
    file.write_all(content.as_ref()).await.map_err(write_error)?;
    file.flush().await.map_err(write_error)
}

/// Remove a file.
///
/// # Errors
///
/// * If the path does not exist
/// * If the path is a directory
pub async fn unlink_async(path: impl AsRef<Path>) -> Result<(), AsfsError> {
    let path = path.as_ref();
    log::debug!("Removing file: {}", path.display());

    fs::remove_file(path)
        .await
        .map_err(|e| AsfsError::io(Operation::Unlink, path, e))
}

/// Read metadata, following symlinks.
///
/// # Errors
///
/// * If the path does not exist
pub async fn stat_async(path: impl AsRef<Path>) -> Result<FileStat, AsfsError> {
    let path = path.as_ref();

    let metadata = fs::metadata(path)
        .await
        .map_err(|e| AsfsError::io(Operation::Stat, path, e))?;

    Ok(FileStat::from(&metadata))
}

/// Read metadata without following a final symlink.
///
/// # Errors
///
/// * If the path does not exist
pub async fn lstat_async(path: impl AsRef<Path>) -> Result<FileStat, AsfsError> {
    let path = path.as_ref();

    let metadata = fs::symlink_metadata(path)
        .await
        .map_err(|e| AsfsError::io(Operation::Stat, path, e))?;

    Ok(FileStat::from(&metadata))
}

/// Rename a file or directory.
///
/// # Errors
///
/// * If `from` does not exist
/// * If the parent of `to` does not exist
/// * If the OS rejects the rename (for example across filesystems)
pub async fn rename_async(from: impl AsRef<Path>, to: impl AsRef<Path>) -> Result<(), AsfsError> {
    let from = from.as_ref();
    let to = to.as_ref();
    log::debug!("Renaming: {} -> {}", from.display(), to.display());

    fs::rename(from, to)
        .await
        .map_err(|e| AsfsError::Rename {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source: e,
        })
}

/// List the names directly inside a directory, in the order the OS returns them.
///
/// Names that are not valid UTF-8 are decoded lossily; use
/// [`read_dir_os_async`] when the names must be joined back onto `path`.
///
/// # Errors
///
/// * If the path does not exist or is not a directory
pub async fn read_dir_async(path: impl AsRef<Path>) -> Result<Vec<String>, AsfsError> {
    let names = read_dir_os_async(path).await?;

    Ok(names
        .into_iter()
        .map(|name| name.to_string_lossy().into_owned())
        .collect())
}

/// List the names directly inside a directory as raw OS strings.
///
/// # Errors
///
/// * If the path does not exist or is not a directory
pub async fn read_dir_os_async(path: impl AsRef<Path>) -> Result<Vec<OsString>, AsfsError> {
    let path = path.as_ref();
    let mut entries = fs::read_dir(path)
        .await
        .map_err(|e| AsfsError::io(Operation::ReadDir, path, e))?;

    let mut names = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| AsfsError::io(Operation::ReadDir, path, e))?
    {
        names.push(entry.file_name());
    }

    Ok(names)
}

/// List the entries directly inside a directory together with their kind.
///
/// Symlinks are reported as [`EntryKind::Symlink`] and not followed.
///
/// # Errors
///
/// * If the path does not exist or is not a directory
pub async fn read_dir_entries_async(
    path: impl AsRef<Path>,
) -> Result<Vec<DirEntryInfo>, AsfsError> {
    let path = path.as_ref();
    let mut entries = fs::read_dir(path)
        .await
        .map_err(|e| AsfsError::io(Operation::ReadDir, path, e))?;

    let mut infos = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| AsfsError::io(Operation::ReadDir, path, e))?
    {
        let file_type = entry
            .file_type()
            .await
            .map_err(|e| AsfsError::io(Operation::ReadDir, entry.path(), e))?;

        let file_name = entry.file_name();
        infos.push(DirEntryInfo {
            name: file_name.to_string_lossy().into_owned(),
            file_name,
            kind: EntryKind::from(file_type),
        });
    }

    Ok(infos)
}
