//! Read and write permission checks.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Access {
    Read,
    Write,
}

/// Check whether the current process may write to `path`.
///
/// Never fails: every error, including a missing path, yields `false`.
pub async fn can_write_async(path: impl AsRef<Path>) -> bool {
    check_access(path.as_ref().to_path_buf(), Access::Write).await
}

/// Check whether the current process may read `path`.
///
/// Never fails: every error, including a missing path, yields `false`.
pub async fn can_read_async(path: impl AsRef<Path>) -> bool {
    check_access(path.as_ref().to_path_buf(), Access::Read).await
}

async fn check_access(path: PathBuf, access: Access) -> bool {
    tokio::task::spawn_blocking(move || {
        let allowed = access_blocking(&path, access);
        log::trace!("{access:?} access to {}: {allowed}", path.display());
        allowed
    })
    .await
    .unwrap_or(false)
}

#[cfg(unix)]
fn access_blocking(path: &Path, access: Access) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    let mode = match access {
        Access::Read => libc::R_OK,
        Access::Write => libc::W_OK,
    };

    // SAFETY: `c_path` is a valid NUL-terminated string that outlives the call.
    unsafe { libc::access(c_path.as_ptr(), mode) == 0 }
}

#[cfg(not(unix))]
fn access_blocking(path: &Path, access: Access) -> bool {
    match access {
        Access::Read => std::fs::metadata(path).is_ok_and(|metadata| {
            if metadata.is_dir() {
                std::fs::read_dir(path).is_ok()
            } else {
                std::fs::File::open(path).is_ok()
            }
        }),
        Access::Write => {
            std::fs::metadata(path).is_ok_and(|metadata| !metadata.permissions().readonly())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_existing_file_is_readable_and_writable() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("bar.txt");
        std::fs::write(&file, "This is bar").unwrap();

        assert!(can_read_async(&file).await);
        assert!(can_write_async(&file).await);
        assert!(can_read_async(dir.path()).await);
    }

    #[tokio::test]
    async fn test_missing_path_is_false() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.txt");

        assert!(!can_read_async(&missing).await);
        assert!(!can_write_async(&missing).await);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_interior_nul_is_false() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new(OsStr::from_bytes(b"bad\0path"));

        assert!(!can_read_async(path).await);
        assert!(!can_write_async(path).await);
    }
}
