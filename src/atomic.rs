//! Atomic file replacement for the persisted configuration.
//!
//! Writes go to a temporary sibling file which is then renamed over the
//! target, so a reader never sees a partially written `okta.yaml`.
//!
//! # Cross-Platform Notes
//!
//! - On POSIX systems, `rename(2)` is atomic within the same filesystem and
//!   the temporary file is created with mode `0600` before any byte is written.
//! - On Windows, `std::fs::rename` uses `MoveFileEx` with `MOVEFILE_REPLACE_EXISTING`,
//!   which is atomic for same-volume renames. File modes are not applied.

use std::io::Write;
use std::path::{Path, PathBuf};

/// Write `data` to `path` atomically, restricting the result to the owner.
///
/// The temp file is created in the same directory as `path` to guarantee
/// same-filesystem rename semantics. Any previous content of `path` is
/// replaced, never merged.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory of `path` does not exist.
/// - The temp file cannot be created or written.
/// - The rename operation fails.
pub fn atomic_write_private(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let temp_path = temp_sibling(path);

    if let Err(e) = write_owner_only(&temp_path, data) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(e);
    }

    // Atomically move temp file to target
    if let Err(e) = std::fs::rename(&temp_path, path) {
        // Clean up the temp file on rename failure
        let _ = std::fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(())
}

fn write_owner_only(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut options = std::fs::OpenOptions::new();
    options.write(true).create_new(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    file.write_all(data)?;
    file.sync_all()
}

/// Generate a unique temporary file path as a sibling of `path`.
///
/// Uses `fastrand` for a random suffix to avoid collisions between
/// concurrent writers targeting the same destination.
fn temp_sibling(path: &Path) -> PathBuf {
    let random_suffix = fastrand::u64(..);
    let file_name = path
        .file_name()
        .map_or_else(|| "file".to_string(), |n| n.to_string_lossy().to_string());

    let temp_name = format!(".{file_name}.{random_suffix:016x}.tmp");

    path.with_file_name(temp_name)
}
