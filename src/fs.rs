use std::io::{self, Write};
use std::path::Path;

pub trait FileSystem {
    /// Reads the entire contents of a file into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, cannot be read, or contains invalid UTF-8.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Reads the entire contents of a file as raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or cannot be read.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Writes `contents` to a new file, failing with `AlreadyExists` if `path` is taken.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists already or cannot be created or written.
    fn write_new(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Replaces `path` with `contents`, readable and writable by the owner only.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created, written or moved into place.
    fn write_private(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Creates a directory and all of its parent components if they are missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Returns `true` if the path points to an existing entity.
    fn exists(&self, path: &Path) -> bool;
}

pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn write_new(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)?;
        file.write_all(contents)?;
        file.sync_all()
    }

    fn write_private(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        crate::atomic::atomic_write_private(path, contents)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn exists(&self, path: &Path) -> bool {
        std::fs::metadata(path).is_ok()
    }
}
