use crate::config::models::PersistedConfig;
use crate::constants;
use crate::error::Error;
use crate::fs::{FileSystem, OsFileSystem};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Owns the location of `okta.yaml` and every read, backup and write of it.
pub struct ConfigManager<F: FileSystem> {
    fs: F,
    config_dir: PathBuf,
}

impl ConfigManager<OsFileSystem> {
    /// Creates a new `ConfigManager` with the default filesystem and config directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, Error> {
        let config_dir = get_config_dir()?;
        Ok(Self {
            fs: OsFileSystem,
            config_dir,
        })
    }
}

impl<F: FileSystem> ConfigManager<F> {
    pub const fn with_fs(fs: F, config_dir: PathBuf) -> Self {
        Self { fs, config_dir }
    }

    /// Get the configuration directory path
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Full path of `okta.yaml`.
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join(constants::FILE_CONFIG)
    }

    /// Loads the persisted configuration, if one has been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<Option<PersistedConfig>, Error> {
        let path = self.config_path();
        if !self.fs.exists(&path) {
            debug!("No configuration at {}", path.display());
            return Ok(None);
        }
        let content = self.fs.read_to_string(&path)?;
        let config = serde_yaml::from_str(&content)?;
        Ok(Some(config))
    }

    /// Copies an existing `okta.yaml` to `okta.yaml.<unix seconds>`.
    ///
    /// Returns the backup path, or `None` when there was nothing to back up.
    /// The original file is left untouched and an existing backup is never
    /// overwritten.
    ///
    /// # Errors
    ///
    /// Returns an error if the existing file cannot be read or the backup
    /// cannot be created.
    pub fn backup_if_exists(&self) -> Result<Option<PathBuf>, Error> {
        self.backup_at(chrono::Utc::now().timestamp())
    }

    /// [`Self::backup_if_exists`] with an explicit timestamp.
    ///
    /// # Errors
    ///
    /// See [`Self::backup_if_exists`].
    pub fn backup_at(&self, unix_seconds: i64) -> Result<Option<PathBuf>, Error> {
        let path = self.config_path();
        if !self.fs.exists(&path) {
            return Ok(None);
        }

        let contents = self
            .fs
            .read(&path)
            .map_err(|e| Error::backup_failed(&path, e))?;

        for collision in 0..=u32::from(u16::MAX) {
            let candidate = backup_path(&path, unix_seconds, collision);
            match self.fs.write_new(&candidate, &contents) {
                Ok(()) => {
                    info!("Backed up {} to {}", path.display(), candidate.display());
                    return Ok(Some(candidate));
                }
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    debug!("Backup {} already exists", candidate.display());
                }
                Err(e) => return Err(Error::backup_failed(&candidate, e)),
            }
        }

        Err(Error::backup_failed(&path, "no free backup name"))
    }

    /// Replaces `okta.yaml` with the given organization URL and token.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file cannot be written.
    pub fn write_client_config(&self, org_url: &str, token: &str) -> Result<PathBuf, Error> {
        self.save(&PersistedConfig::new(org_url, token))
    }

    /// Serializes `config` to YAML and replaces `okta.yaml` with owner-only permissions.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized or written.
    pub fn save(&self, config: &PersistedConfig) -> Result<PathBuf, Error> {
        let path = self.config_path();

        self.fs
            .create_dir_all(&self.config_dir)
            .map_err(|e| Error::config_write_failed(&self.config_dir, e))?;

        let content = serde_yaml::to_string(config)?;

        self.fs
            .write_private(&path, content.as_bytes())
            .map_err(|e| Error::config_write_failed(&path, e))?;

        info!("Wrote configuration to {}", path.display());
        Ok(path)
    }
}

fn backup_path(path: &Path, unix_seconds: i64, collision: u32) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(format!(".{unix_seconds}"));
    if collision > 0 {
        name.push(format!(".{collision}"));
    }
    PathBuf::from(name)
}

/// Resolves the configuration directory: `OKTA_CLI_CONFIG_DIR`, else `~/.okta`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn get_config_dir() -> Result<PathBuf, Error> {
    if let Ok(dir) = std::env::var(constants::ENV_CONFIG_DIR) {
        return Ok(PathBuf::from(dir));
    }
    let home_dir = dirs::home_dir().ok_or_else(Error::home_directory_not_found)?;
    Ok(home_dir.join(constants::DIR_CONFIG))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use tempfile::TempDir;

    /// In-memory filesystem for exercising collision and failure paths.
    #[derive(Default)]
    struct MemoryFs {
        files: RefCell<HashMap<PathBuf, Vec<u8>>>,
        fail_writes: bool,
    }

    impl FileSystem for MemoryFs {
        fn read_to_string(&self, path: &Path) -> io::Result<String> {
            let bytes = self.read(path)?;
            String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
        }

        fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
            self.files
                .borrow()
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
        }

        fn write_new(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
            if self.fail_writes {
                return Err(io::Error::from(io::ErrorKind::PermissionDenied));
            }
            let mut files = self.files.borrow_mut();
            if files.contains_key(path) {
                return Err(io::Error::from(io::ErrorKind::AlreadyExists));
            }
            files.insert(path.to_path_buf(), contents.to_vec());
            Ok(())
        }

        fn write_private(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
            if self.fail_writes {
                return Err(io::Error::from(io::ErrorKind::PermissionDenied));
            }
            self.files
                .borrow_mut()
                .insert(path.to_path_buf(), contents.to_vec());
            Ok(())
        }

        fn create_dir_all(&self, _path: &Path) -> io::Result<()> {
            Ok(())
        }

        fn exists(&self, path: &Path) -> bool {
            self.files.borrow().contains_key(path)
        }
    }

    fn memory_manager(fs: MemoryFs) -> ConfigManager<MemoryFs> {
        ConfigManager::with_fs(fs, PathBuf::from("/home/ada/.okta"))
    }

    #[test]
    fn test_backup_path_appends_timestamp() {
        let path = Path::new("/home/ada/.okta/okta.yaml");
        assert_eq!(
            backup_path(path, 1_700_000_000, 0),
            PathBuf::from("/home/ada/.okta/okta.yaml.1700000000")
        );
        assert_eq!(
            backup_path(path, 1_700_000_000, 2),
            PathBuf::from("/home/ada/.okta/okta.yaml.1700000000.2")
        );
    }

    #[test]
    fn test_backup_never_overwrites_existing_backup() {
        let manager = memory_manager(MemoryFs::default());
        manager.write_client_config("https://a.okta.com", "one").unwrap();

        let first = manager.backup_at(42).unwrap().unwrap();
        let second = manager.backup_at(42).unwrap().unwrap();

        assert_eq!(first, PathBuf::from("/home/ada/.okta/okta.yaml.42"));
        assert_eq!(second, PathBuf::from("/home/ada/.okta/okta.yaml.42.1"));
    }

    #[test]
    fn test_backup_write_failure_is_reported() {
        let fs = MemoryFs::default();
        fs.files.borrow_mut().insert(
            PathBuf::from("/home/ada/.okta/okta.yaml"),
            b"okta: {}\n".to_vec(),
        );
        let manager = memory_manager(MemoryFs {
            files: fs.files,
            fail_writes: true,
        });

        let err = manager.backup_at(7).unwrap_err();
        assert!(err.to_string().contains("Failed to back up"));
    }

    #[test]
    fn test_write_failure_is_reported() {
        let manager = memory_manager(MemoryFs {
            fail_writes: true,
            ..MemoryFs::default()
        });

        let err = manager
            .write_client_config("https://a.okta.com", "t")
            .unwrap_err();
        assert!(err.to_string().contains("Failed to write configuration"));
    }

    #[test]
    fn test_load_missing_config_is_none() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_fs(OsFileSystem, dir.path().to_path_buf());
        assert!(manager.load().unwrap().is_none());
    }

    #[test]
    fn test_save_creates_config_directory() {
        let dir = TempDir::new().unwrap();
        let config_dir = dir.path().join("nested").join(".okta");
        let manager = ConfigManager::with_fs(OsFileSystem, config_dir.clone());

        let path = manager
            .write_client_config("https://a.okta.com", "t")
            .unwrap();

        assert_eq!(path, config_dir.join("okta.yaml"));
        assert!(path.exists());
    }
}
