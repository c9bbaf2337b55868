//! File-backed username store.
//!
//! The file holds the username as plain text and nothing else.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::domain::{StorageError, UsernameStore};

/// Directory under `$HOME` used when no explicit path is configured
const DEFAULT_DIR: &str = ".netmingle";
const DEFAULT_FILE: &str = "username";

/// Stores the username in a single text file
#[derive(Debug, Clone)]
pub struct FileUsernameStore {
    path: PathBuf,
}

impl FileUsernameStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$HOME/.netmingle/username`, or `./.netmingle/username` without `HOME`.
    pub fn default_path() -> PathBuf {
        let home = std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        home.join(DEFAULT_DIR).join(DEFAULT_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl UsernameStore for FileUsernameStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let username = contents.trim();
                Ok((!username.is_empty()).then(|| username.to_string()))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read {
                path: self.path.display().to_string(),
                source,
            }),
        }
    }

    fn save(&self, username: &str) -> Result<(), StorageError> {
        let write_error = |source| StorageError::Write {
            path: self.path.display().to_string(),
            source,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
        fs::write(&self.path, username).map_err(write_error)?;
        tracing::debug!("Saved username to {}", self.path.display());
        Ok(())
    }
}
