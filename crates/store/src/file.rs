//! File-backed key-value store.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::store::{KeyValueStore, StoreError};

/// Key-value store holding one file per key under a data directory.
///
/// Key `k` lives at `{dir}/k.json`. Writes create the directory on demand.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Open the store at the OS-conventional location:
    /// `{app_data_dir}/towelshop`.
    pub fn open_default() -> Result<Self, StoreError> {
        let base = dirs::data_dir()
            .or_else(|| {
                dirs::home_dir().map(|mut h| {
                    h.push(".local");
                    h.push("share");
                    h
                })
            })
            .ok_or_else(|| {
                StoreError::Unavailable(
                    "failed to resolve OS app data directory - tried data_dir() and home_dir()/.local/share"
                        .to_string(),
                )
            })?;

        let mut dir = base;
        dir.push("towelshop");
        Ok(Self::new(dir))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.key_path(key)) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.key_path(key);
        std::fs::write(&path, value)?;
        tracing::debug!(key, path = %path.display(), "wrote store entry");
        Ok(())
    }
}
