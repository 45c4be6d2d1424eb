//! File-backed key-value store
//!
//! Each key lives in `{dir}/{key}.json`. Readers and writers of a key
//! coordinate through an `fs2` lock on the `{dir}/{key}.lock` sidecar:
//! `get` holds it shared, `set` holds it exclusive across the temp write
//! and the rename. The rename alone already keeps readers from seeing a
//! half-written value.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use super::kv::{validate_key, KeyValueStore, StoreError};

/// Store for string values, one file per key
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir` (created lazily on first write)
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the directory holding the value files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file that holds `key`
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }

    /// Returns the lock file guarding `key`
    pub fn lock_path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.lock", key)))
    }

    fn open_lock(&self, key: &str) -> Result<(File, PathBuf), StoreError> {
        let lock_path = self.lock_path_for(key)?;
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|source| StoreError::Lock {
                path: lock_path.clone(),
                source,
            })?;
        Ok((file, lock_path))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }

        let (lock, lock_path) = self.open_lock(key)?;
        lock.lock_shared()
            .map_err(|source| StoreError::Lock { path: lock_path, source })?;

        // A writer may have replaced the file while we waited
        let content = match fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(source) => return Err(StoreError::Read { path, source }),
        };

        // Lock is released when `lock` is dropped
        Ok(content)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;

        fs::create_dir_all(&self.dir).map_err(|source| StoreError::Write {
            path: self.dir.clone(),
            source,
        })?;

        let (lock, lock_path) = self.open_lock(key)?;
        lock.lock_exclusive()
            .map_err(|source| StoreError::Lock { path: lock_path, source })?;

        // Write to temp file first
        let temp_path = path.with_extension("json.tmp");
        let write_err = |source| StoreError::Write {
            path: temp_path.clone(),
            source,
        };

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .map_err(write_err)?;

            let mut writer = BufWriter::new(&file);
            writer.write_all(value.as_bytes()).map_err(write_err)?;
            writer.flush().map_err(write_err)?;
        }

        // Atomic rename
        fs::rename(&temp_path, &path).map_err(|source| StoreError::Write { path, source })?;

        drop(lock);
        Ok(())
    }
}
