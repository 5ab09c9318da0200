//! JSON file store rooted at a data directory

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use tokio::fs;

/// File store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Relative path escapes the store root
    #[error("invalid store path {0:?}: must be relative and must not contain '..'")]
    InvalidPath(PathBuf),
    /// Filesystem failure
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Existing file is not valid JSON for the requested type
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Value could not be serialized
    #[error("failed to serialize value for {path:?}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads and writes pretty-printed JSON documents under a root directory
///
/// Writes are not atomic and concurrent writers are not coordinated.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a relative path under the root
    pub fn resolve(&self, relative: impl AsRef<Path>) -> Result<PathBuf, StoreError> {
        let relative = relative.as_ref();
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));

        if escapes {
            return Err(StoreError::InvalidPath(relative.to_path_buf()));
        }

        Ok(self.root.join(relative))
    }

    /// Serialize `value` to `relative`, creating parent directories
    ///
    /// Overwrites an existing file. Returns the full path written.
    pub async fn write<T>(&self, relative: impl AsRef<Path>, value: &T) -> Result<PathBuf, StoreError>
    where
        T: Serialize + ?Sized,
    {
        let path = self.resolve(relative)?;

        let body = serde_json::to_string_pretty(value).map_err(|source| StoreError::Serialize {
            path: path.clone(),
            source,
        })?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| StoreError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        fs::write(&path, body)
            .await
            .map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;

        tracing::debug!(path = ?path, "Wrote document");
        Ok(path)
    }

    /// Read and parse `relative`; `None` when the file does not exist
    pub async fn read<T>(&self, relative: impl AsRef<Path>) -> Result<Option<T>, StoreError>
    where
        T: DeserializeOwned,
    {
        let path = self.resolve(relative)?;

        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| StoreError::Parse { path, source })
    }

    /// Entry names directly under `relative`, sorted ascending
    ///
    /// Timestamp-named files therefore come back oldest first. A missing
    /// directory yields an empty list.
    pub async fn list_files(&self, relative: impl AsRef<Path>) -> Result<Vec<String>, StoreError> {
        let path = self.resolve(relative)?;

        let mut entries = match fs::read_dir(&path).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        let mut names = Vec::new();
        loop {
            match entries.next_entry().await {
                Ok(Some(entry)) => names.push(entry.file_name().to_string_lossy().into_owned()),
                Ok(None) => break,
                Err(source) => return Err(StoreError::Io { path, source }),
            }
        }

        names.sort();
        Ok(names)
    }

    /// Parse the last entry listed under `relative`
    pub async fn latest<T>(&self, relative: impl AsRef<Path>) -> Result<Option<T>, StoreError>
    where
        T: DeserializeOwned,
    {
        let relative = relative.as_ref();
        match self.list_files(relative).await?.last() {
            Some(name) => self.read(relative.join(name)).await,
            None => Ok(None),
        }
    }
}
