use anyhow::{Context, Result};
use async_trait::async_trait;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::{fs, task};

use crate::models::Item;

/// Whole-list persistence for the shopping list
///
/// Handlers only ever load the complete list and write the complete list
/// back. Nothing serializes a read against a later write, so two concurrent
/// mutations can overwrite each other (last write wins).
#[async_trait]
pub trait ShoppingListStore: Send + Sync {
    /// Load every stored item, creating an empty list on first use
    async fn read_list(&self) -> Result<Vec<Item>>;

    /// Replace the stored list with `list`
    async fn write_list(&self, list: &[Item]) -> Result<()>;
}

/// Shopping list stored as a pretty-printed JSON array in a single file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    async fn ensure_dir(&self) -> Result<PathBuf> {
        let dir = self.dir();
        fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("Failed to create data directory {}", dir.display()))?;
        Ok(dir)
    }

    /// Create the parent directory and an empty `[]` file if either is missing
    async fn ensure_file(&self) -> Result<()> {
        let dir = self.ensure_dir().await?;

        let exists = fs::try_exists(&self.path)
            .await
            .with_context(|| format!("Failed to check {}", self.path.display()))?;

        if !exists {
            let path = self.path.clone();
            let created = task::spawn_blocking(move || {
                write_atomically(&dir, &path, b"[]", Placement::KeepExisting)
            })
            .await
            .context("Storage task failed")??;

            if created {
                tracing::info!("Initialized empty shopping list at {}", self.path.display());
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    Replace,
    KeepExisting,
}

/// Write `data` to a uniquely named temp file in `dir` and move it to `path`
///
/// Returns `false` when `placement` is `KeepExisting` and `path` already
/// existed, in which case the temp file is discarded.
fn write_atomically(dir: &Path, path: &Path, data: &[u8], placement: Placement) -> Result<bool> {
    let mut temp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
    temp.write_all(data)
        .with_context(|| format!("Failed to write {}", temp.path().display()))?;

    match placement {
        Placement::Replace => {
            temp.persist(path)
                .with_context(|| format!("Failed to replace {}", path.display()))?;
            Ok(true)
        }
        Placement::KeepExisting => match temp.persist_noclobber(path) {
            Ok(_) => Ok(true),
            Err(err) if err.error.kind() == io::ErrorKind::AlreadyExists => Ok(false),
            Err(err) => Err(err)
                .with_context(|| format!("Failed to initialize {}", path.display())),
        },
    }
}

#[async_trait]
impl ShoppingListStore for JsonFileStore {
    /// Read the full list from disk
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or read, or if it does
    /// not contain a JSON array
    async fn read_list(&self) -> Result<Vec<Item>> {
        self.ensure_file().await?;

        let data = fs::read(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        let list: Vec<Item> = serde_json::from_slice(&data)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;

        tracing::debug!("Read {} items from {}", list.len(), self.path.display());
        Ok(list)
    }

    /// Serialize the full list and swap it into place
    ///
    /// Each write goes to its own temp file next to the target and is then
    /// renamed over it, so readers see either the old or the new list.
    ///
    /// # Errors
    /// Returns an error if serialization, the temp write, or the rename fails
    async fn write_list(&self, list: &[Item]) -> Result<()> {
        let dir = self.ensure_dir().await?;

        let data = serde_json::to_vec_pretty(list)
            .context("Failed to serialize shopping list")?;

        let path = self.path.clone();
        task::spawn_blocking(move || write_atomically(&dir, &path, &data, Placement::Replace))
            .await
            .context("Storage task failed")??;

        tracing::debug!("Wrote {} items to {}", list.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
pub use memory::MemoryStore;
