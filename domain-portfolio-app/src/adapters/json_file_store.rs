//! Single-file JSON store.
//!
//! All keys live in one JSON object on disk. The file is read lazily on first
//! access and cached; every `set` rewrites the whole file through a temporary
//! sibling followed by a rename, so readers never observe a half-written file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use domain_portfolio_core::error::{CoreError, CoreResult};
use domain_portfolio_core::traits::KeyValueStore;
use serde_json::{Map, Value};
use tokio::fs;
use tokio::sync::RwLock;

/// Largest data file accepted on read or produced on write (10 MB)
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

type Blobs = Map<String, Value>;

/// `KeyValueStore` persisted as one JSON object file.
pub struct JsonFileStore {
    path: PathBuf,
    /// `None` until the file has been read
    cache: RwLock<Option<Blobs>>,
}

impl JsonFileStore {
    /// Open a store at `path`. The file itself is created on the first write.
    ///
    /// # Errors
    /// Returns `CoreError::StorageError` if the parent directory cannot be created.
    pub async fn new(path: impl Into<PathBuf>) -> CoreResult<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| CoreError::StorageError(format!("Failed to create directory: {e}")))?;
        }
        log::info!("Using JSON data file {}", path.display());
        Ok(Self {
            path,
            cache: RwLock::new(None),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn read_file(&self) -> CoreResult<Blobs> {
        let metadata = match fs::metadata(&self.path).await {
            Ok(m) => m,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("{} does not exist yet, starting empty", self.path.display());
                return Ok(Blobs::new());
            }
            Err(e) => {
                return Err(CoreError::StorageError(format!(
                    "Failed to stat {}: {e}",
                    self.path.display()
                )));
            }
        };
        if metadata.len() > MAX_FILE_SIZE {
            return Err(CoreError::StorageError(format!(
                "{} exceeds the {MAX_FILE_SIZE} byte limit",
                self.path.display()
            )));
        }

        let raw = fs::read_to_string(&self.path).await.map_err(|e| {
            CoreError::StorageError(format!("Failed to read {}: {e}", self.path.display()))
        })?;
        if raw.trim().is_empty() {
            return Ok(Blobs::new());
        }
        match serde_json::from_str::<Value>(&raw)? {
            Value::Object(blobs) => Ok(blobs),
            _ => Err(CoreError::SerializationError(format!(
                "{} does not contain a JSON object",
                self.path.display()
            ))),
        }
    }

    async fn write_file(&self, blobs: &Blobs) -> CoreResult<()> {
        let bytes = serde_json::to_vec_pretty(blobs)?;
        if bytes.len() as u64 > MAX_FILE_SIZE {
            return Err(CoreError::StorageError(format!(
                "Refusing to write {} bytes, limit is {MAX_FILE_SIZE}",
                bytes.len()
            )));
        }

        let tmp = self.temp_path();
        fs::write(&tmp, &bytes).await.map_err(|e| {
            CoreError::StorageError(format!("Failed to write {}: {e}", tmp.display()))
        })?;
        fs::rename(&tmp, &self.path).await.map_err(|e| {
            CoreError::StorageError(format!(
                "Failed to replace {}: {e}",
                self.path.display()
            ))
        })
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> CoreResult<Option<Value>> {
        if let Some(ref blobs) = *self.cache.read().await {
            return Ok(blobs.get(key).cloned());
        }

        let mut cache = self.cache.write().await;
        if cache.is_none() {
            *cache = Some(self.read_file().await?);
        }
        Ok(cache.as_ref().and_then(|blobs| blobs.get(key).cloned()))
    }

    async fn set(&self, key: &str, value: Value) -> CoreResult<()> {
        let mut cache = self.cache.write().await;
        let mut blobs = match cache.as_ref() {
            Some(blobs) => blobs.clone(),
            None => self.read_file().await?,
        };
        blobs.insert(key.to_string(), value);

        self.write_file(&blobs).await?;
        log::debug!("Wrote key '{key}' to {}", self.path.display());
        *cache = Some(blobs);
        Ok(())
    }
}
