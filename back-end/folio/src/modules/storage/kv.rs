use errors::AppError;
use rocksdb::{DB, Options};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing::{debug, error, info, instrument};

use crate::utils::env::{env_bool, env_i32, env_path, env_usize};

/// Configuration for the local key-value store
#[derive(Debug, Clone)]
pub struct KvConfig {
    pub path: PathBuf,
    pub enable_compression: bool,
    pub max_open_files: i32,
    pub write_buffer_size: usize,
}

impl Default for KvConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(".folio/kv"),
            enable_compression: false,
            max_open_files: 64,
            write_buffer_size: 4 * 1024 * 1024, // 4MB
        }
    }
}

impl KvConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - FOLIO_KV_PATH: store directory (default: .folio/kv)
    /// - KV_ENABLE_COMPRESSION: "true" or "false" (default: false)
    /// - KV_MAX_OPEN_FILES (default: 64)
    /// - KV_WRITE_BUFFER_SIZE in bytes (default: 4MB)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            path: env_path("FOLIO_KV_PATH", ".folio/kv"),
            enable_compression: env_bool("KV_ENABLE_COMPRESSION", defaults.enable_compression),
            max_open_files: env_i32("KV_MAX_OPEN_FILES", defaults.max_open_files),
            write_buffer_size: env_usize("KV_WRITE_BUFFER_SIZE", defaults.write_buffer_size),
        }
    }
}

/// Errors that can occur during KV operations
#[derive(Debug, thiserror::Error)]
pub enum KvError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<KvError> for AppError {
    fn from(err: KvError) -> Self {
        AppError::Storage(format!("KV store error: {}", err).into())
    }
}

/// Local persistence for edit-mode flags and override caches.
///
/// Stands in for the browser's local storage: synchronous, process-local,
/// last write wins.
pub trait KvStore: Send + Sync {
    /// Get a value by key
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KvError>;

    /// Put a key-value pair
    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), KvError>;

    /// Delete a key. Deleting a missing key is not an error.
    fn delete(&self, key: &[u8]) -> Result<(), KvError>;

    fn exists(&self, key: &[u8]) -> Result<bool, KvError> {
        self.get(key).map(|opt| opt.is_some())
    }

    /// Flush all pending writes to disk
    fn flush(&self) -> Result<(), KvError>;
}

/// RocksDB implementation of the KvStore trait
pub struct RocksDbKvStore {
    db: Arc<DB>,
    path: PathBuf,
}

impl RocksDbKvStore {
    /// Open (or create) the store at `config.path`.
    pub fn open(config: &KvConfig) -> Result<Self, KvError> {
        Self::new(&config.path, config)
    }

    #[instrument(skip(path, config), fields(path = %path.as_ref().display()))]
    pub fn new<P: AsRef<Path>>(path: P, config: &KvConfig) -> Result<Self, KvError> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        debug!(
            path = %path_str,
            enable_compression = config.enable_compression,
            max_open_files = config.max_open_files,
            "Opening RocksDB KV store"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                error!(path = %path_str, error = %e, "Failed to create parent directory");
                KvError::Config(format!("Failed to create directory: {}", e))
            })?;
        }

        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.set_max_open_files(config.max_open_files);
        opts.set_write_buffer_size(config.write_buffer_size);
        opts.set_keep_log_file_num(2);

        if config.enable_compression {
            opts.set_compression_type(rocksdb::DBCompressionType::Lz4);
            debug!("Compression enabled (LZ4)");
        } else {
            opts.set_compression_type(rocksdb::DBCompressionType::None);
        }

        // A second process holding the lock fails here, not later.
        let db = DB::open(&opts, path).map_err(|e| {
            error!(path = %path_str, error = %e, "Failed to open RocksDB");
            KvError::Storage(format!("Failed to open database: {}", e))
        })?;

        info!(path = %path_str, "RocksDB KV store opened");

        Ok(Self {
            db: Arc::new(db),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KvStore for RocksDbKvStore {
    #[instrument(skip(self, key), fields(key = %String::from_utf8_lossy(key)))]
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KvError> {
        self.db.get(key).map_err(|e| {
            error!(error = %e, "Failed to get value");
            KvError::Storage(format!("Get operation failed: {}", e))
        })
    }

    #[instrument(skip(self, key, value), fields(key = %String::from_utf8_lossy(key), value_len = value.len()))]
    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), KvError> {
        debug!(value_len = value.len(), "Putting key-value pair");

        self.db.put(key, value).map_err(|e| {
            error!(error = %e, "Failed to put value");
            KvError::Storage(format!("Put operation failed: {}", e))
        })
    }

    #[instrument(skip(self, key), fields(key = %String::from_utf8_lossy(key)))]
    fn delete(&self, key: &[u8]) -> Result<(), KvError> {
        debug!("Deleting key");

        self.db.delete(key).map_err(|e| {
            error!(error = %e, "Failed to delete key");
            KvError::Storage(format!("Delete operation failed: {}", e))
        })
    }

    #[instrument(skip(self))]
    fn flush(&self) -> Result<(), KvError> {
        self.db.flush().map_err(|e| {
            error!(error = %e, "Failed to flush KV store");
            KvError::Storage(format!("Flush operation failed: {}", e))
        })
    }
}

impl Drop for RocksDbKvStore {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            error!(error = %e, "Failed to flush KV store during drop");
        }
        debug!(path = %self.path.display(), "RocksDB KV store closed");
    }
}
