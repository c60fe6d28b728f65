use errors::AppError;
use std::path::PathBuf;

use crate::modules::storage::KvConfig;
use crate::utils::env::{env_path, env_string};

pub const DEFAULT_EDIT_SECRET: &str = "letmein";

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the published JSON files.
    pub data_dir: PathBuf,
    pub export_dir: PathBuf,
    pub edit_secret: String,
    pub kv: KvConfig,
}

impl Config {
    /// Environment variables:
    /// - FOLIO_DATA_DIR (default: ./data)
    /// - FOLIO_EXPORT_DIR (default: .)
    /// - FOLIO_EDIT_SECRET (default: letmein, must not be empty)
    /// - FOLIO_KV_PATH and KV_* via [`KvConfig::from_env`]
    pub fn from_env() -> Result<Self, AppError> {
        let edit_secret = env_string("FOLIO_EDIT_SECRET", DEFAULT_EDIT_SECRET);
        if edit_secret.trim().is_empty() {
            return Err(AppError::Config(
                "FOLIO_EDIT_SECRET must not be empty".to_string(),
            ));
        }

        Ok(Self {
            data_dir: env_path("FOLIO_DATA_DIR", "./data"),
            export_dir: env_path("FOLIO_EXPORT_DIR", "."),
            edit_secret,
            kv: KvConfig::from_env(),
        })
    }
}
