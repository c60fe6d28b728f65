//! Workspace-level error type.
//!
//! Module errors (`KvError`, `ContentError`) convert into [`AppError`] at the
//! binary boundary, so `run()` can propagate everything with `?`.

use std::error::Error as StdError;

pub type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(BoxError),

    #[error("Content error: {0}")]
    Content(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
