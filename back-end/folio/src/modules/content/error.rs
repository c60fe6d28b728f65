use entity::collection::CollectionKind;
use errors::AppError;

use crate::modules::storage::KvError;

/// Errors raised while moving content between tiers.
///
/// Validation failures, lookup misses and cancelled prompts are not errors;
/// they are reported as [`super::MutationOutcome`] values.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error(transparent)]
    Kv(#[from] KvError),

    #[error("Invalid published content in {file}: {reason}")]
    StaticSource { file: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Incorrect password, {0} edit mode stays off")]
    SecretMismatch(CollectionKind),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ContentError> for AppError {
    fn from(err: ContentError) -> Self {
        match err {
            ContentError::Kv(kv) => kv.into(),
            ContentError::SecretMismatch(kind) => {
                AppError::Unauthorized(ContentError::SecretMismatch(kind).to_string())
            }
            ContentError::Io(io) => AppError::Io(io),
            other => AppError::Content(other.to_string()),
        }
    }
}
