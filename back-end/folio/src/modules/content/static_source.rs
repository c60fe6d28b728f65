use entity::collection::Content;
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tracing::{debug, instrument, warn};

use super::error::ContentError;

/// Published content: one JSON file per collection in a data directory.
///
/// Read-only at runtime. It changes only when exported JSON is copied back
/// into the directory before the next deployment.
#[derive(Debug, Clone)]
pub struct StaticSourceStore {
    root: PathBuf,
}

impl StaticSourceStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for<C: Content>(&self) -> PathBuf {
        self.root.join(C::KIND.file_name())
    }

    /// A missing file is an empty collection; a malformed one is an error.
    #[instrument(skip(self))]
    pub fn load<C: Content>(&self) -> Result<C, ContentError> {
        let kind = C::KIND;
        let path = self.path_for::<C>();

        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(collection = %kind, path = %path.display(), "Published file missing, using empty content");
                return Ok(C::default());
            }
            Err(e) => return Err(ContentError::Io(e)),
        };

        let content = serde_json::from_slice(&bytes).map_err(|e| ContentError::StaticSource {
            file: path.display().to_string(),
            reason: e.to_string(),
        })?;

        debug!(collection = %kind, path = %path.display(), bytes = bytes.len(), "Loaded published content");
        Ok(content)
    }
}
