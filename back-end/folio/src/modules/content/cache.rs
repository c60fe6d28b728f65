use entity::collection::{CollectionKind, Content};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use super::{error::ContentError, keys::override_key};
use crate::modules::storage::KvStore;

/// Local mutable copy of a collection, shadowing the published content
/// while edit mode is on. Each entry is the full collection, never a diff.
pub struct LocalOverrideCache {
    kv: Arc<dyn KvStore>,
}

impl LocalOverrideCache {
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        Self { kv }
    }

    /// An entry that no longer parses is reported as absent.
    #[instrument(skip(self))]
    pub fn load<C: Content>(&self) -> Result<Option<C>, ContentError> {
        let kind = C::KIND;
        let Some(bytes) = self.kv.get(override_key(kind).as_bytes())? else {
            return Ok(None);
        };

        match serde_json::from_slice::<C>(&bytes) {
            Ok(content) => Ok(Some(content)),
            Err(e) => {
                warn!(collection = %kind, error = %e, "Discarding unreadable override");
                Ok(None)
            }
        }
    }

    #[instrument(skip(self, content))]
    pub fn save<C: Content>(&self, content: &C) -> Result<(), ContentError> {
        let kind = C::KIND;
        let bytes = serde_json::to_vec(content)?;
        self.kv.put(override_key(kind).as_bytes(), &bytes)?;
        debug!(collection = %kind, bytes = bytes.len(), "Override saved");
        Ok(())
    }

    pub fn contains(&self, kind: CollectionKind) -> Result<bool, ContentError> {
        Ok(self.kv.exists(override_key(kind).as_bytes())?)
    }

    /// Drops the override. Returns whether one existed.
    #[instrument(skip(self))]
    pub fn discard(&self, kind: CollectionKind) -> Result<bool, ContentError> {
        let existed = self.contains(kind)?;
        self.kv.delete(override_key(kind).as_bytes())?;
        debug!(collection = %kind, existed, "Override discarded");
        Ok(existed)
    }
}

/// Picks the visible tier.
///
/// With edit mode off the published content is shown. With edit mode on a
/// cached value wins whenever one exists, including an empty sequence left
/// by deleting every entry.
pub fn resolve_view<C: Content>(published: &C, cached: Option<C>, edit_mode: bool) -> C {
    match cached {
        Some(cached) if edit_mode => cached,
        _ => published.clone(),
    }
}
