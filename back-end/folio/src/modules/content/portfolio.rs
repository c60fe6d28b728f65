use entity::{
    blog_post::BlogPost,
    collection::{CollectionKind, Content},
    contact_links::ContactLinks,
    project::Project,
};
use std::sync::Arc;
use tracing::info;

use super::{
    cache::LocalOverrideCache,
    clock::Clock,
    error::ContentError,
    gate::{DeterrenceSecret, EditModeGate},
    keys::edit_mode_key,
    session::CollectionSession,
    static_source::StaticSourceStore,
};
use crate::modules::storage::KvStore;

/// Per-collection summary for `folio status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionStatus {
    pub kind: CollectionKind,
    pub edit_mode: bool,
    pub has_override: bool,
}

/// Wires the three collections to one KV store and data directory.
pub struct Portfolio {
    kv: Arc<dyn KvStore>,
    source: StaticSourceStore,
    secret: DeterrenceSecret,
    clock: Arc<dyn Clock>,
}

impl Portfolio {
    pub fn new(
        kv: Arc<dyn KvStore>,
        source: StaticSourceStore,
        secret: DeterrenceSecret,
        clock: Arc<dyn Clock>,
    ) -> Self {
        info!(data_dir = %source.root().display(), "Portfolio ready");
        Self {
            kv,
            source,
            secret,
            clock,
        }
    }

    /// Loads the published content for `C` and opens its session.
    pub fn session<C: Content>(&self) -> Result<CollectionSession<C>, ContentError> {
        let published = self.source.load::<C>()?;
        CollectionSession::new(
            published,
            self.gate(C::KIND),
            LocalOverrideCache::new(self.kv.clone()),
            self.clock.clone(),
        )
    }

    pub fn projects(&self) -> Result<CollectionSession<Vec<Project>>, ContentError> {
        self.session()
    }

    pub fn blog(&self) -> Result<CollectionSession<Vec<BlogPost>>, ContentError> {
        self.session()
    }

    pub fn contact(&self) -> Result<CollectionSession<ContactLinks>, ContentError> {
        self.session()
    }

    pub fn gate(&self, kind: CollectionKind) -> EditModeGate {
        if kind.requires_secret() {
            EditModeGate::guarded(self.kv.clone(), kind, self.secret.clone())
        } else {
            EditModeGate::open_access(self.kv.clone(), kind)
        }
    }

    pub fn status(&self) -> Result<Vec<CollectionStatus>, ContentError> {
        let cache = LocalOverrideCache::new(self.kv.clone());
        CollectionKind::ALL
            .into_iter()
            .map(|kind| {
                Ok(CollectionStatus {
                    kind,
                    edit_mode: self.gate(kind).is_on()?,
                    has_override: cache.contains(kind)?,
                })
            })
            .collect()
    }

    /// Clears every edit-mode flag and override. Published files are untouched.
    pub fn reset_all(&self) -> Result<(), ContentError> {
        let cache = LocalOverrideCache::new(self.kv.clone());
        for kind in CollectionKind::ALL {
            cache.discard(kind)?;
            self.kv.delete(edit_mode_key(kind).as_bytes())?;
        }
        self.kv.flush()?;
        info!("Local edits cleared for all collections");
        Ok(())
    }
}
