use entity::{
    collection::{CollectionKind, Content, Record},
    contact_links::ContactLinks,
};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::{
    cache::{LocalOverrideCache, resolve_view},
    clock::Clock,
    error::ContentError,
    export::ExportFormatter,
    gate::{EditModeGate, ToggleOutcome},
    mutation::{Mutation, MutationEngine, MutationOutcome},
    prompt::Prompt,
};

/// One collection's tab: the published content, the visible view and the
/// gate and cache that decide between them.
///
/// Every applied mutation saves the complete collection to the override
/// cache before the view is replaced.
pub struct CollectionSession<C: Content> {
    published: C,
    view: C,
    gate: EditModeGate,
    cache: LocalOverrideCache,
    clock: Arc<dyn Clock>,
}

impl<C: Content> CollectionSession<C> {
    pub fn new(
        published: C,
        gate: EditModeGate,
        cache: LocalOverrideCache,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, ContentError> {
        let mut session = Self {
            view: published.clone(),
            published,
            gate,
            cache,
            clock,
        };
        session.refresh()?;
        Ok(session)
    }

    pub fn kind(&self) -> CollectionKind {
        C::KIND
    }

    /// What the site shows right now.
    pub fn view(&self) -> &C {
        &self.view
    }

    pub fn published(&self) -> &C {
        &self.published
    }

    pub fn is_edit_mode_on(&self) -> Result<bool, ContentError> {
        self.gate.is_on()
    }

    /// Turning off shows the published content again; the override stays
    /// stored and comes back when edit mode is turned on.
    pub fn toggle_edit_mode(&mut self, prompt: &mut dyn Prompt) -> Result<ToggleOutcome, ContentError> {
        let outcome = self.gate.toggle(prompt)?;
        self.refresh()?;
        Ok(outcome)
    }

    pub fn enable_edit_mode(&mut self, prompt: &mut dyn Prompt) -> Result<ToggleOutcome, ContentError> {
        let outcome = self.gate.turn_on(prompt)?;
        self.refresh()?;
        Ok(outcome)
    }

    pub fn disable_edit_mode(&mut self) -> Result<(), ContentError> {
        self.gate.turn_off()?;
        self.refresh()
    }

    pub fn has_override(&self) -> Result<bool, ContentError> {
        self.cache.contains(C::KIND)
    }

    /// Drops the override so the published content is all that remains.
    /// Entries that only existed in the override are gone afterwards.
    #[instrument(skip(self), fields(collection = %self.kind()))]
    pub fn discard_override(&mut self) -> Result<bool, ContentError> {
        let existed = self.cache.discard(C::KIND)?;
        self.refresh()?;
        info!(existed, "Reverted to published content");
        Ok(existed)
    }

    /// Export text for the current view.
    pub fn export(&self) -> Result<String, ContentError> {
        ExportFormatter::serialize(&self.view)
    }

    fn refresh(&mut self) -> Result<(), ContentError> {
        let edit_mode = self.gate.is_on()?;
        let cached = if edit_mode {
            self.cache.load::<C>()?
        } else {
            None
        };
        self.view = resolve_view(&self.published, cached, edit_mode);
        debug!(collection = %C::KIND, edit_mode, "View refreshed");
        Ok(())
    }

    fn commit(&mut self, mutation: Mutation<C>) -> Result<MutationOutcome, ContentError> {
        if let Some(next) = mutation.next {
            self.cache.save(&next)?;
            self.view = next;
            info!(collection = %C::KIND, outcome = %mutation.outcome, "Mutation applied");
        } else {
            debug!(collection = %C::KIND, outcome = %mutation.outcome, "Mutation skipped");
        }
        Ok(mutation.outcome)
    }

    fn unlocked(&self) -> Result<bool, ContentError> {
        self.gate.is_on()
    }
}

impl<R: Record> CollectionSession<Vec<R>> {
    pub fn create(&mut self, draft: &R::Draft) -> Result<MutationOutcome, ContentError> {
        if !self.unlocked()? {
            return Ok(MutationOutcome::Locked);
        }
        let mutation = MutationEngine::new(self.clock.as_ref()).create(&self.view, draft);
        self.commit(mutation)
    }

    pub fn update(&mut self, id: i64, draft: &R::Draft) -> Result<MutationOutcome, ContentError> {
        if !self.unlocked()? {
            return Ok(MutationOutcome::Locked);
        }
        let mutation = MutationEngine::new(self.clock.as_ref()).update(&self.view, id, draft);
        self.commit(mutation)
    }

    pub fn delete(&mut self, id: i64, prompt: &mut dyn Prompt) -> Result<MutationOutcome, ContentError> {
        if !self.unlocked()? {
            return Ok(MutationOutcome::Locked);
        }
        let mutation = MutationEngine::new(self.clock.as_ref()).delete(&self.view, id, prompt);
        self.commit(mutation)
    }
}

impl CollectionSession<ContactLinks> {
    pub fn replace(&mut self, draft: &ContactLinks) -> Result<MutationOutcome, ContentError> {
        if !self.unlocked()? {
            return Ok(MutationOutcome::Locked);
        }
        let mutation = MutationEngine::new(self.clock.as_ref()).replace_contact(&self.view, draft);
        self.commit(mutation)
    }
}
