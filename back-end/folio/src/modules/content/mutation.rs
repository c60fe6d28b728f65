//! Create/update/delete as pure transforms over a collection.
//!
//! Nothing here touches storage: the caller saves `Mutation::next` to the
//! override cache and swaps it into the view.

use entity::{collection::Record, contact_links::ContactLinks};
use std::fmt;

use super::{clock::Clock, prompt::Prompt};

/// What a mutation request ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Created { id: i64 },
    Updated { id: i64 },
    Deleted { id: i64 },
    ContactReplaced,
    /// Required field blank after trimming; the form stays open.
    Invalid,
    /// No record with this id; the collection is unchanged.
    NotFound { id: i64 },
    /// Delete confirmation declined.
    Cancelled,
    /// Edit mode is off.
    Locked,
}

impl MutationOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(
            self,
            Self::Created { .. } | Self::Updated { .. } | Self::Deleted { .. } | Self::ContactReplaced
        )
    }
}

impl fmt::Display for MutationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created { id } => write!(f, "created entry {}", id),
            Self::Updated { id } => write!(f, "updated entry {}", id),
            Self::Deleted { id } => write!(f, "deleted entry {}", id),
            Self::ContactReplaced => f.write_str("contact links updated"),
            Self::Invalid => f.write_str("nothing saved: title is required"),
            Self::NotFound { id } => write!(f, "nothing changed: no entry with id {}", id),
            Self::Cancelled => f.write_str("nothing changed: cancelled"),
            Self::Locked => f.write_str("nothing changed: edit mode is off"),
        }
    }
}

/// Result of a transform. `next` is set only when the outcome is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Mutation<C> {
    pub next: Option<C>,
    pub outcome: MutationOutcome,
}

impl<C> Mutation<C> {
    fn applied(next: C, outcome: MutationOutcome) -> Self {
        Self {
            next: Some(next),
            outcome,
        }
    }

    fn unchanged(outcome: MutationOutcome) -> Self {
        Self {
            next: None,
            outcome,
        }
    }
}

pub struct MutationEngine<'a> {
    clock: &'a dyn Clock,
}

impl<'a> MutationEngine<'a> {
    pub fn new(clock: &'a dyn Clock) -> Self {
        Self { clock }
    }

    /// Appends a new record; `id` and creation fields come from the clock.
    pub fn create<R: Record>(&self, items: &[R], draft: &R::Draft) -> Mutation<Vec<R>> {
        let Some(record) = R::create(draft, self.clock.now()) else {
            return Mutation::unchanged(MutationOutcome::Invalid);
        };

        let id = record.id();
        let mut next = items.to_vec();
        next.push(record);
        Mutation::applied(next, MutationOutcome::Created { id })
    }

    /// Replaces the mutable fields of the record with `id`, in place.
    pub fn update<R: Record>(&self, items: &[R], id: i64, draft: &R::Draft) -> Mutation<Vec<R>> {
        let Some(pos) = items.iter().position(|r| r.id() == id) else {
            return Mutation::unchanged(MutationOutcome::NotFound { id });
        };
        let Some(updated) = items[pos].apply(draft, self.clock.now()) else {
            return Mutation::unchanged(MutationOutcome::Invalid);
        };

        let mut next = items.to_vec();
        next[pos] = updated;
        Mutation::applied(next, MutationOutcome::Updated { id })
    }

    /// Removes the first record with `id` after the prompt confirms. Other
    /// records sharing the id are left alone.
    pub fn delete<R: Record>(
        &self,
        items: &[R],
        id: i64,
        prompt: &mut dyn Prompt,
    ) -> Mutation<Vec<R>> {
        let Some(pos) = items.iter().position(|r| r.id() == id) else {
            return Mutation::unchanged(MutationOutcome::NotFound { id });
        };
        if !prompt.confirm(&format!("Delete \"{}\"?", items[pos].title())) {
            return Mutation::unchanged(MutationOutcome::Cancelled);
        }

        let mut next = items.to_vec();
        next.remove(pos);
        Mutation::applied(next, MutationOutcome::Deleted { id })
    }

    /// Contact links are replaced wholesale. Fields the form does not know
    /// about are carried over from `current`.
    pub fn replace_contact(
        &self,
        current: &ContactLinks,
        draft: &ContactLinks,
    ) -> Mutation<ContactLinks> {
        let mut next = draft.normalized();
        for (key, value) in &current.extra {
            next.extra.entry(key.clone()).or_insert_with(|| value.clone());
        }
        Mutation::applied(next, MutationOutcome::ContactReplaced)
    }
}
