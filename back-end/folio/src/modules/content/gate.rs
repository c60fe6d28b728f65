use entity::collection::CollectionKind;
use std::{fmt, sync::Arc};
use tracing::{info, instrument, warn};

use super::{error::ContentError, keys::edit_mode_key, prompt::Prompt};
use crate::modules::storage::KvStore;

const ON: &[u8] = b"true";
const OFF: &[u8] = b"false";

/// Fixed shared password for entering edit mode.
///
/// This is a deterrence-only gate: the value ships with the tool and anyone
/// who can read the configuration can open it. Real authorization would need
/// a server-side check, which this crate does not have.
#[derive(Clone, PartialEq, Eq)]
pub struct DeterrenceSecret(String);

impl DeterrenceSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn matches(&self, input: &str) -> bool {
        self.0 == input
    }
}

impl fmt::Debug for DeterrenceSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DeterrenceSecret(***)")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Opened,
    Closed,
    /// The secret prompt was dismissed; the gate stays closed.
    Cancelled,
}

/// Persisted per-collection flag deciding whether mutations are allowed.
pub struct EditModeGate {
    kv: Arc<dyn KvStore>,
    kind: CollectionKind,
    secret: Option<DeterrenceSecret>,
}

impl EditModeGate {
    /// Gate without a password step.
    pub fn open_access(kv: Arc<dyn KvStore>, kind: CollectionKind) -> Self {
        Self {
            kv,
            kind,
            secret: None,
        }
    }

    /// Gate that asks for `secret` before turning on.
    pub fn guarded(kv: Arc<dyn KvStore>, kind: CollectionKind, secret: DeterrenceSecret) -> Self {
        Self {
            kv,
            kind,
            secret: Some(secret),
        }
    }

    pub fn kind(&self) -> CollectionKind {
        self.kind
    }

    /// Anything other than a stored `true` reads as off.
    pub fn is_on(&self) -> Result<bool, ContentError> {
        let flag = self.kv.get(edit_mode_key(self.kind).as_bytes())?;
        Ok(flag.as_deref() == Some(ON))
    }

    pub fn toggle(&self, prompt: &mut dyn Prompt) -> Result<ToggleOutcome, ContentError> {
        if self.is_on()? {
            self.turn_off()?;
            Ok(ToggleOutcome::Closed)
        } else {
            self.turn_on(prompt)
        }
    }

    /// On a wrong secret the flag is left untouched and
    /// [`ContentError::SecretMismatch`] is returned.
    #[instrument(skip(self, prompt), fields(collection = %self.kind))]
    pub fn turn_on(&self, prompt: &mut dyn Prompt) -> Result<ToggleOutcome, ContentError> {
        if self.is_on()? {
            return Ok(ToggleOutcome::Opened);
        }

        if let Some(secret) = &self.secret {
            let Some(input) = prompt.secret("Enter password to enable edit mode:") else {
                info!("Edit mode password prompt dismissed");
                return Ok(ToggleOutcome::Cancelled);
            };
            if !secret.matches(&input) {
                warn!("Incorrect edit mode password");
                return Err(ContentError::SecretMismatch(self.kind));
            }
        }

        self.kv.put(edit_mode_key(self.kind).as_bytes(), ON)?;
        info!("Edit mode enabled");
        Ok(ToggleOutcome::Opened)
    }

    /// Leaves the override cache in place.
    #[instrument(skip(self), fields(collection = %self.kind))]
    pub fn turn_off(&self) -> Result<(), ContentError> {
        self.kv.put(edit_mode_key(self.kind).as_bytes(), OFF)?;
        info!("Edit mode disabled");
        Ok(())
    }
}
