//! Edit-mode content synchronization.
//!
//! A collection lives in three tiers: the published JSON files
//! ([`StaticSourceStore`]), the local override kept in the KV store
//! ([`LocalOverrideCache`]) and the hand-exported file produced by
//! [`ExportFormatter`]. [`CollectionSession`] decides which tier is visible
//! and routes mutations through [`MutationEngine`].

pub mod cache;
pub mod clock;
pub mod error;
pub mod export;
pub mod gate;
pub mod generate;
pub mod keys;
pub mod mutation;
pub mod portfolio;
pub mod prompt;
pub mod render;
pub mod session;
pub mod static_source;

pub use cache::{LocalOverrideCache, resolve_view};
pub use clock::{Clock, SystemClock};
pub use error::ContentError;
pub use export::ExportFormatter;
pub use gate::{DeterrenceSecret, EditModeGate, ToggleOutcome};
pub use generate::EntryGenerator;
pub use mutation::{Mutation, MutationEngine, MutationOutcome};
pub use portfolio::{CollectionStatus, Portfolio};
pub use prompt::{Prompt, TerminalPrompt};
pub use render::{Card, CardLink, Render, render_view};
pub use session::CollectionSession;
pub use static_source::StaticSourceStore;

#[cfg(any(test, feature = "testing"))]
pub use clock::TickingClock;
#[cfg(any(test, feature = "testing"))]
pub use prompt::ScriptedPrompt;
