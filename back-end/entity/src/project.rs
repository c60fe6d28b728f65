//! Project card entries (`projects.json`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    collection::{CollectionKind, Record, optional_text, required_text},
    timestamp::Timestamp,
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Creation time in milliseconds since the epoch
    pub id: i64,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Repository URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,

    /// Live demo URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,

    pub created_at: Timestamp,

    /// Fields this crate does not know about, written back unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Form values for creating or editing a project.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: Option<String>,
    pub github: Option<String>,
    pub demo: Option<String>,
}

impl ProjectDraft {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

impl Record for Project {
    const KIND: CollectionKind = CollectionKind::Projects;
    type Draft = ProjectDraft;

    fn id(&self) -> i64 {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn create(draft: &ProjectDraft, now: DateTime<Utc>) -> Option<Self> {
        let title = required_text(&draft.title)?;
        Some(Self {
            id: now.timestamp_millis(),
            title,
            description: optional_text(draft.description.as_ref()),
            github: optional_text(draft.github.as_ref()),
            demo: optional_text(draft.demo.as_ref()),
            created_at: now.into(),
            extra: Map::new(),
        })
    }

    fn apply(&self, draft: &ProjectDraft, _now: DateTime<Utc>) -> Option<Self> {
        let title = required_text(&draft.title)?;
        Some(Self {
            id: self.id,
            title,
            description: optional_text(draft.description.as_ref()),
            github: optional_text(draft.github.as_ref()),
            demo: optional_text(draft.demo.as_ref()),
            created_at: self.created_at.clone(),
            extra: self.extra.clone(),
        })
    }
}
