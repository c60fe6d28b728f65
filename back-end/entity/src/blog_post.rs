//! Blog entries (`blogPosts.json`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    collection::{CollectionKind, Record, optional_text, required_text},
    timestamp::Timestamp,
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: i64,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Display date, e.g. `January 5, 2025`. Set once at creation.
    pub date: String,

    pub created_at: Timestamp,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlogDraft {
    pub title: String,
    pub content: Option<String>,
}

impl BlogDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: Some(content.into()),
        }
    }
}

/// Long-form US date used on blog cards.
pub fn display_date(ts: &DateTime<Utc>) -> String {
    ts.format("%B %-d, %Y").to_string()
}

impl Record for BlogPost {
    const KIND: CollectionKind = CollectionKind::BlogPosts;
    type Draft = BlogDraft;

    fn id(&self) -> i64 {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn create(draft: &BlogDraft, now: DateTime<Utc>) -> Option<Self> {
        let title = required_text(&draft.title)?;
        Some(Self {
            id: now.timestamp_millis(),
            title,
            content: optional_text(draft.content.as_ref()),
            date: display_date(&now),
            created_at: now.into(),
            updated_at: None,
            extra: Map::new(),
        })
    }

    fn apply(&self, draft: &BlogDraft, now: DateTime<Utc>) -> Option<Self> {
        let title = required_text(&draft.title)?;
        Some(Self {
            id: self.id,
            title,
            content: optional_text(draft.content.as_ref()),
            date: self.date.clone(),
            created_at: self.created_at.clone(),
            updated_at: Some(now.into()),
            extra: self.extra.clone(),
        })
    }
}
