//! Collection kinds and the traits shared by every content record.

use chrono::{DateTime, Utc};
use serde::{Serialize, de::DeserializeOwned};
use std::{fmt, str::FromStr};

use crate::contact_links::ContactLinks;

/// The three content collections of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Projects,
    BlogPosts,
    Contact,
}

impl CollectionKind {
    pub const ALL: [CollectionKind; 3] = [Self::Projects, Self::BlogPosts, Self::Contact];

    /// Stable name used for storage keys and exported file names.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::BlogPosts => "blogPosts",
            Self::Contact => "contactInfo",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.json", self.key())
    }

    /// Only the projects gate asks for the shared secret.
    pub fn requires_secret(&self) -> bool {
        matches!(self, Self::Projects)
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for CollectionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "projects" | "project" => Ok(Self::Projects),
            "blogposts" | "blog-posts" | "blog" | "posts" => Ok(Self::BlogPosts),
            "contactinfo" | "contact" | "links" => Ok(Self::Contact),
            other => Err(format!(
                "unknown collection '{}' (expected projects, blog or contact)",
                other
            )),
        }
    }
}

/// A whole collection value as stored in one tier: a sequence of records or
/// the contact singleton.
pub trait Content:
    Serialize + DeserializeOwned + Clone + Default + PartialEq + fmt::Debug
{
    const KIND: CollectionKind;
}

/// An entity living in an ordered, id-keyed collection.
pub trait Record: Serialize + DeserializeOwned + Clone + PartialEq + fmt::Debug {
    const KIND: CollectionKind;

    /// Submitted form values for create/update.
    type Draft;

    fn id(&self) -> i64;

    fn title(&self) -> &str;

    /// Builds a new record, or `None` when the draft fails validation.
    fn create(draft: &Self::Draft, now: DateTime<Utc>) -> Option<Self>;

    /// Replaces the mutable fields, keeping identity and creation fields.
    /// `None` when the draft fails validation.
    fn apply(&self, draft: &Self::Draft, now: DateTime<Utc>) -> Option<Self>;
}

impl<R: Record> Content for Vec<R> {
    const KIND: CollectionKind = R::KIND;
}

impl Content for ContactLinks {
    const KIND: CollectionKind = CollectionKind::Contact;
}

/// Trimmed value of a required text field, `None` when blank.
pub fn required_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Trimmed value of an optional text field; blank input means absent.
pub fn optional_text(value: Option<&String>) -> Option<String> {
    value.and_then(|v| required_text(v))
}
