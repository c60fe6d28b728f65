//! Contact links singleton (`contactInfo.json`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::collection::optional_text;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Email,
    LinkedIn,
    GitHub,
    Twitter,
    Instagram,
    Website,
}

impl LinkKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::LinkedIn => "LinkedIn",
            Self::GitHub => "GitHub",
            Self::Twitter => "Twitter",
            Self::Instagram => "Instagram",
            Self::Website => "Website",
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl ContactLinks {
    /// Links that should be rendered, in display order. Absent and empty
    /// fields are skipped.
    pub fn present(&self) -> Vec<(LinkKind, &str)> {
        [
            (LinkKind::Email, &self.email),
            (LinkKind::LinkedIn, &self.linkedin),
            (LinkKind::GitHub, &self.github),
            (LinkKind::Twitter, &self.twitter),
            (LinkKind::Instagram, &self.instagram),
            (LinkKind::Website, &self.website),
        ]
        .into_iter()
        .filter_map(|(kind, value)| {
            value
                .as_deref()
                .filter(|v| !v.trim().is_empty())
                .map(|v| (kind, v))
        })
        .collect()
    }

    /// Form submission as stored: values trimmed, blank fields dropped.
    /// Unknown fields are kept.
    pub fn normalized(&self) -> Self {
        Self {
            email: optional_text(self.email.as_ref()),
            linkedin: optional_text(self.linkedin.as_ref()),
            github: optional_text(self.github.as_ref()),
            twitter: optional_text(self.twitter.as_ref()),
            instagram: optional_text(self.instagram.as_ref()),
            website: optional_text(self.website.as_ref()),
            extra: self.extra.clone(),
        }
    }
}
