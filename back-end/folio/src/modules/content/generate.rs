//! Standalone entries for pasting straight into a published file.

use entity::{
    blog_post::{BlogDraft, BlogPost},
    collection::Record,
    project::{Project, ProjectDraft},
};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::{clock::Clock, error::ContentError};

const INDENT: &[u8] = b"    ";

pub struct EntryGenerator<'a> {
    clock: &'a dyn Clock,
}

impl<'a> EntryGenerator<'a> {
    pub fn new(clock: &'a dyn Clock) -> Self {
        Self { clock }
    }

    /// Skipped optional fields are kept as empty strings.
    pub fn project(&self, draft: &ProjectDraft) -> Option<Project> {
        let mut project = Project::create(draft, self.clock.now())?;
        for field in [&mut project.description, &mut project.github, &mut project.demo] {
            field.get_or_insert_with(String::new);
        }
        Some(project)
    }

    /// `content` is always present, empty when skipped.
    pub fn blog_post(&self, draft: &BlogDraft) -> Option<BlogPost> {
        let mut post = BlogPost::create(draft, self.clock.now())?;
        post.content.get_or_insert_with(String::new);
        Some(post)
    }

    /// JSON indented with four spaces.
    pub fn render<T: Serialize>(entry: &T) -> Result<String, ContentError> {
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        entry.serialize(&mut ser)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
