//! Plain-text card model for the visible view of a collection.

use entity::{
    blog_post::BlogPost,
    collection::Content,
    contact_links::{ContactLinks, LinkKind},
    project::Project,
};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLink {
    pub label: &'static str,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: Option<i64>,
    pub title: String,
    pub subtitle: Option<String>,
    pub body: Option<String>,
    pub links: Vec<CardLink>,
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => writeln!(f, "{}  [{}]", self.title, id)?,
            None => writeln!(f, "{}", self.title)?,
        }
        if let Some(subtitle) = &self.subtitle {
            writeln!(f, "  {}", subtitle)?;
        }
        if let Some(body) = &self.body {
            for line in body.lines() {
                writeln!(f, "  {}", line)?;
            }
        }
        for link in &self.links {
            writeln!(f, "  [{}] {}", link.label, link.href)?;
        }
        Ok(())
    }
}

pub trait Render: Content {
    const EMPTY_MESSAGE: &'static str;

    fn cards(&self) -> Vec<Card>;
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty()).map(str::to_string)
}

impl Render for Vec<Project> {
    const EMPTY_MESSAGE: &'static str = "No projects yet.";

    fn cards(&self) -> Vec<Card> {
        self.iter()
            .map(|project| {
                let links = [("GitHub", &project.github), ("Demo", &project.demo)]
                    .into_iter()
                    .filter_map(|(label, url)| {
                        non_empty(url.as_deref()).map(|href| CardLink { label, href })
                    })
                    .collect();

                Card {
                    id: Some(project.id),
                    title: project.title.clone(),
                    subtitle: None,
                    body: non_empty(project.description.as_deref()),
                    links,
                }
            })
            .collect()
    }
}

impl Render for Vec<BlogPost> {
    const EMPTY_MESSAGE: &'static str = "No blog entries yet.";

    fn cards(&self) -> Vec<Card> {
        self.iter()
            .map(|post| Card {
                id: Some(post.id),
                title: post.title.clone(),
                subtitle: Some(format!("Published: {}", post.date)),
                body: non_empty(post.content.as_deref()),
                links: Vec::new(),
            })
            .collect()
    }
}

impl Render for ContactLinks {
    const EMPTY_MESSAGE: &'static str = "No contact links yet.";

    fn cards(&self) -> Vec<Card> {
        let links: Vec<CardLink> = self
            .present()
            .into_iter()
            .map(|(kind, value)| CardLink {
                label: kind.label(),
                href: match kind {
                    LinkKind::Email => format!("mailto:{}", value),
                    _ => value.to_string(),
                },
            })
            .collect();

        if links.is_empty() {
            return Vec::new();
        }
        vec![Card {
            id: None,
            title: "Or find me on".to_string(),
            subtitle: None,
            body: None,
            links,
        }]
    }
}

/// The whole view as text, or the empty-state line.
pub fn render_view<C: Render>(content: &C) -> String {
    let cards = content.cards();
    if cards.is_empty() {
        return format!("{}\n", C::EMPTY_MESSAGE);
    }
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
