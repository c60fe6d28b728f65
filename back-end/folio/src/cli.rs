//! Command-line surface of the `folio` binary.

use clap::{Args, Parser, Subcommand, ValueEnum};
use entity::{
    blog_post::{BlogDraft, BlogPost},
    collection::CollectionKind,
    contact_links::ContactLinks,
    project::{Project, ProjectDraft},
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Edit and export portfolio content")]
pub struct Cli {
    /// Run against a copy of the saved edit modes and local edits; nothing
    /// is written back.
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the current view of a collection.
    Show {
        collection: CollectionKind,
    },

    /// Edit mode and local edits for every collection.
    Status,

    /// Turn edit mode on or off, or report it.
    Edit {
        collection: CollectionKind,
        action: EditAction,
        /// Answer the password prompt up front.
        #[arg(long)]
        secret: Option<String>,
    },

    #[command(subcommand)]
    Project(ProjectCommand),

    #[command(subcommand)]
    Blog(BlogCommand),

    #[command(subcommand)]
    Contact(ContactCommand),

    /// Print a collection as JSON, or write it to `<DIR>/<collection>.json`.
    Export {
        collection: CollectionKind,
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
        /// Write to FOLIO_EXPORT_DIR instead of stdout.
        #[arg(long, conflicts_with = "out")]
        to_file: bool,
    },

    /// Discard local edits and fall back to the published content.
    Reset {
        #[arg(required_unless_present = "all")]
        collection: Option<CollectionKind>,
        /// Also clears every edit-mode flag.
        #[arg(long, conflicts_with = "collection")]
        all: bool,
    },

    /// Print one standalone entry to paste into a published file.
    #[command(subcommand)]
    Generate(GenerateCommand),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EditAction {
    On,
    Off,
    Status,
}

#[derive(Debug, Args)]
pub struct ProjectFields {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub github: Option<String>,
    #[arg(long)]
    pub demo: Option<String>,
}

impl From<ProjectFields> for ProjectDraft {
    fn from(fields: ProjectFields) -> Self {
        Self {
            title: fields.title,
            description: fields.description,
            github: fields.github,
            demo: fields.demo,
        }
    }
}

#[derive(Debug, Args)]
pub struct BlogFields {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub content: Option<String>,
}

impl From<BlogFields> for BlogDraft {
    fn from(fields: BlogFields) -> Self {
        Self {
            title: fields.title,
            content: fields.content,
        }
    }
}

/// `project update` flags. Omitted flags keep the current value; an empty
/// value clears an optional field.
#[derive(Debug, Args)]
pub struct ProjectPatch {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub github: Option<String>,
    #[arg(long)]
    pub demo: Option<String>,
}

impl ProjectPatch {
    /// Fills omitted flags from `current`.
    pub fn over(self, current: Option<&Project>) -> ProjectDraft {
        ProjectDraft {
            title: self
                .title
                .or_else(|| current.map(|p| p.title.clone()))
                .unwrap_or_default(),
            description: self
                .description
                .or_else(|| current.and_then(|p| p.description.clone())),
            github: self.github.or_else(|| current.and_then(|p| p.github.clone())),
            demo: self.demo.or_else(|| current.and_then(|p| p.demo.clone())),
        }
    }
}

/// `blog update` flags. Omitted flags keep the current value.
#[derive(Debug, Args)]
pub struct BlogPatch {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub content: Option<String>,
}

impl BlogPatch {
    pub fn over(self, current: Option<&BlogPost>) -> BlogDraft {
        BlogDraft {
            title: self
                .title
                .or_else(|| current.map(|p| p.title.clone()))
                .unwrap_or_default(),
            content: self
                .content
                .or_else(|| current.and_then(|p| p.content.clone())),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ProjectCommand {
    Add(ProjectFields),
    /// Change an entry; omitted flags keep their current values.
    Update {
        #[arg(long)]
        id: i64,
        #[command(flatten)]
        patch: ProjectPatch,
    },
    Delete {
        #[arg(long)]
        id: i64,
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum BlogCommand {
    Add(BlogFields),
    /// Change an entry; omitted flags keep their current values.
    Update {
        #[arg(long)]
        id: i64,
        #[command(flatten)]
        patch: BlogPatch,
    },
    Delete {
        #[arg(long)]
        id: i64,
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum ContactCommand {
    /// Replace all contact links. Omitted links are removed.
    Set(ContactFields),
}

#[derive(Debug, Args)]
pub struct ContactFields {
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub linkedin: Option<String>,
    #[arg(long)]
    pub github: Option<String>,
    #[arg(long)]
    pub twitter: Option<String>,
    #[arg(long)]
    pub instagram: Option<String>,
    #[arg(long)]
    pub website: Option<String>,
}

impl From<ContactFields> for ContactLinks {
    fn from(fields: ContactFields) -> Self {
        Self {
            email: fields.email,
            linkedin: fields.linkedin,
            github: fields.github,
            twitter: fields.twitter,
            instagram: fields.instagram,
            website: fields.website,
            ..Self::default()
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum GenerateCommand {
    Project(ProjectFields),
    Blog(BlogFields),
}
