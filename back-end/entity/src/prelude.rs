pub use super::blog_post::{BlogDraft, BlogPost};
pub use super::collection::{CollectionKind, Content, Record};
pub use super::contact_links::{ContactLinks, LinkKind};
pub use super::project::{Project, ProjectDraft};
pub use super::timestamp::Timestamp;
