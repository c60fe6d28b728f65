pub mod prelude;

pub mod blog_post;
pub mod collection;
pub mod contact_links;
pub mod project;
pub mod timestamp;
