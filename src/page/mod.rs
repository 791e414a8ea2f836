//! Page assembly: containers, fragment building, and the document shell
//!
//! The page has exactly two insertion points. Each loader owns one
//! [`Container`], appends rendered fragments to it, and the [`PageShell`]
//! inlines both into the final document.

mod container;
mod fragment;
mod shell;
mod viewport;

pub use container::Container;
pub use fragment::{Element, Fragment};
pub use shell::PageShell;
pub use viewport::{Viewport, NARROW_PREVIEW_LIMIT, WIDE_PREVIEW_LIMIT};

/// Id of the greeting banner container
pub const GREETING_CONTAINER_ID: &str = "welcome-text";

/// Id of the blog card list container
pub const BLOG_CONTAINER_ID: &str = "blog-posts";
