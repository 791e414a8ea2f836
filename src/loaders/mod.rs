//! The page's two data-loading flows
//!
//! Each flow is a single request-then-render task: one GET, then a decision
//! on the outcome that appends zero or more fragments to the container the
//! flow owns. The flows share nothing and are joined concurrently; they can
//! resolve in either order because each writes to its own container.

pub mod blog;
pub mod greeting;

use crate::config::SiteConfig;
use crate::error::Result;
use crate::http::PageClient;
use crate::page::{Container, PageShell, Viewport, BLOG_CONTAINER_ID, GREETING_CONTAINER_ID};

/// Run both flows and assemble the full page
pub async fn render_page(client: &PageClient, config: &SiteConfig) -> Result<String> {
    let viewport = Viewport::new(config.viewport_width);
    let mut greeting_container = Container::new(GREETING_CONTAINER_ID);
    let mut blog_container = Container::new(BLOG_CONTAINER_ID);

    let (greeting_result, blog_result) = tokio::join!(
        greeting::load(client, config, &mut greeting_container),
        blog::load(client, config, viewport, &mut blog_container),
    );
    greeting_result?;
    blog_result?;

    Ok(PageShell::new().assemble(&greeting_container, &blog_container))
}
