//! Blog card list flow
//!
//! Fetches the blog manifest and renders one summary card per post, in
//! manifest order. A failed fetch (non-200 status or a request that never
//! completes) renders exactly one static error card instead. Posts are not
//! sorted or deduplicated, and nothing is retried.

use crate::config::SiteConfig;
use crate::error::Result;
use crate::http::{FetchOutcome, PageClient};
use crate::models::{BlogManifest, BlogPost};
use crate::page::{Container, Element, Viewport};
use tracing::{info, warn};

/// Card links point under the blog directory, not the site root
const BLOG_LINK_BASE: &str = "blog/";

/// Message shown when the manifest can't be loaded
const ERROR_CARD_TEXT: &str = "Unable to load blog posts.";

/// Fetch the manifest and render post cards into `container`
pub async fn load(
    client: &PageClient,
    config: &SiteConfig,
    viewport: Viewport,
    container: &mut Container,
) -> Result<()> {
    let url = config.blog_manifest_url();
    info!(%url, "loading blog posts");

    match client.fetch_json::<BlogManifest>(&url).await? {
        FetchOutcome::Success(manifest) => {
            for post in &manifest.contents {
                container.append(post_card(post, viewport));
            }
            Ok(())
        }
        FetchOutcome::Failed(failure) => {
            warn!(%failure, %url, "blog manifest unavailable");
            container.append(error_card());
            Ok(())
        }
    }
}

/// One summary card: title, truncated preview, link to the full post
fn post_card(post: &BlogPost, viewport: Viewport) -> Element {
    Element::new("div")
        .class("card")
        .child(Element::new("h3").text(post.path.as_str()))
        .child(Element::new("p").text(viewport.truncate_preview(&post.content)))
        .child(
            Element::new("a")
                .class("button")
                .attr("href", format!("{}{}", BLOG_LINK_BASE, post.url))
                .text("Read more"),
        )
}

/// The single static card rendered when the manifest fetch fails
fn error_card() -> Element {
    Element::new("div")
        .class("card error")
        .child(Element::new("p").text(ERROR_CARD_TEXT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Fragment;
    use pretty_assertions::assert_eq;

    fn post(path: &str, content: &str, url: &str) -> BlogPost {
        BlogPost {
            path: path.to_string(),
            content: content.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_card_links_under_blog_directory() {
        let card = post_card(&post("Hello", "World", "hello.html"), Viewport::new(800));
        assert_eq!(
            Fragment::from(card).render(),
            r#"<div class="card"><h3>Hello</h3><p>World</p><a class="button" href="blog/hello.html">Read more</a></div>"#
        );
    }

    #[test]
    fn test_card_preview_truncated_for_narrow_viewport() {
        let content = "a".repeat(120);
        let card = post_card(&post("Post", &content, "post.html"), Viewport::new(640));
        let html = Fragment::from(card).render();
        assert!(html.contains(&format!("<p>{}</p>", "a".repeat(50))));
        assert!(!html.contains(&"a".repeat(51)));
    }

    #[test]
    fn test_error_card_shape() {
        assert_eq!(
            Fragment::from(error_card()).render(),
            r#"<div class="card error"><p>Unable to load blog posts.</p></div>"#
        );
    }
}
