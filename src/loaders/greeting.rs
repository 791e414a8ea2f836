//! Greeting banner flow
//!
//! Fetches the configured user record and renders a one-sentence greeting
//! with a link to the user's profile. On any non-200 status, or a request
//! that never completes, the container is left exactly as it was: the page
//! simply shows no greeting. That matches the live page, which only ever
//! writes on success.

use crate::config::SiteConfig;
use crate::error::Result;
use crate::http::{FetchOutcome, PageClient};
use crate::models::UserRecord;
use crate::page::{Container, Element, Fragment};
use tracing::{info, warn};

/// Fetch the user record and render the greeting into `container`
pub async fn load(
    client: &PageClient,
    config: &SiteConfig,
    container: &mut Container,
) -> Result<()> {
    let url = config.user_endpoint.as_str();
    info!(url, "loading greeting");

    match client.fetch_json::<UserRecord>(url).await? {
        FetchOutcome::Success(user) => {
            container.append(greeting_fragment(&user));
            Ok(())
        }
        FetchOutcome::Failed(failure) => {
            warn!(%failure, url, "user lookup failed, leaving greeting empty");
            Ok(())
        }
    }
}

/// `Hi, I'm <a href="{html_url}">{login}</a>!`
fn greeting_fragment(user: &UserRecord) -> Fragment {
    Fragment::new()
        .text("Hi, I'm ")
        .element(
            Element::new("a")
                .attr("href", user.html_url.as_str())
                .text(user.login.as_str()),
        )
        .text("!")
}
