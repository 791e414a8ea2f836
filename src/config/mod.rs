//! Configuration for the homepage renderer
//!
//! Follows the usual `.env`-plus-typed-struct setup: [`load_dotenv`] pulls
//! in `.env` files at startup, [`SiteConfig::from_env`] reads everything the
//! renderer and preview server need, and the builder lets callers (mostly
//! tests and the CLI) override individual values.

mod env;

pub use env::{env, env_optional, load_dotenv};

/// Default user-lookup endpoint for the greeting banner
pub const DEFAULT_USER_ENDPOINT: &str = "https://api.github.com/user/53895123";

/// Default site-relative location of the blog manifest
pub const DEFAULT_BLOG_MANIFEST_PATH: &str = "res/blog.json";

/// Site configuration
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Absolute URL of the user-lookup endpoint
    pub user_endpoint: String,
    /// Base URL the blog manifest path is resolved against
    pub base_url: String,
    /// Location of the blog manifest, relative to `base_url` unless absolute
    pub blog_manifest_path: String,
    /// Viewport width the page is rendered for
    pub viewport_width: u32,
    /// Preview server host address
    pub host: String,
    /// Preview server port
    pub port: u16,
    /// Directory the preview server serves static assets from
    pub static_dir: String,
}

impl SiteConfig {
    /// Build config from environment variables
    pub fn from_env() -> Self {
        Self {
            user_endpoint: env("USER_ENDPOINT", DEFAULT_USER_ENDPOINT.to_string()),
            base_url: env("SITE_BASE_URL", "http://127.0.0.1:8000".to_string()),
            blog_manifest_path: env(
                "BLOG_MANIFEST_PATH",
                DEFAULT_BLOG_MANIFEST_PATH.to_string(),
            ),
            viewport_width: env("VIEWPORT_WIDTH", 1280),
            host: env("SERVER_HOST", "127.0.0.1".to_string()),
            port: env("SERVER_PORT", 8000),
            static_dir: env("STATIC_DIR", "res".to_string()),
        }
    }

    /// Create a builder for customizing config
    pub fn builder() -> SiteConfigBuilder {
        SiteConfigBuilder::default()
    }

    /// Absolute URL of the blog manifest
    ///
    /// A manifest path that already carries a scheme is used as-is; anything
    /// else is joined onto `base_url` the way a page-relative fetch would be.
    pub fn blog_manifest_url(&self) -> String {
        resolve_url(&self.base_url, &self.blog_manifest_path)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Builder for SiteConfig
#[derive(Default)]
pub struct SiteConfigBuilder {
    user_endpoint: Option<String>,
    base_url: Option<String>,
    blog_manifest_path: Option<String>,
    viewport_width: Option<u32>,
    host: Option<String>,
    port: Option<u16>,
    static_dir: Option<String>,
}

impl SiteConfigBuilder {
    /// Set the user-lookup endpoint
    pub fn user_endpoint(mut self, url: impl Into<String>) -> Self {
        self.user_endpoint = Some(url.into());
        self
    }

    /// Set the base URL relative paths are resolved against
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the blog manifest location
    pub fn blog_manifest_path(mut self, path: impl Into<String>) -> Self {
        self.blog_manifest_path = Some(path.into());
        self
    }

    /// Set the viewport width the page is rendered for
    pub fn viewport_width(mut self, width: u32) -> Self {
        self.viewport_width = Some(width);
        self
    }

    /// Set the preview server host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the preview server port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the static asset directory
    pub fn static_dir(mut self, dir: impl Into<String>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }

    /// Build the SiteConfig
    pub fn build(self) -> SiteConfig {
        let default = SiteConfig::from_env();
        SiteConfig {
            user_endpoint: self.user_endpoint.unwrap_or(default.user_endpoint),
            base_url: self.base_url.unwrap_or(default.base_url),
            blog_manifest_path: self
                .blog_manifest_path
                .unwrap_or(default.blog_manifest_path),
            viewport_width: self.viewport_width.unwrap_or(default.viewport_width),
            host: self.host.unwrap_or(default.host),
            port: self.port.unwrap_or(default.port),
            static_dir: self.static_dir.unwrap_or(default.static_dir),
        }
    }
}

/// Join a possibly-relative path onto a base URL
fn resolve_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        format!(
            "{}/{}",
            base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_path() {
        assert_eq!(
            resolve_url("http://127.0.0.1:8000", "res/blog.json"),
            "http://127.0.0.1:8000/res/blog.json"
        );
    }

    #[test]
    fn test_resolve_strips_duplicate_slashes() {
        assert_eq!(
            resolve_url("http://localhost:8000/", "/res/blog.json"),
            "http://localhost:8000/res/blog.json"
        );
    }

    #[test]
    fn test_resolve_keeps_absolute_url() {
        assert_eq!(
            resolve_url("http://localhost:8000", "https://example.com/feed.json"),
            "https://example.com/feed.json"
        );
    }

    #[test]
    fn test_builder_overrides_single_value() {
        let config = SiteConfig::builder()
            .base_url("http://127.0.0.1:9999")
            .viewport_width(640)
            .build();
        assert_eq!(config.base_url, "http://127.0.0.1:9999");
        assert_eq!(config.viewport_width, 640);
        assert_eq!(
            config.blog_manifest_url(),
            "http://127.0.0.1:9999/res/blog.json"
        );
    }
}
