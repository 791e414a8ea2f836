//! Preview server
//!
//! Serves the assembled page at `/` and the site's static assets under
//! `/res/`, which keeps the blog manifest reachable at its usual relative
//! path. The page is assembled per request; nothing is cached.

use crate::config::SiteConfig;
use crate::error::{HomepageError, Result};
use crate::http::{HttpResponse, PageClient};
use crate::loaders;
use bytes::Bytes;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::Method;
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

/// The preview server
pub struct Server {
    config: Arc<SiteConfig>,
    client: PageClient,
}

impl Server {
    /// Create a server for the given site configuration
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config: Arc::new(config),
            client: PageClient::new(),
        }
    }

    fn get_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .map_err(|_| {
                HomepageError::config(format!(
                    "invalid listen address {}:{}",
                    self.config.host, self.config.port
                ))
            })
    }

    /// Bind and serve until the process is stopped
    pub async fn run(self) -> Result<()> {
        let addr = self.get_addr()?;
        let listener = TcpListener::bind(addr).await?;

        info!(%addr, "preview server running");

        let config = self.config;
        let client = self.client;

        loop {
            let (stream, _) = listener.accept().await?;
            let io = TokioIo::new(stream);
            let config = config.clone();
            let client = client.clone();

            tokio::spawn(async move {
                let service = service_fn(move |req: hyper::Request<hyper::body::Incoming>| {
                    let config = config.clone();
                    let client = client.clone();
                    async move {
                        let response =
                            route(&client, &config, req.method(), req.uri().path()).await;
                        Ok::<_, Infallible>(response.into_hyper())
                    }
                });

                if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                    error!(?err, "error serving connection");
                }
            });
        }
    }
}

/// Dispatch one request to the page renderer or the static handler
pub async fn route(
    client: &PageClient,
    config: &SiteConfig,
    method: &Method,
    path: &str,
) -> HttpResponse {
    if method != Method::GET {
        return HttpResponse::not_found();
    }

    if path == "/" {
        render_index(client, config).await
    } else if path.starts_with("/res/") {
        serve_static(config, path).await
    } else {
        HttpResponse::not_found()
    }
}

async fn render_index(client: &PageClient, config: &SiteConfig) -> HttpResponse {
    match loaders::render_page(client, config).await {
        Ok(page) => HttpResponse::html(page),
        Err(err) => {
            error!(%err, "failed to assemble page");
            HttpResponse::text("500 Internal Server Error").status(500)
        }
    }
}

async fn serve_static(config: &SiteConfig, path: &str) -> HttpResponse {
    let file = match static_file_path(&config.static_dir, path) {
        Some(file) => file,
        None => return HttpResponse::not_found(),
    };

    match tokio::fs::read(&file).await {
        Ok(bytes) => HttpResponse::bytes(Bytes::from(bytes), content_type_for(&file)),
        Err(_) => HttpResponse::not_found(),
    }
}

/// Map a `/res/...` request path onto the static directory
///
/// Returns None for anything that could climb out of the directory.
fn static_file_path(static_dir: &str, path: &str) -> Option<PathBuf> {
    let relative = path.strip_prefix("/res/")?;
    if relative.is_empty() {
        return None;
    }
    if relative
        .split('/')
        .any(|segment| segment.is_empty() || segment == "." || segment == "..")
    {
        return None;
    }
    Some(Path::new(static_dir).join(relative))
}

fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => "application/json",
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "text/javascript",
        Some("png") => "image/png",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_path_maps_into_dir() {
        assert_eq!(
            static_file_path("res", "/res/blog.json"),
            Some(PathBuf::from("res/blog.json"))
        );
    }

    #[test]
    fn test_static_path_rejects_traversal() {
        assert_eq!(static_file_path("res", "/res/../Cargo.toml"), None);
        assert_eq!(static_file_path("res", "/res//etc/passwd"), None);
        assert_eq!(static_file_path("res", "/res/"), None);
    }

    #[test]
    fn test_content_type_for_known_extensions() {
        assert_eq!(
            content_type_for(Path::new("res/blog.json")),
            "application/json"
        );
        assert_eq!(
            content_type_for(Path::new("res/unknown.bin")),
            "application/octet-stream"
        );
    }
}
