use bytes::Bytes;
use http_body_util::Full;

/// HTTP response builder for the preview server
///
/// Collects status, body, and headers, then converts into the hyper response
/// the connection handler hands back.
pub struct HttpResponse {
    status: u16,
    body: Bytes,
    headers: Vec<(String, String)>,
}

impl HttpResponse {
    /// Create an HTML response
    pub fn html(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: Bytes::from(body.into()),
            headers: vec![(
                "Content-Type".to_string(),
                "text/html; charset=utf-8".to_string(),
            )],
        }
    }

    /// Create a plain text response
    pub fn text(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: Bytes::from(body.into()),
            headers: vec![("Content-Type".to_string(), "text/plain".to_string())],
        }
    }

    /// Create a response from raw bytes with an explicit content type
    pub fn bytes(body: Bytes, content_type: impl Into<String>) -> Self {
        Self {
            status: 200,
            body,
            headers: vec![("Content-Type".to_string(), content_type.into())],
        }
    }

    /// Create a 404 Not Found response
    pub fn not_found() -> Self {
        Self::text("404 Not Found").status(404)
    }

    /// Set the HTTP status code
    pub fn status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Add a header to the response
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Convert to hyper response
    pub fn into_hyper(self) -> hyper::Response<Full<Bytes>> {
        let mut builder = hyper::Response::builder().status(self.status);

        for (name, value) in self.headers {
            builder = builder.header(name, value);
        }

        builder
            .body(Full::new(self.body))
            .expect("static response parts are always valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_response_sets_content_type() {
        let response = HttpResponse::html("<p>hi</p>").into_hyper();
        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers().get("Content-Type").unwrap(),
            "text/html; charset=utf-8"
        );
    }

    #[test]
    fn test_not_found_status() {
        let response = HttpResponse::not_found().into_hyper();
        assert_eq!(response.status(), 404);
    }
}
