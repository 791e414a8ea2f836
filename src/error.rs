//! Crate-wide error types
//!
//! Provides a unified error type for everything that can go wrong while
//! loading and rendering the page. Requests that complete with a non-200
//! status, and requests that never complete, are NOT errors: the loaders
//! consume them as an explicit fetch outcome and each flow decides for
//! itself what (if anything) to render.

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, HomepageError>;

/// Errors raised while fetching or rendering page content
///
/// These are the loud failures: a 200 response whose body is not the JSON
/// shape we expect, or a problem with local I/O or configuration. Anything
/// the page contract handles quietly goes through
/// [`crate::http::FetchOutcome`] instead.
#[derive(Debug, Error)]
pub enum HomepageError {
    /// The endpoint answered 200 but the body was not the expected JSON
    #[error("invalid JSON from {url}: {source}")]
    Decode {
        /// The URL that produced the body
        url: String,
        /// The underlying deserialization error
        source: serde_json::Error,
    },

    /// Filesystem or socket I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value
    #[error("invalid configuration: {message}")]
    Config {
        /// What was wrong with the configuration
        message: String,
    },
}

impl HomepageError {
    /// Create a Decode error for a given URL
    pub fn decode(url: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            url: url.into(),
            source,
        }
    }

    /// Create a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
