use crate::error::{HomepageError, Result};
use reqwest::header::USER_AGENT;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::fmt;

/// User-Agent sent with every request. GitHub's API rejects clients that
/// don't identify themselves, so this is not optional.
const CLIENT_USER_AGENT: &str = concat!("homepage/", env!("CARGO_PKG_VERSION"));

/// Outcome of a single fetch
///
/// A flow either gets its payload or it doesn't; each loader decides what a
/// `Failed` outcome means for its container. Nothing is retried. The only
/// loud failure is a 200 whose body isn't the expected JSON, which
/// propagates as [`HomepageError::Decode`] instead of rendering garbage.
#[derive(Debug)]
pub enum FetchOutcome<T> {
    /// Status 200 with a well-formed body
    Success(T),
    /// The request completed with a non-200 status, or never completed
    Failed(FetchFailure),
}

impl<T> FetchOutcome<T> {
    /// Whether this outcome carries a parsed payload
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Why a fetch produced no payload
#[derive(Debug)]
pub enum FetchFailure {
    /// The endpoint answered with a non-200 status; the body is not read
    Status(StatusCode),
    /// The request never produced a complete response
    Transport(reqwest::Error),
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(status) => write!(f, "status {}", status),
            Self::Transport(err) => write!(f, "transport error: {}", err),
        }
    }
}

/// HTTP client for the page's two data sources
///
/// A thin wrapper over a shared [`reqwest::Client`] that folds the
/// status-checking and JSON-decoding steps every flow needs into one call.
#[derive(Debug, Clone, Default)]
pub struct PageClient {
    inner: reqwest::Client,
}

impl PageClient {
    /// Create a client with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a single GET and decode the response as JSON
    ///
    /// - 200 with a body deserializing into `T` → [`FetchOutcome::Success`]
    /// - any other status → [`FetchOutcome::Failed`]
    /// - transport failure (including a body cut short) → [`FetchOutcome::Failed`]
    /// - 200 with a malformed body → [`HomepageError::Decode`]
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<FetchOutcome<T>> {
        let response = match self
            .inner
            .get(url)
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => return Ok(FetchOutcome::Failed(FetchFailure::Transport(err))),
        };

        let status = response.status();
        if status != StatusCode::OK {
            return Ok(FetchOutcome::Failed(FetchFailure::Status(status)));
        }

        // A body that cuts off mid-transfer is a transport failure, not a
        // decode failure: the flow never saw a complete 200 response.
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(err) => return Ok(FetchOutcome::Failed(FetchFailure::Transport(err))),
        };

        let value = serde_json::from_slice(&bytes).map_err(|e| HomepageError::decode(url, e))?;
        Ok(FetchOutcome::Success(value))
    }
}
