//! REST API client for the character endpoint.
//!
//! Wraps `GET {base_url}/character/{id}` using [`reqwest`]. A 2xx
//! response with no body is reported as `Ok(None)` rather than as an
//! error so callers handle it explicitly.

use rickview_core::{Character, Notice};

/// Public Rick and Morty API root.
pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api";

/// HTTP client for the character API.
#[derive(Clone)]
pub struct CharacterApi {
    client: reqwest::Client,
    base_url: String,
}

/// Errors from the character API layer.
#[derive(Debug, thiserror::Error)]
pub enum CharacterApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error("Character API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The body was not a valid character document.
    #[error("Malformed character payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// The caller's cancellation token fired before the response arrived.
    #[error("Request cancelled")]
    Cancelled,
}

impl CharacterApiError {
    /// True when the transport failed: the connection could not be made,
    /// timed out, was reset or closed mid-exchange, or the body was cut
    /// short.
    ///
    /// reqwest reports a failed body stream as a body or decode error.
    /// JSON decoding happens outside reqwest, so its decode kind only ever
    /// means the stream broke.
    pub fn is_connectivity(&self) -> bool {
        match self {
            CharacterApiError::Request(e) => {
                e.is_connect()
                    || e.is_timeout()
                    || e.is_request()
                    || e.is_body()
                    || e.is_decode()
            }
            _ => false,
        }
    }

    /// The notice to surface for this failure. Cancellation is silent.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            CharacterApiError::Cancelled => None,
            e if e.is_connectivity() => Some(Notice::NoConnection),
            CharacterApiError::ApiError { status, .. } => Some(Notice::RequestFailed {
                status: Some(*status),
            }),
            e => Some(Notice::Unexpected {
                message: e.to_string(),
            }),
        }
    }
}

impl CharacterApi {
    /// Create a new API client.
    ///
    /// * `base_url` - API root, e.g. `https://rickandmortyapi.com/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create an API client reusing an existing [`reqwest::Client`]
    /// (shares its connection pool with the avatar loader).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The underlying HTTP client.
    pub fn http(&self) -> &reqwest::Client {
        &self.client
    }

    /// Fetch one character by id.
    ///
    /// Sends `GET /character/{id}`. Returns `Ok(None)` when the server
    /// answers 2xx with an empty or `null` body.
    pub async fn get_character(&self, id: i64) -> Result<Option<Character>, CharacterApiError> {
        let url = format!("{}/character/{}", self.base_url, id);
        tracing::debug!(%url, "Fetching character");

        let response = self.client.get(&url).send().await?;
        let response = Self::ensure_success(response).await?;
        let body = response.text().await?;

        tracing::debug!(id, body_len = body.len(), "Character response received");
        Self::parse_body(&body)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`CharacterApiError::ApiError`]
    /// containing the status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, CharacterApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::debug!(status = status.as_u16(), "Character API returned an error status");
            return Err(CharacterApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Decode a 2xx body, treating blank and `null` bodies as absent.
    fn parse_body(body: &str) -> Result<Option<Character>, CharacterApiError> {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        Ok(serde_json::from_str::<Option<Character>>(trimmed)?)
    }
}
