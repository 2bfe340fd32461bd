//! REST API client for the `/api/shows` endpoints.
//!
//! One HTTP call per function, no retries, no caching. Each call returns
//! only the decoded JSON payload.

use async_trait::async_trait;
use serde::Deserialize;
use watchme_core::payload::ShowPayload;
use watchme_core::show::Show;
use watchme_core::types::DbId;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api/shows";

/// Body returned by the server after a delete.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeleteConfirmation {
    pub message: String,
    pub id: DbId,
}

/// Errors from the shows REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum ShowsApiError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error("WatchMe API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// The four show operations, as seen by the view layer.
#[async_trait]
pub trait ShowsGateway: Send + Sync {
    async fn list_shows(&self) -> Result<Vec<Show>, ShowsApiError>;

    async fn create_show(&self, payload: &ShowPayload) -> Result<Show, ShowsApiError>;

    async fn update_show(&self, id: DbId, payload: &ShowPayload) -> Result<Show, ShowsApiError>;

    async fn delete_show(&self, id: DbId) -> Result<DeleteConfirmation, ShowsApiError>;
}

/// HTTP client for a WatchMe API server.
#[derive(Debug, Clone)]
pub struct ShowsApi {
    client: reqwest::Client,
    base_url: String,
}

impl ShowsApi {
    /// Create a new API client.
    ///
    /// * `base_url` - Collection URL, e.g. `http://localhost:5000/api/shows`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: DbId) -> String {
        format!("{}/{}", self.base_url, id)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`ShowsApiError::Api`]
    /// containing the status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ShowsApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ShowsApiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ShowsApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl ShowsGateway for ShowsApi {
    /// `GET /api/shows`
    async fn list_shows(&self) -> Result<Vec<Show>, ShowsApiError> {
        let response = self.client.get(&self.base_url).send().await?;
        Self::parse_response(response).await
    }

    /// `POST /api/shows`
    async fn create_show(&self, payload: &ShowPayload) -> Result<Show, ShowsApiError> {
        let response = self
            .client
            .post(&self.base_url)
            .json(payload)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `PUT /api/shows/{id}`
    async fn update_show(&self, id: DbId, payload: &ShowPayload) -> Result<Show, ShowsApiError> {
        let response = self
            .client
            .put(self.item_url(id))
            .json(payload)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `DELETE /api/shows/{id}`
    async fn delete_show(&self, id: DbId) -> Result<DeleteConfirmation, ShowsApiError> {
        let response = self.client.delete(self.item_url(id)).send().await?;
        Self::parse_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let api = ShowsApi::new("http://localhost:5000/api/shows/");
        assert_eq!(api.base_url(), "http://localhost:5000/api/shows");
        assert_eq!(api.item_url(4), "http://localhost:5000/api/shows/4");
    }
}
