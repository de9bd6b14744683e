//! REST client for the knitnote `/api/Projects` endpoints.
//!
//! Wraps each endpoint in a typed async method using [`reqwest`]. Non-2xx
//! responses become [`ClientError::Api`] carrying the server's own `error`
//! text, so callers can show it to the user unchanged.

use knitnote_core::types::DbId;
use knitnote_core::project::{CreateProject, Project, UpdateProject};
use serde::Deserialize;

/// HTTP client for one knitnote API server.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

/// Errors from the client data layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, malformed body).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Server-supplied `error` text, or a generic fallback.
        message: String,
    },
}

impl ClientError {
    /// HTTP status of an API error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Request(err) => err.status().map(|s| s.as_u16()),
        }
    }
}

/// Error body shape shared by every API failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl ApiClient {
    /// Create a client for the API at `base_url`, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/Projects`: every project, newest first.
    pub async fn get_projects(&self) -> Result<Vec<Project>, ClientError> {
        let response = self.client.get(self.projects_url()).send().await?;
        Self::parse_response(response, |_| "Failed to fetch projects".to_string()).await
    }

    /// `GET /api/Projects/{id}`.
    pub async fn get_project(&self, id: DbId) -> Result<Project, ClientError> {
        let response = self.client.get(self.project_url(id)).send().await?;
        Self::parse_response(response, |status| format!("Failed to fetch project: {status}"))
            .await
    }

    /// `POST /api/Projects`: returns the stored project with its new id.
    pub async fn add_project(&self, input: &CreateProject) -> Result<Project, ClientError> {
        let response = self
            .client
            .post(self.projects_url())
            .json(input)
            .send()
            .await?;
        Self::parse_response(response, |status| format!("Failed to add project: {status}")).await
    }

    /// `PATCH /api/Projects/{id}`: sends only the fields set in `fields`.
    pub async fn update_project(
        &self,
        id: DbId,
        fields: &UpdateProject,
    ) -> Result<Project, ClientError> {
        let response = self
            .client
            .patch(self.project_url(id))
            .json(fields)
            .send()
            .await?;
        Self::parse_response(response, |status| format!("Failed to update project: {status}"))
            .await
    }

    /// `DELETE /api/Projects/{id}`.
    pub async fn delete_project(&self, id: DbId) -> Result<(), ClientError> {
        let response = self.client.delete(self.project_url(id)).send().await?;
        Self::ensure_success(response, |_| "Failed to delete project".to_string()).await?;
        Ok(())
    }

    // ---- private helpers ----

    fn projects_url(&self) -> String {
        format!("{}/api/Projects", self.base_url)
    }

    fn project_url(&self, id: DbId) -> String {
        format!("{}/api/Projects/{id}", self.base_url)
    }

    /// Return the response unchanged on success, otherwise a
    /// [`ClientError::Api`] with the server's `error` text (or `fallback`
    /// when the body has none).
    async fn ensure_success(
        response: reqwest::Response,
        fallback: impl FnOnce(u16) -> String,
    ) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| fallback(status.as_u16()));
        tracing::debug!(status = status.as_u16(), %message, "API request failed");

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
        fallback: impl FnOnce(u16) -> String,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response, fallback).await?;
        Ok(response.json::<T>().await?)
    }
}
