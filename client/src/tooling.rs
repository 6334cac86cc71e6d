//! Server-Side Tooling Requests
//!
//! The two one-shot HTTP requests a devcard page can make besides its
//! streaming connection: generating a debug snippet for the card, and asking
//! the server to open the card's source in the configured editor. Both are
//! fire-and-forget: no retry, no ordering relationship with the update
//! stream or with each other.

use std::time::Duration;

use thiserror::Error;

use crate::session::SessionIdentity;

/// Failure of a tooling request.
///
/// These are surfaced-and-continued: a failed tooling call never affects the
/// update stream.
#[derive(Debug, Error)]
pub enum ToolingError {
    /// The request could not be sent or the response body not read.
    #[error("tooling request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Client for the `/debug` and `/open` server endpoints.
#[derive(Clone)]
pub struct ToolingClient {
    http: reqwest::Client,
    base_url: String,
    project_name: String,
    card_name: String,
}

impl ToolingClient {
    /// Create a tooling client for one devcard.
    ///
    /// `server_addr` is a host:port pair; the identity supplies the project
    /// and card path segments, substituted raw like everywhere else.
    #[must_use]
    pub fn new(server_addr: &str, identity: &SessionIdentity) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(Duration::from_secs(120))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: format!("http://{server_addr}"),
            project_name: identity.project_name.clone(),
            card_name: identity.card_name.clone(),
        }
    }

    /// `GET /debug/{project}/{card}`: ask the server to generate debug code
    /// for this card.
    ///
    /// The full response body is returned; callers surface it to the user
    /// unconditionally.
    ///
    /// # Errors
    ///
    /// Returns [`ToolingError`] if the request or body read fails.
    pub async fn debug_artifact(&self) -> Result<String, ToolingError> {
        let url = format!(
            "{}/debug/{}/{}",
            self.base_url, self.project_name, self.card_name
        );
        let body = self.http.get(&url).send().await?.text().await?;
        Ok(body)
    }

    /// `GET /open/{project}/{card}`: ask the server to open the card's
    /// source in the configured editor.
    ///
    /// An empty body means success and stays silent; a non-empty body is the
    /// server explaining why it could not open the editor, and callers
    /// surface it.
    ///
    /// # Errors
    ///
    /// Returns [`ToolingError`] if the request or body read fails.
    pub async fn open_in_editor(&self) -> Result<Option<String>, ToolingError> {
        let url = format!(
            "{}/open/{}/{}",
            self.base_url, self.project_name, self.card_name
        );
        let body = self.http.get(&url).send().await?.text().await?;
        if body.is_empty() {
            Ok(None)
        } else {
            Ok(Some(body))
        }
    }
}
