use reqwest::{Client, Url};
use serde::Serialize;
use tracing::{debug, warn};

use super::{ChatBackend, ClientError};

/// Path of the chat endpoint, appended to the configured base URL.
pub const LLM_PATH: &str = "/llm";

/// Base URL used when neither the CLI nor the config file names one.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8081";

#[derive(Debug, Serialize)]
struct LlmRequest<'a> {
    message: &'a str,
}

/// Builds the full `/llm` URL for a base endpoint.
///
/// `/llm` is appended to the endpoint's path. Query parameters are kept;
/// the fragment is dropped since it is never sent.
pub fn llm_url(endpoint: &Url) -> Url {
    let mut url = endpoint.clone();
    let path = format!("{}{LLM_PATH}", endpoint.path().trim_end_matches('/'));
    url.set_path(&path);
    url.set_fragment(None);
    url
}

/// HTTP client for the `/llm` endpoint.
#[derive(Debug, Clone)]
pub struct LlmClient {
    client: Client,
    url: Url,
}

impl LlmClient {
    pub fn new(endpoint: &Url) -> Self {
        Self {
            client: Client::new(),
            url: llm_url(endpoint),
        }
    }
}

impl ChatBackend for LlmClient {
    type Error = ClientError;

    async fn send(&self, message: &str) -> Result<String, ClientError> {
        debug!(url = %self.url, chars = message.chars().count(), "posting chat message");

        // `.json()` sets `Content-Type: application/json`
        let response = self
            .client
            .post(self.url.clone())
            .json(&LlmRequest { message })
            .send()
            .await
            .map_err(|source| ClientError::Request {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %self.url, %status, "chat endpoint returned a non-success status, using body as reply");
        }

        let body = response.text().await.map_err(|source| ClientError::Body {
            url: self.url.clone(),
            source,
        })?;

        debug!(%status, bytes = body.len(), "reply received");
        Ok(body)
    }
}
