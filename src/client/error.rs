use reqwest::Url;
use thiserror::Error;

/// Errors produced while talking to the chat backend.
///
/// HTTP status codes are not errors: any response body is treated as the
/// reply. Only transport failures end up here.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or no response arrived.
    #[error("Failed to reach chat endpoint {url}: {source}")]
    Request {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    /// The response started but its body could not be read.
    #[error("Failed to read reply from {url}: {source}")]
    Body {
        url: Url,
        #[source]
        source: reqwest::Error,
    },
}

