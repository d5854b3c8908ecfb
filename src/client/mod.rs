//! Client for the chat backend's `/llm` endpoint.
//!
//! The backend accepts `{"message": "..."}` and answers with the assistant
//! reply as plain text. [`ChatBackend`] is the seam the chat controller talks
//! through; [`LlmClient`] is the HTTP implementation.

mod error;
mod http;

pub use error::ClientError;
pub use http::{DEFAULT_ENDPOINT, LLM_PATH, LlmClient, llm_url};

/// Something that can answer a single chat message.
pub trait ChatBackend {
    /// The failure type of one request.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Sends one message and resolves to the full, untrimmed reply body.
    fn send(&self, message: &str) -> impl Future<Output = Result<String, Self::Error>> + Send;
}
