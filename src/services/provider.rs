// src/services/provider.rs
use async_trait::async_trait;
use thiserror::Error;

/// Failures at the model-provider boundary. The Display text is what ends up
/// embedded in the user-visible error reply, so keep the messages readable.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("network error: {0}")]
    Network(String),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("response contained no text")]
    EmptyResponse,
}

/// One-shot text completion against an external model provider.
///
/// The trait seam lets tests drive the HTTP surface with a scripted provider
/// instead of the network.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;
}
