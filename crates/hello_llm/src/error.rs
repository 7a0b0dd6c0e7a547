//! Error types for model calls
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("API request failed: {0}")]
    Api(#[from] async_openai::error::OpenAIError),

    #[error("Received empty response from API")]
    EmptyResponse,

    #[error("Response message has no content")]
    MissingContent,
}

pub type Result<T> = std::result::Result<T, ModelError>;
