//! Hashnode client errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HashnodeError {
    /// Transport failure.
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response carried a GraphQL `errors` array.
    #[error("GraphQL error: {0}")]
    GraphQl(String),

    /// The publication id did not resolve to a publication.
    #[error("Publication not found: {0}")]
    MissingPublication(String),

    /// No post with the requested slug.
    #[error("Post not found: {0}")]
    PostNotFound(String),

    /// The response body did not match the expected shape.
    #[error("Response decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A required setting was not provided.
    #[error("Missing configuration: {0}")]
    MissingConfig(&'static str),
}

/// Result type for Hashnode operations.
pub type Result<T> = std::result::Result<T, HashnodeError>;
