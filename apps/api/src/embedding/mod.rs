//! Embedding providers: the only source of vectors for semantic skill matching.
//!
//! A provider is loaded once at startup, held as `Arc<dyn EmbeddingProvider>`
//! and shared read-only across concurrent scoring calls.

use async_trait::async_trait;
use thiserror::Error;

pub mod hashing;
pub mod http;

pub use hashing::HashingEmbeddingProvider;
pub use http::HttpEmbeddingProvider;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed embeddings: {0}")]
    Malformed(String),

    #[error("Embedding provider returned no vectors")]
    EmptyResponse,
}

/// Maps text to fixed-length real vectors.
///
/// Implementations must return exactly one vector per input, in input order,
/// and must be deterministic for identical input and model version.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError>;

    /// Short label for logs.
    fn name(&self) -> &str;
}
