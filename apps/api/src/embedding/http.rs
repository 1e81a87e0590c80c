//! HTTP embedding client for OpenAI-compatible `/embeddings` endpoints.
//!
//! Retries on 429 (rate limit) and 5xx with exponential backoff. Any other
//! failure surfaces as an `EmbeddingError` for the scorer to degrade on.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{EmbeddingError, EmbeddingProvider};
use crate::config::EmbeddingConfig;

const MAX_RETRIES: u32 = 3;

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingDatum>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingDatum {
    index: usize,
    embedding: Vec<f32>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[derive(Clone)]
pub struct HttpEmbeddingProvider {
    client: Client,
    url: String,
    api_key: Option<String>,
    model: String,
}

impl HttpEmbeddingProvider {
    pub fn new(url: String, api_key: Option<String>, model: String, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            url,
            api_key,
            model,
        }
    }

    /// Builds a provider from config; `None` when no endpoint is configured.
    pub fn from_config(config: &EmbeddingConfig) -> Option<Self> {
        config.api_url.as_ref().map(|url| {
            Self::new(
                url.clone(),
                config.api_key.clone(),
                config.model.clone(),
                Duration::from_secs(config.timeout_secs),
            )
        })
    }

    async fn request_once(&self, texts: &[String]) -> Result<reqwest::Response, reqwest::Error> {
        let mut request = self.client.post(&self.url).json(&EmbeddingRequest {
            model: &self.model,
            input: texts,
        });
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        request.send().await
    }
}

#[async_trait]
impl EmbeddingProvider for HttpEmbeddingProvider {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let mut last_error: Option<EmbeddingError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s
                let delay = Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "Embedding call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match self.request_once(texts).await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(EmbeddingError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Embedding API returned {}: {}", status, body);
                last_error = Some(EmbeddingError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<ApiError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(EmbeddingError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let parsed: EmbeddingResponse = response.json().await?;
            debug!(
                "Embedding call succeeded: inputs={}, vectors={}",
                texts.len(),
                parsed.data.len()
            );
            return into_ordered_vectors(parsed);
        }

        Err(last_error.unwrap_or(EmbeddingError::EmptyResponse))
    }

    fn name(&self) -> &str {
        &self.model
    }
}

/// Reorders response rows by their `index` field.
fn into_ordered_vectors(response: EmbeddingResponse) -> Result<Vec<Vec<f32>>, EmbeddingError> {
    if response.data.is_empty() {
        return Err(EmbeddingError::EmptyResponse);
    }
    let mut data = response.data;
    data.sort_by_key(|d| d.index);
    if data.iter().enumerate().any(|(i, d)| d.index != i) {
        return Err(EmbeddingError::Malformed(
            "response indices are not contiguous".to_string(),
        ));
    }
    Ok(data.into_iter().map(|d| d.embedding).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_rows_are_reordered_by_index() {
        let json = r#"{"data": [
            {"index": 1, "embedding": [0.0, 1.0]},
            {"index": 0, "embedding": [1.0, 0.0]}
        ]}"#;
        let response: EmbeddingResponse = serde_json::from_str(json).unwrap();
        let vectors = into_ordered_vectors(response).unwrap();
        assert_eq!(vectors, vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
    }

    #[test]
    fn test_empty_response_is_error() {
        let response: EmbeddingResponse = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert!(matches!(
            into_ordered_vectors(response),
            Err(EmbeddingError::EmptyResponse)
        ));
    }

    #[test]
    fn test_gap_in_indices_is_malformed() {
        let json = r#"{"data": [
            {"index": 0, "embedding": [1.0]},
            {"index": 2, "embedding": [1.0]}
        ]}"#;
        let response: EmbeddingResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(
            into_ordered_vectors(response),
            Err(EmbeddingError::Malformed(_))
        ));
    }

    #[test]
    fn test_from_config_without_url_is_none() {
        let config = EmbeddingConfig {
            api_url: None,
            api_key: None,
            model: "m".to_string(),
            timeout_secs: 5,
        };
        assert!(HttpEmbeddingProvider::from_config(&config).is_none());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_surfaces_http_error() {
        tokio::time::pause();
        let provider = HttpEmbeddingProvider::new(
            "http://127.0.0.1:9/embeddings".to_string(),
            None,
            "m".to_string(),
            Duration::from_millis(200),
        );
        let result = provider.embed(&["rust".to_string()]).await;
        assert!(result.is_err());
    }
}
