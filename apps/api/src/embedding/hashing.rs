//! Deterministic feature-hashing embedder.
//!
//! Character trigrams and whole words are hashed into a fixed number of
//! buckets and the result is L2-normalised. No model weights, no network:
//! identical text always yields the identical vector.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use async_trait::async_trait;

use super::{EmbeddingError, EmbeddingProvider};

pub const DEFAULT_DIMENSION: usize = 256;

/// Words weigh more than trigrams so shared whole terms dominate similarity.
const WORD_WEIGHT: f32 = 2.0;
const TRIGRAM_WEIGHT: f32 = 1.0;

#[derive(Debug, Clone)]
pub struct HashingEmbeddingProvider {
    dimension: usize,
}

impl HashingEmbeddingProvider {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension: dimension.max(1),
        }
    }

    pub fn embed_one(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimension];
        let normalized = text.to_lowercase();

        for word in normalized.split_whitespace() {
            vector[self.bucket(word)] += WORD_WEIGHT;

            let padded: Vec<char> = format!(" {word} ").chars().collect();
            for window in padded.windows(3) {
                let trigram: String = window.iter().collect();
                vector[self.bucket(&trigram)] += TRIGRAM_WEIGHT;
            }
        }

        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            vector.iter_mut().for_each(|v| *v /= norm);
        }
        vector
    }

    fn bucket(&self, token: &str) -> usize {
        let mut hasher = DefaultHasher::new();
        token.hash(&mut hasher);
        (hasher.finish() as usize) % self.dimension
    }
}

impl Default for HashingEmbeddingProvider {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSION)
    }
}

#[async_trait]
impl EmbeddingProvider for HashingEmbeddingProvider {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        Ok(texts.iter().map(|t| self.embed_one(t)).collect())
    }

    fn name(&self) -> &str {
        "hashing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn magnitude(v: &[f32]) -> f32 {
        v.iter().map(|x| x * x).sum::<f32>().sqrt()
    }

    #[test]
    fn test_same_text_same_vector() {
        let provider = HashingEmbeddingProvider::default();
        assert_eq!(provider.embed_one("machine learning"), provider.embed_one("Machine Learning"));
    }

    #[test]
    fn test_vectors_are_unit_length() {
        let provider = HashingEmbeddingProvider::default();
        let v = provider.embed_one("distributed systems");
        assert_eq!(v.len(), DEFAULT_DIMENSION);
        assert!((magnitude(&v) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_blank_text_is_zero_vector() {
        let provider = HashingEmbeddingProvider::new(16);
        assert!(provider.embed_one("   ").iter().all(|v| *v == 0.0));
    }

    #[tokio::test]
    async fn test_embed_returns_one_vector_per_input() {
        let provider = HashingEmbeddingProvider::new(32);
        let texts = vec!["rust".to_string(), "sql".to_string(), "react".to_string()];
        let vectors = provider.embed(&texts).await.unwrap();
        assert_eq!(vectors.len(), 3);
        assert!(vectors.iter().all(|v| v.len() == 32));
    }
}
