//! Semantic skill matcher: mean pairwise cosine similarity over embedded skill phrases.
//!
//! Mean pairwise (rather than centroid) similarity keeps the score sensitive to
//! partial overlaps between the two phrase sets.
//!
//! Phrase sources, in order of preference:
//! - résumé: structured skills, else the raw résumé text
//! - job: structured skills, else the job description
//!
//! If either side has nothing to embed the similarity is 0 and the provider is
//! never called.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::embedding::{EmbeddingError, EmbeddingProvider};
use crate::models::{JobRequirement, ResumeProfile};
use crate::scoring::aggregator::SkillMatcher;
use crate::scoring::MatchMode;

pub struct SemanticSkillMatcher {
    provider: Arc<dyn EmbeddingProvider>,
}

impl SemanticSkillMatcher {
    pub fn new(provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl SkillMatcher for SemanticSkillMatcher {
    fn mode(&self) -> MatchMode {
        MatchMode::Semantic
    }

    async fn similarity(
        &self,
        resume: &ResumeProfile,
        job: &JobRequirement,
    ) -> Result<f64, EmbeddingError> {
        let resume_phrases = resume_phrases(resume);
        let job_phrases = job_phrases(job);
        semantic_similarity(self.provider.as_ref(), &resume_phrases, &job_phrases).await
    }
}

fn resume_phrases(resume: &ResumeProfile) -> Vec<String> {
    if !resume.skills().is_empty() {
        return resume.skills().iter().cloned().collect();
    }
    non_blank(resume.raw_text())
}

fn job_phrases(job: &JobRequirement) -> Vec<String> {
    if !job.skills().is_empty() {
        return job.skills().iter().cloned().collect();
    }
    non_blank(job.description())
}

fn non_blank(text: &str) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        Vec::new()
    } else {
        vec![text.to_string()]
    }
}

/// Embeds both phrase sets in one batch and returns their mean pairwise cosine
/// similarity, clamped to [0, 1].
pub async fn semantic_similarity(
    provider: &dyn EmbeddingProvider,
    resume_phrases: &[String],
    job_phrases: &[String],
) -> Result<f64, EmbeddingError> {
    if resume_phrases.is_empty() || job_phrases.is_empty() {
        return Ok(0.0);
    }

    let batch: Vec<String> = resume_phrases.iter().chain(job_phrases).cloned().collect();
    let vectors = provider.embed(&batch).await?;
    validate_vectors(&vectors, batch.len())?;

    let (resume_vectors, job_vectors) = vectors.split_at(resume_phrases.len());
    let similarity = mean_pairwise_cosine(resume_vectors, job_vectors);

    debug!(
        provider = provider.name(),
        resume_phrases = resume_phrases.len(),
        job_phrases = job_phrases.len(),
        similarity,
        "semantic similarity computed"
    );

    Ok(similarity.clamp(0.0, 1.0))
}

/// Rejects responses with the wrong count, empty or ragged vectors, or non-finite values.
fn validate_vectors(vectors: &[Vec<f32>], expected: usize) -> Result<(), EmbeddingError> {
    if vectors.len() != expected {
        return Err(EmbeddingError::Malformed(format!(
            "expected {expected} vectors, got {}",
            vectors.len()
        )));
    }
    let dimension = vectors.first().map(Vec::len).unwrap_or(0);
    if dimension == 0 {
        return Err(EmbeddingError::Malformed("zero-length vector".to_string()));
    }
    if vectors.iter().any(|v| v.len() != dimension) {
        return Err(EmbeddingError::Malformed(
            "vectors have inconsistent dimensions".to_string(),
        ));
    }
    if vectors.iter().flatten().any(|x| !x.is_finite()) {
        return Err(EmbeddingError::Malformed("non-finite component".to_string()));
    }
    Ok(())
}

pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f64 = a.iter().zip(b).map(|(x, y)| *x as f64 * *y as f64).sum();
    let norm_a: f64 = a.iter().map(|x| (*x as f64).powi(2)).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|y| (*y as f64).powi(2)).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

/// Average cosine similarity over every (a, b) pair; 0.0 if either side is empty.
pub fn mean_pairwise_cosine(a: &[Vec<f32>], b: &[Vec<f32>]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let total: f64 = a
        .iter()
        .flat_map(|x| b.iter().map(move |y| cosine_similarity(x, y)))
        .sum();
    total / (a.len() * b.len()) as f64
}
