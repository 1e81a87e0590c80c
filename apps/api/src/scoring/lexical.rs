//! Lexical skill matcher: exact-token set overlap. No stemming, no fuzzy matching.

use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::embedding::EmbeddingError;
use crate::models::{JobRequirement, ResumeProfile};
use crate::scoring::aggregator::SkillMatcher;
use crate::scoring::MatchMode;

/// |resume ∩ job| / |job|, or 0.0 when the job lists no skills.
pub fn match_fraction(resume_skills: &BTreeSet<String>, job_skills: &BTreeSet<String>) -> f64 {
    if job_skills.is_empty() {
        return 0.0;
    }
    let matched = resume_skills.intersection(job_skills).count();
    matched as f64 / job_skills.len() as f64
}

/// Job skills absent from the résumé, in lexicographic order.
pub fn missing_skills(
    resume_skills: &BTreeSet<String>,
    job_skills: &BTreeSet<String>,
) -> Vec<String> {
    job_skills.difference(resume_skills).cloned().collect()
}

pub struct LexicalSkillMatcher;

#[async_trait]
impl SkillMatcher for LexicalSkillMatcher {
    fn mode(&self) -> MatchMode {
        MatchMode::Lexical
    }

    async fn similarity(
        &self,
        resume: &ResumeProfile,
        job: &JobRequirement,
    ) -> Result<f64, EmbeddingError> {
        Ok(match_fraction(resume.skills(), job.skills()))
    }
}
