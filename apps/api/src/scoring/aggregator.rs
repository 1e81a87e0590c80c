//! Score Aggregator: combines skill, experience and education components into one
//! bounded score.
//!
//! The skill matcher is pluggable: `LexicalSkillMatcher` (exact overlap) or
//! `SemanticSkillMatcher` (embedding similarity). `AppState` holds one `Arc<Scorer>`
//! built at startup.
//!
//! When the semantic matcher fails, the score is recomputed from exact overlap
//! and flagged `degraded` instead of failing the request.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::embedding::{EmbeddingError, EmbeddingProvider};
use crate::errors::AppError;
use crate::models::{JobRequirement, ResumeProfile};
use crate::scoring::education::{match_education, EducationMatch};
use crate::scoring::experience::experience_component;
use crate::scoring::lexical::{match_fraction, missing_skills, LexicalSkillMatcher};
use crate::scoring::semantic::SemanticSkillMatcher;
use crate::scoring::{round2, MatchMode};

// ────────────────────────────────────────────────────────────────────────────
// Weights
// ────────────────────────────────────────────────────────────────────────────

/// Component weights. `skills + experience + education` must equal 100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    /// Awarded for a same-degree-tier education match.
    pub education_partial: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 50.0,
            experience: 30.0,
            education: 20.0,
            education_partial: 15.0,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// Result of scoring one résumé against one job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub job_title: String,
    pub score: f64, // 0 – 100
    pub skill_component: f64,
    pub experience_component: f64,
    pub education_component: f64,
    pub education_match: EducationMatch,
    /// Sorted lexicographically.
    pub missing_skills: Vec<String>,
    pub resume_experience_years: u32,
    pub required_experience_years: u32,
    pub required_education: String,
    pub mode: MatchMode,
    /// True when the semantic matcher failed and exact overlap was used instead.
    pub degraded: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Skill similarity strategy. Returns a value in [0, 1].
#[async_trait]
pub trait SkillMatcher: Send + Sync {
    fn mode(&self) -> MatchMode;

    async fn similarity(
        &self,
        resume: &ResumeProfile,
        job: &JobRequirement,
    ) -> Result<f64, EmbeddingError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Scorer
// ────────────────────────────────────────────────────────────────────────────

pub struct Scorer {
    matcher: Arc<dyn SkillMatcher>,
    weights: ScoringWeights,
}

impl Scorer {
    pub fn new(matcher: Arc<dyn SkillMatcher>) -> Self {
        Self {
            matcher,
            weights: ScoringWeights::default(),
        }
    }

    pub fn lexical() -> Self {
        Self::new(Arc::new(LexicalSkillMatcher))
    }

    pub fn semantic(provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self::new(Arc::new(SemanticSkillMatcher::new(provider)))
    }

    pub fn mode(&self) -> MatchMode {
        self.matcher.mode()
    }

    /// Scores a résumé against one job requirement.
    ///
    /// Fails with `InvalidInput` only when the job has neither skills nor a description.
    pub async fn score(
        &self,
        resume: &ResumeProfile,
        job: &JobRequirement,
    ) -> Result<MatchResult, AppError> {
        job.ensure_comparable()?;

        let (similarity, mode, degraded) = match self.matcher.similarity(resume, job).await {
            Ok(similarity) => (similarity, self.matcher.mode(), false),
            Err(e) => {
                warn!(
                    job = job.title(),
                    error = %e,
                    "skill matcher failed, falling back to lexical overlap"
                );
                (
                    match_fraction(resume.skills(), job.skills()),
                    MatchMode::Lexical,
                    true,
                )
            }
        };

        let result = assemble(resume, job, similarity, mode, degraded, &self.weights);
        debug!(
            job = job.title(),
            score = result.score,
            skills = result.skill_component,
            experience = result.experience_component,
            education = result.education_component,
            mode = %result.mode,
            degraded = result.degraded,
            "match scored"
        );
        Ok(result)
    }
}

/// Weights, bounds and rounds the component scores.
fn assemble(
    resume: &ResumeProfile,
    job: &JobRequirement,
    skill_similarity: f64,
    mode: MatchMode,
    degraded: bool,
    weights: &ScoringWeights,
) -> MatchResult {
    let skill_component = bounded(bounded(skill_similarity, 1.0) * weights.skills, weights.skills);

    let experience_component = bounded(
        experience_component(
            resume.experience_years(),
            job.min_experience_years(),
            weights.experience,
        ),
        weights.experience,
    );

    let education_match = match_education(resume.education_level(), job.education_requirement());
    let education_component = bounded(
        education_match.component(weights.education, weights.education_partial),
        weights.education,
    );

    let total = bounded(
        skill_component + experience_component + education_component,
        100.0,
    );

    MatchResult {
        job_title: job.title().to_string(),
        score: round2(total),
        skill_component: round2(skill_component),
        experience_component: round2(experience_component),
        education_component: round2(education_component),
        education_match,
        missing_skills: missing_skills(resume.skills(), job.skills()),
        resume_experience_years: resume.experience_years(),
        required_experience_years: job.min_experience_years(),
        required_education: job.education_requirement().to_string(),
        mode,
        degraded,
    }
}

/// Clamps to [0, max]; non-finite values count as 0.
fn bounded(value: f64, max: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, max)
    } else {
        0.0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
