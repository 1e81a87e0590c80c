//! Feedback Generator: turns a match result (or, failing that, raw résumé text)
//! into ordered, human-readable suggestions.
//!
//! Item order is part of the contract: most actionable first.

use serde::{Deserialize, Serialize};

use crate::scoring::MatchResult;

pub mod handlers;
pub mod keywords;
pub mod structured;

pub use keywords::keyword_feedback;
pub use structured::structured_feedback;

/// What the caller has available. Exactly one source per request.
#[derive(Debug, Clone)]
pub enum FeedbackInput {
    Structured(MatchResult),
    RawText(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackStrategy {
    Structured,
    KeywordDensity,
}

/// Summary verdict band for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    NeedsImprovement,
    Good,
    Excellent,
}

impl Verdict {
    /// < 40 needs improvement, 40–70 good, ≥ 70 excellent.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 70.0 => Verdict::Excellent,
            s if s >= 40.0 => Verdict::Good,
            _ => Verdict::NeedsImprovement,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Verdict::NeedsImprovement => "needs significant improvement",
            Verdict::Good => "good, but improvable",
            Verdict::Excellent => "excellent match",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackReport {
    pub strategy: FeedbackStrategy,
    /// Verdict sentence; structured strategy only.
    pub summary: Option<String>,
    pub verdict: Option<Verdict>,
    /// Ordered prose feedback, most actionable first.
    pub items: Vec<String>,
    /// Band-driven checklist; structured strategy only.
    pub checklist: Vec<String>,
    /// Most frequent terms; keyword-density strategy only.
    pub keywords: Vec<String>,
}

/// Dispatches to the strategy matching the available input.
pub fn generate_feedback(input: &FeedbackInput) -> FeedbackReport {
    match input {
        FeedbackInput::Structured(result) => structured_feedback(result),
        FeedbackInput::RawText(text) => keyword_feedback(text),
    }
}
