//! Axum route handlers for the Feedback API.

use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::feedback::{generate_feedback, FeedbackInput, FeedbackReport};
use crate::scoring::MatchResult;

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub match_result: Option<MatchResult>,
    pub raw_text: Option<String>,
}

impl TryFrom<FeedbackRequest> for FeedbackInput {
    type Error = AppError;

    fn try_from(request: FeedbackRequest) -> Result<Self, Self::Error> {
        match (request.match_result, request.raw_text) {
            (Some(result), None) => Ok(FeedbackInput::Structured(result)),
            (None, Some(text)) => Ok(FeedbackInput::RawText(text)),
            _ => Err(AppError::InvalidInput(
                "exactly one of 'match_result' or 'raw_text' must be supplied".to_string(),
            )),
        }
    }
}

/// POST /api/v1/feedback
///
/// Structured feedback from a match result, or keyword-density feedback from raw text.
pub async fn handle_feedback(
    Json(request): Json<FeedbackRequest>,
) -> Result<Json<FeedbackReport>, AppError> {
    let input = FeedbackInput::try_from(request)?;
    Ok(Json(generate_feedback(&input)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_sources_rejected() {
        let request: FeedbackRequest = serde_json::from_str(
            r#"{"raw_text": "x", "match_result": {
                "job_title": "t", "score": 1.0, "skill_component": 0.0,
                "experience_component": 0.0, "education_component": 1.0,
                "education_match": "none", "missing_skills": [],
                "resume_experience_years": 0, "required_experience_years": 1,
                "required_education": "", "mode": "lexical", "degraded": false
            }}"#,
        )
        .unwrap();
        assert!(matches!(
            FeedbackInput::try_from(request),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_neither_source_rejected() {
        let request: FeedbackRequest = serde_json::from_str("{}").unwrap();
        assert!(FeedbackInput::try_from(request).is_err());
    }

    #[test]
    fn test_raw_text_only_accepted() {
        let request: FeedbackRequest = serde_json::from_str(r#"{"raw_text": "rust"}"#).unwrap();
        assert!(matches!(
            FeedbackInput::try_from(request),
            Ok(FeedbackInput::RawText(_))
        ));
    }
}
