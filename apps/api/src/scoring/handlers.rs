//! Axum route handlers for the Scoring API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{JobRequirement, JobRequirementRecord, ResumeProfile, ResumeProfileInput};
use crate::scoring::MatchResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub resume: ResumeProfileInput,
    /// Inline job requirement. Mutually exclusive with `role_id`.
    pub job: Option<JobRequirementRecord>,
    /// Catalog role to score against. Mutually exclusive with `job`.
    pub role_id: Option<String>,
}

/// POST /api/v1/score
///
/// Scores a résumé against an inline job or a catalog role.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<MatchResult>, AppError> {
    let resume = ResumeProfile::try_from(request.resume)?;

    let job = match (request.job, request.role_id) {
        (Some(record), None) => JobRequirement::from(record),
        (None, Some(role_id)) => state
            .catalog
            .roles()
            .get(role_id.trim())
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Job role '{role_id}' not found")))?,
        _ => {
            return Err(AppError::InvalidInput(
                "exactly one of 'job' or 'role_id' must be supplied".to_string(),
            ))
        }
    };

    let result = state.scorer.score(&resume, &job).await?;
    Ok(Json(result))
}
