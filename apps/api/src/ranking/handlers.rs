//! Axum route handlers for the Ranking API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{ResumeProfile, ResumeProfileInput};
use crate::ranking::{rank, RoleScore};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub resume: ResumeProfileInput,
    pub top_n: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub recommendations: Vec<RoleScore>,
}

/// POST /api/v1/rank
///
/// Recommends the best-matching catalog roles for a résumé.
pub async fn handle_rank(
    State(state): State<AppState>,
    Json(request): Json<RankRequest>,
) -> Result<Json<RankResponse>, AppError> {
    let resume = ResumeProfile::try_from(request.resume)?;
    let top_n = request.top_n.unwrap_or(state.config.default_top_n);

    let recommendations = rank(&state.scorer, &resume, state.catalog.roles(), Some(top_n)).await?;

    Ok(Json(RankResponse { recommendations }))
}
