use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RoleSummary {
    pub role_id: String,
    pub title: String,
}

/// GET /api/v1/roles
/// Lists catalog roles in role-id order.
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<Vec<RoleSummary>> {
    let roles = state
        .catalog
        .roles()
        .iter()
        .map(|(role_id, job)| RoleSummary {
            role_id: role_id.clone(),
            title: job.title().to_string(),
        })
        .collect();
    Json(roles)
}
