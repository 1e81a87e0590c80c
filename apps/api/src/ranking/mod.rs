//! Recommendation Ranker: scores one résumé against every catalog role and
//! keeps the best `top_n`.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::JobCatalog;
use crate::errors::AppError;
use crate::models::ResumeProfile;
use crate::scoring::Scorer;

pub mod handlers;

pub const DEFAULT_TOP_N: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleScore {
    pub role_id: String,
    pub title: String,
    pub score: f64,
}

/// Ranks catalog roles by descending score; ties broken by role id ascending.
///
/// Fails with `EmptyCatalog` when there are no roles, so "nothing configured"
/// is never confused with "everything scored zero".
pub async fn rank(
    scorer: &Scorer,
    resume: &ResumeProfile,
    catalog: &JobCatalog,
    top_n: Option<usize>,
) -> Result<Vec<RoleScore>, AppError> {
    if catalog.is_empty() {
        return Err(AppError::EmptyCatalog);
    }

    let top_n = top_n.unwrap_or(DEFAULT_TOP_N);
    if top_n == 0 {
        return Err(AppError::InvalidInput("top_n must be at least 1".to_string()));
    }

    let mut ranked = Vec::with_capacity(catalog.len());
    for (role_id, job) in catalog {
        let result = scorer.score(resume, job).await.map_err(|e| match e {
            AppError::InvalidInput(msg) => {
                AppError::InvalidInput(format!("role '{role_id}': {msg}"))
            }
            other => other,
        })?;
        ranked.push(RoleScore {
            role_id: role_id.clone(),
            title: job.title().to_string(),
            score: result.score,
        });
    }

    sort_ranked(&mut ranked);
    ranked.truncate(top_n);

    info!(
        roles = catalog.len(),
        returned = ranked.len(),
        "ranked résumé against catalog"
    );
    Ok(ranked)
}

fn sort_ranked(ranked: &mut [RoleScore]) {
    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.role_id.cmp(&b.role_id))
    });
}
