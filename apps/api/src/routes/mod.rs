pub mod health;
pub mod roles;

use axum::{
    routing::{get, post},
    Router,
};

use crate::feedback::handlers::handle_feedback;
use crate::ranking::handlers::handle_rank;
use crate::scoring::handlers::handle_score;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/roles", get(roles::handle_list_roles))
        .route("/api/v1/score", post(handle_score))
        .route("/api/v1/feedback", post(handle_feedback))
        .route("/api/v1/rank", post(handle_rank))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::catalog::{InMemoryCatalog, JobCatalog};
    use crate::config::{Config, EmbeddingConfig};
    use crate::scoring::{MatchMode, Scorer};

    fn test_config() -> Config {
        Config {
            port: 0,
            rust_log: "info".to_string(),
            scoring_mode: MatchMode::Lexical,
            embedding: EmbeddingConfig {
                api_url: None,
                api_key: None,
                model: "test".to_string(),
                timeout_secs: 1,
            },
            job_catalog_path: None,
            default_top_n: 3,
        }
    }

    fn app_with(catalog: InMemoryCatalog) -> Router {
        build_router(AppState {
            config: test_config(),
            scorer: Arc::new(Scorer::lexical()),
            catalog: Arc::new(catalog),
        })
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_reports_mode() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app_with(InMemoryCatalog::builtin())
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["scoring_mode"], "lexical");
    }

    #[tokio::test]
    async fn test_score_inline_job() {
        let (status, body) = post_json(
            app_with(InMemoryCatalog::builtin()),
            "/api/v1/score",
            json!({
                "resume": {
                    "skills": ["Python", "Machine Learning", "SQL"],
                    "experience_years": 5,
                    "education": "B.Tech"
                },
                "job": {
                    "title": "Analyst",
                    "skills": ["Python", "SQL", "Data Analysis"],
                    "min_experience": 2,
                    "education": "Bachelor's"
                }
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 63.33);
        assert_eq!(body["missing_skills"], json!(["data analysis"]));
    }

    #[tokio::test]
    async fn test_score_by_role_id() {
        let (status, body) = post_json(
            app_with(InMemoryCatalog::builtin()),
            "/api/v1/score",
            json!({ "resume": { "skills": ["react"] }, "role_id": "frontend" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["job_title"], "Frontend Developer");
    }

    #[tokio::test]
    async fn test_score_unknown_role_is_404() {
        let (status, body) = post_json(
            app_with(InMemoryCatalog::builtin()),
            "/api/v1/score",
            json!({ "resume": {}, "role_id": "astronaut" }),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_score_negative_experience_is_400() {
        let (status, body) = post_json(
            app_with(InMemoryCatalog::builtin()),
            "/api/v1/score",
            json!({ "resume": { "experience_years": -1 }, "role_id": "frontend" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_feedback_from_raw_text() {
        let (status, body) = post_json(
            app_with(InMemoryCatalog::builtin()),
            "/api/v1/feedback",
            json!({ "raw_text": "" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["strategy"], "keyword_density");
    }

    #[tokio::test]
    async fn test_rank_empty_catalog_is_422() {
        let (status, body) = post_json(
            app_with(InMemoryCatalog::new(JobCatalog::new())),
            "/api/v1/rank",
            json!({ "resume": { "skills": ["python"] } }),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "EMPTY_CATALOG");
    }

    #[tokio::test]
    async fn test_rank_uses_default_top_n() {
        let (status, body) = post_json(
            app_with(InMemoryCatalog::builtin()),
            "/api/v1/rank",
            json!({ "resume": { "skills": ["figma", "prototyping"], "experience_years": 1 } }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let recommendations = body["recommendations"].as_array().unwrap();
        assert_eq!(recommendations.len(), 3);
        assert_eq!(recommendations[0]["role_id"], "uiux");
    }
}
