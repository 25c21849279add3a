pub mod docs;
pub mod health;

use axum::{routing::get, routing::post, Router};

use crate::admin::handlers as admin;
use crate::assessment::handlers as assessment;
use crate::errors::AppError;
use crate::feedback::handlers as feedback;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/docs", get(docs::swagger_ui))
        .route("/openapi.json", get(docs::openapi_json))
        // Assessment + feedback
        .route("/submit-assessment", post(assessment::submit_assessment))
        .route(
            "/get-assessment/:identifier",
            get(assessment::get_assessment),
        )
        .route("/submit-feedback", post(feedback::submit_feedback))
        // Admin
        .route("/api/admin/users", get(admin::list_users))
        .route("/api/admin/assessments", get(admin::list_assessments))
        .route("/api/admin/feedbacks", get(admin::list_feedbacks))
        .route("/api/admin/analytics/users", get(admin::user_analytics))
        .route(
            "/api/admin/analytics/assessments",
            get(admin::assessment_analytics),
        )
        .route(
            "/api/admin/analytics/feedback",
            get(admin::feedback_analytics),
        )
        .fallback(not_found)
        .with_state(state)
}
