//! Read-only admin endpoints: raw listings and summary analytics.

use axum::{extract::State, Json};
use chrono::{Duration, Utc};

use crate::errors::AppError;
use crate::models::analytics::{FeedbackQuestionStats, TraitStats, UserTypeStats};
use crate::models::assessment::Assessment;
use crate::models::feedback::Feedback;
use crate::models::user::User;
use crate::state::AppState;
use crate::store::TOP_TRAITS;

/// Window for the "last week" user count.
const RECENT_DAYS: i64 = 7;

/// GET /api/admin/users
#[utoipa::path(
    get,
    path = "/api/admin/users",
    responses(
        (status = 200, description = "All users", body = [User]),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    Ok(Json(state.store.list_users().await?))
}

/// GET /api/admin/assessments
#[utoipa::path(
    get,
    path = "/api/admin/assessments",
    responses(
        (status = 200, description = "All assessments", body = [Assessment]),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn list_assessments(
    State(state): State<AppState>,
) -> Result<Json<Vec<Assessment>>, AppError> {
    Ok(Json(state.store.list_assessments().await?))
}

/// GET /api/admin/feedbacks
#[utoipa::path(
    get,
    path = "/api/admin/feedbacks",
    responses(
        (status = 200, description = "All feedback submissions", body = [Feedback]),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn list_feedbacks(
    State(state): State<AppState>,
) -> Result<Json<Vec<Feedback>>, AppError> {
    Ok(Json(state.store.list_feedback().await?))
}

/// GET /api/admin/analytics/users
#[utoipa::path(
    get,
    path = "/api/admin/analytics/users",
    responses(
        (status = 200, description = "User counts per type", body = [UserTypeStats]),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn user_analytics(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserTypeStats>>, AppError> {
    let since = Utc::now() - Duration::days(RECENT_DAYS);
    Ok(Json(state.store.user_type_stats(since).await?))
}

/// GET /api/admin/analytics/assessments
#[utoipa::path(
    get,
    path = "/api/admin/analytics/assessments",
    responses(
        (status = 200, description = "Top dominant traits", body = [TraitStats]),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn assessment_analytics(
    State(state): State<AppState>,
) -> Result<Json<Vec<TraitStats>>, AppError> {
    Ok(Json(state.store.trait_stats(TOP_TRAITS).await?))
}

/// GET /api/admin/analytics/feedback
#[utoipa::path(
    get,
    path = "/api/admin/analytics/feedback",
    responses(
        (status = 200, description = "Average score per rating key", body = [FeedbackQuestionStats]),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn feedback_analytics(
    State(state): State<AppState>,
) -> Result<Json<Vec<FeedbackQuestionStats>>, AppError> {
    Ok(Json(state.store.feedback_stats().await?))
}
