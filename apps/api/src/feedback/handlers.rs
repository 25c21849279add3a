use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::ApiJson;
use crate::feedback::validation::validate_feedback;
use crate::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSubmission {
    /// All six rating keys, each scored 1–5.
    pub feedback_scores: BTreeMap<String, i64>,
    pub additional_comments: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FeedbackSubmitted {
    pub message: String,
    pub feedback_id: Uuid,
}

/// POST /submit-feedback
#[utoipa::path(
    post,
    path = "/submit-feedback",
    request_body = FeedbackSubmission,
    responses(
        (status = 200, description = "Feedback stored", body = FeedbackSubmitted),
        (status = 400, description = "Missing key or score out of range", body = ErrorBody),
    )
)]
pub async fn submit_feedback(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<FeedbackSubmission>,
) -> Result<Json<FeedbackSubmitted>, AppError> {
    let feedback = validate_feedback(
        &request.feedback_scores,
        request.additional_comments.as_deref(),
    )?;

    let stored = state.store.insert_feedback(feedback).await?;

    Ok(Json(FeedbackSubmitted {
        message: "Feedback submitted successfully".to_string(),
        feedback_id: stored.id,
    }))
}
