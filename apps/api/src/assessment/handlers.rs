//! Axum route handlers for submitting and reading assessments.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::assessment::scoring::{parse_answers, score};
use crate::errors::AppError;
use crate::extract::ApiJson;
use crate::models::assessment::{Assessment, NewAssessment};
use crate::models::user::{NewUser, UserType};
use crate::state::AppState;
use crate::store::find_or_create_user;

const NAME_CHARS: std::ops::RangeInclusive<usize> = 2..=100;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub name: String,
    pub user_type: UserType,
    pub roll_number: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSubmission {
    pub user: UserData,
    /// Exactly six answers, each one of "A", "B", "C", "D".
    pub question_answers: Vec<String>,
    #[serde(default)]
    pub image_answers: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AssessmentSubmitted {
    pub message: String,
    pub user_id: Uuid,
    pub dominant_trait: String,
    pub personality_result: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AssessmentView {
    pub personality_result: String,
    pub dominant_trait: String,
    pub question_answers: Vec<String>,
    pub image_answers: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Assessment> for AssessmentView {
    fn from(a: Assessment) -> Self {
        Self {
            personality_result: a.personality_result,
            dominant_trait: a.dominant_trait,
            question_answers: a.question_answers,
            image_answers: a.image_answers,
            created_at: a.created_at,
        }
    }
}

fn validate_user(user: UserData) -> Result<NewUser, AppError> {
    let name = user.name.trim().to_string();
    if !NAME_CHARS.contains(&name.chars().count()) {
        return Err(AppError::Validation(format!(
            "Name must be between {} and {} characters",
            NAME_CHARS.start(),
            NAME_CHARS.end()
        )));
    }
    let roll_number = user
        .roll_number
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty());

    Ok(NewUser {
        name,
        user_type: user.user_type,
        roll_number,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /submit-assessment
///
/// Validates and scores the answers, generates the narrative, then reuses or
/// creates the user and stores the assessment. Nothing is written unless the
/// narrative was generated.
#[utoipa::path(
    post,
    path = "/submit-assessment",
    request_body = AssessmentSubmission,
    responses(
        (status = 200, description = "Assessment scored and stored", body = AssessmentSubmitted),
        (status = 400, description = "Invalid answers or user data", body = ErrorBody),
        (status = 500, description = "Narrative generation or storage failed", body = ErrorBody),
    )
)]
pub async fn submit_assessment(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<AssessmentSubmission>,
) -> Result<Json<AssessmentSubmitted>, AppError> {
    let answers = parse_answers(&request.question_answers)?;
    let new_user = validate_user(request.user)?;

    let profile = score(&state.traits, &answers)?;
    debug!("Category tally: {:?}", profile.tally);
    let narrative = state.narrator.write(&profile).await?;

    let user = find_or_create_user(state.store.as_ref(), new_user).await?;

    let assessment = state
        .store
        .insert_assessment(NewAssessment {
            user_id: user.id,
            question_answers: answers.iter().map(|a| a.as_str().to_string()).collect(),
            image_answers: request.image_answers,
            dominant_trait: profile.dominant,
            personality_result: narrative,
        })
        .await?;

    info!(
        "Assessment {} submitted for user {} (dominant: {})",
        assessment.id, user.id, assessment.dominant_trait
    );

    Ok(Json(AssessmentSubmitted {
        message: "Assessment submitted successfully".to_string(),
        user_id: user.id,
        dominant_trait: assessment.dominant_trait,
        personality_result: assessment.personality_result,
    }))
}

/// GET /get-assessment/:identifier
///
/// `identifier` is tried as a user id first, then as a user name
/// (most recently created user with that name).
#[utoipa::path(
    get,
    path = "/get-assessment/{identifier}",
    params(("identifier" = String, Path, description = "User id or user name")),
    responses(
        (status = 200, description = "Most recent assessment for the user", body = AssessmentView),
        (status = 404, description = "No matching assessment", body = ErrorBody),
    )
)]
pub async fn get_assessment(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> Result<Json<AssessmentView>, AppError> {
    let mut found = None;

    if let Ok(user_id) = Uuid::parse_str(&identifier) {
        found = state.store.latest_assessment_for_user(user_id).await?;
    }

    if found.is_none() {
        if let Some(user) = state.store.latest_user_named(identifier.trim()).await? {
            found = state.store.latest_assessment_for_user(user.id).await?;
        }
    }

    let assessment =
        found.ok_or_else(|| AppError::NotFound("Assessment not found".to_string()))?;

    Ok(Json(assessment.into()))
}
