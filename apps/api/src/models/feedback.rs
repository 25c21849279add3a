use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Feedback {
    pub id: Uuid,
    /// Rating key → score, stored as a JSONB document.
    #[schema(value_type = Object)]
    pub feedback_scores: Json<BTreeMap<String, i32>>,
    pub additional_comments: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewFeedback {
    pub feedback_scores: BTreeMap<String, i32>,
    pub additional_comments: Option<String>,
}
