use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::assessment::trait_table::Category;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Assessment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub question_answers: Vec<String>,
    pub image_answers: Vec<String>,
    pub dominant_trait: String,
    pub personality_result: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAssessment {
    pub user_id: Uuid,
    pub question_answers: Vec<String>,
    pub image_answers: Vec<String>,
    pub dominant_trait: Category,
    pub personality_result: String,
}
