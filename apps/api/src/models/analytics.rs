use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Users per type, with the count created in the trailing seven days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserTypeStats {
    pub user_type: String,
    pub total: i64,
    pub last_week: i64,
}

/// Assessments per dominant trait.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TraitStats {
    pub dominant_trait: String,
    pub count: i64,
    pub avg_answers: f64,
}

/// Mean score per feedback rating key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct FeedbackQuestionStats {
    pub question: String,
    /// Rounded to two decimals.
    pub average: f64,
    pub responses: i64,
}
