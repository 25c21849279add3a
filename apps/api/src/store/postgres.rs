use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::analytics::{FeedbackQuestionStats, TraitStats, UserTypeStats};
use crate::models::assessment::{Assessment, NewAssessment};
use crate::models::feedback::{Feedback, NewFeedback};
use crate::models::user::{NewUser, User, UserType};
use crate::store::Store;

/// `Store` backed by PostgreSQL. Every write is a single-row INSERT.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn find_user(&self, name: &str, user_type: UserType) -> Result<Option<User>, AppError> {
        Ok(sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE name = $1 AND user_type = $2 ORDER BY created_at ASC LIMIT 1",
        )
        .bind(name)
        .bind(user_type.as_str())
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn insert_user(&self, user: NewUser) -> Result<User, AppError> {
        let row = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, user_type, roll_number, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&user.name)
        .bind(user.user_type.as_str())
        .bind(&user.roll_number)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        info!("Inserted user {} ({})", row.id, row.user_type);
        Ok(row)
    }

    async fn latest_user_named(&self, name: &str) -> Result<Option<User>, AppError> {
        Ok(sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE name = $1 ORDER BY created_at DESC LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn insert_assessment(&self, assessment: NewAssessment) -> Result<Assessment, AppError> {
        let row = sqlx::query_as::<_, Assessment>(
            r#"
            INSERT INTO assessments
                (user_id, question_answers, image_answers, dominant_trait, personality_result, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(assessment.user_id)
        .bind(&assessment.question_answers)
        .bind(&assessment.image_answers)
        .bind(assessment.dominant_trait.as_str())
        .bind(&assessment.personality_result)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        info!(
            "Inserted assessment {} for user {} (dominant: {})",
            row.id, row.user_id, row.dominant_trait
        );
        Ok(row)
    }

    async fn latest_assessment_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<Assessment>, AppError> {
        Ok(sqlx::query_as::<_, Assessment>(
            "SELECT * FROM assessments WHERE user_id = $1 ORDER BY created_at DESC LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn insert_feedback(&self, feedback: NewFeedback) -> Result<Feedback, AppError> {
        let row = sqlx::query_as::<_, Feedback>(
            r#"
            INSERT INTO feedback (feedback_scores, additional_comments, created_at)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(Json(&feedback.feedback_scores))
        .bind(&feedback.additional_comments)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        info!("Inserted feedback {}", row.id);
        Ok(row)
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        Ok(
            sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at ASC")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn list_assessments(&self) -> Result<Vec<Assessment>, AppError> {
        Ok(
            sqlx::query_as::<_, Assessment>("SELECT * FROM assessments ORDER BY created_at ASC")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn list_feedback(&self) -> Result<Vec<Feedback>, AppError> {
        Ok(
            sqlx::query_as::<_, Feedback>("SELECT * FROM feedback ORDER BY created_at ASC")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn user_type_stats(&self, since: DateTime<Utc>) -> Result<Vec<UserTypeStats>, AppError> {
        Ok(sqlx::query_as::<_, UserTypeStats>(
            r#"
            SELECT user_type,
                   COUNT(*) AS total,
                   COUNT(*) FILTER (WHERE created_at >= $1) AS last_week
            FROM users
            GROUP BY user_type
            ORDER BY user_type
            "#,
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn trait_stats(&self, limit: i64) -> Result<Vec<TraitStats>, AppError> {
        Ok(sqlx::query_as::<_, TraitStats>(
            r#"
            SELECT dominant_trait,
                   COUNT(*) AS count,
                   AVG(cardinality(question_answers))::float8 AS avg_answers
            FROM assessments
            GROUP BY dominant_trait
            ORDER BY count DESC, dominant_trait
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn feedback_stats(&self) -> Result<Vec<FeedbackQuestionStats>, AppError> {
        Ok(sqlx::query_as::<_, FeedbackQuestionStats>(
            r#"
            SELECT s.key AS question,
                   ROUND(AVG(s.value::int)::numeric, 2)::float8 AS average,
                   COUNT(*) AS responses
            FROM feedback, jsonb_each_text(feedback.feedback_scores) AS s(key, value)
            GROUP BY s.key
            ORDER BY s.key
            "#,
        )
        .fetch_all(&self.pool)
        .await?)
    }
}
