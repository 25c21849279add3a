//! Persistence adapter. Handlers only see the `Store` trait;
//! `PgStore` is the production backend.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::analytics::{FeedbackQuestionStats, TraitStats, UserTypeStats};
use crate::models::assessment::{Assessment, NewAssessment};
use crate::models::feedback::{Feedback, NewFeedback};
use crate::models::user::{NewUser, User, UserType};

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgStore;

/// Number of trait groups reported by the assessment analytics.
pub const TOP_TRAITS: i64 = 5;

#[async_trait]
pub trait Store: Send + Sync {
    async fn find_user(&self, name: &str, user_type: UserType) -> Result<Option<User>, AppError>;

    async fn insert_user(&self, user: NewUser) -> Result<User, AppError>;

    /// Most recently created user with this exact name, of any type.
    async fn latest_user_named(&self, name: &str) -> Result<Option<User>, AppError>;

    async fn insert_assessment(&self, assessment: NewAssessment) -> Result<Assessment, AppError>;

    async fn latest_assessment_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<Assessment>, AppError>;

    async fn insert_feedback(&self, feedback: NewFeedback) -> Result<Feedback, AppError>;

    async fn list_users(&self) -> Result<Vec<User>, AppError>;

    async fn list_assessments(&self) -> Result<Vec<Assessment>, AppError>;

    async fn list_feedback(&self) -> Result<Vec<Feedback>, AppError>;

    /// Users grouped by type; `last_week` counts those created at or after `since`.
    async fn user_type_stats(&self, since: DateTime<Utc>) -> Result<Vec<UserTypeStats>, AppError>;

    /// Assessments grouped by dominant trait, most frequent first.
    async fn trait_stats(&self, limit: i64) -> Result<Vec<TraitStats>, AppError>;

    /// Feedback scores averaged per rating key, ordered by key.
    async fn feedback_stats(&self) -> Result<Vec<FeedbackQuestionStats>, AppError>;
}

/// Returns the existing user for (name, type), inserting one only if none exists.
/// A differing roll number does not create a new user.
pub async fn find_or_create_user(store: &dyn Store, user: NewUser) -> Result<User, AppError> {
    if let Some(existing) = store.find_user(&user.name, user.user_type).await? {
        return Ok(existing);
    }
    store.insert_user(user).await
}
