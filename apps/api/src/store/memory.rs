//! In-process `Store` for handler tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::analytics::{FeedbackQuestionStats, TraitStats, UserTypeStats};
use crate::models::assessment::{Assessment, NewAssessment};
use crate::models::feedback::{Feedback, NewFeedback};
use crate::models::user::{NewUser, User, UserType};
use crate::store::Store;

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    assessments: Vec<Assessment>,
    feedback: Vec<Feedback>,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn user_count(&self) -> usize {
        self.tables.lock().unwrap().users.len()
    }

    pub fn assessment_count(&self) -> usize {
        self.tables.lock().unwrap().assessments.len()
    }

    pub fn feedback_count(&self) -> usize {
        self.tables.lock().unwrap().feedback.len()
    }

    /// Inserts a user with a fixed creation time.
    pub fn seed_user(&self, name: &str, user_type: UserType, created_at: DateTime<Utc>) -> User {
        let user = User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            user_type: user_type.as_str().to_string(),
            roll_number: None,
            created_at,
        };
        self.tables.lock().unwrap().users.push(user.clone());
        user
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn find_user(&self, name: &str, user_type: UserType) -> Result<Option<User>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .users
            .iter()
            .find(|u| u.name == name && u.user_type == user_type.as_str())
            .cloned())
    }

    async fn insert_user(&self, user: NewUser) -> Result<User, AppError> {
        let row = User {
            id: Uuid::new_v4(),
            name: user.name,
            user_type: user.user_type.as_str().to_string(),
            roll_number: user.roll_number,
            created_at: Utc::now(),
        };
        self.tables.lock().unwrap().users.push(row.clone());
        Ok(row)
    }

    async fn latest_user_named(&self, name: &str) -> Result<Option<User>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .users
            .iter()
            .filter(|u| u.name == name)
            .max_by_key(|u| u.created_at)
            .cloned())
    }

    async fn insert_assessment(&self, assessment: NewAssessment) -> Result<Assessment, AppError> {
        let row = Assessment {
            id: Uuid::new_v4(),
            user_id: assessment.user_id,
            question_answers: assessment.question_answers,
            image_answers: assessment.image_answers,
            dominant_trait: assessment.dominant_trait.as_str().to_string(),
            personality_result: assessment.personality_result,
            created_at: Utc::now(),
        };
        self.tables.lock().unwrap().assessments.push(row.clone());
        Ok(row)
    }

    async fn latest_assessment_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<Assessment>, AppError> {
        let tables = self.tables.lock().unwrap();
        // max_by_key keeps the last maximum, so later inserts win timestamp ties
        Ok(tables
            .assessments
            .iter()
            .filter(|a| a.user_id == user_id)
            .max_by_key(|a| a.created_at)
            .cloned())
    }

    async fn insert_feedback(&self, feedback: NewFeedback) -> Result<Feedback, AppError> {
        let row = Feedback {
            id: Uuid::new_v4(),
            feedback_scores: Json(feedback.feedback_scores),
            additional_comments: feedback.additional_comments,
            created_at: Utc::now(),
        };
        self.tables.lock().unwrap().feedback.push(row.clone());
        Ok(row)
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        Ok(self.tables.lock().unwrap().users.clone())
    }

    async fn list_assessments(&self) -> Result<Vec<Assessment>, AppError> {
        Ok(self.tables.lock().unwrap().assessments.clone())
    }

    async fn list_feedback(&self) -> Result<Vec<Feedback>, AppError> {
        Ok(self.tables.lock().unwrap().feedback.clone())
    }

    async fn user_type_stats(&self, since: DateTime<Utc>) -> Result<Vec<UserTypeStats>, AppError> {
        let tables = self.tables.lock().unwrap();
        let mut groups: BTreeMap<String, (i64, i64)> = BTreeMap::new();
        for user in &tables.users {
            let entry = groups.entry(user.user_type.clone()).or_default();
            entry.0 += 1;
            if user.created_at >= since {
                entry.1 += 1;
            }
        }
        Ok(groups
            .into_iter()
            .map(|(user_type, (total, last_week))| UserTypeStats {
                user_type,
                total,
                last_week,
            })
            .collect())
    }

    async fn trait_stats(&self, limit: i64) -> Result<Vec<TraitStats>, AppError> {
        let tables = self.tables.lock().unwrap();
        let mut groups: BTreeMap<String, (i64, usize)> = BTreeMap::new();
        for assessment in &tables.assessments {
            let entry = groups.entry(assessment.dominant_trait.clone()).or_default();
            entry.0 += 1;
            entry.1 += assessment.question_answers.len();
        }
        let mut stats: Vec<TraitStats> = groups
            .into_iter()
            .map(|(dominant_trait, (count, answers))| TraitStats {
                dominant_trait,
                count,
                avg_answers: answers as f64 / count as f64,
            })
            .collect();
        // stable sort keeps name order among equal counts
        stats.sort_by(|a, b| b.count.cmp(&a.count));
        stats.truncate(limit.max(0) as usize);
        Ok(stats)
    }

    async fn feedback_stats(&self) -> Result<Vec<FeedbackQuestionStats>, AppError> {
        let tables = self.tables.lock().unwrap();
        let mut groups: BTreeMap<String, (i64, i64)> = BTreeMap::new();
        for feedback in &tables.feedback {
            for (key, score) in feedback.feedback_scores.0.iter() {
                let entry = groups.entry(key.clone()).or_default();
                entry.0 += i64::from(*score);
                entry.1 += 1;
            }
        }
        Ok(groups
            .into_iter()
            .map(|(question, (sum, responses))| FeedbackQuestionStats {
                question,
                average: (sum as f64 / responses as f64 * 100.0).round() / 100.0,
                responses,
            })
            .collect())
    }
}
